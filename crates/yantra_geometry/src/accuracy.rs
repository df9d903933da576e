//! Reading tolerances derived from scale and hour-line spacing.
//!
//! Bigger instruments read finer, so every tolerance divides by the caller's
//! scale factor. Time readings also degrade where hour lines bunch up: the
//! spacing penalty is the mean hour spacing over the tightest of the two
//! end intervals (sunrise and sunset side), clamped to `[1, 10]`.

use std::collections::BTreeMap;

use crate::hour_table::HourTable;
use crate::kind::{InstrumentFamily, InstrumentKind};

/// Upper bound of the spacing penalty.
pub const MAX_SPACING_PENALTY: f64 = 10.0;

/// Spread a gnomon dial's mean-time reading shows over the seasons.
const SEASONAL_VARIATION_MINUTES: f64 = 5.0;

/// Mean hour spacing divided by the narrower end interval, in `[1, 10]`.
pub fn spacing_penalty(table: &HourTable) -> f64 {
    let spacings = table.spacings();
    let (Some(&first), Some(&last)) = (spacings.first(), spacings.last()) else {
        return 1.0;
    };
    let mean = spacings.iter().sum::<f64>() / spacings.len() as f64;
    let tightest = first.min(last);
    if tightest <= f64::EPSILON {
        return MAX_SPACING_PENALTY;
    }
    (mean / tightest).clamp(1.0, MAX_SPACING_PENALTY)
}

pub fn time_tolerance_minutes(kind: InstrumentKind, scale_factor: f64, table: &HourTable) -> f64 {
    kind.base_time_tolerance_minutes() / scale_factor * spacing_penalty(table)
}

pub fn angle_tolerance_degrees(kind: InstrumentKind, scale_factor: f64) -> Option<f64> {
    kind.base_angle_tolerance_degrees()
        .map(|base| base / scale_factor)
}

/// All accuracy metrics for a generated instrument.
pub fn accuracy_metrics(
    kind: InstrumentKind,
    scale_factor: f64,
    table: &HourTable,
) -> BTreeMap<String, f64> {
    let mut metrics = BTreeMap::new();
    metrics.insert(
        "time_tolerance_minutes".to_string(),
        time_tolerance_minutes(kind, scale_factor, table),
    );
    metrics.insert("spacing_penalty".to_string(), spacing_penalty(table));
    if let Some(tol) = angle_tolerance_degrees(kind, scale_factor) {
        metrics.insert("angle_tolerance_degrees".to_string(), tol);
    }
    if kind.family() == InstrumentFamily::Gnomon {
        metrics.insert(
            "seasonal_variation_minutes".to_string(),
            SEASONAL_VARIATION_MINUTES,
        );
    }
    metrics
}
