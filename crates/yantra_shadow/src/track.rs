//! Whole-day sampling for static overlays (solar tracks, shadow fans).

use yantra_geometry::GeometrySpec;
use yantra_time::Instant;

use crate::config::AnimationConfig;
use crate::error::ShadowError;
use crate::shadow::{AnimationSnapshot, snapshot_at};

/// Upper bound on samples per track.
pub const MAX_TRACK_STEPS: usize = 10_000;

/// `steps` snapshots from `start`, `step_minutes` apart, with default shadow
/// parameters.
pub fn day_track(
    spec: &GeometrySpec,
    start: Instant,
    step_minutes: f64,
    steps: usize,
) -> Result<Vec<AnimationSnapshot>, ShadowError> {
    day_track_with(spec, step_minutes, steps, &AnimationConfig::new(start))
}

/// Like [`day_track`], starting at `config.start` with its shadow parameters.
pub fn day_track_with(
    spec: &GeometrySpec,
    step_minutes: f64,
    steps: usize,
    config: &AnimationConfig,
) -> Result<Vec<AnimationSnapshot>, ShadowError> {
    config.validate()?;
    if !step_minutes.is_finite() || step_minutes <= 0.0 {
        return Err(ShadowError::InvalidConfig(
            "step_minutes must be finite and positive",
        ));
    }
    if steps > MAX_TRACK_STEPS {
        return Err(ShadowError::InvalidConfig("too many track steps"));
    }
    Ok((0..steps)
        .map(|i| {
            let t = config.start.add_seconds(i as f64 * step_minutes * 60.0);
            snapshot_at(spec, t, config)
        })
        .collect())
}
