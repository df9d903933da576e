//! Instrument geometry for historical masonry sundials.
//!
//! This crate provides:
//! - Hour-angle tables in the projection each instrument reads them
//! - Generators turning a coordinate and scale into a [`GeometrySpec`]
//!   (dimensions, angles, accuracy metrics, construction notes)
//! - Self-checks of generated specs, site suitability, and grading of
//!   field readings against the solar model
//!
//! Generation is pure: identical requests give identical specs.

pub mod accuracy;
pub mod error;
pub mod hour_table;
mod instruments;
pub mod kind;
pub mod reference;
pub mod site;
pub mod spec;
pub mod validation;

pub use accuracy::{
    MAX_SPACING_PENALTY, accuracy_metrics, angle_tolerance_degrees, spacing_penalty,
    time_tolerance_minutes,
};
pub use error::GeometryError;
pub use hour_table::{
    HourProjection, HourTable, HourTableConfig, dial_angle_deg, hour_angle_for_hour, hour_table,
    hour_table_with,
};
pub use kind::{ALL_INSTRUMENTS, InstrumentFamily, InstrumentKind, LatitudeScaling};
pub use reference::{
    ALL_SITES, ReferencePart, ReferenceSite, Scaling, available_sites, latitude_scale,
    reference_parts,
};
pub use site::{ClimateZone, Suitability, climate_zone, site_suitability, suitability};
pub use spec::GeometrySpec;
pub use validation::{
    Grade, ObservationAssessment, ObservedReading, SolarCorrections, assess_observation,
    corrections, refraction_arcmin, verify_spec,
};

use log::{debug, warn};
use yantra_time::GeoCoordinate;

use crate::instruments::Context;

/// Options for [`generate_with`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GenerationConfig {
    /// Historical site to scale from. Default: the instrument's own.
    pub reference: Option<ReferenceSite>,
    /// Hour range and projection of the hour table.
    pub hours: HourTableConfig,
}

/// Geometry of `kind` at `coordinate`, scaled from its default reference.
pub fn generate(
    kind: InstrumentKind,
    coordinate: &GeoCoordinate,
    scale_factor: f64,
) -> Result<GeometrySpec, GeometryError> {
    generate_with(kind, coordinate, scale_factor, &GenerationConfig::default())
}

/// Geometry of `kind` at `coordinate`, scaled from a chosen reference site.
pub fn generate_with_reference(
    kind: InstrumentKind,
    coordinate: &GeoCoordinate,
    scale_factor: f64,
    site: ReferenceSite,
) -> Result<GeometrySpec, GeometryError> {
    let config = GenerationConfig {
        reference: Some(site),
        ..Default::default()
    };
    generate_with(kind, coordinate, scale_factor, &config)
}

/// Geometry of `kind` at `coordinate` with explicit options.
pub fn generate_with(
    kind: InstrumentKind,
    coordinate: &GeoCoordinate,
    scale_factor: f64,
    config: &GenerationConfig,
) -> Result<GeometrySpec, GeometryError> {
    if !scale_factor.is_finite() || scale_factor <= 0.0 {
        warn!("rejecting {kind}: scale factor {scale_factor}");
        return Err(GeometryError::InvalidScale(scale_factor));
    }
    if coordinate.is_polar() {
        warn!("rejecting {kind} at {coordinate}: polar singularity");
        return Err(GeometryError::DegenerateGeometry(
            "instrument geometry is singular at the poles",
        ));
    }
    let site = config.reference.unwrap_or(kind.default_site());
    let parts = reference_parts(kind, site).ok_or_else(|| {
        GeometryError::UnknownReference(format!("{} at {site}", kind.slug()))
    })?;
    let table = hour_table_with(coordinate, kind, &config.hours)?;
    let ctx = Context {
        kind,
        coordinate,
        scale_factor,
        site,
        latitude_scale: latitude_scale(kind, coordinate.latitude_deg(), site),
        table: &table,
        parts,
    };
    let spec = instruments::build(&ctx)?;
    verify_spec(&spec)?;
    debug!(
        "generated {kind} at {coordinate} from {site}: {} dimensions, {} angles, {} projection",
        spec.dimensions().len(),
        spec.angles().len(),
        spec.hour_projection()
    );
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jaipur() -> GeoCoordinate {
        GeoCoordinate::new(26.9245, 75.8243, 431.0).unwrap()
    }

    #[test]
    fn samrat_gnomon_is_colatitude() {
        let spec = generate(InstrumentKind::Samrat, &jaipur(), 1.0).unwrap();
        let g = spec.angle("gnomon_angle").unwrap();
        assert!((g - 63.0755).abs() < 1e-9);
    }

    #[test]
    fn scale_multiplies_dimensions() {
        let one = generate(InstrumentKind::Rama, &jaipur(), 1.0).unwrap();
        let two = generate(InstrumentKind::Rama, &jaipur(), 2.0).unwrap();
        let r1 = one.dimension("outer_radius").unwrap();
        let r2 = two.dimension("outer_radius").unwrap();
        assert!((r2 - 2.0 * r1).abs() < 1e-12);
        // Counts do not scale.
        assert_eq!(two.dimension("num_sectors"), Some(12.0));
    }

    #[test]
    fn rejects_bad_scale() {
        for s in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = generate(InstrumentKind::Samrat, &jaipur(), s).unwrap_err();
            assert!(matches!(err, GeometryError::InvalidScale(_)));
        }
    }

    #[test]
    fn unknown_reference_for_kind() {
        let err = generate_with_reference(
            InstrumentKind::Samrat,
            &jaipur(),
            1.0,
            ReferenceSite::Mathura,
        )
        .unwrap_err();
        assert!(matches!(err, GeometryError::UnknownReference(_)));
    }

    #[test]
    fn legacy_projection_is_noted() {
        let config = GenerationConfig {
            reference: None,
            hours: HourTableConfig {
                projection: Some(HourProjection::LegacyLinear),
                ..Default::default()
            },
        };
        let spec = generate_with(InstrumentKind::Samrat, &jaipur(), 1.0, &config).unwrap();
        assert_eq!(spec.hour_projection(), HourProjection::LegacyLinear);
        assert!(spec.notes().iter().any(|n| n.contains("lower-fidelity")));
    }
}
