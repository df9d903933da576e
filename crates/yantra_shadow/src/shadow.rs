//! Shadow of an instrument's caster for a given sun position.
//!
//! Length on level ground is `height / tan(elevation)`. Low sun makes that
//! diverge, so the elevation is floored at a small epsilon and the result
//! capped at a multiple of the height. A sun at or below the horizon casts
//! no shadow at all.

use yantra_geometry::{GeometrySpec, dial_angle_deg};
use yantra_solar::{SolarPosition, solar_position_with};
use yantra_time::Instant;

use crate::config::AnimationConfig;

/// A cast shadow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowVector {
    /// Direction on the dial, degrees, in the instrument's hour projection
    /// (0 along the noon line).
    pub direction_deg: f64,
    /// Length in meters.
    pub length_m: f64,
    /// True when the length was capped.
    pub clamped: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shadow {
    Cast(ShadowVector),
    /// Sun at or below the horizon.
    NoShadow,
}

impl Shadow {
    pub fn is_cast(&self) -> bool {
        matches!(self, Self::Cast(_))
    }

    pub fn vector(&self) -> Option<&ShadowVector> {
        match self {
            Self::Cast(v) => Some(v),
            Self::NoShadow => None,
        }
    }
}

/// Sun and shadow at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSnapshot {
    pub instant: Instant,
    pub solar: SolarPosition,
    pub shadow: Shadow,
}

/// Shadow of `spec`'s caster for a sun at `solar`.
pub fn cast_shadow(
    spec: &GeometrySpec,
    solar: &SolarPosition,
    min_elevation_deg: f64,
    max_shadow_ratio: f64,
) -> Shadow {
    if solar.elevation_deg.is_nan() || solar.elevation_deg <= 0.0 {
        return Shadow::NoShadow;
    }
    let height = spec.shadow_caster_height();
    let elevation = solar.elevation_deg.max(min_elevation_deg);
    let raw = height / elevation.to_radians().tan();
    let max_len = height * max_shadow_ratio;
    let clamped = raw > max_len;
    Shadow::Cast(ShadowVector {
        direction_deg: dial_angle_deg(
            spec.hour_projection(),
            spec.coordinate().latitude_deg(),
            solar.hour_angle_deg,
        ),
        length_m: raw.min(max_len),
        clamped,
    })
}

/// Snapshot of `spec` at `instant`.
pub fn snapshot_at(
    spec: &GeometrySpec,
    instant: Instant,
    config: &AnimationConfig,
) -> AnimationSnapshot {
    let solar = solar_position_with(spec.coordinate(), instant, &config.solar);
    AnimationSnapshot {
        instant,
        solar,
        shadow: cast_shadow(spec, &solar, config.min_elevation_deg, config.max_shadow_ratio),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yantra_geometry::{InstrumentKind, generate};
    use yantra_solar::position_from_angles;
    use yantra_time::GeoCoordinate;

    fn samrat() -> GeometrySpec {
        let c = GeoCoordinate::new(26.9124, 75.7873, 431.0).unwrap();
        generate(InstrumentKind::Samrat, &c, 1.0).unwrap()
    }

    #[test]
    fn below_horizon_casts_nothing() {
        let spec = samrat();
        let night = position_from_angles(26.9124, 0.0, 150.0);
        assert_eq!(cast_shadow(&spec, &night, 0.5, 50.0), Shadow::NoShadow);
        let horizon = SolarPosition {
            elevation_deg: 0.0,
            ..night
        };
        assert_eq!(cast_shadow(&spec, &horizon, 0.5, 50.0), Shadow::NoShadow);
    }

    #[test]
    fn low_sun_is_clamped() {
        let spec = samrat();
        let low = SolarPosition {
            elevation_deg: 0.1,
            ..position_from_angles(26.9124, 0.0, -89.0)
        };
        let v = *cast_shadow(&spec, &low, 0.5, 50.0).vector().unwrap();
        assert!(v.clamped);
        assert!((v.length_m - 50.0 * spec.shadow_caster_height()).abs() < 1e-9);
    }

    #[test]
    fn forty_five_degrees_gives_height() {
        let spec = samrat();
        let sun = SolarPosition {
            elevation_deg: 45.0,
            ..position_from_angles(26.9124, 0.0, 30.0)
        };
        let v = *cast_shadow(&spec, &sun, 0.5, 50.0).vector().unwrap();
        assert!(!v.clamped);
        assert!((v.length_m - spec.shadow_caster_height()).abs() < 1e-9);
    }

    #[test]
    fn direction_follows_hour_lines() {
        let spec = samrat();
        let sun = position_from_angles(26.9124, 0.0, -45.0);
        let v = *cast_shadow(&spec, &sun, 0.5, 50.0).vector().unwrap();
        assert!((v.direction_deg - spec.hour_angle(9).unwrap()).abs() < 1e-9);
    }
}
