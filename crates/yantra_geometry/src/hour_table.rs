//! Hour-angle tables: clock hour to dial angle.
//!
//! The hour angle at hour `h` is `H = 15° (h − 12)`. How that maps to an
//! angle on the instrument depends on its construction:
//!
//! - horizontal dial with a polar gnomon: `tan θ = sin φ tan H`, evaluated as
//!   `atan2(sin φ sin H, cos H)` so the 6 and 18 o'clock lines land on ±90°
//! - equatorial plane: `θ = H`
//! - azimuthal: the equinoctial sun's azimuth from the noon direction
//!
//! Every projection is odd in `H`, so `θ(12 + k) = −θ(12 − k)` and hour 12
//! maps to 0.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use yantra_solar::signed_azimuth_deg;
use yantra_time::GeoCoordinate;

use crate::error::GeometryError;
use crate::kind::InstrumentKind;

/// How hour angles are projected onto the instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HourProjection {
    /// Horizontal dial with a colatitude-aligned gnomon edge.
    HorizontalDial,
    /// Dial plane parallel to the equator.
    Equatorial,
    /// Equinoctial solar azimuth, measured from the noon direction.
    Azimuthal,
    /// Naive 15° per hour. Lower fidelity; only used when asked for.
    LegacyLinear,
}

impl HourProjection {
    pub const fn name(self) -> &'static str {
        match self {
            Self::HorizontalDial => "horizontal dial",
            Self::Equatorial => "equatorial",
            Self::Azimuthal => "azimuthal",
            Self::LegacyLinear => "legacy linear",
        }
    }

    /// False only for the naive linear fallback.
    pub const fn is_reference_fidelity(self) -> bool {
        !matches!(self, Self::LegacyLinear)
    }
}

impl Display for HourProjection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Hour angle in degrees for a clock hour on the solar dial.
pub fn hour_angle_for_hour(hour: u32) -> f64 {
    15.0 * (hour as f64 - 12.0)
}

/// Dial angle in degrees for a continuous hour angle.
pub fn dial_angle_deg(projection: HourProjection, latitude_deg: f64, hour_angle_deg: f64) -> f64 {
    match projection {
        HourProjection::HorizontalDial => {
            let phi = latitude_deg.to_radians();
            let h = hour_angle_deg.to_radians();
            (phi.sin() * h.sin()).atan2(h.cos()).to_degrees()
        }
        // Mirrored in the south so the noon line stays at 0.
        HourProjection::Azimuthal => signed_azimuth_deg(latitude_deg.abs(), 0.0, hour_angle_deg),
        HourProjection::Equatorial | HourProjection::LegacyLinear => hour_angle_deg,
    }
}

/// Hour range and projection for [`hour_table_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourTableConfig {
    /// First hour in the table. Default: 6.
    pub first_hour: u32,
    /// Last hour in the table, inclusive. Default: 18.
    pub last_hour: u32,
    /// Override of the instrument's projection. Default: none.
    pub projection: Option<HourProjection>,
}

impl Default for HourTableConfig {
    fn default() -> Self {
        Self {
            first_hour: 6,
            last_hour: 18,
            projection: None,
        }
    }
}

impl HourTableConfig {
    /// Every hour of the day, 0 through 23.
    pub fn full_day() -> Self {
        Self {
            first_hour: 0,
            last_hour: 23,
            projection: None,
        }
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.last_hour > 23 {
            return Err(GeometryError::InvalidConfig("last_hour must be at most 23"));
        }
        if self.first_hour > 12 || self.last_hour < 12 {
            return Err(GeometryError::InvalidConfig(
                "hour range must include solar noon",
            ));
        }
        Ok(())
    }
}

/// Dial angles keyed by clock hour.
#[derive(Debug, Clone, PartialEq)]
pub struct HourTable {
    projection: HourProjection,
    entries: BTreeMap<u32, f64>,
}

impl HourTable {
    /// Angle map key for an hour, `hour_HH`.
    pub fn key(hour: u32) -> String {
        format!("hour_{hour:02}")
    }

    pub fn projection(&self) -> HourProjection {
        self.projection
    }

    pub fn is_reference_fidelity(&self) -> bool {
        self.projection.is_reference_fidelity()
    }

    pub fn get(&self, hour: u32) -> Option<f64> {
        self.entries.get(&hour).copied()
    }

    /// `(hour, dial_angle_deg)` in hour order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.entries.iter().map(|(&h, &a)| (h, a))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Absolute angle between consecutive hour lines, in hour order.
    pub fn spacings(&self) -> Vec<f64> {
        let angles: Vec<f64> = self.entries.values().copied().collect();
        angles.windows(2).map(|w| (w[1] - w[0]).abs()).collect()
    }
}

/// Hour table for `kind` at `coordinate` over 6..=18 in its own projection.
pub fn hour_table(
    coordinate: &GeoCoordinate,
    kind: InstrumentKind,
) -> Result<HourTable, GeometryError> {
    hour_table_with(coordinate, kind, &HourTableConfig::default())
}

/// Hour table with an explicit hour range and optional projection override.
pub fn hour_table_with(
    coordinate: &GeoCoordinate,
    kind: InstrumentKind,
    config: &HourTableConfig,
) -> Result<HourTable, GeometryError> {
    config.validate()?;
    if coordinate.is_polar() {
        return Err(GeometryError::DegenerateGeometry(
            "hour lines are undefined at the poles",
        ));
    }
    let projection = config.projection.unwrap_or(kind.default_projection());
    let lat = coordinate.latitude_deg();
    let entries = (config.first_hour..=config.last_hour)
        .map(|h| (h, dial_angle_deg(projection, lat, hour_angle_for_hour(h))))
        .collect();
    Ok(HourTable {
        projection,
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64) -> GeoCoordinate {
        GeoCoordinate::new(lat, 75.0, 0.0).unwrap()
    }

    #[test]
    fn key_format() {
        assert_eq!(HourTable::key(6), "hour_06");
        assert_eq!(HourTable::key(18), "hour_18");
    }

    #[test]
    fn horizontal_dial_matches_tangent_formula() {
        let lat: f64 = 26.9245;
        for h in [7u32, 8, 9, 10, 11, 13, 14, 15, 16, 17] {
            let ha = hour_angle_for_hour(h);
            let expected = (lat.to_radians().sin() * ha.to_radians().tan())
                .atan()
                .to_degrees();
            let got = dial_angle_deg(HourProjection::HorizontalDial, lat, ha);
            assert!((got - expected).abs() < 1e-9, "hour {h}: {got} vs {expected}");
        }
    }

    #[test]
    fn horizontal_dial_six_oclock_is_right_angle() {
        let t = hour_table(&coord(40.0), InstrumentKind::Samrat).unwrap();
        assert!((t.get(6).unwrap() + 90.0).abs() < 1e-9);
        assert!((t.get(18).unwrap() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn noon_zero_and_antisymmetric_for_every_projection() {
        for projection in [
            HourProjection::HorizontalDial,
            HourProjection::Equatorial,
            HourProjection::Azimuthal,
            HourProjection::LegacyLinear,
        ] {
            for lat in [-45.0, -10.0, 0.0, 23.1765, 60.0] {
                let cfg = HourTableConfig {
                    projection: Some(projection),
                    ..Default::default()
                };
                let t = hour_table_with(&coord(lat), InstrumentKind::Rama, &cfg).unwrap();
                assert_eq!(t.get(12), Some(0.0));
                for k in 1..=6 {
                    let am = t.get(12 - k).unwrap();
                    let pm = t.get(12 + k).unwrap();
                    assert!((am + pm).abs() < 1e-9, "{projection} lat {lat} k {k}");
                }
            }
        }
    }

    #[test]
    fn horizontal_dial_compresses_midday_hours() {
        let t = hour_table(&coord(26.9), InstrumentKind::Samrat).unwrap();
        let s = t.spacings();
        assert_eq!(s.len(), 12);
        // Lines crowd near noon and spread toward 6 and 18.
        assert!(s[5] < s[0]);
        assert!(s[6] < s[11]);
    }

    #[test]
    fn legacy_linear_is_flagged() {
        let cfg = HourTableConfig {
            projection: Some(HourProjection::LegacyLinear),
            ..Default::default()
        };
        let t = hour_table_with(&coord(26.9), InstrumentKind::Samrat, &cfg).unwrap();
        assert!(!t.is_reference_fidelity());
        assert_eq!(t.get(9), Some(-45.0));
    }

    #[test]
    fn pole_is_degenerate() {
        let err = hour_table(&coord(90.0), InstrumentKind::Samrat).unwrap_err();
        assert!(matches!(err, GeometryError::DegenerateGeometry(_)));
        let err = hour_table(&coord(-90.0), InstrumentKind::Chakra).unwrap_err();
        assert!(matches!(err, GeometryError::DegenerateGeometry(_)));
    }

    #[test]
    fn range_must_include_noon() {
        let cfg = HourTableConfig {
            first_hour: 13,
            last_hour: 18,
            projection: None,
        };
        assert!(cfg.validate().is_err());
        assert!(HourTableConfig::full_day().validate().is_ok());
        let t = hour_table_with(&coord(20.0), InstrumentKind::Kapala, &HourTableConfig::full_day())
            .unwrap();
        assert_eq!(t.len(), 24);
        assert!(t.iter().all(|(_, a)| a.is_finite()));
    }
}
