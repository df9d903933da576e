//! Climate zone and per-instrument suitability of a site.

use std::fmt::{Display, Formatter};

use yantra_time::GeoCoordinate;

use crate::kind::{ALL_INSTRUMENTS, InstrumentKind};

/// Latitude of the tropics used for zoning, degrees.
const TROPIC_DEG: f64 = 23.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClimateZone {
    NorthernTemperate,
    NorthernTropical,
    SouthernTropical,
    SouthernTemperate,
}

impl ClimateZone {
    /// Zone for a latitude. The equator itself counts as southern tropical.
    pub fn from_latitude(latitude_deg: f64) -> Self {
        if latitude_deg > TROPIC_DEG {
            Self::NorthernTemperate
        } else if latitude_deg > 0.0 {
            Self::NorthernTropical
        } else if latitude_deg > -TROPIC_DEG {
            Self::SouthernTropical
        } else {
            Self::SouthernTemperate
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::NorthernTemperate => "Northern Temperate",
            Self::NorthernTropical => "Northern Tropical",
            Self::SouthernTropical => "Southern Tropical",
            Self::SouthernTemperate => "Southern Temperate",
        }
    }
}

impl Display for ClimateZone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suitability {
    Good,
    Excellent,
}

impl Suitability {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

impl Display for Suitability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub fn climate_zone(coordinate: &GeoCoordinate) -> ClimateZone {
    ClimateZone::from_latitude(coordinate.latitude_deg())
}

/// How well `kind` works at `|latitude|`.
///
/// Polar-axis instruments lose resolution near the equator where the axis
/// lies almost flat; bowls lose usable sky at high latitude.
pub fn suitability(kind: InstrumentKind, latitude_deg: f64) -> Suitability {
    let lat = latitude_deg.abs();
    let excellent = match kind {
        InstrumentKind::Samrat => lat > 10.0,
        InstrumentKind::DhruvaProthaChakra | InstrumentKind::Unnatamsa => lat > 5.0,
        InstrumentKind::JaiPrakash => lat < 60.0,
        InstrumentKind::Kapala => lat < 65.0,
        InstrumentKind::Rama | InstrumentKind::Digamsa | InstrumentKind::Chakra => true,
    };
    if excellent {
        Suitability::Excellent
    } else {
        Suitability::Good
    }
}

/// Suitability of every instrument at `coordinate`, in catalog order.
pub fn site_suitability(coordinate: &GeoCoordinate) -> Vec<(InstrumentKind, Suitability)> {
    ALL_INSTRUMENTS
        .iter()
        .map(|&k| (k, suitability(k, coordinate.latitude_deg())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zones() {
        assert_eq!(ClimateZone::from_latitude(28.6), ClimateZone::NorthernTemperate);
        assert_eq!(ClimateZone::from_latitude(23.5), ClimateZone::NorthernTropical);
        assert_eq!(ClimateZone::from_latitude(0.0), ClimateZone::SouthernTropical);
        assert_eq!(ClimateZone::from_latitude(-33.9), ClimateZone::SouthernTemperate);
    }

    #[test]
    fn delhi_is_excellent_for_everything() {
        let delhi = GeoCoordinate::new(28.6139, 77.2090, 216.0).unwrap();
        let s = site_suitability(&delhi);
        assert_eq!(s.len(), 8);
        assert!(s.iter().all(|&(_, v)| v == Suitability::Excellent));
    }

    #[test]
    fn thresholds() {
        assert_eq!(suitability(InstrumentKind::Samrat, 3.0), Suitability::Good);
        assert_eq!(suitability(InstrumentKind::Samrat, -12.0), Suitability::Excellent);
        assert_eq!(suitability(InstrumentKind::JaiPrakash, 62.0), Suitability::Good);
        assert_eq!(suitability(InstrumentKind::Kapala, 62.0), Suitability::Excellent);
        assert_eq!(suitability(InstrumentKind::Unnatamsa, 2.0), Suitability::Good);
    }
}
