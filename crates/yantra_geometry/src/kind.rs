//! The instrument catalog.
//!
//! Each kind belongs to one construction family, which fixes how the hour
//! scale is projected onto the instrument and how its dimensions respond to
//! latitude.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::GeometryError;
use crate::hour_table::HourProjection;
use crate::reference::ReferenceSite;

/// Supported instruments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InstrumentKind {
    /// Great equinoctial sundial with a triangular gnomon.
    Samrat,
    /// Open cylinder for altitude and azimuth.
    Rama,
    /// Sunken hemisphere mirroring the sky.
    JaiPrakash,
    /// Azimuth circle around a central pillar.
    Digamsa,
    /// Pole-aligned disk for pole star sighting.
    DhruvaProthaChakra,
    /// Hemispherical bowl dial.
    Kapala,
    /// Ring dial.
    Chakra,
    /// Vertical quadrant for solar altitude.
    Unnatamsa,
}

/// All instruments in catalog order.
pub const ALL_INSTRUMENTS: [InstrumentKind; 8] = [
    InstrumentKind::Samrat,
    InstrumentKind::Rama,
    InstrumentKind::JaiPrakash,
    InstrumentKind::Digamsa,
    InstrumentKind::DhruvaProthaChakra,
    InstrumentKind::Kapala,
    InstrumentKind::Chakra,
    InstrumentKind::Unnatamsa,
];

/// Construction family of an instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstrumentFamily {
    /// Shadow of a polar-aligned edge on a fixed dial.
    Gnomon,
    /// Direct sighting of altitude and azimuth.
    AltitudeAzimuth,
    /// Shadow of a point on a concave bowl.
    Bowl,
    /// Rings or disks parallel to the equator.
    Equatorial,
}

/// How reference dimensions are rescaled for a new latitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatitudeScaling {
    /// `cos φ / cos φ_ref`.
    CosineRatio,
    /// `1 + 0.1 (|φ| − φ_ref) / 30`.
    Linear,
}

impl InstrumentKind {
    /// All instruments in catalog order.
    pub const fn all() -> &'static [InstrumentKind] {
        &ALL_INSTRUMENTS
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Samrat => "Samrat Yantra",
            Self::Rama => "Rama Yantra",
            Self::JaiPrakash => "Jai Prakash Yantra",
            Self::Digamsa => "Digamsa Yantra",
            Self::DhruvaProthaChakra => "Dhruva-Protha-Chakra",
            Self::Kapala => "Kapala Yantra",
            Self::Chakra => "Chakra Yantra",
            Self::Unnatamsa => "Unnatamsa Yantra",
        }
    }

    /// Machine-friendly identifier, e.g. `samrat_yantra`.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Samrat => "samrat_yantra",
            Self::Rama => "rama_yantra",
            Self::JaiPrakash => "jai_prakash_yantra",
            Self::Digamsa => "digamsa_yantra",
            Self::DhruvaProthaChakra => "dhruva_protha_chakra",
            Self::Kapala => "kapala_yantra",
            Self::Chakra => "chakra_yantra",
            Self::Unnatamsa => "unnatamsa_yantra",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Samrat => "Great sundial; a triangular gnomon parallel to the Earth's axis",
            Self::Rama => "Cylindrical structure measuring altitude and azimuth",
            Self::JaiPrakash => "Hemispherical sundial mapping the celestial sphere",
            Self::Digamsa => "Azimuth-altitude instrument around a central pillar",
            Self::DhruvaProthaChakra => "Pole circle for sighting the pole star and measuring latitude",
            Self::Kapala => "Bowl sundial with seasonal curves",
            Self::Chakra => "Ring dial of nested equatorial, meridian and horizon rings",
            Self::Unnatamsa => "Vertical quadrant measuring solar altitude",
        }
    }

    pub const fn family(self) -> InstrumentFamily {
        match self {
            Self::Samrat => InstrumentFamily::Gnomon,
            Self::Rama | Self::Digamsa | Self::Unnatamsa => InstrumentFamily::AltitudeAzimuth,
            Self::JaiPrakash | Self::Kapala => InstrumentFamily::Bowl,
            Self::DhruvaProthaChakra | Self::Chakra => InstrumentFamily::Equatorial,
        }
    }

    /// Projection used for the hour table unless the caller overrides it.
    pub const fn default_projection(self) -> HourProjection {
        match self.family() {
            InstrumentFamily::Gnomon => HourProjection::HorizontalDial,
            InstrumentFamily::Equatorial => HourProjection::Equatorial,
            InstrumentFamily::AltitudeAzimuth | InstrumentFamily::Bowl => {
                HourProjection::Azimuthal
            }
        }
    }

    pub const fn latitude_scaling(self) -> LatitudeScaling {
        match self.family() {
            InstrumentFamily::AltitudeAzimuth => LatitudeScaling::Linear,
            _ => LatitudeScaling::CosineRatio,
        }
    }

    /// Historical site whose dimensions are used when none is requested.
    pub const fn default_site(self) -> ReferenceSite {
        match self {
            Self::Samrat | Self::Rama | Self::JaiPrakash => ReferenceSite::Jaipur,
            Self::Digamsa | Self::Unnatamsa => ReferenceSite::Delhi,
            Self::DhruvaProthaChakra => ReferenceSite::Ujjain,
            Self::Kapala => ReferenceSite::Varanasi,
            Self::Chakra => ReferenceSite::Mathura,
        }
    }

    /// Dimension key of the part whose shadow is animated.
    pub const fn shadow_caster_key(self) -> &'static str {
        match self {
            Self::Samrat | Self::Kapala => "gnomon_height",
            Self::Rama => "wall_height",
            Self::JaiPrakash => "bowl_depth",
            Self::Digamsa => "pillar_height",
            Self::DhruvaProthaChakra => "support_pillar_height",
            Self::Chakra => "mounting_post_height",
            Self::Unnatamsa => "vertical_post_height",
        }
    }

    /// Reading tolerance in minutes at scale 1 with even hour spacing.
    pub const fn base_time_tolerance_minutes(self) -> f64 {
        match self {
            Self::Samrat => 2.0,
            Self::JaiPrakash => 1.0,
            Self::Kapala => 3.0,
            Self::Chakra => 2.0,
            Self::Rama | Self::Digamsa | Self::DhruvaProthaChakra => 4.0,
            Self::Unnatamsa => 5.0,
        }
    }

    /// Angular reading tolerance at scale 1, for instruments read by angle.
    pub const fn base_angle_tolerance_degrees(self) -> Option<f64> {
        match self {
            Self::Rama | Self::Digamsa => Some(0.5),
            Self::Unnatamsa => Some(0.25),
            Self::DhruvaProthaChakra => Some(0.1),
            Self::Chakra => Some(0.2),
            Self::Samrat | Self::JaiPrakash | Self::Kapala => None,
        }
    }
}

impl Display for InstrumentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InstrumentKind {
    type Err = GeometryError;

    /// Accepts the slug, the bare name, or the display name, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        let bare = norm.strip_suffix("_yantra").unwrap_or(&norm);
        let kind = match bare.replace('_', "").as_str() {
            "samrat" => Self::Samrat,
            "rama" => Self::Rama,
            "jaiprakash" => Self::JaiPrakash,
            "digamsa" => Self::Digamsa,
            "dhruva" | "dhruvaprothachakra" => Self::DhruvaProthaChakra,
            "kapala" => Self::Kapala,
            "chakra" => Self::Chakra,
            "unnatamsa" => Self::Unnatamsa,
            _ => return Err(GeometryError::UnsupportedInstrument(s.to_string())),
        };
        Ok(kind)
    }
}
