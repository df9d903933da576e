//! Historical observatory sites and the surviving instruments' dimensions.
//!
//! Generated instruments are rescaled from one of these references. Parts
//! marked [`Scaling::Latitude`] follow the latitude scale factor; the rest
//! keep their reference size (wall thickness, steps, drainage).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use yantra_time::{GeoCoordinate, TimeError};

use crate::error::GeometryError;
use crate::kind::{InstrumentKind, LatitudeScaling};

/// Sites of the 18th-century observatories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReferenceSite {
    Jaipur,
    Delhi,
    Ujjain,
    Varanasi,
    Mathura,
}

/// All reference sites.
pub const ALL_SITES: [ReferenceSite; 5] = [
    ReferenceSite::Jaipur,
    ReferenceSite::Delhi,
    ReferenceSite::Ujjain,
    ReferenceSite::Varanasi,
    ReferenceSite::Mathura,
];

impl ReferenceSite {
    pub const fn all() -> &'static [ReferenceSite] {
        &ALL_SITES
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Jaipur => "Jaipur",
            Self::Delhi => "Delhi",
            Self::Ujjain => "Ujjain",
            Self::Varanasi => "Varanasi",
            Self::Mathura => "Mathura",
        }
    }

    /// The observatory itself.
    pub const fn landmark(self) -> &'static str {
        match self {
            Self::Jaipur => "Jantar Mantar, Jaipur",
            Self::Delhi => "Jantar Mantar, New Delhi",
            Self::Ujjain => "Vedh Shala, Ujjain",
            Self::Varanasi => "Man Mandir Ghat, Varanasi",
            Self::Mathura => "Kans Qila, Mathura",
        }
    }

    pub const fn latitude_deg(self) -> f64 {
        match self {
            Self::Jaipur => 26.9124,
            Self::Delhi => 28.6139,
            Self::Ujjain => 23.1765,
            Self::Varanasi => 25.3176,
            Self::Mathura => 27.4924,
        }
    }

    pub const fn longitude_deg(self) -> f64 {
        match self {
            Self::Jaipur => 75.7873,
            Self::Delhi => 77.2090,
            Self::Ujjain => 75.7885,
            Self::Varanasi => 82.9739,
            Self::Mathura => 77.6737,
        }
    }

    pub const fn elevation_m(self) -> f64 {
        match self {
            Self::Jaipur => 431.0,
            Self::Delhi => 216.0,
            Self::Ujjain => 492.0,
            Self::Varanasi => 80.0,
            Self::Mathura => 174.0,
        }
    }

    pub fn coordinate(self) -> Result<GeoCoordinate, TimeError> {
        GeoCoordinate::new(self.latitude_deg(), self.longitude_deg(), self.elevation_m())
    }
}

impl Display for ReferenceSite {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReferenceSite {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_SITES
            .iter()
            .copied()
            .find(|site| site.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GeometryError::UnknownReference(format!("site '{}'", s.trim())))
    }
}

/// Whether a reference part follows the latitude scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scaling {
    Latitude,
    Fixed,
}

/// One measured part of a reference instrument, in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePart {
    pub key: &'static str,
    pub meters: f64,
    pub scaling: Scaling,
}

const fn lat(key: &'static str, meters: f64) -> ReferencePart {
    ReferencePart {
        key,
        meters,
        scaling: Scaling::Latitude,
    }
}

const fn fixed(key: &'static str, meters: f64) -> ReferencePart {
    ReferencePart {
        key,
        meters,
        scaling: Scaling::Fixed,
    }
}

const SAMRAT_JAIPUR: &[ReferencePart] = &[
    lat("base_length", 27.0),
    lat("base_width", 21.6),
    lat("gnomon_height", 22.6),
    fixed("gnomon_thickness", 1.5),
    fixed("step_height", 0.3),
    fixed("step_width", 0.6),
];

const SAMRAT_DELHI: &[ReferencePart] = &[
    lat("base_length", 21.3),
    lat("base_width", 17.0),
    lat("gnomon_height", 18.2),
    fixed("gnomon_thickness", 1.2),
    fixed("step_height", 0.25),
    fixed("step_width", 0.5),
];

const SAMRAT_UJJAIN: &[ReferencePart] = &[
    lat("base_length", 24.5),
    lat("base_width", 19.6),
    lat("gnomon_height", 20.8),
    fixed("gnomon_thickness", 1.3),
    fixed("step_height", 0.28),
    fixed("step_width", 0.55),
];

const RAMA_JAIPUR: &[ReferencePart] = &[
    lat("outer_radius", 8.5),
    lat("inner_radius", 3.0),
    fixed("wall_height", 2.8),
    fixed("wall_thickness", 0.45),
    fixed("central_pillar_radius", 0.3),
    fixed("step_height", 0.25),
];

const RAMA_DELHI: &[ReferencePart] = &[
    lat("outer_radius", 7.2),
    lat("inner_radius", 2.5),
    fixed("wall_height", 2.5),
    fixed("wall_thickness", 0.40),
    fixed("central_pillar_radius", 0.25),
    fixed("step_height", 0.22),
];

const JAI_PRAKASH_JAIPUR: &[ReferencePart] = &[
    lat("hemisphere_radius", 8.64),
    lat("bowl_depth", 8.64),
    fixed("rim_thickness", 0.5),
    fixed("marble_thickness", 0.1),
    fixed("step_width", 0.4),
    fixed("drainage_channel_width", 0.15),
];

const JAI_PRAKASH_DELHI: &[ReferencePart] = &[
    lat("hemisphere_radius", 6.8),
    lat("bowl_depth", 6.8),
    fixed("rim_thickness", 0.4),
    fixed("marble_thickness", 0.08),
    fixed("step_width", 0.35),
    fixed("drainage_channel_width", 0.12),
];

const DIGAMSA_DELHI: &[ReferencePart] = &[
    lat("arc_radius", 4.8),
    lat("base_width", 10.5),
    lat("pillar_height", 7.2),
    fixed("arc_thickness", 0.25),
    fixed("base_thickness", 0.5),
    fixed("scale_marking_depth", 0.02),
];

const DIGAMSA_JAIPUR: &[ReferencePart] = &[
    lat("arc_radius", 5.2),
    lat("base_width", 11.0),
    lat("pillar_height", 7.8),
    fixed("arc_thickness", 0.28),
    fixed("base_thickness", 0.55),
    fixed("scale_marking_depth", 0.02),
];

const DHRUVA_UJJAIN: &[ReferencePart] = &[
    lat("disk_radius", 3.2),
    lat("rotation_axis_length", 7.0),
    fixed("central_hole_radius", 0.08),
    fixed("rim_thickness", 0.15),
    fixed("support_pillar_height", 2.5),
];

const DHRUVA_DELHI: &[ReferencePart] = &[
    lat("disk_radius", 2.8),
    lat("rotation_axis_length", 6.2),
    fixed("central_hole_radius", 0.07),
    fixed("rim_thickness", 0.12),
    fixed("support_pillar_height", 2.2),
];

const KAPALA_VARANASI: &[ReferencePart] = &[
    lat("bowl_radius", 3.5),
    lat("bowl_depth", 3.5),
    lat("gnomon_height", 2.8),
    fixed("rim_width", 0.3),
    fixed("gnomon_thickness", 0.04),
    fixed("drainage_hole_diameter", 0.08),
];

const KAPALA_JAIPUR: &[ReferencePart] = &[
    lat("bowl_radius", 3.0),
    lat("bowl_depth", 3.0),
    lat("gnomon_height", 2.4),
    fixed("rim_width", 0.25),
    fixed("gnomon_thickness", 0.035),
    fixed("drainage_hole_diameter", 0.07),
];

const CHAKRA_MATHURA: &[ReferencePart] = &[
    lat("outer_ring_radius", 2.8),
    lat("inner_ring_radius", 2.2),
    lat("base_support_radius", 3.5),
    fixed("ring_thickness", 0.08),
    fixed("ring_width", 0.15),
    fixed("mounting_post_height", 3.0),
];

const CHAKRA_UJJAIN: &[ReferencePart] = &[
    lat("outer_ring_radius", 2.5),
    lat("inner_ring_radius", 2.0),
    lat("base_support_radius", 3.2),
    fixed("ring_thickness", 0.07),
    fixed("ring_width", 0.12),
    fixed("mounting_post_height", 2.8),
];

const UNNATAMSA_DELHI: &[ReferencePart] = &[
    lat("quadrant_radius", 3.6),
    lat("base_length", 5.4),
    lat("base_width", 4.3),
    lat("vertical_post_height", 3.6),
    lat("sighting_arm_length", 3.2),
    fixed("arc_thickness", 0.12),
];

const UNNATAMSA_JAIPUR: &[ReferencePart] = &[
    lat("quadrant_radius", 3.8),
    lat("base_length", 5.7),
    lat("base_width", 4.6),
    lat("vertical_post_height", 3.8),
    lat("sighting_arm_length", 3.4),
    fixed("arc_thickness", 0.13),
];

/// Measured parts of `kind` at `site`, if that site has one.
pub fn reference_parts(
    kind: InstrumentKind,
    site: ReferenceSite,
) -> Option<&'static [ReferencePart]> {
    use InstrumentKind as K;
    use ReferenceSite as S;
    let parts = match (kind, site) {
        (K::Samrat, S::Jaipur) => SAMRAT_JAIPUR,
        (K::Samrat, S::Delhi) => SAMRAT_DELHI,
        (K::Samrat, S::Ujjain) => SAMRAT_UJJAIN,
        (K::Rama, S::Jaipur) => RAMA_JAIPUR,
        (K::Rama, S::Delhi) => RAMA_DELHI,
        (K::JaiPrakash, S::Jaipur) => JAI_PRAKASH_JAIPUR,
        (K::JaiPrakash, S::Delhi) => JAI_PRAKASH_DELHI,
        (K::Digamsa, S::Delhi) => DIGAMSA_DELHI,
        (K::Digamsa, S::Jaipur) => DIGAMSA_JAIPUR,
        (K::DhruvaProthaChakra, S::Ujjain) => DHRUVA_UJJAIN,
        (K::DhruvaProthaChakra, S::Delhi) => DHRUVA_DELHI,
        (K::Kapala, S::Varanasi) => KAPALA_VARANASI,
        (K::Kapala, S::Jaipur) => KAPALA_JAIPUR,
        (K::Chakra, S::Mathura) => CHAKRA_MATHURA,
        (K::Chakra, S::Ujjain) => CHAKRA_UJJAIN,
        (K::Unnatamsa, S::Delhi) => UNNATAMSA_DELHI,
        (K::Unnatamsa, S::Jaipur) => UNNATAMSA_JAIPUR,
        _ => return None,
    };
    Some(parts)
}

/// Sites with reference data for `kind`, default site first.
pub fn available_sites(kind: InstrumentKind) -> Vec<ReferenceSite> {
    let default = kind.default_site();
    let mut sites = vec![default];
    sites.extend(
        ALL_SITES
            .iter()
            .copied()
            .filter(|&s| s != default && reference_parts(kind, s).is_some()),
    );
    sites
}

/// Latitude scale factor relative to a reference site.
pub fn latitude_scale(kind: InstrumentKind, latitude_deg: f64, site: ReferenceSite) -> f64 {
    let lat = latitude_deg.abs();
    let ref_lat = site.latitude_deg();
    match kind.latitude_scaling() {
        LatitudeScaling::CosineRatio => lat.to_radians().cos() / ref_lat.to_radians().cos(),
        LatitudeScaling::Linear => 1.0 + 0.1 * (lat - ref_lat) / 30.0,
    }
}
