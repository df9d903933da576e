//! Solar position for instrument layout.
//!
//! Declination, hour angle, elevation and azimuth from a coordinate and an
//! instant, plus sunrise/sunset expressed as solar hours.

pub mod daylight;
pub mod error;
pub mod position;
pub mod util;

pub use daylight::{DaylightConfig, DaylightResult, daylight, daylight_for_declination};
pub use error::SolarError;
pub use position::{
    MAX_DECLINATION_DEG, SolarConfig, SolarPosition, declination_deg, elevation_deg,
    meridian_altitude_deg, position_from_angles, signed_azimuth_deg, solar_position,
    solar_position_with,
};
pub use util::{normalize_180, normalize_360};
