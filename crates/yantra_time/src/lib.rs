//! Coordinates, civil time and local solar time.
//!
//! This crate provides:
//! - `GeoCoordinate`, a validated latitude/longitude/elevation value
//! - Julian Date ↔ calendar conversions and day-of-year helpers
//! - `CivilTime` (wall-clock time with a UTC offset) and `Instant`
//!   (a point on the UTC time line)
//! - Local mean/apparent solar time and the solar hour angle

pub mod civil;
pub mod coordinate;
pub mod error;
pub mod instant;
pub mod julian;
pub mod solar_time;

pub use civil::{CivilTime, MAX_UTC_OFFSET_MINUTES};
pub use coordinate::{GeoCoordinate, POLAR_TOLERANCE_DEG};
pub use error::TimeError;
pub use instant::Instant;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, day_of_year, days_in_month, is_leap_year,
    jd_to_calendar,
};
pub use solar_time::{
    LocalSolarTime, SolarTimeModel, checked_day_of_year, equation_of_time_minutes,
    hour_angle_from_solar_hour, instant_at_solar_hour, local_solar_time, solar_day_of_year,
};

/// Validate and build a coordinate; shorthand for [`GeoCoordinate::new`].
pub fn make_coordinate(
    latitude_deg: f64,
    longitude_deg: f64,
    elevation_m: f64,
) -> Result<GeoCoordinate, TimeError> {
    GeoCoordinate::new(latitude_deg, longitude_deg, elevation_m)
}
