//! One-call helpers taking raw numbers and ISO-8601 strings.

use yantra_geometry::{HourTable, InstrumentKind, hour_table};
use yantra_solar::{DaylightConfig, DaylightResult, SolarPosition, daylight, solar_position};
use yantra_time::{CivilTime, GeoCoordinate, Instant, checked_day_of_year};

use crate::error::YantraError;

/// Sun position at a place for an ISO-8601 date-time such as
/// `2024-03-20T12:00:00+05:30`. A missing zone means UTC.
pub fn solar(
    latitude: f64,
    longitude: f64,
    elevation: f64,
    date: &str,
) -> Result<SolarPosition, YantraError> {
    let coordinate = GeoCoordinate::new(latitude, longitude, elevation)?;
    let civil: CivilTime = date.parse()?;
    let instant = Instant::from_civil(&civil)?;
    Ok(solar_position(&coordinate, instant))
}

/// Sunrise and sunset (solar hours) on a calendar date, default horizon.
pub fn daylight_on(
    latitude: f64,
    longitude: f64,
    elevation: f64,
    year: i32,
    month: u32,
    day: u32,
) -> Result<DaylightResult, YantraError> {
    let coordinate = GeoCoordinate::new(latitude, longitude, elevation)?;
    let doy = checked_day_of_year(year, month, day)?;
    Ok(daylight(&coordinate, doy, &DaylightConfig::default())?)
}

/// Default hour table for an instrument named like `samrat_yantra`.
pub fn hour_lines(latitude: f64, longitude: f64, instrument: &str) -> Result<HourTable, YantraError> {
    let coordinate = GeoCoordinate::new(latitude, longitude, 0.0)?;
    let kind: InstrumentKind = instrument.parse()?;
    Ok(hour_table(&coordinate, kind)?)
}
