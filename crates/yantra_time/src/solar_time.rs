//! Local solar time and hour angle.
//!
//! The civil hour on a clock is not the solar hour: the sun crosses the local
//! meridian when the *solar* hour is 12, which happens at a civil time shifted
//! by the observer's distance from the zone's standard meridian (4 minutes per
//! degree) and, optionally, by the equation of time.
//!
//! Writing the solar hour in terms of UTC makes the zone offset drop out:
//!
//! `solar_hour = civil_hour + (λ − 15·offset_h)/15 = utc_hour + λ/15`

use crate::civil::CivilTime;
use crate::coordinate::GeoCoordinate;
use crate::error::TimeError;
use crate::instant::Instant;
use crate::julian::day_of_year;

/// How the solar hour is derived from the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SolarTimeModel {
    /// Local mean solar time: longitude offset only. The equation of time
    /// (up to ±16 minutes over a year) is ignored.
    #[default]
    Mean,
    /// Local apparent solar time: mean time corrected by the equation of time.
    Apparent,
}

/// Solar hour and the matching hour angle for one instant and place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalSolarTime {
    /// Continuous solar hour in [0, 24); 12.0 is local solar noon.
    pub solar_hour: f64,
    /// Hour angle in degrees, `15 * (solar_hour - 12)`, in [-180, 180).
    /// Negative before noon (sun east of the meridian).
    pub hour_angle_deg: f64,
}

/// Equation of time in minutes (apparent minus mean solar time).
///
/// `E = 9.87 sin 2B − 7.53 cos B − 1.5 sin B`, `B = 360°/365 · (n − 81)`.
/// Accurate to roughly half a minute.
pub fn equation_of_time_minutes(day_of_year: u32) -> f64 {
    let b = (360.0 / 365.0 * (day_of_year as f64 - 81.0)).to_radians();
    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

/// Local solar time at `coordinate` for `instant`.
pub fn local_solar_time(
    coordinate: &GeoCoordinate,
    instant: Instant,
    model: SolarTimeModel,
) -> LocalSolarTime {
    let mut solar_hour = instant.utc_hours_of_day() + coordinate.longitude_deg() / 15.0;
    if model == SolarTimeModel::Apparent {
        solar_hour += equation_of_time_minutes(solar_day_of_year(coordinate, instant)) / 60.0;
    }
    let solar_hour = solar_hour.rem_euclid(24.0);
    LocalSolarTime {
        solar_hour,
        hour_angle_deg: hour_angle_from_solar_hour(solar_hour),
    }
}

/// Ordinal day of the local mean solar date at `coordinate` (1..=366).
///
/// Taken from UTC shifted by `λ/15` hours, so it depends only on where and
/// when, never on the zone the instant is labeled in. Used for declination
/// and the equation of time.
pub fn solar_day_of_year(coordinate: &GeoCoordinate, instant: Instant) -> u32 {
    Instant::from_utc_seconds(instant.utc_seconds() + coordinate.longitude_deg() * 240.0)
        .day_of_year()
}

/// `15 * (solar_hour - 12)` wrapped to [-180, 180).
pub fn hour_angle_from_solar_hour(solar_hour: f64) -> f64 {
    (15.0 * (solar_hour - 12.0) + 180.0).rem_euclid(360.0) - 180.0
}

/// The instant at which the mean solar hour at `coordinate` equals
/// `solar_hour` on the given civil date, labeled with `utc_offset_minutes`.
///
/// The civil date is interpreted in the given zone; the result is the solar
/// hour on that date's UTC-shifted timeline, so very large longitude/offset
/// mismatches can land on the neighbouring civil day.
pub fn instant_at_solar_hour(
    coordinate: &GeoCoordinate,
    year: i32,
    month: u32,
    day: u32,
    solar_hour: f64,
    utc_offset_minutes: i32,
) -> Result<Instant, TimeError> {
    if !solar_hour.is_finite() || !(0.0..24.0).contains(&solar_hour) {
        return Err(TimeError::InvalidCalendar("solar hour must be within [0, 24)"));
    }
    let midnight = Instant::from_civil(&CivilTime::new(year, month, day, 0, 0, 0.0, 0))?;
    let utc_hours = solar_hour - coordinate.longitude_deg() / 15.0;
    Ok(midnight
        .add_seconds(utc_hours * 3600.0)
        .with_offset_minutes(utc_offset_minutes))
}

/// Ordinal day for a civil date, validated.
pub fn checked_day_of_year(year: i32, month: u32, day: u32) -> Result<u32, TimeError> {
    CivilTime::utc(year, month, day, 0, 0, 0.0).validate()?;
    Ok(day_of_year(year, month, day))
}
