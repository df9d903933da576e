//! Sunrise/sunset as solar hours, with polar night and midnight sun.
//!
//! Uses the hour angle at which the sun's center reaches a target altitude
//! `h0` (negative: below the geometric horizon):
//!
//! `cos H0 = (sin h0 − sin φ sin δ) / (cos φ cos δ)`
//!
//! `cos H0 > 1` means the sun never rises that day; `cos H0 < -1` means it
//! never sets. The declination is held at its daily value, so the result is
//! symmetric about solar noon.

use std::f64::consts::PI;

use yantra_time::GeoCoordinate;

use crate::error::SolarError;
use crate::position::declination_deg;

/// Mean Earth radius in meters (for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Configurable horizon parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaylightConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Solar angular semi-diameter in arcminutes. Default: 16.0.
    pub semidiameter_arcmin: f64,
    /// Apply geometric dip for observer elevation, `sqrt(2h/R)` radians.
    /// Default: true.
    pub altitude_correction: bool,
}

impl Default for DaylightConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            altitude_correction: true,
        }
    }
}

impl DaylightConfig {
    /// A purely geometric horizon: sun center at altitude 0.
    pub fn geometric() -> Self {
        Self {
            refraction_arcmin: 0.0,
            semidiameter_arcmin: 0.0,
            altitude_correction: false,
        }
    }

    pub fn validate(&self) -> Result<(), SolarError> {
        if !self.refraction_arcmin.is_finite() || self.refraction_arcmin < 0.0 {
            return Err(SolarError::InvalidConfig(
                "refraction_arcmin must be finite and non-negative",
            ));
        }
        if !self.semidiameter_arcmin.is_finite() || self.semidiameter_arcmin < 0.0 {
            return Err(SolarError::InvalidConfig(
                "semidiameter_arcmin must be finite and non-negative",
            ));
        }
        Ok(())
    }

    /// Total horizon depression in degrees.
    ///
    /// `h0 = (refraction + semidiameter) / 60 + dip_deg`
    pub fn horizon_depression_deg(&self, elevation_m: f64) -> f64 {
        let base = (self.refraction_arcmin + self.semidiameter_arcmin) / 60.0;
        if self.altitude_correction && elevation_m > 0.0 {
            let dip_rad = (2.0 * elevation_m / EARTH_RADIUS_M).sqrt();
            base + dip_rad * (180.0 / PI)
        } else {
            base
        }
    }
}

/// Daylight on one day at one place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DaylightResult {
    /// The sun rises and sets.
    Period {
        /// Solar hour of sunrise, before 12.
        sunrise_solar_hour: f64,
        /// Solar hour of sunset, after 12.
        sunset_solar_hour: f64,
        /// Hour angle of sunset in degrees (half the diurnal arc).
        half_arc_deg: f64,
    },
    /// Sun stays below the horizon all day.
    PolarNight,
    /// Sun stays above the horizon all day.
    MidnightSun,
}

impl DaylightResult {
    /// Hours of daylight: 0 for polar night, 24 for midnight sun.
    pub fn day_length_hours(&self) -> f64 {
        match *self {
            Self::Period {
                sunrise_solar_hour,
                sunset_solar_hour,
                ..
            } => sunset_solar_hour - sunrise_solar_hour,
            Self::PolarNight => 0.0,
            Self::MidnightSun => 24.0,
        }
    }

    /// Whether the sun is up at a given solar hour.
    pub fn is_daylight_at(&self, solar_hour: f64) -> bool {
        match *self {
            Self::Period {
                sunrise_solar_hour,
                sunset_solar_hour,
                ..
            } => solar_hour > sunrise_solar_hour && solar_hour < sunset_solar_hour,
            Self::PolarNight => false,
            Self::MidnightSun => true,
        }
    }
}

/// Daylight period for a declination and latitude, with depression `h0_deg`
/// (positive number of degrees below the horizon).
pub fn daylight_for_declination(latitude_deg: f64, declination_deg: f64, h0_deg: f64) -> DaylightResult {
    let phi = latitude_deg.to_radians();
    let dec = declination_deg.to_radians();
    let h0 = (-h0_deg).to_radians();
    let cos_h0 = (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());

    if cos_h0 > 1.0 {
        return DaylightResult::PolarNight;
    }
    if cos_h0 < -1.0 {
        return DaylightResult::MidnightSun;
    }
    let half_arc_deg = cos_h0.acos().to_degrees();
    DaylightResult::Period {
        sunrise_solar_hour: 12.0 - half_arc_deg / 15.0,
        sunset_solar_hour: 12.0 + half_arc_deg / 15.0,
        half_arc_deg,
    }
}

/// Daylight at `coordinate` on ordinal day `day_of_year`.
pub fn daylight(
    coordinate: &GeoCoordinate,
    day_of_year: u32,
    config: &DaylightConfig,
) -> Result<DaylightResult, SolarError> {
    config.validate()?;
    let h0 = config.horizon_depression_deg(coordinate.elevation_m());
    Ok(daylight_for_declination(
        coordinate.latitude_deg(),
        declination_deg(day_of_year),
        h0,
    ))
}
