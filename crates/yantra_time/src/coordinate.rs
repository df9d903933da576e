//! Validated geographic coordinate.

use crate::error::TimeError;

/// Latitudes within this distance of ±90° are treated as the pole.
pub const POLAR_TOLERANCE_DEG: f64 = 1e-9;

/// Geographic location on Earth's surface.
///
/// Construction validates the ranges; an out-of-range latitude or longitude
/// is an error, never clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    latitude_deg: f64,
    longitude_deg: f64,
    elevation_m: f64,
}

impl GeoCoordinate {
    /// Create a coordinate.
    ///
    /// * `latitude_deg`: geodetic latitude, north positive, [-90, 90]
    /// * `longitude_deg`: east positive, [-180, 180]
    /// * `elevation_m`: height above mean sea level; only required to be finite
    pub fn new(latitude_deg: f64, longitude_deg: f64, elevation_m: f64) -> Result<Self, TimeError> {
        if !latitude_deg.is_finite() {
            return Err(TimeError::InvalidCoordinate("latitude must be finite"));
        }
        if !longitude_deg.is_finite() {
            return Err(TimeError::InvalidCoordinate("longitude must be finite"));
        }
        if !elevation_m.is_finite() {
            return Err(TimeError::InvalidCoordinate("elevation must be finite"));
        }
        if latitude_deg.abs() > 90.0 {
            return Err(TimeError::InvalidCoordinate(
                "latitude must be within [-90, 90] degrees",
            ));
        }
        if longitude_deg.abs() > 180.0 {
            return Err(TimeError::InvalidCoordinate(
                "longitude must be within [-180, 180] degrees",
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
            elevation_m,
        })
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    pub fn elevation_m(&self) -> f64 {
        self.elevation_m
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    /// Angular distance from the nearer pole: `90 - |latitude|`.
    pub fn colatitude_deg(&self) -> f64 {
        90.0 - self.latitude_deg.abs()
    }

    /// True at (or numerically indistinguishable from) either pole.
    pub fn is_polar(&self) -> bool {
        self.colatitude_deg() < POLAR_TOLERANCE_DEG
    }

    /// True in the southern hemisphere.
    pub fn is_southern(&self) -> bool {
        self.latitude_deg < 0.0
    }
}

impl std::fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ns = if self.latitude_deg < 0.0 { 'S' } else { 'N' };
        let ew = if self.longitude_deg < 0.0 { 'W' } else { 'E' };
        write!(
            f,
            "{:.4}°{ns} {:.4}°{ew} {:.0}m",
            self.latitude_deg.abs(),
            self.longitude_deg.abs(),
            self.elevation_m
        )
    }
}
