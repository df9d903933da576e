//! Animation configuration.

use yantra_solar::SolarConfig;
use yantra_time::Instant;

use crate::error::ShadowError;

/// Preset compression factors (simulated seconds per real second).
pub mod rates {
    /// Real time.
    pub const REALTIME: f64 = 1.0;
    /// One simulated minute per second.
    pub const MINUTE_PER_SEC: f64 = 60.0;
    /// Ten simulated minutes per second.
    pub const TEN_MINUTES_PER_SEC: f64 = 600.0;
    /// One simulated hour per second.
    pub const HOUR_PER_SEC: f64 = 3600.0;
}

/// Playback and shadow parameters for an [`AnimationSession`](crate::AnimationSession).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationConfig {
    /// Where playback starts, and restarts after a stop.
    pub start: Instant,
    /// Simulated seconds per real second. Default: 600.
    pub compression_factor: f64,
    /// Elevations between 0 and this are treated as this when computing
    /// shadow length, degrees. Default: 0.5.
    pub min_elevation_deg: f64,
    /// Longest reported shadow as a multiple of the caster height.
    /// Default: 50.
    pub max_shadow_ratio: f64,
    /// Solar time model for the sun's position.
    pub solar: SolarConfig,
}

impl AnimationConfig {
    /// Defaults, starting at `start`.
    pub fn new(start: Instant) -> Self {
        Self {
            start,
            compression_factor: rates::TEN_MINUTES_PER_SEC,
            min_elevation_deg: 0.5,
            max_shadow_ratio: 50.0,
            solar: SolarConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ShadowError> {
        validate_compression(self.compression_factor)?;
        if !self.start.utc_seconds().is_finite() {
            return Err(ShadowError::InvalidConfig("start instant must be finite"));
        }
        if !self.min_elevation_deg.is_finite()
            || self.min_elevation_deg <= 0.0
            || self.min_elevation_deg >= 90.0
        {
            return Err(ShadowError::InvalidConfig(
                "min_elevation_deg must be within (0, 90)",
            ));
        }
        if !self.max_shadow_ratio.is_finite() || self.max_shadow_ratio <= 0.0 {
            return Err(ShadowError::InvalidConfig(
                "max_shadow_ratio must be finite and positive",
            ));
        }
        Ok(())
    }
}

pub(crate) fn validate_compression(factor: f64) -> Result<(), ShadowError> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(ShadowError::InvalidCompression(factor));
    }
    Ok(())
}
