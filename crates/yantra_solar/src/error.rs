//! Error types for solar calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use yantra_time::TimeError;

/// Errors from solar position and daylight calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SolarError {
    /// Error from coordinate or civil-time handling.
    Time(TimeError),
    /// Configuration parameter out of range.
    InvalidConfig(&'static str),
}

impl Display for SolarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for SolarError {}

impl From<TimeError> for SolarError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
