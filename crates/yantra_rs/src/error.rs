//! Unified error type for the request boundary.

use std::error::Error;
use std::fmt::{Display, Formatter};

use yantra_geometry::GeometryError;
use yantra_shadow::ShadowError;
use yantra_solar::SolarError;
use yantra_time::TimeError;

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum YantraError {
    /// Bad coordinate, date or time string.
    Time(TimeError),
    Solar(SolarError),
    Geometry(GeometryError),
    Shadow(ShadowError),
}

impl Display for YantraError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "{e}"),
            Self::Solar(e) => write!(f, "{e}"),
            Self::Geometry(e) => write!(f, "{e}"),
            Self::Shadow(e) => write!(f, "{e}"),
        }
    }
}

impl Error for YantraError {}

impl From<TimeError> for YantraError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<SolarError> for YantraError {
    fn from(e: SolarError) -> Self {
        Self::Solar(e)
    }
}

impl From<GeometryError> for YantraError {
    fn from(e: GeometryError) -> Self {
        Self::Geometry(e)
    }
}

impl From<ShadowError> for YantraError {
    fn from(e: ShadowError) -> Self {
        Self::Shadow(e)
    }
}
