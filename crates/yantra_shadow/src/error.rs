//! Error types for shadow animation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use yantra_geometry::GeometryError;

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ShadowError {
    /// Error from the geometry the session animates.
    Geometry(GeometryError),
    /// Compression factor must be finite and positive.
    InvalidCompression(f64),
    /// Configuration parameter out of range.
    InvalidConfig(&'static str),
}

impl Display for ShadowError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Geometry(e) => write!(f, "geometry error: {e}"),
            Self::InvalidCompression(c) => {
                write!(f, "invalid compression factor {c}: must be finite and positive")
            }
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for ShadowError {}

impl From<GeometryError> for ShadowError {
    fn from(e: GeometryError) -> Self {
        Self::Geometry(e)
    }
}
