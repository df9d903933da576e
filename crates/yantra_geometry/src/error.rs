//! Error types for geometry generation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use yantra_time::TimeError;

/// Errors from hour tables, instrument generators and validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GeometryError {
    /// Coordinate failed validation.
    InvalidCoordinate(TimeError),
    /// Instrument name not in the catalog.
    UnsupportedInstrument(String),
    /// The requested place makes the dial formulas singular (the poles).
    DegenerateGeometry(&'static str),
    /// A generated spec violates a geometric invariant.
    InconsistentGeometry(String),
    /// Scale factor must be finite and strictly positive.
    InvalidScale(f64),
    /// No reference dimensions for this site (and instrument).
    UnknownReference(String),
    /// Configuration parameter out of range.
    InvalidConfig(&'static str),
    /// Observed reading contains a non-finite or out-of-range value.
    InvalidObservation(&'static str),
}

impl Display for GeometryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCoordinate(e) => write!(f, "invalid coordinate: {e}"),
            Self::UnsupportedInstrument(name) => write!(f, "unsupported instrument: {name}"),
            Self::DegenerateGeometry(msg) => write!(f, "degenerate geometry: {msg}"),
            Self::InconsistentGeometry(msg) => write!(f, "inconsistent geometry: {msg}"),
            Self::InvalidScale(s) => {
                write!(f, "invalid scale factor {s}: must be finite and positive")
            }
            Self::UnknownReference(site) => write!(f, "no reference dimensions for {site}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::InvalidObservation(msg) => write!(f, "invalid observation: {msg}"),
        }
    }
}

impl Error for GeometryError {}

impl From<TimeError> for GeometryError {
    fn from(e: TimeError) -> Self {
        Self::InvalidCoordinate(e)
    }
}
