//! Error types for coordinates and civil time.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from coordinate construction, calendar validation, or parsing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Latitude/longitude out of range, or a non-finite component.
    InvalidCoordinate(&'static str),
    /// Calendar field out of range (month 13, Feb 30, hour 24, ...).
    InvalidCalendar(&'static str),
    /// Date/time string could not be parsed.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCoordinate(msg) => write!(f, "invalid coordinate: {msg}"),
            Self::InvalidCalendar(msg) => write!(f, "invalid calendar date: {msg}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}
