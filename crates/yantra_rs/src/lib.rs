//! Request-level facade for the yantra engine.
//!
//! Accepts raw numbers and names, validates them, and returns typed results
//! or a single [`YantraError`].
//!
//! # Quick start
//!
//! ```rust,ignore
//! use yantra_rs::*;
//!
//! let spec = generate(&GenerateRequest::new(26.9245, 75.8243, 431.0, "samrat"))?;
//! println!("gnomon angle {:.2}°", spec.angle("gnomon_angle").unwrap_or_default());
//!
//! let sun = solar(26.9245, 75.8243, 431.0, "2024-03-20T09:00:00+05:30")?;
//! println!("elevation {:.2}°", sun.elevation_deg);
//! ```

pub mod convenience;
pub mod error;
pub mod request;

pub use convenience::{daylight_on, hour_lines, solar};
pub use error::YantraError;
pub use request::{AnimationRequest, GenerateRequest, generate, start_session};

// Re-export the engine types so callers only need this crate.
pub use yantra_geometry::{
    ALL_INSTRUMENTS, ALL_SITES, ClimateZone, GeometryError, GeometrySpec, Grade, HourProjection,
    HourTable, HourTableConfig, InstrumentFamily, InstrumentKind, ObservationAssessment,
    ObservedReading, ReferenceSite, SolarCorrections, Suitability, assess_observation,
    available_sites, climate_zone, corrections, hour_table_with, refraction_arcmin,
    site_suitability, verify_spec,
};
pub use yantra_shadow::{
    AnimationConfig, AnimationSession, AnimationSnapshot, PlaybackState, Shadow, ShadowError,
    ShadowVector, day_track, rates,
};
pub use yantra_solar::{
    DaylightConfig, DaylightResult, SolarConfig, SolarError, SolarPosition, daylight,
    solar_position_with,
};
pub use yantra_time::{
    CivilTime, GeoCoordinate, Instant, LocalSolarTime, SolarTimeModel, TimeError,
    checked_day_of_year, instant_at_solar_hour, local_solar_time, make_coordinate,
    solar_day_of_year,
};
