//! Shadow animation for generated instruments.
//!
//! Given a [`GeometrySpec`](yantra_geometry::GeometrySpec) and a simulated
//! time cursor, computes the sun's position and the caster's shadow. The
//! host drives the session by calling [`AnimationSession::tick`] from
//! whatever loop it has.

pub mod config;
pub mod error;
pub mod session;
pub mod shadow;
pub mod track;

pub use config::{AnimationConfig, rates};
pub use error::ShadowError;
pub use session::{AnimationSession, PlaybackState};
pub use shadow::{AnimationSnapshot, Shadow, ShadowVector, cast_shadow, snapshot_at};
pub use track::{MAX_TRACK_STEPS, day_track, day_track_with};
