//! Plain request values for callers that hold raw numbers and names.

use log::debug;
use yantra_geometry::{GenerationConfig, GeometrySpec, InstrumentKind, ReferenceSite};
use yantra_shadow::{AnimationConfig, AnimationSession};
use yantra_time::{GeoCoordinate, Instant};

use crate::error::YantraError;

/// Everything needed to generate one instrument.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
    /// Slug or name, e.g. `samrat_yantra` or `Samrat`.
    pub instrument_kind: String,
    pub scale_factor: f64,
    /// Reference site name; the instrument's default when `None`.
    pub reference: Option<String>,
}

impl GenerateRequest {
    pub fn new(latitude: f64, longitude: f64, elevation: f64, instrument_kind: &str) -> Self {
        Self {
            latitude,
            longitude,
            elevation,
            instrument_kind: instrument_kind.to_string(),
            scale_factor: 1.0,
            reference: None,
        }
    }
}

/// Validate and run a generation request.
pub fn generate(request: &GenerateRequest) -> Result<GeometrySpec, YantraError> {
    let coordinate = GeoCoordinate::new(request.latitude, request.longitude, request.elevation)?;
    let kind: InstrumentKind = request.instrument_kind.parse()?;
    let reference = request
        .reference
        .as_deref()
        .map(str::parse::<ReferenceSite>)
        .transpose()?;
    debug!("generate request: {kind} at {coordinate}, scale {}", request.scale_factor);
    let config = GenerationConfig {
        reference,
        ..Default::default()
    };
    Ok(yantra_geometry::generate_with(
        kind,
        &coordinate,
        request.scale_factor,
        &config,
    )?)
}

/// A spec to animate and how to play it.
#[derive(Debug, Clone)]
pub struct AnimationRequest {
    pub spec: GeometrySpec,
    /// Simulated seconds per real second.
    pub compression_factor: f64,
    pub start: Instant,
}

/// Open an animation session; it starts `Idle`.
pub fn start_session(request: AnimationRequest) -> Result<AnimationSession, YantraError> {
    let config = AnimationConfig {
        compression_factor: request.compression_factor,
        ..AnimationConfig::new(request.start)
    };
    Ok(AnimationSession::new(request.spec, config)?)
}
