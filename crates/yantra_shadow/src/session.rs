//! Play/pause/seek state machine over a simulated time cursor.
//!
//! ```text
//! Idle --play--> Playing <--pause/play--> Paused
//!   ^                |                       |
//!   +------stop------+----------stop---------+
//! ```
//!
//! `Idle` has no cursor. `play` from `Idle` starts at the configured start
//! instant, so stopping and playing again restarts from there. `seek` jumps
//! the cursor directly; from `Idle` it lands in `Paused`.
//!
//! The cursor is an `f64` of seconds past J2000, so at present-day epochs it
//! resolves about 0.1 µs. Ticks shorter than that are carried and applied
//! once they add up to a representable step.

use log::{debug, trace};
use yantra_geometry::GeometrySpec;
use yantra_time::Instant;

use crate::config::{AnimationConfig, validate_compression};
use crate::error::ShadowError;
use crate::shadow::{AnimationSnapshot, snapshot_at};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaybackState {
    Idle,
    Playing,
    Paused,
}

/// One visualization session. Owns the spec it animates.
#[derive(Debug, Clone)]
pub struct AnimationSession {
    spec: GeometrySpec,
    config: AnimationConfig,
    state: PlaybackState,
    cursor: Option<Instant>,
    /// Simulated seconds not yet applied to the cursor.
    carry_seconds: f64,
    last: Option<AnimationSnapshot>,
}

impl AnimationSession {
    pub fn new(spec: GeometrySpec, config: AnimationConfig) -> Result<Self, ShadowError> {
        config.validate()?;
        debug!(
            "new session for {} at {}, compression {}",
            spec.kind(),
            spec.coordinate(),
            config.compression_factor
        );
        Ok(Self {
            spec,
            config,
            state: PlaybackState::Idle,
            cursor: None,
            carry_seconds: 0.0,
            last: None,
        })
    }

    pub fn spec(&self) -> &GeometrySpec {
        &self.spec
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Simulated instant, or `None` when idle.
    pub fn cursor(&self) -> Option<Instant> {
        self.cursor
    }

    /// Last computed sun and shadow, or `None` when idle.
    pub fn snapshot(&self) -> Option<&AnimationSnapshot> {
        self.last.as_ref()
    }

    pub fn compression_factor(&self) -> f64 {
        self.config.compression_factor
    }

    pub fn set_compression(&mut self, factor: f64) -> Result<(), ShadowError> {
        validate_compression(factor)?;
        debug!("compression {} -> {factor}", self.config.compression_factor);
        self.config.compression_factor = factor;
        Ok(())
    }

    pub fn play(&mut self) {
        match self.state {
            PlaybackState::Idle => {
                self.carry_seconds = 0.0;
                self.move_to(self.config.start);
                self.transition(PlaybackState::Playing);
            }
            PlaybackState::Paused => self.transition(PlaybackState::Playing),
            PlaybackState::Playing => {}
        }
    }

    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.transition(PlaybackState::Paused);
        }
    }

    /// Back to `Idle`, dropping the cursor.
    pub fn stop(&mut self) {
        if self.state != PlaybackState::Idle {
            self.cursor = None;
            self.carry_seconds = 0.0;
            self.last = None;
            self.transition(PlaybackState::Idle);
        }
    }

    /// Advance by `dt_real_seconds` of wall time.
    ///
    /// Only acts while playing, and only for a finite positive `dt`. Steps
    /// below the cursor's resolution are carried to later ticks.
    pub fn tick(&mut self, dt_real_seconds: f64) -> Option<&AnimationSnapshot> {
        if self.state != PlaybackState::Playing
            || !dt_real_seconds.is_finite()
            || dt_real_seconds <= 0.0
        {
            return self.last.as_ref();
        }
        if let Some(cursor) = self.cursor {
            self.carry_seconds += dt_real_seconds * self.config.compression_factor;
            let next = cursor.add_seconds(self.carry_seconds);
            if next > cursor {
                self.carry_seconds -= next.utc_seconds() - cursor.utc_seconds();
                trace!("tick {dt_real_seconds}s -> {next}");
                self.move_to(next);
            } else {
                trace!("tick {dt_real_seconds}s below cursor resolution, carried");
            }
        }
        self.last.as_ref()
    }

    /// Jump the cursor to `instant` without compression.
    pub fn seek(&mut self, instant: Instant) -> &AnimationSnapshot {
        if self.state == PlaybackState::Idle {
            self.transition(PlaybackState::Paused);
        }
        debug!("seek to {instant}");
        self.carry_seconds = 0.0;
        self.move_to(instant)
    }

    fn move_to(&mut self, instant: Instant) -> &AnimationSnapshot {
        self.cursor = Some(instant);
        self.last.insert(snapshot_at(&self.spec, instant, &self.config))
    }

    fn transition(&mut self, to: PlaybackState) {
        debug!("{:?} -> {to:?}", self.state);
        self.state = to;
    }
}
