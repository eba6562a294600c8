//! Fixed-interval animation driver.
//!
//! The driver does not own a timer. The host calls [`AnimationDriver::tick`]
//! every [`tick_interval`](AnimationDriver::tick_interval); stopping the
//! animation is simply not calling it any more.

use std::time::Duration;

use tracing::debug;

use crate::error::Result;
use crate::framebuffer::FrameBuffer;
use crate::present::{Presenter, TextureSink};
use crate::scene::{DrawMode, SceneGenerator};

/// Whether ticks do any work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationState {
    /// Ticks are ignored.
    Paused,
    /// Ticks paint and upload.
    Running,
}

impl AnimationState {
    /// The other state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Paused => Self::Running,
            Self::Running => Self::Paused,
        }
    }

    /// State for an `animate` flag.
    #[must_use]
    pub const fn from_flag(animate: bool) -> Self {
        if animate {
            Self::Running
        } else {
            Self::Paused
        }
    }
}

/// What the host should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing changed.
    Idle,
    /// The texture was refreshed; schedule a redraw.
    Redraw,
}

/// Alternates scene painting according to the current [`DrawMode`].
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    state: AnimationState,
    mode: DrawMode,
    interval: Duration,
}

impl AnimationDriver {
    /// Create a driver.
    #[must_use]
    pub fn new(state: AnimationState, mode: DrawMode, interval: Duration) -> Self {
        Self {
            state,
            mode,
            interval,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> AnimationState {
        self.state
    }

    /// Whether ticks currently do work.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == AnimationState::Running
    }

    /// Current draw mode.
    #[must_use]
    pub const fn mode(&self) -> DrawMode {
        self.mode
    }

    /// Interval at which the host should tick.
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        self.interval
    }

    /// Select what subsequent ticks paint.
    pub fn set_mode(&mut self, mode: DrawMode) {
        if self.mode != mode {
            debug!(from = %self.mode, to = %mode, "draw mode changed");
        }
        self.mode = mode;
    }

    /// Flip between running and paused. Returns the new state.
    pub fn toggle(&mut self) -> AnimationState {
        self.state = self.state.toggled();
        debug!(state = ?self.state, "animation toggled");
        self.state
    }

    /// Advance the scene by one step without presenting it.
    ///
    /// Returns `false` when paused (the buffer is untouched).
    pub fn advance(&self, fb: &mut FrameBuffer, scene: &mut SceneGenerator) -> Result<bool> {
        if !self.is_running() {
            return Ok(false);
        }
        scene.paint(fb, self.mode)?;
        Ok(true)
    }

    /// One timer tick: advance the scene, then upload it.
    pub fn tick<S: TextureSink + ?Sized>(
        &self,
        fb: &mut FrameBuffer,
        scene: &mut SceneGenerator,
        presenter: &mut Presenter,
        sink: &mut S,
    ) -> Result<TickOutcome> {
        if !self.advance(fb, scene)? {
            return Ok(TickOutcome::Idle);
        }
        presenter.upload(fb, sink)?;
        Ok(TickOutcome::Redraw)
    }
}
