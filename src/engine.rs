//! The rendering core as seen by a host window.
//!
//! [`Engine`] bundles the framebuffer, the scene generator, the animation
//! driver and the presenter, and exposes the handful of entry points a
//! windowing layer calls: initialize, tick, mode change, animate toggle and
//! clear.

use std::path::Path;
use std::time::Duration;

use tracing::{debug, info};

use crate::animation::{AnimationDriver, AnimationState, TickOutcome};
use crate::color::Rgba;
use crate::config::Config;
use crate::error::Result;
use crate::framebuffer::FrameBuffer;
use crate::input::{command_for, Command, HostAction, Key};
use crate::output::PngEncoder;
use crate::present::{Presenter, TextureSink};
use crate::random::DistributionRegistry;
use crate::scene::{DrawMode, SceneGenerator};

/// Background every clear resets to.
pub const CLEAR_COLOR: Rgba = Rgba::WHITE;

/// One running instance of the framebuffer engine.
#[derive(Debug, Clone)]
pub struct Engine {
    fb: FrameBuffer,
    scene: SceneGenerator,
    driver: AnimationDriver,
    presenter: Presenter,
}

impl Engine {
    /// Allocate the buffer, clear it to white and seed the distributions.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`Config::validate`].
    pub fn initialize(config: &Config) -> Result<Self> {
        config.validate()?;

        let mut fb = FrameBuffer::new(config.width, config.height)?;
        fb.clear(CLEAR_COLOR);

        let registry = DistributionRegistry::for_buffer(config.width, config.height, config.seed)?;
        let seed = registry.seed();
        let scene = SceneGenerator::new(registry)
            .with_counts(config.points_per_tick, config.lines_per_tick);

        let driver = AnimationDriver::new(
            AnimationState::from_flag(config.animate),
            config.draw_mode,
            config.tick_interval(),
        );

        info!(
            width = config.width,
            height = config.height,
            seed,
            mode = %config.draw_mode,
            "engine initialized"
        );

        Ok(Self {
            fb,
            scene,
            driver,
            presenter: Presenter::new(config.generate_mipmaps),
        })
    }

    /// Drive one animation step. Paints and uploads unless paused.
    pub fn on_tick<S: TextureSink + ?Sized>(&mut self, sink: &mut S) -> Result<TickOutcome> {
        self.driver
            .tick(&mut self.fb, &mut self.scene, &mut self.presenter, sink)
    }

    /// Advance the scene one step without uploading.
    pub fn advance(&mut self) -> Result<bool> {
        self.driver.advance(&mut self.fb, &mut self.scene)
    }

    /// Upload the current buffer unconditionally.
    ///
    /// Returns the number of texture levels uploaded.
    pub fn present<S: TextureSink + ?Sized>(&mut self, sink: &mut S) -> Result<u32> {
        self.presenter.upload(&self.fb, sink)
    }

    /// Select the draw mode used by later ticks.
    pub fn on_mode_change(&mut self, mode: DrawMode) {
        self.driver.set_mode(mode);
    }

    /// Pause or resume animation. Returns the new state.
    pub fn on_animate_toggle(&mut self) -> AnimationState {
        self.driver.toggle()
    }

    /// Clear the buffer to white.
    pub fn on_clear(&mut self) {
        debug!("buffer cleared");
        self.fb.clear(CLEAR_COLOR);
    }

    /// Apply a key press. Core keys are handled here; anything the host must
    /// do is returned.
    pub fn handle_key(&mut self, key: Key) -> HostAction {
        match command_for(key) {
            Command::SetMode(mode) => self.on_mode_change(mode),
            Command::Clear => self.on_clear(),
            Command::ToggleAnimation => {
                self.on_animate_toggle();
            }
            Command::Host(action) => return action,
        }
        HostAction::Redraw
    }

    /// The framebuffer.
    #[must_use]
    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Current draw mode.
    #[must_use]
    pub fn mode(&self) -> DrawMode {
        self.driver.mode()
    }

    /// Current animation state.
    #[must_use]
    pub fn animation_state(&self) -> AnimationState {
        self.driver.state()
    }

    /// Interval at which the host should call [`on_tick`](Self::on_tick).
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.driver.tick_interval()
    }

    /// Save the buffer as a PNG file.
    pub fn snapshot_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        PngEncoder::write_to_file(&self.fb, path)?;
        info!(path = %path.display(), "snapshot written");
        Ok(())
    }

    /// Encode the buffer as PNG bytes.
    pub fn snapshot_png_bytes(&self) -> Result<Vec<u8>> {
        PngEncoder::to_bytes(&self.fb)
    }
}
