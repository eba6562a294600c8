//! # Framescribe
//!
//! A minimal software framebuffer engine. A CPU-resident buffer of packed
//! RGBA pixels is procedurally painted (random points or random lines),
//! uploaded to a texture through a host-provided sink, and displayed by the
//! host on a full-screen triangle.
//!
//! The crate owns everything with algorithmic content (pixel addressing,
//! color packing, Bresenham line rasterization, seeded random scenes, mip
//! generation) and leaves windows, GPU contexts and shaders to the host.
//!
//! ## Quick Start
//!
//! ```rust
//! use framescribe::prelude::*;
//!
//! struct Discard;
//!
//! impl TextureSink for Discard {
//!     fn upload_level(&mut self, _: u32, _: &[u8], _: u32, _: u32, _: TextureFormat) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let config = Config { width: 128, height: 96, seed: Some(1), ..Config::default() };
//! let mut engine = Engine::initialize(&config)?;
//! engine.on_mode_change(DrawMode::Lines);
//! assert_eq!(engine.on_tick(&mut Discard)?, TickOutcome::Redraw);
//! # Ok::<(), framescribe::Error>(())
//! ```
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   *IBM Systems Journal*, 4(1), 25-30.
//! - Steele, G. L., Lea, D., & Flood, C. H. (2014). "Fast splittable pseudorandom
//!   number generators." OOPSLA '14 (SplitMix64).

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and the packed pixel codec.
pub mod color;

/// Core framebuffer of packed pixels.
pub mod framebuffer;

/// Line rasterization.
pub mod render;

// ============================================================================
// Scene Modules
// ============================================================================

/// Named pseudo-random distributions.
pub mod random;

/// Procedural scene content.
pub mod scene;

/// Fixed-interval animation driver.
pub mod animation;

// ============================================================================
// Host Boundary
// ============================================================================

/// Texture upload boundary.
pub mod present;

/// Host-facing engine entry points.
pub mod engine;

/// Key bindings.
pub mod input;

/// Engine configuration.
pub mod config;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for framescribe operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use framescribe::prelude::*;
/// ```
pub mod prelude {
    pub use crate::animation::{AnimationDriver, AnimationState, TickOutcome};
    pub use crate::color::{PackedPixel, Rgba};
    pub use crate::config::Config;
    pub use crate::engine::Engine;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::FrameBuffer;
    pub use crate::input::{HostAction, Key};
    pub use crate::present::{Presenter, TextureFormat, TextureSink};
    pub use crate::random::DistributionRegistry;
    pub use crate::render::{draw_line, LinePixels};
    pub use crate::scene::{DrawMode, SceneGenerator};
}
