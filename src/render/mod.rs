//! Rasterization of geometric primitives onto a [`FrameBuffer`].
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer-only, 8-connected, non-antialiased
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!
//! [`FrameBuffer`]: crate::framebuffer::FrameBuffer

mod line;

pub use line::{draw_line, LinePixels};
