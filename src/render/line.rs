//! Integer line rasterization.

use crate::color::PackedPixel;
use crate::error::{Error, Result};
use crate::framebuffer::FrameBuffer;

/// Pixels of a Bresenham line, endpoints inclusive.
///
/// Endpoints are put into canonical order (smaller `(y, x)` first) before
/// stepping, so a line and its reverse cover exactly the same pixels. The
/// iterator yields pixels in that canonical order. Consecutive pixels differ
/// by at most one in each axis.
#[derive(Debug, Clone)]
pub struct LinePixels {
    x: i64,
    y: i64,
    x1: i64,
    y1: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl LinePixels {
    /// Start rasterizing the line from `(x0, y0)` to `(x1, y1)`.
    #[must_use]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let ((x0, y0), (x1, y1)) = if (y1, x1) < (y0, x0) {
            ((x1, y1), (x0, y0))
        } else {
            ((x0, y0), (x1, y1))
        };
        let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        Self {
            x: x0,
            y: y0,
            x1,
            y1,
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }

    /// Number of pixels the full line covers.
    #[must_use]
    pub fn pixel_len(&self) -> usize {
        (self.dx.max(self.dy) + 1) as usize
    }
}

impl Iterator for LinePixels {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let current = (self.x, self.y);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(current);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }

        Some(current)
    }
}

/// Draw a 1-pixel-wide line between two points (inclusive) using
/// Bresenham's algorithm.
///
/// Both endpoints are validated first. Every pixel of a Bresenham line lies
/// inside the bounding box of its endpoints, so a line with in-range
/// endpoints never leaves the buffer, and a rejected line writes nothing.
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`] naming the first endpoint outside the buffer.
///
/// # Example
///
/// ```
/// use framescribe::color::Rgba;
/// use framescribe::framebuffer::FrameBuffer;
/// use framescribe::render::draw_line;
///
/// let mut fb = FrameBuffer::new(16, 16).unwrap();
/// fb.clear(Rgba::WHITE);
/// draw_line(&mut fb, 0, 0, 15, 15, 0, 0, 0).unwrap();
/// assert_eq!(fb.get_pixel(7, 7), Some(Rgba::BLACK));
/// ```
#[allow(clippy::too_many_arguments)]
pub fn draw_line(
    fb: &mut FrameBuffer,
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    r: u8,
    g: u8,
    b: u8,
) -> Result<()> {
    let (x0, y0) = endpoint(fb, x0, y0)?;
    let (x1, y1) = endpoint(fb, x1, y1)?;

    let pixel = PackedPixel::opaque(r, g, b);
    for (x, y) in LinePixels::new(x0, y0, x1, y1) {
        fb.put(x, y, pixel)?;
    }
    Ok(())
}

fn endpoint(fb: &FrameBuffer, x: i64, y: i64) -> Result<(i32, i32)> {
    let out_of_bounds = || Error::OutOfBounds {
        x,
        y,
        width: fb.width(),
        height: fb.height(),
    };
    if !fb.contains(x, y) {
        return Err(out_of_bounds());
    }
    let x = i32::try_from(x).map_err(|_| out_of_bounds())?;
    let y = i32::try_from(y).map_err(|_| out_of_bounds())?;
    Ok((x, y))
}

// ============================================================================
// Tests
// ============================================================================
