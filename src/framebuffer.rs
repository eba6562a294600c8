//! CPU-resident framebuffer of packed pixels.
//!
//! The buffer is a row-major `Vec<PackedPixel>` of exactly `width * height`
//! entries; the pixel at `(x, y)` lives at index `y * width + x`. There is no
//! row padding, so the whole buffer can be handed to a texture upload as one
//! contiguous slice.
//!
//! # Bounds policy
//!
//! Writes are checked. [`FrameBuffer::set_pixel`] rejects coordinates outside
//! `[0, width) x [0, height)` with [`Error::OutOfBounds`] and leaves the buffer
//! unchanged. Reads return `None` out of range.

use crate::color::{PackedPixel, Rgba};
use crate::error::{Error, Result};

/// Largest supported width or height, in pixels.
pub const MAX_DIMENSION: u32 = 16_384;

/// Whether a `width x height` buffer can be allocated: both sides in
/// `1..=MAX_DIMENSION` and the byte size representable as `usize`.
#[must_use]
pub fn dimensions_supported(width: u32, height: u32) -> bool {
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return false;
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(std::mem::size_of::<PackedPixel>()))
        .is_some()
}

/// Fixed-size grid of packed pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Pixels in row-major order.
    pixels: Vec<PackedPixel>,
}

impl FrameBuffer {
    /// Create a new framebuffer with the given dimensions.
    ///
    /// All pixels start as transparent black; callers usually
    /// [`clear`](Self::clear) right after allocation.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero or above [`MAX_DIMENSION`].
    ///
    /// # Example
    ///
    /// ```
    /// use framescribe::framebuffer::FrameBuffer;
    ///
    /// let fb = FrameBuffer::new(1024, 720).unwrap();
    /// assert_eq!(fb.pixel_count(), 1024 * 720);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if !dimensions_supported(width, height) {
            return Err(Error::InvalidDimensions { width, height });
        }

        let pixels = vec![PackedPixel::default(); (width as usize) * (height as usize)];

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Read-only view of the packed pixels, for upload.
    #[must_use]
    pub fn data(&self) -> &[PackedPixel] {
        &self.pixels
    }

    /// Whether `(x, y)` addresses a pixel inside the buffer.
    #[inline]
    #[must_use]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }

    /// Fill every pixel with one color.
    pub fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color.pack());
    }

    /// Write an opaque pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `(x, y)` is outside the buffer. The
    /// buffer is not modified in that case.
    pub fn set_pixel(&mut self, x: i64, y: i64, r: u8, g: u8, b: u8) -> Result<()> {
        self.put(x, y, PackedPixel::opaque(r, g, b))
    }

    /// Write an already packed pixel, with the same bounds check as
    /// [`set_pixel`](Self::set_pixel).
    pub fn put(&mut self, x: i64, y: i64, pixel: PackedPixel) -> Result<()> {
        let idx = self.index(x, y)?;
        self.pixels[idx] = pixel;
        Ok(())
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: i64, y: i64) -> Option<Rgba> {
        self.index(x, y).ok().map(|idx| self.pixels[idx].decode())
    }

    /// Count pixels whose color differs from `background`.
    #[must_use]
    pub fn count_not(&self, background: Rgba) -> usize {
        let bg = background.pack();
        self.pixels.iter().filter(|&&p| p != bg).count()
    }

    /// Get pixel data as tightly packed `RGBA8` bytes.
    ///
    /// This is useful for encoding to formats like PNG.
    #[must_use]
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        write_rgba_bytes(&self.pixels, &mut bytes);
        bytes
    }

    /// Calculate the linear index for a pixel coordinate.
    #[inline]
    fn index(&self, x: i64, y: i64) -> Result<usize> {
        if !self.contains(x, y) {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y as usize) * (self.width as usize) + (x as usize))
    }
}

/// Append the texture-order bytes of `pixels` to `out`, replacing its contents.
pub(crate) fn write_rgba_bytes(pixels: &[PackedPixel], out: &mut Vec<u8>) {
    out.clear();
    out.reserve(pixels.len() * 4);
    for pixel in pixels {
        out.extend_from_slice(&pixel.to_rgba_bytes());
    }
}
