//! Texture upload boundary.
//!
//! The core never talks to a graphics API. [`Presenter`] turns the
//! framebuffer into `RGBA8` bytes (plus an optional mip chain) and hands each
//! level to a host-provided [`TextureSink`], which performs the actual GPU
//! call.

use tracing::trace;

use crate::error::Result;
use crate::framebuffer::{write_rgba_bytes, FrameBuffer};

/// Pixel layout of uploaded bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    /// Four 8-bit channels per pixel in `R, G, B, A` byte order.
    Rgba8,
}

impl TextureFormat {
    /// Bytes per pixel.
    #[must_use]
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgba8 => 4,
        }
    }
}

/// Host side of the upload: receives one mip level at a time.
///
/// Level 0 is always `width x height` of the framebuffer; each following
/// level halves both dimensions (never below 1).
pub trait TextureSink {
    /// Upload `bytes` as mip `level` of a 2D texture.
    fn upload_level(
        &mut self,
        level: u32,
        bytes: &[u8],
        width: u32,
        height: u32,
        format: TextureFormat,
    ) -> Result<()>;
}

/// Converts framebuffer contents into texture uploads.
#[derive(Debug, Clone, Default)]
pub struct Presenter {
    generate_mipmaps: bool,
    /// Staging bytes per mip level, reused across uploads.
    levels: Vec<Vec<u8>>,
}

impl Presenter {
    /// Create a presenter. With `generate_mipmaps`, every upload rebuilds the
    /// full chain down to 1x1.
    #[must_use]
    pub fn new(generate_mipmaps: bool) -> Self {
        Self {
            generate_mipmaps,
            levels: Vec::new(),
        }
    }

    /// Contiguous `RGBA8` view of the framebuffer.
    pub fn bytes(&mut self, fb: &FrameBuffer) -> &[u8] {
        if self.levels.is_empty() {
            self.levels.push(Vec::new());
        }
        write_rgba_bytes(fb.data(), &mut self.levels[0]);
        &self.levels[0]
    }

    /// Upload the framebuffer (and its mip chain, if enabled) to `sink`.
    ///
    /// Returns the number of levels uploaded.
    pub fn upload<S: TextureSink + ?Sized>(
        &mut self,
        fb: &FrameBuffer,
        sink: &mut S,
    ) -> Result<u32> {
        let format = TextureFormat::Rgba8;
        let (mut width, mut height) = (fb.width(), fb.height());

        self.bytes(fb);
        sink.upload_level(0, &self.levels[0], width, height, format)?;

        if !self.generate_mipmaps {
            trace!(width, height, "uploaded texture");
            return Ok(1);
        }

        let count = mip_level_count(width, height);
        self.levels.resize_with(count as usize, Vec::new);

        for level in 1..count {
            let (lower, upper) = self.levels.split_at_mut(level as usize);
            let src = &lower[level as usize - 1];
            let dst = &mut upper[0];
            let (w, h) = downsample(src, width, height, dst);
            width = w;
            height = h;
            sink.upload_level(level, dst, width, height, format)?;
        }

        trace!(width = fb.width(), height = fb.height(), levels = count, "uploaded texture");
        Ok(count)
    }
}

/// Number of levels in a full mip chain for a `width x height` texture.
#[must_use]
pub fn mip_level_count(width: u32, height: u32) -> u32 {
    32 - width.max(height).max(1).leading_zeros()
}

/// 2x2 box filter of an `RGBA8` image into `dst`. Odd edges reuse the last
/// row/column. Returns the new dimensions.
fn downsample(src: &[u8], width: u32, height: u32, dst: &mut Vec<u8>) -> (u32, u32) {
    let (w, h) = (width as usize, height as usize);
    let (dw, dh) = ((w / 2).max(1), (h / 2).max(1));

    dst.clear();
    dst.reserve(dw * dh * 4);

    for y in 0..dh {
        let y0 = (2 * y).min(h - 1);
        let y1 = (2 * y + 1).min(h - 1);
        for x in 0..dw {
            let x0 = (2 * x).min(w - 1);
            let x1 = (2 * x + 1).min(w - 1);
            for c in 0..4 {
                let sum = u32::from(src[(y0 * w + x0) * 4 + c])
                    + u32::from(src[(y0 * w + x1) * 4 + c])
                    + u32::from(src[(y1 * w + x0) * 4 + c])
                    + u32::from(src[(y1 * w + x1) * 4 + c]);
                dst.push(((sum + 2) / 4) as u8);
            }
        }
    }

    (dw as u32, dh as u32)
}
