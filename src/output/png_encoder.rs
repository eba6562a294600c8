//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate.

use crate::error::Result;
use crate::framebuffer::FrameBuffer;
use crate::present::{TextureFormat, TextureSink};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// PNG encoder for framebuffer output.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a framebuffer to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(fb: &FrameBuffer, path: P) -> Result<()> {
        let file = File::create(path)?;
        Self::encode_rgba(BufWriter::new(file), &fb.to_rgba_bytes(), fb.width(), fb.height())
    }

    /// Encode a framebuffer to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(fb: &FrameBuffer) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode_rgba(&mut buffer, &fb.to_rgba_bytes(), fb.width(), fb.height())?;
        Ok(buffer)
    }

    /// Encode tightly packed `RGBA8` bytes.
    pub fn encode_rgba<W: Write>(out: W, rgba: &[u8], width: u32, height: u32) -> Result<()> {
        let mut encoder = png::Encoder::new(out, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(rgba)?;
        writer.finish()?;
        Ok(())
    }
}

/// Texture sink that writes every uploaded level-0 image to a numbered PNG.
///
/// Stands in for a GPU texture when running headless. Mip levels above 0 are
/// accepted and discarded.
#[derive(Debug)]
pub struct PngFrameSink {
    dir: PathBuf,
    frame: u64,
}

impl PngFrameSink {
    /// Write frames into `dir` (created if missing).
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir, frame: 0 })
    }

    /// Frames written so far.
    #[must_use]
    pub const fn frames_written(&self) -> u64 {
        self.frame
    }

    fn frame_path(&self) -> PathBuf {
        self.dir.join(format!("frame_{:06}.png", self.frame))
    }
}

impl TextureSink for PngFrameSink {
    fn upload_level(
        &mut self,
        level: u32,
        bytes: &[u8],
        width: u32,
        height: u32,
        _format: TextureFormat,
    ) -> Result<()> {
        if level != 0 {
            return Ok(());
        }

        let path = self.frame_path();
        let file = File::create(&path)?;
        PngEncoder::encode_rgba(BufWriter::new(file), bytes, width, height)?;
        debug!(path = %path.display(), "wrote frame");
        self.frame += 1;
        Ok(())
    }
}
