//! Error types for framescribe operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in framescribe operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Pixel coordinate outside `[0, width) x [0, height)`.
    #[error("Pixel ({x}, {y}) is outside the {width}x{height} buffer")]
    OutOfBounds {
        /// Requested x coordinate.
        x: i64,
        /// Requested y coordinate.
        y: i64,
        /// Buffer width.
        width: u32,
        /// Buffer height.
        height: u32,
    },

    /// A named distribution was queried before it was registered.
    #[error("No distribution registered under '{0}'")]
    DistributionNotFound(String),

    /// A distribution was registered with an empty range.
    #[error("Invalid range for distribution '{name}': [{low}, {high}]")]
    InvalidRange {
        /// Distribution name.
        name: String,
        /// Lower bound (inclusive).
        low: i64,
        /// Upper bound (inclusive).
        high: i64,
    },

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: String,
        /// Error message describing why the value is invalid.
        message: String,
    },

    /// Texture upload rejected by the host graphics layer.
    #[error("Texture upload failed: {0}")]
    Upload(String),

    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),
}
