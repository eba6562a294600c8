//! Engine configuration.
//!
//! Loaded from YAML. Every key is optional; the defaults describe a 1024x720
//! buffer repainted every 10 ms.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::framebuffer::dimensions_supported;
use crate::scene::DrawMode;

/// Tunable values for one engine instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Buffer width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Buffer height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Points painted per tick in points mode.
    #[serde(default = "default_points_per_tick")]
    pub points_per_tick: usize,

    /// Lines painted per tick in lines mode.
    #[serde(default = "default_lines_per_tick")]
    pub lines_per_tick: usize,

    /// Interval between host timer ticks, in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Generator seed. `None` seeds from the clock.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Build the full mip chain on every upload.
    #[serde(default = "default_generate_mipmaps")]
    pub generate_mipmaps: bool,

    /// Draw mode at startup.
    #[serde(default)]
    pub draw_mode: DrawMode,

    /// Whether animation runs at startup.
    #[serde(default = "default_animate")]
    pub animate: bool,
}

fn default_width() -> u32 {
    1024
}
fn default_height() -> u32 {
    720
}
fn default_points_per_tick() -> usize {
    1000
}
fn default_lines_per_tick() -> usize {
    1000
}
fn default_tick_interval_ms() -> u64 {
    10
}
fn default_generate_mipmaps() -> bool {
    true
}
fn default_animate() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            points_per_tick: default_points_per_tick(),
            lines_per_tick: default_lines_per_tick(),
            tick_interval_ms: default_tick_interval_ms(),
            seed: None,
            generate_mipmaps: default_generate_mipmaps(),
            draw_mode: DrawMode::default(),
            animate: default_animate(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration with fallback to defaults.
    ///
    /// A missing file is silent; an unreadable or invalid one is logged.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path).and_then(|c| c.validate().map(|()| c)) {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "falling back to default configuration");
                Self::default()
            }
        }
    }

    /// Checks values the engine cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for a zero-sized or oversized
    /// buffer (see [`MAX_DIMENSION`](crate::framebuffer::MAX_DIMENSION)) and
    /// [`Error::ConfigInvalid`] for a zero tick interval.
    pub fn validate(&self) -> Result<()> {
        if !dimensions_supported(self.width, self.height) {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(Error::ConfigInvalid {
                key: "tick_interval_ms".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the tick interval as a Duration.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::new();

        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 720);
        assert_eq!(config.points_per_tick, 1000);
        assert_eq!(config.lines_per_tick, 1000);
        assert_eq!(config.tick_interval(), Duration::from_millis(10));
        assert_eq!(config.seed, None);
        assert_eq!(config.draw_mode, DrawMode::Points);
        assert!(config.animate);
        assert!(config.generate_mipmaps);
    }

    #[test]
    fn test_config_parse_minimal() {
        let config = Config::parse("width: 64").unwrap();

        assert_eq!(config.width, 64);
        assert_eq!(config.height, 720);
    }

    #[test]
    fn test_config_parse_full() {
        let yaml = r"
width: 320
height: 200
points_per_tick: 50
lines_per_tick: 25
tick_interval_ms: 16
seed: 7
generate_mipmaps: false
draw_mode: lines
animate: false
";

        let config = Config::parse(yaml).unwrap();

        assert_eq!(config.width, 320);
        assert_eq!(config.height, 200);
        assert_eq!(config.points_per_tick, 50);
        assert_eq!(config.lines_per_tick, 25);
        assert_eq!(config.tick_interval_ms, 16);
        assert_eq!(config.seed, Some(7));
        assert!(!config.generate_mipmaps);
        assert_eq!(config.draw_mode, DrawMode::Lines);
        assert!(!config.animate);
    }

    #[test]
    fn test_config_parse_error_includes_line() {
        let yaml = r"
width: 10
height: 10
seed: not_a_number
";

        let err = Config::parse(yaml).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.to_string().contains('4'), "Error should include line number");
    }

    #[test]
    fn test_validate() {
        assert!(Config::default().validate().is_ok());

        let zero = Config {
            width: 0,
            ..Config::default()
        };
        assert!(matches!(zero.validate(), Err(Error::InvalidDimensions { .. })));

        let huge = Config {
            width: u32::MAX,
            height: u32::MAX,
            ..Config::default()
        };
        assert!(matches!(huge.validate(), Err(Error::InvalidDimensions { .. })));

        let stalled = Config {
            tick_interval_ms: 0,
            ..Config::default()
        };
        assert!(matches!(stalled.validate(), Err(Error::ConfigInvalid { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "width: 32\nheight: 16\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!((config.width, config.height), (32, 16));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default("/nonexistent/framescribe/config.yaml");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_or_default_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "width: 0\n").unwrap();

        assert_eq!(Config::load_or_default(&path), Config::default());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = Config {
            seed: Some(99),
            draw_mode: DrawMode::Lines,
            ..Config::default()
        };
        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        assert_eq!(Config::parse(&yaml).unwrap(), config);
    }
}
