//! Procedural scene content: scattered points and random line sets.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::FrameBuffer;
use crate::random::{DistributionRegistry, COLOUR, HEIGHT, WIDTH};
use crate::render::draw_line;

/// Default number of points painted per call.
pub const DEFAULT_POINTS: usize = 1000;
/// Default number of lines painted per call.
pub const DEFAULT_LINES: usize = 1000;

/// Which kind of content each animation tick paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawMode {
    /// Accumulate single pixels of one color per tick.
    #[default]
    Points,
    /// Clear to white, then draw independently colored lines.
    Lines,
}

impl std::fmt::Display for DrawMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Points => f.write_str("points"),
            Self::Lines => f.write_str("lines"),
        }
    }
}

impl std::str::FromStr for DrawMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "points" | "pixels" => Ok(Self::Points),
            "lines" => Ok(Self::Lines),
            other => Err(format!("unknown draw mode '{other}' (expected points or lines)")),
        }
    }
}

/// Paints randomized content using a [`DistributionRegistry`].
///
/// Coordinates come from the `width`/`height` distributions and channels from
/// `colour`, so the registry must hold all three (see
/// [`DistributionRegistry::for_buffer`]).
#[derive(Debug, Clone)]
pub struct SceneGenerator {
    registry: DistributionRegistry,
    points_per_tick: usize,
    lines_per_tick: usize,
}

impl SceneGenerator {
    /// Create a generator painting the default amounts per tick.
    #[must_use]
    pub fn new(registry: DistributionRegistry) -> Self {
        Self {
            registry,
            points_per_tick: DEFAULT_POINTS,
            lines_per_tick: DEFAULT_LINES,
        }
    }

    /// Set how many points and lines [`paint`](Self::paint) draws.
    #[must_use]
    pub fn with_counts(mut self, points_per_tick: usize, lines_per_tick: usize) -> Self {
        self.points_per_tick = points_per_tick;
        self.lines_per_tick = lines_per_tick;
        self
    }

    /// Paint one tick's worth of content for `mode`.
    pub fn paint(&mut self, fb: &mut FrameBuffer, mode: DrawMode) -> Result<()> {
        match mode {
            DrawMode::Points => self.paint_random_points(fb, self.points_per_tick),
            DrawMode::Lines => self.paint_random_lines(fb, self.lines_per_tick),
        }
    }

    /// Scatter `count` pixels of one randomly chosen color.
    ///
    /// The color is drawn once per call; the buffer is not cleared, so points
    /// accumulate across calls.
    ///
    /// # Errors
    ///
    /// Fails if a standard distribution is missing, or if the registry's
    /// coordinate ranges exceed the buffer. Both are checked before anything
    /// is written, so a failed call leaves `fb` untouched.
    pub fn paint_random_points(&mut self, fb: &mut FrameBuffer, count: usize) -> Result<()> {
        self.check_registry(fb)?;
        let color = self.sample_color()?;
        trace!(count, ?color, "painting points");

        for _ in 0..count {
            let x = self.registry.sample(WIDTH)?;
            let y = self.registry.sample(HEIGHT)?;
            fb.set_pixel(x, y, color.r, color.g, color.b)?;
        }
        Ok(())
    }

    /// Clear to white, then draw `count` lines with random endpoints, each in
    /// its own random color.
    ///
    /// # Errors
    ///
    /// Same conditions as [`paint_random_points`](Self::paint_random_points).
    pub fn paint_random_lines(&mut self, fb: &mut FrameBuffer, count: usize) -> Result<()> {
        self.check_registry(fb)?;
        trace!(count, "painting lines");
        fb.clear(Rgba::WHITE);

        for _ in 0..count {
            let color = self.sample_color()?;
            let x0 = self.registry.sample(WIDTH)?;
            let y0 = self.registry.sample(HEIGHT)?;
            let x1 = self.registry.sample(WIDTH)?;
            let y1 = self.registry.sample(HEIGHT)?;
            draw_line(fb, x0, y0, x1, y1, color.r, color.g, color.b)?;
        }
        Ok(())
    }

    /// Every sample must land inside `fb`: `colour` registered, and the
    /// `width`/`height` ranges within `[0, width)` and `[0, height)`.
    fn check_registry(&self, fb: &FrameBuffer) -> Result<()> {
        if !self.registry.contains(COLOUR) {
            return Err(Error::DistributionNotFound(COLOUR.to_string()));
        }

        let out_of_bounds = |x, y| Error::OutOfBounds {
            x,
            y,
            width: fb.width(),
            height: fb.height(),
        };
        let xs = self
            .registry
            .get(WIDTH)
            .ok_or_else(|| Error::DistributionNotFound(WIDTH.to_string()))?;
        for x in [xs.low(), xs.high()] {
            if !fb.contains(x, 0) {
                return Err(out_of_bounds(x, 0));
            }
        }
        let ys = self
            .registry
            .get(HEIGHT)
            .ok_or_else(|| Error::DistributionNotFound(HEIGHT.to_string()))?;
        for y in [ys.low(), ys.high()] {
            if !fb.contains(0, y) {
                return Err(out_of_bounds(0, y));
            }
        }
        Ok(())
    }

    fn sample_color(&mut self) -> Result<Rgba> {
        let r = self.registry.sample_channel(COLOUR)?;
        let g = self.registry.sample_channel(COLOUR)?;
        let b = self.registry.sample_channel(COLOUR)?;
        Ok(Rgba::rgb(r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn setup(width: u32, height: u32, seed: u64) -> (FrameBuffer, SceneGenerator) {
        let mut fb = FrameBuffer::new(width, height).unwrap();
        fb.clear(Rgba::WHITE);
        let registry = DistributionRegistry::for_buffer(width, height, Some(seed)).unwrap();
        (fb, SceneGenerator::new(registry))
    }

    fn painted(fb: &FrameBuffer) -> Vec<Rgba> {
        (0..i64::from(fb.height()))
            .flat_map(|y| (0..i64::from(fb.width())).map(move |x| (x, y)))
            .filter_map(|(x, y)| fb.get_pixel(x, y))
            .filter(|&c| c != Rgba::WHITE)
            .collect()
    }

    #[test]
    fn test_points_share_one_color() {
        let (mut fb, mut scene) = setup(256, 256, 11);
        scene.paint_random_points(&mut fb, 200).unwrap();

        let colors: HashSet<_> = painted(&fb).into_iter().collect();
        assert_eq!(colors.len(), 1);
    }

    #[test]
    fn test_points_accumulate() {
        let (mut fb, mut scene) = setup(512, 512, 3);
        scene.paint_random_points(&mut fb, 50).unwrap();
        let first = fb.count_not(Rgba::WHITE);
        scene.paint_random_points(&mut fb, 50).unwrap();
        assert!(fb.count_not(Rgba::WHITE) > first);
    }

    #[test]
    fn test_zero_points_is_noop() {
        let (mut fb, mut scene) = setup(8, 8, 0);
        scene.paint_random_points(&mut fb, 0).unwrap();
        assert_eq!(fb.count_not(Rgba::WHITE), 0);
    }

    #[test]
    fn test_lines_clear_first() {
        let (mut fb, mut scene) = setup(64, 64, 5);
        fb.clear(Rgba::BLACK);
        scene.paint_random_lines(&mut fb, 0).unwrap();
        assert_eq!(fb.count_not(Rgba::WHITE), 0);
    }

    #[test]
    fn test_lines_draw_something() {
        let (mut fb, mut scene) = setup(64, 64, 5);
        scene.paint_random_lines(&mut fb, 10).unwrap();
        assert!(fb.count_not(Rgba::WHITE) > 0);
    }

    #[test]
    fn test_deterministic_for_seed() {
        let (mut a, mut scene_a) = setup(128, 96, 77);
        let (mut b, mut scene_b) = setup(128, 96, 77);
        scene_a.paint_random_lines(&mut a, 20).unwrap();
        scene_b.paint_random_lines(&mut b, 20).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_paint_dispatches_on_mode() {
        let (mut fb, scene) = setup(32, 32, 1);
        let mut scene = scene.with_counts(3, 0);

        scene.paint(&mut fb, DrawMode::Points).unwrap();
        assert!(fb.count_not(Rgba::WHITE) > 0);

        scene.paint(&mut fb, DrawMode::Lines).unwrap();
        assert_eq!(fb.count_not(Rgba::WHITE), 0);
    }

    #[test]
    fn test_missing_distribution_surfaces() {
        let mut fb = FrameBuffer::new(8, 8).unwrap();
        let mut scene = SceneGenerator::new(DistributionRegistry::with_seed(1));
        let err = scene.paint_random_points(&mut fb, 1).unwrap_err();
        assert!(matches!(err, Error::DistributionNotFound(ref n) if n == COLOUR));
    }

    #[test]
    fn test_registry_larger_than_buffer_rejected() {
        let mut fb = FrameBuffer::new(4, 4).unwrap();
        fb.clear(Rgba::WHITE);
        let registry = DistributionRegistry::for_buffer(4000, 4000, Some(2)).unwrap();
        let mut scene = SceneGenerator::new(registry);
        let err = scene.paint_random_points(&mut fb, 100).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { x: 3999, y: 0, .. }));
        assert_eq!(fb.count_not(Rgba::WHITE), 0);
    }

    #[test]
    fn test_bad_registry_leaves_lines_buffer_uncleared() {
        let mut fb = FrameBuffer::new(4, 4).unwrap();
        fb.clear(Rgba::BLACK);
        let mut registry = DistributionRegistry::for_buffer(4, 4, Some(2)).unwrap();
        registry.register(HEIGHT, -1, 3).unwrap();
        let mut scene = SceneGenerator::new(registry);

        let err = scene.paint_random_lines(&mut fb, 10).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { x: 0, y: -1, .. }));
        assert_eq!(fb.count_not(Rgba::BLACK), 0);
    }

    #[test]
    fn test_missing_coordinate_distribution_surfaces() {
        let mut fb = FrameBuffer::new(8, 8).unwrap();
        let mut registry = DistributionRegistry::with_seed(1);
        registry.register(COLOUR, 0, 255).unwrap();
        registry.register(WIDTH, 0, 7).unwrap();
        let mut scene = SceneGenerator::new(registry);
        let err = scene.paint_random_points(&mut fb, 1).unwrap_err();
        assert!(matches!(err, Error::DistributionNotFound(ref n) if n == HEIGHT));
    }

    #[test]
    fn test_draw_mode_parse_and_display() {
        assert_eq!("lines".parse::<DrawMode>(), Ok(DrawMode::Lines));
        assert_eq!("Points".parse::<DrawMode>(), Ok(DrawMode::Points));
        assert!("circles".parse::<DrawMode>().is_err());
        assert_eq!(DrawMode::Lines.to_string(), "lines");
    }
}
