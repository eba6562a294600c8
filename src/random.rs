//! Seedable pseudo-random integers addressed by distribution name.
//!
//! A [`DistributionRegistry`] owns one generator and a table of named
//! inclusive integer ranges. Every [`sample`](DistributionRegistry::sample)
//! advances the shared generator, so the sequence produced for a given seed
//! depends on the order of queries, not just their names.

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{Error, Result};

/// Distribution over buffer x coordinates.
pub const WIDTH: &str = "width";
/// Distribution over buffer y coordinates.
pub const HEIGHT: &str = "height";
/// Distribution over one 8-bit color channel.
pub const COLOUR: &str = "colour";

/// SplitMix64 generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Create a generator from a seed. Equal seeds give equal sequences.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next 64 random bits.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform value in `0..span`, without modulo bias. `span` must be non-zero.
    fn below(&mut self, span: u64) -> u64 {
        // Reject the short tail so every residue is equally likely.
        let zone = u64::MAX - (u64::MAX - span + 1) % span;
        loop {
            let v = self.next_u64();
            if v <= zone {
                return v % span;
            }
        }
    }
}

/// Uniform integer distribution over `[low, high]` (both inclusive).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniformInt {
    low: i64,
    high: i64,
}

impl UniformInt {
    /// Create a distribution. Returns `None` when `low > high`.
    #[must_use]
    pub const fn new(low: i64, high: i64) -> Option<Self> {
        if low > high {
            None
        } else {
            Some(Self { low, high })
        }
    }

    /// Lower bound (inclusive).
    #[must_use]
    pub const fn low(&self) -> i64 {
        self.low
    }

    /// Upper bound (inclusive).
    #[must_use]
    pub const fn high(&self) -> i64 {
        self.high
    }

    /// Draw one value using `rng`.
    pub fn sample(&self, rng: &mut Rng64) -> i64 {
        let span = self.high.wrapping_sub(self.low) as u64;
        if span == u64::MAX {
            return rng.next_u64() as i64;
        }
        self.low.wrapping_add(rng.below(span + 1) as i64)
    }
}

/// Named uniform distributions sharing one generator.
#[derive(Clone, Debug)]
pub struct DistributionRegistry {
    rng: Rng64,
    seed: u64,
    distributions: HashMap<String, UniformInt>,
}

impl DistributionRegistry {
    /// Empty registry with a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Rng64::new(seed),
            seed,
            distributions: HashMap::new(),
        }
    }

    /// Empty registry seeded from the system clock.
    #[must_use]
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x5EED);
        Self::with_seed(nanos)
    }

    /// Registry holding the standard `width`, `height` and `colour`
    /// distributions for a `width x height` buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero.
    pub fn for_buffer(width: u32, height: u32, seed: Option<u64>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let mut registry = seed.map_or_else(Self::from_entropy, Self::with_seed);
        registry.register(WIDTH, 0, i64::from(width) - 1)?;
        registry.register(HEIGHT, 0, i64::from(height) - 1)?;
        registry.register(COLOUR, 0, 255)?;
        Ok(registry)
    }

    /// Seed the generator was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Register (or replace) a distribution over `[low, high]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `low > high`.
    pub fn register(&mut self, name: impl Into<String>, low: i64, high: i64) -> Result<()> {
        let name = name.into();
        let Some(dist) = UniformInt::new(low, high) else {
            return Err(Error::InvalidRange { name, low, high });
        };
        self.distributions.insert(name, dist);
        Ok(())
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.distributions.contains_key(name)
    }

    /// Look up a registered distribution.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<UniformInt> {
        self.distributions.get(name).copied()
    }

    /// Draw the next value from the named distribution.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DistributionNotFound`] if `name` was never registered.
    /// The generator is not advanced in that case.
    pub fn sample(&mut self, name: &str) -> Result<i64> {
        let dist = self
            .distributions
            .get(name)
            .ok_or_else(|| Error::DistributionNotFound(name.to_string()))?;
        Ok(dist.sample(&mut self.rng))
    }

    /// Draw a value from the named distribution as a color channel.
    ///
    /// Values outside `0..=255` saturate.
    pub fn sample_channel(&mut self, name: &str) -> Result<u8> {
        Ok(self.sample(name)?.clamp(0, 255) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut a = Rng64::new(42);
        let mut b = Rng64::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_rng_seeds_differ() {
        let mut a = Rng64::new(1);
        let mut b = Rng64::new(2);
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn test_uniform_rejects_empty_range() {
        assert!(UniformInt::new(5, 4).is_none());
        assert!(UniformInt::new(4, 4).is_some());
    }

    #[test]
    fn test_uniform_single_value() {
        let dist = UniformInt::new(7, 7).unwrap();
        let mut rng = Rng64::new(0);
        for _ in 0..20 {
            assert_eq!(dist.sample(&mut rng), 7);
        }
    }

    #[test]
    fn test_uniform_full_range() {
        let dist = UniformInt::new(i64::MIN, i64::MAX).unwrap();
        let mut rng = Rng64::new(3);
        // Must not panic or loop.
        let _ = dist.sample(&mut rng);
    }

    #[test]
    fn test_uniform_covers_small_range() {
        let dist = UniformInt::new(0, 3).unwrap();
        let mut rng = Rng64::new(99);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[dist.sample(&mut rng) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_registry_standard_distributions() {
        let reg = DistributionRegistry::for_buffer(1024, 720, Some(1)).unwrap();
        assert_eq!(reg.get(WIDTH), UniformInt::new(0, 1023));
        assert_eq!(reg.get(HEIGHT), UniformInt::new(0, 719));
        assert_eq!(reg.get(COLOUR), UniformInt::new(0, 255));
        assert!(!reg.contains("image_offset"));
    }

    #[test]
    fn test_registry_unknown_name() {
        let mut reg = DistributionRegistry::with_seed(5);
        let err = reg.sample("image_offset").unwrap_err();
        assert!(matches!(err, Error::DistributionNotFound(ref n) if n == "image_offset"));
    }

    #[test]
    fn test_registry_unknown_name_does_not_advance() {
        let mut a = DistributionRegistry::for_buffer(10, 10, Some(8)).unwrap();
        let mut b = a.clone();
        let _ = a.sample("missing");
        assert_eq!(a.sample(WIDTH).unwrap(), b.sample(WIDTH).unwrap());
    }

    #[test]
    fn test_registry_invalid_range() {
        let mut reg = DistributionRegistry::with_seed(5);
        let err = reg.register("bad", 10, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidRange { low: 10, high: 0, .. }));
    }

    #[test]
    fn test_registry_replace() {
        let mut reg = DistributionRegistry::with_seed(5);
        reg.register("n", 0, 100).unwrap();
        reg.register("n", 3, 3).unwrap();
        assert_eq!(reg.sample("n").unwrap(), 3);
    }

    #[test]
    fn test_registry_zero_dimensions() {
        assert!(DistributionRegistry::for_buffer(0, 10, None).is_err());
    }

    #[test]
    fn test_registry_seed_reproducible() {
        let mut a = DistributionRegistry::for_buffer(640, 480, Some(1234)).unwrap();
        let mut b = DistributionRegistry::for_buffer(640, 480, Some(1234)).unwrap();
        assert_eq!(a.seed(), 1234);
        for name in [WIDTH, HEIGHT, COLOUR, WIDTH] {
            assert_eq!(a.sample(name).unwrap(), b.sample(name).unwrap());
        }
    }

    #[test]
    fn test_sample_channel_saturates() {
        let mut reg = DistributionRegistry::with_seed(0);
        reg.register("hot", 300, 300).unwrap();
        reg.register("cold", -5, -5).unwrap();
        assert_eq!(reg.sample_channel("hot").unwrap(), 255);
        assert_eq!(reg.sample_channel("cold").unwrap(), 0);
    }
}
