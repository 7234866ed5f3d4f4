//! Random sources for the no-match fallback

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks an index into the suggestion table
pub trait RandomSource: Send + std::fmt::Debug {
    /// Returns a value in `0..len`. Callers never pass zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Uniform pick backed by an entropy-seeded RNG
#[derive(Debug)]
pub struct ThreadRandom {
    rng: StdRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always picks the same index (wrapped into range)
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedIndex(pub usize);

impl RandomSource for FixedIndex {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0 % len
    }
}
