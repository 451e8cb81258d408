//! Match-scoped random number generation.
//!
//! Turn order, damage rolls and name generation all draw from the one
//! generator owned by the match. It is seeded from configuration, so a match
//! replays identically given the same seed and the same decisions.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded generator threaded explicitly into everything that rolls dice.
#[derive(Debug, Clone)]
pub struct MatchRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl MatchRng {
    /// Create a generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a generator with a seed drawn from the OS.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform value in `0..n`. Returns 0 if `n` is 0.
    pub fn below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Uniform value in `[min, max]`. Returns `min` if the range is empty.
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    /// Roll a die with N sides (1-N inclusive). Returns 0 for N < 1.
    pub fn roll_die(&mut self, sides: i64) -> i64 {
        if sides < 1 {
            return 0;
        }
        self.range(1, sides)
    }

    /// True with the given percentage (clamped to 0..=100).
    pub fn chance(&mut self, percent: u32) -> bool {
        self.rng.gen_range(0..100) < percent.min(100)
    }

    /// Uniform in-place shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Uniformly chosen element, `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}
