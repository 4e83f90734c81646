//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness for a
//! run. Every draw (shuffles, tournament entrants, crossover cuts and mutation
//! trials) goes through it in order, so a seeded generator reproduces a run
//! exactly.
//!
//! ## Example
//!
//! ```rust
//! use zebra_ga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(100);
//! let index = rng.gen_index(130);
//! assert!(index < 130);
//!
//! let p = rng.gen_probability();
//! assert!((0.0..1.0).contains(&p));
//! ```

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` that provides the draws the
/// genetic operators need.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns a uniform sample from `[0, 1)`, used for probability trials.
    pub fn gen_probability(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Returns a uniform index in `0..upper`.
    ///
    /// # Panics
    ///
    /// Panics if `upper` is zero.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    /// Returns a uniform value in `from..to`.
    ///
    /// # Panics
    ///
    /// Panics if the range is empty.
    pub fn gen_between(&mut self, from: usize, to: usize) -> usize {
        self.rng.gen_range(from..to)
    }

    /// Shuffles `values` in place; every permutation is equally likely.
    pub fn shuffle<T>(&mut self, values: &mut [T]) {
        values.shuffle(&mut self.rng);
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
