//! # Phenotype Trait
//!
//! The `Phenotype` trait defines the interface for types that represent individuals
//! in the evolutionary loop: random construction, crossover and mutation.
//!
//! The breeding strategy decides *whether* an operator fires (crossover rate);
//! the phenotype decides *how* it recombines. Mutation receives its per-gene
//! rate because the trials happen inside the individual.
//!
//! ## Implementing the Trait
//!
//! ```rust
//! use zebra_ga::phenotype::Phenotype;
//! use zebra_ga::rng::RandomNumberGenerator;
//!
//! #[derive(Clone, Debug)]
//! struct Bits {
//!     genes: [bool; 8],
//! }
//!
//! impl Phenotype for Bits {
//!     fn random(rng: &mut RandomNumberGenerator) -> Self {
//!         let mut genes = [false; 8];
//!         genes.iter_mut().for_each(|g| *g = rng.gen_probability() < 0.5);
//!         Self { genes }
//!     }
//!
//!     fn crossover(&self, other: &Self, rng: &mut RandomNumberGenerator) -> (Self, Self) {
//!         let cut = rng.gen_between(1, 8);
//!         let mut first = self.clone();
//!         let mut second = other.clone();
//!         first.genes[cut..].copy_from_slice(&other.genes[cut..]);
//!         second.genes[cut..].copy_from_slice(&self.genes[cut..]);
//!         (first, second)
//!     }
//!
//!     fn mutate(&mut self, rate: f64, rng: &mut RandomNumberGenerator) {
//!         for gene in self.genes.iter_mut() {
//!             if rng.gen_probability() < rate {
//!                 *gene = !*gene;
//!             }
//!         }
//!     }
//! }
//! ```

use std::fmt::Debug;

use crate::rng::RandomNumberGenerator;

/// Trait for types that represent individuals in an evolutionary algorithm.
///
/// Types implementing this trait must also implement `Clone` and `Debug`:
/// the best-ever individual is cloned out of the population and reported.
pub trait Phenotype: Clone + Debug {
    /// Builds a fresh, uniformly random individual.
    fn random(rng: &mut RandomNumberGenerator) -> Self;

    /// Recombines `self` with `other` and returns the two complementary children.
    ///
    /// Parents are left untouched.
    fn crossover(&self, other: &Self, rng: &mut RandomNumberGenerator) -> (Self, Self);

    /// Applies mutation in place; each gene is tried with probability `rate`.
    fn mutate(&mut self, rate: f64, rng: &mut RandomNumberGenerator);
}
