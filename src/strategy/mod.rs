//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for breeding
//! the next generation from a mating pool of selected parents.
pub mod pairwise;

use std::fmt::Debug;

use crate::{
    error::Result, evolution::options::EvolutionOptions, phenotype::Phenotype,
    rng::RandomNumberGenerator,
};

/// # BreedStrategy
///
/// The `BreedStrategy` trait defines the interface for strategies responsible for breeding
/// new individuals (phenotypes) based on a set of parent individuals and evolution options.
pub trait BreedStrategy<Pheno: Phenotype>
where
    Self: Debug + Clone,
{
    /// Breeds new individuals from the mating pool.
    ///
    /// ## Parameters
    ///
    /// - `parents`: The mating pool, in selection order.
    /// - `evol_options`: Operator rates and population settings.
    /// - `rng`: The random number generator used by the genetic operators.
    ///
    /// ## Errors
    ///
    /// This method can fail if the parents slice is empty or cannot be bred
    /// as the strategy requires.
    fn breed(
        &self,
        parents: &[Pheno],
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Pheno>>;
}

pub use pairwise::PairwiseStrategy;
