use std::fmt::Debug;

use crate::error::Result;
use crate::evolution::challenge::Fitness;
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;

/// Trait for selection strategies in genetic algorithms.
///
/// Selection strategies build the mating pool: they choose individuals from a
/// population based on their fitness scores, returning clones so the
/// population itself is never modified.
///
/// # Examples
///
/// ```
/// use zebra_ga::candidate::Candidate;
/// use zebra_ga::error::Result;
/// use zebra_ga::phenotype::Phenotype;
/// use zebra_ga::rng::RandomNumberGenerator;
/// use zebra_ga::selection::{SelectionStrategy, TournamentSelection};
///
/// fn main() -> Result<()> {
///     let mut rng = RandomNumberGenerator::from_seed(4);
///     let population: Vec<Candidate> = (0..4).map(|_| Candidate::random(&mut rng)).collect();
///     let fitness = vec![3, 7, 1, 5];
///
///     let selection = TournamentSelection::default();
///     let pool = selection.select(&population, &fitness, 4, &mut rng)?;
///
///     assert_eq!(pool.len(), 4);
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy<P>: Debug
where
    P: Phenotype,
{
    /// Selects `num_to_select` individuals from the population based on their fitness scores.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The fitness vector length doesn't match the population length
    fn select(
        &self,
        population: &[P],
        fitness: &[Fitness],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<P>>;
}
