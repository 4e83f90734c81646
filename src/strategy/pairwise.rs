//! # PairwiseStrategy
//!
//! The `PairwiseStrategy` struct breeds the mating pool in consecutive,
//! non-overlapping pairs (0 & 1, 2 & 3, ...). Each pair is recombined with
//! probability `crossover_rate` (otherwise copied), and both children are then
//! mutated. The pool size is preserved, so it has to be even.
use super::BreedStrategy;
use crate::{
    error::{GeneticError, Result},
    evolution::options::EvolutionOptions,
    phenotype::Phenotype,
    rng::RandomNumberGenerator,
};

#[derive(Debug, Clone, Default)]
pub struct PairwiseStrategy;

impl PairwiseStrategy {
    pub fn new() -> Self {
        Self
    }

    /// Produces the two children of one parent pair.
    pub fn breed_pair<Pheno>(
        &self,
        first: &Pheno,
        second: &Pheno,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> (Pheno, Pheno)
    where
        Pheno: Phenotype,
    {
        let (mut child_1, mut child_2) = if rng.gen_probability() < evol_options.get_crossover_rate()
        {
            first.crossover(second, rng)
        } else {
            (first.clone(), second.clone())
        };

        child_1.mutate(evol_options.get_mutation_rate(), rng);
        child_2.mutate(evol_options.get_mutation_rate(), rng);
        (child_1, child_2)
    }
}

impl<Pheno> BreedStrategy<Pheno> for PairwiseStrategy
where
    Pheno: Phenotype,
{
    /// ## Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` if the pool is empty and
    /// `GeneticError::Configuration` if it has an odd number of parents.
    fn breed(
        &self,
        parents: &[Pheno],
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Pheno>> {
        if parents.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        if parents.len() % 2 != 0 {
            return Err(GeneticError::Configuration(format!(
                "Mating pool must have an even size, got {}",
                parents.len()
            )));
        }

        let mut children = Vec::with_capacity(parents.len());
        for pair in parents.chunks_exact(2) {
            let (child_1, child_2) = self.breed_pair(&pair[0], &pair[1], evol_options, rng);
            children.push(child_1);
            children.push(child_2);
        }

        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Candidate;

    fn options(crossover_rate: f64, mutation_rate: f64) -> EvolutionOptions {
        EvolutionOptions::builder()
            .crossover_rate(crossover_rate)
            .mutation_rate(mutation_rate)
            .build()
    }

    fn pool(n: usize, rng: &mut RandomNumberGenerator) -> Vec<Candidate> {
        (0..n).map(|_| Candidate::random(rng)).collect()
    }

    #[test]
    fn test_breed_keeps_pool_size() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let parents = pool(130, &mut rng);

        let children = PairwiseStrategy::new()
            .breed(&parents, &EvolutionOptions::default(), &mut rng)
            .unwrap();

        assert_eq!(children.len(), 130);
        assert!(children.iter().all(Candidate::is_valid));
    }

    #[test]
    fn test_no_crossover_no_mutation_copies_parents() {
        let mut rng = RandomNumberGenerator::from_seed(12);
        let parents = pool(10, &mut rng);

        let children = PairwiseStrategy::new()
            .breed(&parents, &options(0.0, 0.0), &mut rng)
            .unwrap();

        assert_eq!(children, parents);
    }

    #[test]
    fn test_full_crossover_recombines_rows() {
        let mut rng = RandomNumberGenerator::from_seed(13);
        let first = Candidate::random(&mut rng);
        let second = Candidate::random(&mut rng);
        let strategy = PairwiseStrategy::new();

        for _ in 0..50 {
            let (a, b) = strategy.breed_pair(&first, &second, &options(1.0, 0.0), &mut rng);
            assert_eq!(a.rows()[0], first.rows()[0]);
            assert_eq!(a.rows()[4], second.rows()[4]);
            assert_eq!(b.rows()[0], second.rows()[0]);
            assert_eq!(b.rows()[4], first.rows()[4]);
            // Rows are exchanged, never invented.
            for row in 0..5 {
                assert!(a.rows()[row] == first.rows()[row] || a.rows()[row] == second.rows()[row]);
                assert!(b.rows()[row] == first.rows()[row] || b.rows()[row] == second.rows()[row]);
            }
        }
    }

    #[test]
    fn test_breed_rejects_odd_pool() {
        let mut rng = RandomNumberGenerator::from_seed(14);
        let parents = pool(3, &mut rng);

        let result = PairwiseStrategy::new().breed(&parents, &EvolutionOptions::default(), &mut rng);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_breed_empty_parents() {
        let mut rng = RandomNumberGenerator::new();
        let parents: Vec<Candidate> = Vec::new();

        let result = PairwiseStrategy::new().breed(&parents, &EvolutionOptions::default(), &mut rng);
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }
}
