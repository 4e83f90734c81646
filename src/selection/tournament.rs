use crate::error::{GeneticError, OptionExt, Result};
use crate::evolution::challenge::Fitness;
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects individuals through tournament selection.
///
/// Each tournament draws `tournament_size` entrants uniformly at random, with
/// replacement. The first entrant is the incumbent; a later entrant takes over
/// only when its fitness is strictly higher, so ties keep the earlier draw.
///
/// Tournament selection provides a balance between exploration and exploitation:
/// - Smaller tournament sizes lead to more exploration (more random selection)
/// - Larger tournament sizes lead to more exploitation (more focus on the best individuals)
///
/// # Examples
///
/// ```
/// use zebra_ga::selection::TournamentSelection;
///
/// // Fitness of the entrants in draw order.
/// let fitness = [2, 9, 5];
/// assert_eq!(TournamentSelection::winner(&fitness, [0, 1, 2]), Some(1));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// A tournament size of 1 is equivalent to random selection.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn with_tournament_size(mut self, tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        self.tournament_size = tournament_size;
        Ok(self)
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Decides a tournament between already drawn entrants.
    ///
    /// Returns `None` when there are no entrants or an entrant has no fitness.
    pub fn winner<I>(fitness: &[Fitness], entrants: I) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut entrants = entrants.into_iter();
        let mut best_idx = entrants.next()?;
        let mut best_score = *fitness.get(best_idx)?;

        for idx in entrants {
            let score = *fitness.get(idx)?;
            if score > best_score {
                best_idx = idx;
                best_score = score;
            }
        }

        Some(best_idx)
    }

    /// Runs a single tournament and returns the index of the winner.
    fn run_tournament(&self, fitness: &[Fitness], rng: &mut RandomNumberGenerator) -> Result<usize> {
        let entrants: Vec<usize> = (0..self.tournament_size)
            .map(|_| rng.gen_index(fitness.len()))
            .collect();

        Self::winner(fitness, entrants).ok_or_else_genetic(|| {
            GeneticError::Configuration("Tournament has no valid entrants".to_string())
        })
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self { tournament_size: 3 }
    }
}

impl<P> SelectionStrategy<P> for TournamentSelection
where
    P: Phenotype,
{
    fn select(
        &self,
        population: &[P],
        fitness: &[Fitness],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<P>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        if fitness.len() != population.len() {
            return Err(GeneticError::Configuration(format!(
                "Fitness vector length ({}) doesn't match population length ({})",
                fitness.len(),
                population.len()
            )));
        }

        let mut selected = Vec::with_capacity(num_to_select);
        for _ in 0..num_to_select {
            let winner_idx = self.run_tournament(fitness, rng)?;
            selected.push(population[winner_idx].clone());
        }

        Ok(selected)
    }
}
