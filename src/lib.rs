pub mod candidate;
pub mod clues;
pub mod domain;
pub mod error;
pub mod evolution;
pub mod phenotype;
pub mod rng;
pub mod selection;
pub mod strategy;

use candidate::Candidate;
use clues::PuzzleChallenge;
use evolution::EvolutionLauncher;
use selection::TournamentSelection;
use strategy::PairwiseStrategy;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};

/// The launcher wired for the carpool puzzle.
pub type PuzzleSolver =
    EvolutionLauncher<Candidate, PairwiseStrategy, TournamentSelection, PuzzleChallenge>;

/// Pairwise breeding, tournaments of three and the fifteen puzzle clues.
pub fn puzzle_solver() -> PuzzleSolver {
    EvolutionLauncher::new(
        PairwiseStrategy::new(),
        TournamentSelection::default(),
        PuzzleChallenge::default(),
    )
}
