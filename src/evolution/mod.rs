pub mod challenge;
pub mod launcher;
pub mod options;

pub use challenge::{Challenge, Fitness};
pub use launcher::{Evolution, EvolutionLauncher, EvolutionResult, GenerationOutcome};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
