use std::{env, io, process::ExitCode};

use tracing_subscriber::EnvFilter;
use zebra_ga::{evolution::EvolutionOptions, puzzle_solver, rng::RandomNumberGenerator};

/// Fixes the random seed for a reproducible run.
const SEED_VAR: &str = "ZEBRA_GA_SEED";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut rng = match env::var(SEED_VAR) {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(seed) => {
                tracing::info!(seed, "Using fixed seed");
                RandomNumberGenerator::from_seed(seed)
            }
            Err(err) => {
                tracing::error!(value = %raw, error = %err, "Invalid {}", SEED_VAR);
                return ExitCode::FAILURE;
            }
        },
        Err(_) => RandomNumberGenerator::new(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match puzzle_solver().evolve(&EvolutionOptions::default(), &mut rng, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Evolution failed");
            ExitCode::FAILURE
        }
    }
}
