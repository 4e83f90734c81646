//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct represents the configuration options for the
//! evolutionary loop: population size, operator rates, the stagnation limit
//! that triggers a restart, how often progress is reported and how much is
//! written to the report stream.
//!
//! ## Example
//!
//! ```rust
//! use zebra_ga::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // The reference configuration
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_population_size(), 130);
//!
//! // A custom configuration through the builder
//! let custom_options = EvolutionOptions::builder()
//!     .population_size(60)
//!     .mutation_rate(0.1)
//!     .log_level(LogLevel::None)
//!     .build();
//! assert!(custom_options.validate().is_ok());
//! ```
//!
//! ## Fields
//!
//! - `population_size`: Number of candidates per generation. Must be even and non-zero.
//! - `crossover_rate`: Probability that a parent pair is recombined.
//! - `mutation_rate`: Per-cell probability of a swap mutation.
//! - `stagnation_limit`: Generations without a solution before the population is replaced.
//! - `report_interval`: A progress line is written every this many generations.
//! - `log_level`: How much is written to the report stream.
//! - `max_restarts`: Optional bound on stagnation restarts; `None` runs until solved.

use crate::error::{GeneticError, Result};

/// How much the evolution loop writes to its report stream.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Minimal output plus `Best so far:` and the best candidate's table after each progress line.
    Verbose,
    /// Banner, progress lines, restart notices and the solution.
    Minimal,
    /// Nothing is written.
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    population_size: usize,
    crossover_rate: f64,
    mutation_rate: f64,
    stagnation_limit: usize,
    report_interval: usize,
    log_level: LogLevel,
    max_restarts: Option<usize>,
}

impl EvolutionOptions {
    pub fn new(
        population_size: usize,
        crossover_rate: f64,
        mutation_rate: f64,
        log_level: LogLevel,
    ) -> Self {
        Self {
            population_size,
            crossover_rate,
            mutation_rate,
            log_level,
            ..Self::default()
        }
    }

    /// Checks that the options describe a runnable configuration.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the population size is zero or
    /// odd, a rate lies outside `[0, 1]`, or the stagnation limit or report
    /// interval is zero.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        if self.population_size % 2 != 0 {
            return Err(GeneticError::Configuration(format!(
                "Population size must be even for pairwise crossover, got {}",
                self.population_size
            )));
        }

        for (name, rate) in [
            ("Crossover rate", self.crossover_rate),
            ("Mutation rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(GeneticError::Configuration(format!(
                    "{} must be within [0, 1], got {}",
                    name, rate
                )));
            }
        }

        if self.stagnation_limit == 0 {
            return Err(GeneticError::Configuration(
                "Stagnation limit cannot be zero".to_string(),
            ));
        }

        if self.report_interval == 0 {
            return Err(GeneticError::Configuration(
                "Report interval cannot be zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_stagnation_limit(&self) -> usize {
        self.stagnation_limit
    }

    pub fn get_report_interval(&self) -> usize {
        self.report_interval
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    pub fn get_max_restarts(&self) -> Option<usize> {
        self.max_restarts
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the crossover rate.
    pub fn set_crossover_rate(&mut self, crossover_rate: f64) {
        self.crossover_rate = crossover_rate;
    }

    /// Sets the mutation rate.
    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    /// Sets the stagnation limit.
    pub fn set_stagnation_limit(&mut self, stagnation_limit: usize) {
        self.stagnation_limit = stagnation_limit;
    }

    /// Sets the report interval.
    pub fn set_report_interval(&mut self, report_interval: usize) {
        self.report_interval = report_interval;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Sets the restart bound.
    pub fn set_max_restarts(&mut self, max_restarts: Option<usize>) {
        self.max_restarts = max_restarts;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// Unset fields fall back to the defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zebra_ga::evolution::options::{EvolutionOptions, LogLevel};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .population_size(200)
    ///     .crossover_rate(0.8)
    ///     .stagnation_limit(80)
    ///     .report_interval(10)
    ///     .log_level(LogLevel::Verbose)
    ///     .max_restarts(20)
    ///     .build();
    /// assert_eq!(options.get_max_restarts(), Some(20));
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: 130,
            crossover_rate: 0.9,
            mutation_rate: 0.05,
            stagnation_limit: 50,
            report_interval: 5,
            log_level: LogLevel::Minimal,
            max_restarts: None,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    crossover_rate: Option<f64>,
    mutation_rate: Option<f64>,
    stagnation_limit: Option<usize>,
    report_interval: Option<usize>,
    log_level: Option<LogLevel>,
    max_restarts: Option<usize>,
}

impl EvolutionOptionsBuilder {
    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the crossover rate.
    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.crossover_rate = Some(value);
        self
    }

    /// Sets the mutation rate.
    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    /// Sets the stagnation limit.
    pub fn stagnation_limit(mut self, value: usize) -> Self {
        self.stagnation_limit = Some(value);
        self
    }

    /// Sets the report interval.
    pub fn report_interval(mut self, value: usize) -> Self {
        self.report_interval = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Bounds the number of stagnation restarts.
    pub fn max_restarts(mut self, value: usize) -> Self {
        self.max_restarts = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let default = EvolutionOptions::default();
        EvolutionOptions {
            population_size: self.population_size.unwrap_or(default.population_size),
            crossover_rate: self.crossover_rate.unwrap_or(default.crossover_rate),
            mutation_rate: self.mutation_rate.unwrap_or(default.mutation_rate),
            stagnation_limit: self.stagnation_limit.unwrap_or(default.stagnation_limit),
            report_interval: self.report_interval.unwrap_or(default.report_interval),
            log_level: self.log_level.unwrap_or(default.log_level),
            max_restarts: self.max_restarts.or(default.max_restarts),
        }
    }
}
