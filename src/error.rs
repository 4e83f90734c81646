//! # Error Types
//!
//! This module defines the error type shared by the solver. The puzzle itself
//! is fixed, so errors only arise from invalid configuration, hand-built
//! candidates or attributes that break the permutation invariant, an exhausted restart
//! budget, or a failing report stream.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use zebra_ga::error::{GeneticError, Result};
//!
//! fn check_population(size: usize) -> Result<()> {
//!     if size % 2 != 0 {
//!         return Err(GeneticError::Configuration(format!(
//!             "Population size must be even, got {}",
//!             size
//!         )));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_population(130).is_ok());
//! assert!(check_population(7).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use zebra_ga::error::{GeneticError, OptionExt};
//!
//! fn first_score(scores: &[u32]) -> zebra_ga::error::Result<u32> {
//!     scores.first().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert_eq!(first_score(&[4, 2]).unwrap(), 4);
//! assert!(first_score(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running the solver.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a category row is not a permutation of its values.
    #[error("Invalid permutation: {0}")]
    InvalidPermutation(String),

    /// Error that occurs when a value index lies outside its category's table.
    #[error("Invalid attribute: {0}")]
    InvalidAttribute(String),

    /// Error that occurs when the configured restart budget is exhausted.
    #[error("Maximum attempts reached: {0}")]
    MaxAttemptsReached(String),

    /// Error that occurs when writing the progress report fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for solver operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
