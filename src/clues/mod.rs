//! # Clues Module
//!
//! The logical constraints of the puzzle and the challenge that scores a
//! [`Candidate`] against them.
//!
//! ## Overview
//!
//! A [`Clue`] is one of three shapes:
//!
//! - [`Clue::At`]: an attribute sits at a fixed spot.
//! - [`Clue::Together`]: several attributes, one per category, share a spot.
//! - [`Clue::Beside`]: the anchor attributes share a spot and the neighbour
//!   attribute sits directly to one [`Side`] of it. The board does not wrap,
//!   so an anchor on the edge has no neighbour on that side.
//!
//! [`PuzzleChallenge`] awards one point per satisfied clue. With the standard
//! catalog the maximum is 15 and only the solved arrangement reaches it.
//!
//! ## Basic Usage
//!
//! ```rust
//! use zebra_ga::candidate::Candidate;
//! use zebra_ga::clues::PuzzleChallenge;
//! use zebra_ga::evolution::Challenge;
//! use zebra_ga::phenotype::Phenotype;
//! use zebra_ga::rng::RandomNumberGenerator;
//!
//! let challenge = PuzzleChallenge::default();
//! let mut rng = RandomNumberGenerator::from_seed(9);
//! let candidate = Candidate::random(&mut rng);
//!
//! let score = challenge.score(&candidate);
//! assert!(score <= challenge.max_score());
//! assert_eq!(
//!     challenge.violations(&candidate).len() as u32,
//!     challenge.max_score() - score
//! );
//! ```

pub mod catalog;

use std::fmt::{self, Display};

use crate::{
    candidate::Candidate,
    domain::{Attribute, POSITIONS},
    evolution::challenge::{Challenge, Fitness},
};

pub use catalog::PUZZLE_CLUES;

/// Which way a neighbour lies from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The neighbour is at the anchor's spot minus one.
    Left,
    /// The neighbour is at the anchor's spot plus one.
    Right,
}

impl Side {
    /// The neighbouring spot of `position` on this side, if it exists.
    pub fn neighbour_of(self, position: usize) -> Option<usize> {
        match self {
            Side::Left => position.checked_sub(1),
            Side::Right => Some(position + 1).filter(|&p| p < POSITIONS),
        }
    }
}

/// A single logical constraint of the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clue {
    /// `attribute` sits at the zero-based spot `position`.
    At { attribute: Attribute, position: usize },
    /// All attributes sit at the same spot.
    Together(&'static [Attribute]),
    /// The anchor attributes share a spot and `neighbour` sits next to it on `side`.
    Beside {
        anchor: &'static [Attribute],
        neighbour: Attribute,
        side: Side,
    },
}

impl Clue {
    /// Checks this clue against `candidate`. Total for every valid candidate.
    pub fn is_satisfied(&self, candidate: &Candidate) -> bool {
        match *self {
            Clue::At {
                attribute,
                position,
            } => candidate.holds(attribute, position),
            Clue::Together(attributes) => (0..POSITIONS).any(|position| {
                attributes
                    .iter()
                    .all(|&attribute| candidate.holds(attribute, position))
            }),
            Clue::Beside {
                anchor,
                neighbour,
                side,
            } => (0..POSITIONS).any(|position| {
                side.neighbour_of(position)
                    .is_some_and(|next| candidate.holds(neighbour, next))
                    && anchor
                        .iter()
                        .all(|&attribute| candidate.holds(attribute, position))
            }),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, attributes: &[Attribute]) -> fmt::Result {
    for (i, attribute) in attributes.iter().enumerate() {
        if i > 0 {
            let separator = if i + 1 == attributes.len() { " and " } else { ", " };
            f.write_str(separator)?;
        }
        write!(f, "{}", attribute)?;
    }
    Ok(())
}

impl Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Clue::At {
                attribute,
                position,
            } => write!(f, "{} is at Spot {}", attribute, position + 1),
            Clue::Together(attributes) => {
                write_list(f, attributes)?;
                f.write_str(" share a spot")
            }
            Clue::Beside {
                anchor,
                neighbour,
                side,
            } => {
                let direction = match side {
                    Side::Left => "left",
                    Side::Right => "right",
                };
                write!(f, "{} is directly {} of ", neighbour, direction)?;
                write_list(f, anchor)
            }
        }
    }
}

/// Scores candidates by counting satisfied clues.
#[derive(Debug, Clone)]
pub struct PuzzleChallenge {
    clues: Vec<Clue>,
}

impl PuzzleChallenge {
    pub fn new(clues: Vec<Clue>) -> Self {
        Self { clues }
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    /// The clues `candidate` does not satisfy, in catalog order.
    pub fn violations(&self, candidate: &Candidate) -> Vec<&Clue> {
        self.clues
            .iter()
            .filter(|clue| !clue.is_satisfied(candidate))
            .collect()
    }
}

impl Default for PuzzleChallenge {
    fn default() -> Self {
        Self::new(PUZZLE_CLUES.to_vec())
    }
}

impl Challenge<Candidate> for PuzzleChallenge {
    fn score(&self, candidate: &Candidate) -> Fitness {
        self.clues
            .iter()
            .filter(|clue| clue.is_satisfied(candidate))
            .count() as Fitness
    }

    fn max_score(&self) -> Fitness {
        self.clues.len() as Fitness
    }
}
