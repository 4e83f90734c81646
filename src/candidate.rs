//! # Candidate
//!
//! A `Candidate` is one complete trial assignment of the puzzle: a 5×5 grid
//! whose rows are the categories (in `Category::ALL` order) and whose columns
//! are the parking spots. Each cell holds a value index into the category's
//! table, and every row is a permutation of `0..VALUES`.
//!
//! The genetic operators never break that invariant: crossover exchanges whole
//! rows and mutation swaps two cells of the same row.
//!
//! ## Example
//!
//! ```rust
//! use zebra_ga::candidate::Candidate;
//! use zebra_ga::phenotype::Phenotype;
//! use zebra_ga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let mut candidate = Candidate::random(&mut rng);
//! candidate.mutate(1.0, &mut rng);
//! assert!(candidate.is_valid());
//! ```

use std::fmt;

use crate::{
    domain::{Attribute, Category, CATEGORIES, POSITIONS, VALUES},
    error::{GeneticError, Result},
    phenotype::Phenotype,
    rng::RandomNumberGenerator,
};

/// One row per category, one column per spot.
pub type Grid = [[u8; POSITIONS]; CATEGORIES];

const IDENTITY_ROW: [u8; POSITIONS] = [0, 1, 2, 3, 4];

/// Serialized as its bare grid; deserialization goes through
/// [`Candidate::from_rows`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Grid", into = "Grid"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    rows: Grid,
}

impl Candidate {
    /// Builds a candidate from explicit rows, rejecting any row that is not a
    /// permutation of its category's values.
    pub fn from_rows(rows: Grid) -> Result<Self> {
        for (category, row) in Category::ALL.iter().zip(rows.iter()) {
            if let Some(problem) = permutation_problem(row) {
                return Err(GeneticError::InvalidPermutation(format!(
                    "{} row {:?} {}",
                    category, row, problem
                )));
            }
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &Grid {
        &self.rows
    }

    pub fn row(&self, category: Category) -> &[u8; POSITIONS] {
        &self.rows[category.index()]
    }

    /// The attribute of `category` parked at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not below `POSITIONS`.
    pub fn attribute_at(&self, category: Category, position: usize) -> Attribute {
        Attribute::new(category, self.rows[category.index()][position])
    }

    /// Whether `attribute` sits at `position`. Out-of-range positions are
    /// never occupied.
    pub fn holds(&self, attribute: Attribute, position: usize) -> bool {
        self.rows[attribute.category().index()]
            .get(position)
            .is_some_and(|&value| value == attribute.value())
    }

    /// The spot holding `attribute`, if any.
    pub fn position_of(&self, attribute: Attribute) -> Option<usize> {
        self.rows[attribute.category().index()]
            .iter()
            .position(|&value| value == attribute.value())
    }

    /// Checks the permutation invariant on every row.
    pub fn is_valid(&self) -> bool {
        self.rows.iter().all(|row| permutation_problem(row).is_none())
    }

    /// Row-level recombination at a fixed cut.
    ///
    /// The first child keeps `self`'s rows before `cut` and takes `other`'s
    /// rows from `cut` onwards; the second child is the complement.
    ///
    /// # Panics
    ///
    /// Panics if `cut` is greater than `CATEGORIES`.
    pub fn crossover_at(&self, other: &Self, cut: usize) -> (Self, Self) {
        let mut first = self.clone();
        let mut second = other.clone();
        first.rows[cut..].copy_from_slice(&other.rows[cut..]);
        second.rows[cut..].copy_from_slice(&self.rows[cut..]);
        (first, second)
    }
}

impl TryFrom<Grid> for Candidate {
    type Error = GeneticError;

    fn try_from(rows: Grid) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Candidate> for Grid {
    fn from(candidate: Candidate) -> Self {
        candidate.rows
    }
}

fn permutation_problem(row: &[u8; POSITIONS]) -> Option<String> {
    let mut seen = [false; VALUES];
    for &value in row {
        match seen.get_mut(value as usize) {
            None => return Some(format!("contains out-of-range value {}", value)),
            Some(true) => return Some(format!("repeats value {}", value)),
            Some(slot) => *slot = true,
        }
    }
    None
}

impl Phenotype for Candidate {
    fn random(rng: &mut RandomNumberGenerator) -> Self {
        let mut rows = [IDENTITY_ROW; CATEGORIES];
        for row in rows.iter_mut() {
            rng.shuffle(row);
        }
        Self { rows }
    }

    /// Cuts strictly inside the row range, so each child always takes its
    /// first row from one parent and its last row from the other.
    fn crossover(&self, other: &Self, rng: &mut RandomNumberGenerator) -> (Self, Self) {
        let cut = rng.gen_between(1, CATEGORIES - 1);
        self.crossover_at(other, cut)
    }

    /// Swap mutation. The swap target is drawn over the whole row and may be
    /// the source cell itself.
    fn mutate(&mut self, rate: f64, rng: &mut RandomNumberGenerator) {
        for position in 0..POSITIONS {
            for row in self.rows.iter_mut() {
                if rng.gen_probability() < rate {
                    let target = rng.gen_index(POSITIONS);
                    row.swap(position, target);
                }
            }
        }
    }
}

/// Renders the grid as a table: one labeled row per category, one
/// `Spot N` column per position.
impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = Category::ALL
            .iter()
            .map(|c| c.label().len())
            .max()
            .unwrap_or(0);

        let headers: Vec<String> = (1..=POSITIONS).map(|spot| format!("Spot {}", spot)).collect();
        let widths: Vec<usize> = (0..POSITIONS)
            .map(|position| {
                Category::ALL
                    .iter()
                    .map(|&c| self.attribute_at(c, position).name().len())
                    .chain(std::iter::once(headers[position].len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut line = format!("{:<label_width$}", "");
        for (header, width) in headers.iter().zip(&widths) {
            line.push_str(&format!("  {:<width$}", header, width = width));
        }
        writeln!(f, "{}", line.trim_end())?;

        for category in Category::ALL {
            let mut line = format!("{:<label_width$}", category.label());
            for (position, width) in widths.iter().enumerate() {
                let name = self.attribute_at(category, position).name();
                line.push_str(&format!("  {:<width$}", name, width = width));
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
