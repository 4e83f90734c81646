//! # Attribute Domain
//!
//! The fixed catalog of the puzzle: five categories with five values each.
//! Candidates store value indices into these tables, so every category row is
//! a permutation of `0..VALUES`.
//!
//! ## Example
//!
//! ```rust
//! use zebra_ga::domain::{car_colour, Category};
//!
//! assert_eq!(Category::CarColour.label(), "Car Colour");
//! assert_eq!(car_colour::BLACK.name(), "black");
//! assert_eq!(car_colour::BLACK.category(), Category::CarColour);
//! ```

use std::fmt;

use crate::error::{GeneticError, Result};

/// Number of attribute categories (rows of a candidate).
pub const CATEGORIES: usize = 5;

/// Number of parking spots (columns of a candidate).
pub const POSITIONS: usize = 5;

/// Number of values per category. Every category row is a permutation, so this
/// always equals `POSITIONS`.
pub const VALUES: usize = POSITIONS;

/// One of the five attribute dimensions of the puzzle.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Nationality,
    CarType,
    CarColour,
    Departure,
    Destination,
}

impl Category {
    /// All categories in row order.
    pub const ALL: [Category; CATEGORIES] = [
        Category::Nationality,
        Category::CarType,
        Category::CarColour,
        Category::Departure,
        Category::Destination,
    ];

    /// Row index of this category inside a candidate.
    pub const fn index(self) -> usize {
        match self {
            Category::Nationality => 0,
            Category::CarType => 1,
            Category::CarColour => 2,
            Category::Departure => 3,
            Category::Destination => 4,
        }
    }

    /// Row label used when rendering a solution.
    pub const fn label(self) -> &'static str {
        match self {
            Category::Nationality => "Nationality",
            Category::CarType => "Car Type",
            Category::CarColour => "Car Colour",
            Category::Departure => "Departure",
            Category::Destination => "Destination",
        }
    }

    /// The closed value set of this category, indexed by value index.
    pub const fn values(self) -> &'static [&'static str; VALUES] {
        match self {
            Category::Nationality => &[
                "British couple",
                "Canadian couple",
                "Chinese businessman",
                "French lady",
                "Indian man",
            ],
            Category::CarType => &[
                "Holden Barina",
                "Honda Civic",
                "Hyundai Accent",
                "Nissan X-Trail",
                "Toyota Camry",
            ],
            Category::CarColour => &["black", "blue", "green", "red", "white"],
            Category::Departure => &["5:00am", "6:00am", "7:00am", "8:00am", "9:00am"],
            Category::Destination => &[
                "Gold Coast",
                "Newcastle",
                "Port Macquarie",
                "Sydney",
                "Tamworth",
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single value of a single category, e.g. the colour `red`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawAttribute"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attribute {
    category: Category,
    value: u8,
}

impl Attribute {
    /// Creates an attribute from a category and a value index.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not below `VALUES`; in const contexts this is a
    /// compile error.
    pub const fn new(category: Category, value: u8) -> Self {
        assert!((value as usize) < VALUES, "value index out of range");
        Self { category, value }
    }

    /// Checked counterpart of [`Attribute::new`].
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidAttribute` if `value` is not below `VALUES`.
    pub fn try_new(category: Category, value: u8) -> Result<Self> {
        if (value as usize) >= VALUES {
            return Err(GeneticError::InvalidAttribute(format!(
                "{} has no value {}",
                category, value
            )));
        }
        Ok(Self { category, value })
    }

    pub const fn category(&self) -> Category {
        self.category
    }

    /// Index of this value inside its category's table.
    pub const fn value(&self) -> u8 {
        self.value
    }

    pub fn name(&self) -> &'static str {
        self.category.values()[self.value as usize]
    }
}

/// Unchecked wire form of an `Attribute`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawAttribute {
    category: Category,
    value: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawAttribute> for Attribute {
    type Error = GeneticError;

    fn try_from(raw: RawAttribute) -> Result<Self> {
        Self::try_new(raw.category, raw.value)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub mod nationality {
    use super::{Attribute, Category::Nationality};

    pub const BRITISH_COUPLE: Attribute = Attribute::new(Nationality, 0);
    pub const CANADIAN_COUPLE: Attribute = Attribute::new(Nationality, 1);
    pub const CHINESE_BUSINESSMAN: Attribute = Attribute::new(Nationality, 2);
    pub const FRENCH_LADY: Attribute = Attribute::new(Nationality, 3);
    pub const INDIAN_MAN: Attribute = Attribute::new(Nationality, 4);
}

pub mod car_type {
    use super::{Attribute, Category::CarType};

    pub const HOLDEN_BARINA: Attribute = Attribute::new(CarType, 0);
    pub const HONDA_CIVIC: Attribute = Attribute::new(CarType, 1);
    pub const HYUNDAI_ACCENT: Attribute = Attribute::new(CarType, 2);
    pub const NISSAN_X_TRAIL: Attribute = Attribute::new(CarType, 3);
    pub const TOYOTA_CAMRY: Attribute = Attribute::new(CarType, 4);
}

pub mod car_colour {
    use super::{Attribute, Category::CarColour};

    pub const BLACK: Attribute = Attribute::new(CarColour, 0);
    pub const BLUE: Attribute = Attribute::new(CarColour, 1);
    pub const GREEN: Attribute = Attribute::new(CarColour, 2);
    pub const RED: Attribute = Attribute::new(CarColour, 3);
    pub const WHITE: Attribute = Attribute::new(CarColour, 4);
}

pub mod departure {
    use super::{Attribute, Category::Departure};

    pub const FIVE_AM: Attribute = Attribute::new(Departure, 0);
    pub const SIX_AM: Attribute = Attribute::new(Departure, 1);
    pub const SEVEN_AM: Attribute = Attribute::new(Departure, 2);
    pub const EIGHT_AM: Attribute = Attribute::new(Departure, 3);
    pub const NINE_AM: Attribute = Attribute::new(Departure, 4);
}

pub mod destination {
    use super::{Attribute, Category::Destination};

    pub const GOLD_COAST: Attribute = Attribute::new(Destination, 0);
    pub const NEWCASTLE: Attribute = Attribute::new(Destination, 1);
    pub const PORT_MACQUARIE: Attribute = Attribute::new(Destination, 2);
    pub const SYDNEY: Attribute = Attribute::new(Destination, 3);
    pub const TAMWORTH: Attribute = Attribute::new(Destination, 4);
}
