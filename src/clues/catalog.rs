//! # Puzzle Catalog
//!
//! The fifteen clues of the carpool puzzle. Spots are zero-based here and
//! one-based when displayed.

use super::{Clue, Side};
use crate::domain::{car_colour, car_type, departure, destination, nationality};

pub const PUZZLE_CLUES: [Clue; 15] = [
    Clue::At {
        attribute: nationality::INDIAN_MAN,
        position: 4,
    },
    Clue::At {
        attribute: car_colour::BLACK,
        position: 2,
    },
    Clue::Together(&[
        nationality::BRITISH_COUPLE,
        car_type::TOYOTA_CAMRY,
        departure::SIX_AM,
    ]),
    Clue::Together(&[car_type::HYUNDAI_ACCENT, departure::NINE_AM]),
    Clue::Together(&[car_type::NISSAN_X_TRAIL, destination::SYDNEY]),
    Clue::Together(&[departure::FIVE_AM, destination::NEWCASTLE]),
    Clue::Together(&[car_colour::RED, destination::TAMWORTH]),
    Clue::Together(&[car_colour::BLACK, departure::EIGHT_AM]),
    Clue::Together(&[departure::SIX_AM, destination::TAMWORTH]),
    Clue::Beside {
        anchor: &[destination::GOLD_COAST],
        neighbour: nationality::FRENCH_LADY,
        side: Side::Left,
    },
    Clue::Beside {
        anchor: &[car_colour::GREEN],
        neighbour: nationality::CHINESE_BUSINESSMAN,
        side: Side::Left,
    },
    Clue::Beside {
        anchor: &[car_type::HONDA_CIVIC, departure::SEVEN_AM],
        neighbour: destination::GOLD_COAST,
        side: Side::Left,
    },
    Clue::Beside {
        anchor: &[nationality::INDIAN_MAN],
        neighbour: nationality::CHINESE_BUSINESSMAN,
        side: Side::Left,
    },
    Clue::Beside {
        anchor: &[car_type::HOLDEN_BARINA, car_colour::BLUE],
        neighbour: nationality::BRITISH_COUPLE,
        side: Side::Right,
    },
    Clue::Beside {
        anchor: &[car_colour::WHITE],
        neighbour: departure::SEVEN_AM,
        side: Side::Right,
    },
];
