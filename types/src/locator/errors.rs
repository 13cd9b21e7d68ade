use std::{error::Error, fmt};

use super::consts::LOCATOR_LEN;

/// The string is not a 6-character Maidenhead locator
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InvalidGridSquare {
    /// Wrong number of characters
    Length(usize),
    /// The character is not allowed at the (1-based) position
    Character {
        /// 1-based position of the character in the locator
        position: usize,
        /// The offending character
        found: char,
    },
}

impl InvalidGridSquare {
    fn expected_at(position: usize) -> &'static str {
        match position {
            1 | 2 => "a field letter A-R",
            3 | 4 => "a square digit 0-9",
            _ => "a subsquare letter A-X",
        }
    }
}

impl fmt::Display for InvalidGridSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid grid square: ")?;
        match self {
            Self::Length(len) => write!(
                f,
                "expected {LOCATOR_LEN} characters, but {len} provided"
            ),
            Self::Character { position, found } => write!(
                f,
                "{found:?} at position {position} should be {}",
                Self::expected_at(*position)
            ),
        }
    }
}

impl Error for InvalidGridSquare {}
