//! Hex directions
//!
//! Flat-top hexes have six neighbours. `Unknown` exists because a handful
//! of report lines legitimately omit the direction; it never reaches the
//! coordinate engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the six hex directions, or unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    SouthEast,
    South,
    SouthWest,
    NorthWest,
    Unknown,
}

impl Direction {
    /// The six real directions, clockwise from north
    pub const ALL: [Direction; 6] = [
        Self::North,
        Self::NorthEast,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::NorthWest,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::North => "N",
            Self::NorthEast => "NE",
            Self::SouthEast => "SE",
            Self::South => "S",
            Self::SouthWest => "SW",
            Self::NorthWest => "NW",
            Self::Unknown => "?",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "N" => Some(Self::North),
            "NE" => Some(Self::NorthEast),
            "SE" => Some(Self::SouthEast),
            "S" => Some(Self::South),
            "SW" => Some(Self::SouthWest),
            "NW" => Some(Self::NorthWest),
            _ => None,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Self::North => Self::South,
            Self::NorthEast => Self::SouthWest,
            Self::SouthEast => Self::NorthWest,
            Self::South => Self::North,
            Self::SouthWest => Self::NorthEast,
            Self::NorthWest => Self::SouthEast,
            Self::Unknown => Self::Unknown,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
