//! Twelve-point compass bearings for far-horizon sightings
//!
//! A crow's nest reports distant land or water by bearing. Each bearing
//! resolves to a hex exactly two steps away via a fixed pair of hex
//! directions; on a flat-top grid the twelve two-step rings are what the
//! twelve bearings name.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codes::direction::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Bearing {
    North,
    NorthNorthEast,
    NorthEast,
    East,
    SouthEast,
    SouthSouthEast,
    South,
    SouthSouthWest,
    SouthWest,
    West,
    NorthWest,
    NorthNorthWest,
}

impl Bearing {
    /// Clockwise from north
    pub const ALL: [Bearing; 12] = [
        Self::North,
        Self::NorthNorthEast,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::SouthSouthEast,
        Self::South,
        Self::SouthSouthWest,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
        Self::NorthNorthWest,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::North => "N",
            Self::NorthNorthEast => "NNE",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::SouthSouthEast => "SSE",
            Self::South => "S",
            Self::SouthSouthWest => "SSW",
            Self::SouthWest => "SW",
            Self::West => "W",
            Self::NorthWest => "NW",
            Self::NorthNorthWest => "NNW",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "N" => Some(Self::North),
            "NNE" => Some(Self::NorthNorthEast),
            "NE" => Some(Self::NorthEast),
            "E" => Some(Self::East),
            "SE" => Some(Self::SouthEast),
            "SSE" => Some(Self::SouthSouthEast),
            "S" => Some(Self::South),
            "SSW" => Some(Self::SouthSouthWest),
            "SW" => Some(Self::SouthWest),
            "W" => Some(Self::West),
            "NW" => Some(Self::NorthWest),
            "NNW" => Some(Self::NorthNorthWest),
            _ => None,
        }
    }

    /// The two sequential hex steps that reach the sighted hex
    pub fn expand(&self) -> (Direction, Direction) {
        use Direction as D;
        match self {
            Self::North => (D::North, D::North),
            Self::NorthNorthEast => (D::North, D::NorthEast),
            Self::NorthEast => (D::NorthEast, D::NorthEast),
            Self::East => (D::NorthEast, D::SouthEast),
            Self::SouthEast => (D::SouthEast, D::SouthEast),
            Self::SouthSouthEast => (D::South, D::SouthEast),
            Self::South => (D::South, D::South),
            Self::SouthSouthWest => (D::South, D::SouthWest),
            Self::SouthWest => (D::SouthWest, D::SouthWest),
            Self::West => (D::SouthWest, D::NorthWest),
            Self::NorthWest => (D::NorthWest, D::NorthWest),
            Self::NorthNorthWest => (D::North, D::NorthWest),
        }
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
