//! Turn identifiers
//!
//! TribeNet turns are year-month pairs (`"0900-04"`). Lexical order on the
//! canonical form equals chronological order, so `TurnId` derives `Ord` on
//! `(year, month)`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::{MapError, Result};

/// First game year. Year 899 only ever has month 12 (the setup turn).
pub const FIRST_YEAR: u16 = 899;

/// Largest year the report grammar accepts
pub const LAST_YEAR: u16 = 9999;

/// A game turn, identified by year and month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TurnId {
    pub year: u16,
    pub month: u8,
}

impl TurnId {
    pub fn new(year: u16, month: u8) -> Result<Self> {
        let turn = Self { year, month };
        turn.validate()?;
        Ok(turn)
    }

    /// Parse the canonical `"YYYY-MM"` form
    pub fn parse(text: &str) -> Result<Self> {
        let bad = || MapError::InvalidTurn(text.to_string());

        let (year, month) = text.split_once('-').ok_or_else(bad)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(bad());
        }
        let year: u16 = year.parse().map_err(|_| bad())?;
        let month: u8 = month.parse().map_err(|_| bad())?;

        Self::new(year, month)
    }

    fn validate(&self) -> Result<()> {
        let ok = (FIRST_YEAR..=LAST_YEAR).contains(&self.year)
            && (1..=12).contains(&self.month)
            && (self.year != FIRST_YEAR || self.month == 12);
        if ok {
            Ok(())
        } else {
            Err(MapError::InvalidTurn(self.to_string()))
        }
    }

    /// The turn that follows this one
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }
}

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Season named in a turn-info line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "winter" => Some(Self::Winter),
            "spring" => Some(Self::Spring),
            "summer" => Some(Self::Summer),
            "autumn" | "fall" => Some(Self::Autumn),
            _ => None,
        }
    }
}
