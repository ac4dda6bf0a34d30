//! Absolute hex coordinates
//!
//! The world is a 26x26 grid of sub-maps `AA..ZZ`, each 30 columns by 21
//! rows of flat-top hexes. A grid coordinate like `"AB 0110"` names the
//! sub-map (row letter, column letter), the column within the sub-map
//! (01..30) and the row (01..21). Internally everything is one absolute
//! zero-based (column, row) pair; sub-map boundaries are never
//! special-cased because the absolute arithmetic handles them.
//!
//! Which neighbour vector applies depends on the parity of the absolute
//! column: odd columns sit half a hex lower than even ones.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codes::direction::Direction;
use crate::core::error::{MapError, Result};

/// Columns per sub-map
pub const SUBMAP_COLUMNS: i32 = 30;

/// Rows per sub-map
pub const SUBMAP_ROWS: i32 = 21;

/// Sub-maps per world axis
pub const SUBMAPS_PER_AXIS: i32 = 26;

/// Total world columns (26 sub-maps of 30)
pub const WORLD_COLUMNS: i32 = SUBMAPS_PER_AXIS * SUBMAP_COLUMNS;

/// Total world rows (26 sub-maps of 21)
pub const WORLD_ROWS: i32 = SUBMAPS_PER_AXIS * SUBMAP_ROWS;

/// An absolute hex coordinate, or the distinguished `NA` sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Zero-based absolute column, `0..WORLD_COLUMNS`
    pub col: i32,
    /// Zero-based absolute row, `0..WORLD_ROWS`
    pub row: i32,
}

/// Neighbour vectors for even absolute columns, in `Direction::ALL` order
const EVEN_COLUMN_VECTORS: [(i32, i32); 6] =
    [(0, -1), (1, -1), (1, 0), (0, 1), (-1, 0), (-1, -1)];

/// Neighbour vectors for odd absolute columns, in `Direction::ALL` order
const ODD_COLUMN_VECTORS: [(i32, i32); 6] = [(0, -1), (1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0)];

impl Coord {
    /// Sentinel for the report token `"N/A"`. Not a location; every
    /// accessor except `to_grid` treats it as a caller bug.
    pub const NA: Coord = Coord { col: -1, row: -1 };

    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Parse a grid coordinate.
    ///
    /// Accepts `"AA 0101".."ZZ 3021"` (letters case-insensitive) and
    /// `"N/A"`. Obscured `"##"` prefixes are rejected here; the report
    /// layer decides what an obscured hex means.
    pub fn parse_grid(text: &str) -> Result<Self> {
        let bad = || MapError::InvalidGrid(text.to_string());

        let trimmed = text.trim();
        if trimmed.eq_ignore_ascii_case("n/a") {
            return Ok(Self::NA);
        }

        let bytes = trimmed.as_bytes();
        if bytes.len() != 7 || bytes[2] != b' ' {
            return Err(bad());
        }

        let submap_row = (bytes[0] as char).to_ascii_uppercase();
        let submap_col = (bytes[1] as char).to_ascii_uppercase();
        if !submap_row.is_ascii_uppercase() || !submap_col.is_ascii_uppercase() {
            return Err(bad());
        }

        let digits = &trimmed[3..];
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }
        let grid_col: i32 = digits[..2].parse().map_err(|_| bad())?;
        let grid_row: i32 = digits[2..].parse().map_err(|_| bad())?;
        if !(1..=SUBMAP_COLUMNS).contains(&grid_col) || !(1..=SUBMAP_ROWS).contains(&grid_row) {
            return Err(bad());
        }

        let col = (submap_col as i32 - 'A' as i32) * SUBMAP_COLUMNS + grid_col - 1;
        let row = (submap_row as i32 - 'A' as i32) * SUBMAP_ROWS + grid_row - 1;
        Ok(Self { col, row })
    }

    /// Render the grid form. The NA sentinel prints as `"N/A"`.
    pub fn to_grid(&self) -> String {
        if self.is_na() {
            return "N/A".to_string();
        }
        let submap_row = (b'A' + (self.row / SUBMAP_ROWS) as u8) as char;
        let submap_col = (b'A' + (self.col / SUBMAP_COLUMNS) as u8) as char;
        let grid_col = self.col % SUBMAP_COLUMNS + 1;
        let grid_row = self.row % SUBMAP_ROWS + 1;
        format!("{submap_row}{submap_col} {grid_col:02}{grid_row:02}")
    }

    pub fn is_na(&self) -> bool {
        *self == Self::NA
    }

    pub fn is_in_bounds(&self) -> bool {
        (0..WORLD_COLUMNS).contains(&self.col) && (0..WORLD_ROWS).contains(&self.row)
    }

    fn offset(&self, direction: Direction) -> (i32, i32) {
        let table = if self.col % 2 == 0 {
            &EVEN_COLUMN_VECTORS
        } else {
            &ODD_COLUMN_VECTORS
        };
        match Direction::ALL.iter().position(|d| *d == direction) {
            Some(index) => table[index],
            None => (0, 0), // Direction::Unknown
        }
    }

    /// One hex step. The world is a torus: stepping off an edge wraps.
    pub fn add(&self, direction: Direction) -> Self {
        let (dc, dr) = self.offset(direction);
        Self {
            col: (self.col + dc).rem_euclid(WORLD_COLUMNS),
            row: (self.row + dr).rem_euclid(WORLD_ROWS),
        }
    }

    /// One hex step without wrapping; `None` when the step leaves the
    /// world box. Derived coordinates shown to users go through this so a
    /// wrap can never masquerade as a valid grid reference.
    pub fn checked_add(&self, direction: Direction) -> Option<Self> {
        let (dc, dr) = self.offset(direction);
        let next = Self { col: self.col + dc, row: self.row + dr };
        next.is_in_bounds().then_some(next)
    }

    /// Two sequential steps, wrapping
    pub fn move2(&self, first: Direction, second: Direction) -> Self {
        self.add(first).add(second)
    }

    /// Two sequential steps, bounds-checked
    pub fn checked_move2(&self, first: Direction, second: Direction) -> Option<Self> {
        self.checked_add(first)?.checked_add(second)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_grid())
    }
}
