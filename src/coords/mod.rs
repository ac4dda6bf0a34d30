//! Hex coordinate engine

pub mod coord;

pub use coord::{Coord, SUBMAP_COLUMNS, SUBMAP_ROWS, WORLD_COLUMNS, WORLD_ROWS};
