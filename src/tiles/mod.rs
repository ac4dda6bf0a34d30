//! Tile map and merge engine

pub mod map;
pub mod merge;
pub mod tile;

pub use map::{Note, NoteKind, TileMap};
pub use merge::MergeContext;
pub use tile::{Encounter, Tile};
