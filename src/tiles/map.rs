//! The consolidated tile map
//!
//! Tile creation is lazy: the first mention of a coordinate in any role -
//! stood upon, observed across a border, pointed at by a far horizon,
//! targeted by a goes-to - allocates its tile.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::coords::Coord;
use crate::tiles::tile::Tile;

/// Severity of a walk-time diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    Warn,
    Info,
}

/// A diagnostic that belongs to the output document, not the log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub kind: NoteKind,
    pub message: String,
}

impl Note {
    pub fn warn(message: impl Into<String>) -> Self {
        Self { kind: NoteKind::Warn, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NoteKind::Info, message: message.into() }
    }
}

/// Mapping from absolute coordinate to tile
#[derive(Debug, Clone, Default)]
pub struct TileMap {
    tiles: AHashMap<Coord, Tile>,
    /// Diagnostics accumulated while merging
    pub notes: Vec<Note>,
}

impl TileMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn get(&self, at: &Coord) -> Option<&Tile> {
        self.tiles.get(at)
    }

    /// Fetch a tile, creating it on first mention
    pub fn fetch(&mut self, at: Coord) -> &mut Tile {
        self.tiles.entry(at).or_insert_with(|| Tile::new(at))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Tiles in coordinate order, for deterministic output
    pub fn sorted_tiles(&self) -> Vec<&Tile> {
        let mut tiles: Vec<&Tile> = self.tiles.values().collect();
        tiles.sort_by_key(|t| t.location);
        tiles
    }
}
