//! The tile data model
//!
//! A tile accumulates everything any unit has ever observed about one hex.
//! Tiles are never destroyed and only ever gain or refine observations;
//! every collection here carries an explicit de-duplication key.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::codes::{Bearing, Direction, Edge, Resource, Terrain};
use crate::coords::Coord;
use crate::core::turn::TurnId;
use crate::core::unit::UnitId;

/// A unit sighted in a hex, stamped with the turn it was seen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    pub turn: TurnId,
    pub unit: UnitId,
    /// Inside the observing clan's scope
    pub friendly: bool,
}

/// One hex of the consolidated world map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub location: Coord,
    pub terrain: Terrain,
    /// Border features, de-duplicated by (direction, kind)
    pub edges: Vec<(Direction, Edge)>,
    /// Observed neighbour terrains, de-duplicated by (direction, terrain)
    pub borders: Vec<(Direction, Terrain)>,
    /// Far-horizon sightings made from this tile, by (bearing, terrain)
    pub far_horizons: Vec<(Bearing, Terrain)>,
    /// De-duplicated by (turn, unit)
    pub encounters: Vec<Encounter>,
    /// De-duplicated by kind
    pub resources: Vec<Resource>,
    /// De-duplicated case-insensitively
    pub settlements: Vec<String>,
    /// Last turn a unit stood in this hex
    pub visited: Option<TurnId>,
    /// Last turn a scout walked this hex
    pub scouted: Option<TurnId>,
    /// Units that have sourced observations into this tile
    pub sources: BTreeSet<UnitId>,
}

impl Tile {
    pub fn new(location: Coord) -> Self {
        Self {
            location,
            terrain: Terrain::Blank,
            edges: Vec::new(),
            borders: Vec::new(),
            far_horizons: Vec::new(),
            encounters: Vec::new(),
            resources: Vec::new(),
            settlements: Vec::new(),
            visited: None,
            scouted: None,
            sources: BTreeSet::new(),
        }
    }

    pub fn has_edge(&self, direction: Direction, edge: Edge) -> bool {
        self.edges.contains(&(direction, edge))
    }

    pub fn has_border(&self, direction: Direction, terrain: Terrain) -> bool {
        self.borders.contains(&(direction, terrain))
    }

    pub fn has_far_horizon(&self, bearing: Bearing, terrain: Terrain) -> bool {
        self.far_horizons.contains(&(bearing, terrain))
    }

    pub fn has_encounter(&self, turn: &TurnId, unit: &UnitId) -> bool {
        self.encounters
            .iter()
            .any(|e| e.turn == *turn && e.unit == *unit)
    }

    pub fn has_settlement(&self, name: &str) -> bool {
        self.settlements
            .iter()
            .any(|s| s.eq_ignore_ascii_case(name))
    }
}
