//! Parser output artefacts
//!
//! One parsed report is a `ParsedTurn`: per-unit movement containers plus
//! the preamble's special hexes. The walker and the schema emitter both
//! consume these; nothing here knows about tiles.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codes::{Bearing, Direction, Edge, MoveResult, Resource, Terrain, WindStrength};
use crate::coords::Coord;
use crate::core::error::{MapError, Result};
use crate::core::turn::{Season, TurnId};
use crate::core::unit::{UnitId, UnitKind};

/// A hex reference as a report states it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HexSpec {
    /// `"N/A"` - the unit does not know
    NotAvailable,
    /// `"## 0101"` - the game master redacted the sub-map
    Obscured(String),
    /// A full grid coordinate
    Grid(Coord),
}

impl HexSpec {
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.eq_ignore_ascii_case("n/a") {
            return Ok(Self::NotAvailable);
        }
        if let Some(rest) = trimmed.strip_prefix("##") {
            let digits = rest.trim();
            if digits.len() == 4 && digits.bytes().all(|b| b.is_ascii_digit()) {
                return Ok(Self::Obscured(digits.to_string()));
            }
            return Err(MapError::InvalidGrid(text.to_string()));
        }
        Ok(Self::Grid(Coord::parse_grid(trimmed)?))
    }

    pub fn coord(&self) -> Option<Coord> {
        match self {
            Self::Grid(coord) => Some(*coord),
            _ => None,
        }
    }

    pub fn is_obscured(&self) -> bool {
        matches!(self, Self::Obscured(_))
    }
}

impl fmt::Display for HexSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAvailable => write!(f, "N/A"),
            Self::Obscured(digits) => write!(f, "## {digits}"),
            Self::Grid(coord) => write!(f, "{coord}"),
        }
    }
}

/// A far-horizon sighting: terrain two hexes out on a compass bearing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompassPoint {
    pub bearing: Bearing,
    pub terrain: Terrain,
    /// Derived by the schema pass; absent when the bearing exits the world
    pub location: Option<Coord>,
}

/// An item sighting (`"Find 3 Horses"`). Parsed but never propagated to
/// tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSight {
    pub quantity: u32,
    pub name: String,
}

/// Everything one step observed about the hex it ended on
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Stamped by the derivation pass with the step's ending location
    pub location: Option<Coord>,
    pub terrain: Terrain,
    /// Border features by direction
    pub edges: Vec<(Direction, Edge)>,
    /// The inner ring: neighbour terrains visible from this hex
    pub neighbors: Vec<(Direction, Terrain)>,
    /// The outer ring: far horizons by bearing
    pub far_horizons: Vec<CompassPoint>,
    pub encounters: Vec<UnitId>,
    pub settlements: Vec<String>,
    pub resources: Vec<Resource>,
    pub items: Vec<ItemSight>,
}

impl Observation {
    pub fn is_empty(&self) -> bool {
        self.terrain.is_blank()
            && self.edges.is_empty()
            && self.neighbors.is_empty()
            && self.far_horizons.is_empty()
            && self.encounters.is_empty()
            && self.settlements.is_empty()
            && self.resources.is_empty()
            && self.items.is_empty()
    }
}

/// What a step tried to do
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepIntent {
    Advance(Direction),
    Follows(UnitId),
    GoesTo(Coord),
    Still,
}

/// One attempted move plus its immediate observations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveStep {
    pub intent: StepIntent,
    pub result: MoveResult,
    pub observation: Option<Observation>,
    /// Stamped by the derivation pass
    pub ending: Option<Coord>,
}

impl MoveStep {
    pub fn new(intent: StepIntent, result: MoveResult) -> Self {
        Self { intent, result, observation: None, ending: None }
    }
}

/// A scouting party's step sequence, indexed 1..=8
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoutMoves {
    pub id: u8,
    pub steps: Vec<MoveStep>,
    /// Derived: equals the parent unit's ending location
    pub start: Option<Coord>,
}

/// Remote sensing executed at an explicit origin hex
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scry {
    pub origin: Coord,
    pub payload: ScryPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScryPayload {
    Scout(ScoutMoves),
    Status(MoveStep),
}

/// Per-turn movement container for one unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovesForUnit {
    pub unit: UnitId,
    pub kind: UnitKind,
    pub nickname: Option<String>,
    /// Previous hex as reported; cross-checked, never trusted
    pub from_hex: HexSpec,
    /// Current (ending) hex as reported; the one trusted datum
    pub to_hex: HexSpec,
    pub follows: Option<UnitId>,
    pub goes_to: Option<Coord>,
    pub wind: Option<(WindStrength, Direction)>,
    /// Whether a movement, follows or goes-to line was seen; a second one
    /// is an error
    pub moved: bool,
    pub steps: Vec<MoveStep>,
    pub scouts: Vec<ScoutMoves>,
    pub scries: Vec<Scry>,
    /// Seeded by the walker (step A)
    pub location: Option<Coord>,
    /// Walked ending location (step C)
    pub final_location: Option<Coord>,
}

impl MovesForUnit {
    pub fn new(unit: UnitId, kind: UnitKind) -> Self {
        Self {
            unit,
            kind,
            nickname: None,
            from_hex: HexSpec::NotAvailable,
            to_hex: HexSpec::NotAvailable,
            follows: None,
            goes_to: None,
            wind: None,
            moved: false,
            steps: Vec::new(),
            scouts: Vec::new(),
            scries: Vec::new(),
            location: None,
            final_location: None,
        }
    }
}

/// A named hex from a `>>>>` preamble line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialHex {
    pub name: String,
    pub location: Coord,
}

/// One fully parsed turn report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedTurn {
    pub id: Option<TurnId>,
    pub number: Option<u32>,
    pub season: Option<Season>,
    pub weather: Option<String>,
    pub next: Option<TurnId>,
    /// Keyed and iterated by unit id for deterministic output
    pub units: BTreeMap<UnitId, MovesForUnit>,
    pub special_hexes: Vec<SpecialHex>,
}

impl ParsedTurn {
    /// The turn id; parsing guarantees one was present
    pub fn turn(&self) -> Result<TurnId> {
        self.id
            .ok_or_else(|| MapError::InvalidTurn("report carries no turn info line".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_spec_parse() {
        assert_eq!(HexSpec::parse("N/A").unwrap(), HexSpec::NotAvailable);
        assert_eq!(
            HexSpec::parse("## 0202").unwrap(),
            HexSpec::Obscured("0202".to_string())
        );
        assert_eq!(
            HexSpec::parse("OO 0202").unwrap(),
            HexSpec::Grid(Coord::parse_grid("OO 0202").unwrap())
        );
    }

    #[test]
    fn test_hex_spec_rejects_bad_obscured() {
        assert!(HexSpec::parse("## 02").is_err());
        assert!(HexSpec::parse("## abcd").is_err());
    }

    #[test]
    fn test_hex_spec_display_round_trip() {
        for text in ["N/A", "## 0202", "OO 0202"] {
            assert_eq!(HexSpec::parse(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn test_observation_is_empty() {
        let mut obs = Observation::default();
        assert!(obs.is_empty());
        obs.terrain = Terrain::Prairie;
        assert!(!obs.is_empty());
    }
}
