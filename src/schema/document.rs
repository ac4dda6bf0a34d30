//! The neutral schema document
//!
//! Downstream layers (renderers, stores) consume this projection instead
//! of the parser's internal artefacts. Field names are camelCase on the
//! wire; values are plain strings so consumers need none of this crate's
//! types.

use serde::{Deserialize, Serialize};

use crate::tiles::Note;

/// Version of the document layout itself
pub const SCHEMA_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub schema_version: String,
    pub game: String,
    /// The last turn in the emitted batch
    pub turn: String,
    pub clan: String,
    pub source: String,
    pub created: String,
    pub special_hexes: Vec<SpecialHexDoc>,
    pub clans: Vec<ClanDoc>,
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialHexDoc {
    pub name: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanDoc {
    pub id: String,
    pub units: Vec<UnitDoc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitDoc {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_location: Option<String>,
    pub moves: Vec<MoveDoc>,
    pub scouts: Vec<ScoutDoc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveDoc {
    pub turn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follows: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goes_to: Option<String>,
    pub steps: Vec<StepDoc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoutDoc {
    pub id: u8,
    pub turn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_location: Option<String>,
    pub steps: Vec<StepDoc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepDoc {
    /// One of `advance`, `follows`, `goesTo`, `still`
    pub intent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follows: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goes_to: Option<String>,
    pub still: bool,
    /// One of `succeeded`, `failed`, `vanished`, `unknown`
    pub result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observation: Option<ObservationDoc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationDoc {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terrain: Option<String>,
    pub edges: Vec<EdgeDoc>,
    pub encounters: Vec<String>,
    pub settlements: Vec<String>,
    pub resources: Vec<String>,
    pub compass_points: Vec<CompassPointDoc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeDoc {
    pub direction: String,
    pub edge: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompassPointDoc {
    pub bearing: String,
    pub neighbor_terrain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}
