//! Turn-report ingestion: normalisation, sectioning, and the grammar

pub mod moves;
pub mod normalize;
pub mod parse;
pub mod section;

pub use moves::{
    CompassPoint, HexSpec, ItemSight, MoveStep, MovesForUnit, Observation, ParsedTurn,
    ScoutMoves, Scry, ScryPayload, SpecialHex, StepIntent,
};
pub use parse::parse_report;
