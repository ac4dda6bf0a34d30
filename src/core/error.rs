use thiserror::Error;

use crate::core::turn::TurnId;
use crate::core::unit::UnitId;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("invalid grid coordinate: {0:?}")]
    InvalidGrid(String),

    #[error("unit {unit} has an obscured starting hex in turn {turn}")]
    ObscuredOrigin { unit: UnitId, turn: TurnId },

    #[error("duplicate unit in turn: {unit}")]
    DuplicateUnit { unit: UnitId },

    #[error("line {line}, step {step}, clause {clause}: unrecognised step text {slug:?}")]
    StepRecognition {
        line: usize,
        step: usize,
        clause: usize,
        slug: String,
    },

    #[error("line {line}, step {step}, clause {clause}: {what}")]
    OrderViolation {
        line: usize,
        step: usize,
        clause: usize,
        what: String,
    },

    #[error("scout {scout} of unit {unit} carries a follows/goes-to step")]
    InvariantScout { unit: UnitId, scout: u8 },

    #[error("unit {unit} has no parent lineage to inherit a starting hex from")]
    MissingParent { unit: UnitId },

    #[error("turn chain broken: expected {expected}, found {found}")]
    TurnSkipMismatch { expected: TurnId, found: TurnId },

    #[error("follows cycle among units: {0}")]
    FollowsCycle(String),

    #[error("invalid turn id: {0}")]
    InvalidTurn(String),

    #[error("invalid unit id: {0:?}")]
    InvalidUnit(String),

    #[error("line {line}: {reason}")]
    BadLine { line: usize, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("config error: {0}")]
    ConfigError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, MapError>;
