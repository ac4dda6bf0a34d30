//! Outcome of one attempted step

use std::fmt;

use serde::{Deserialize, Serialize};

/// What happened to a single movement attempt.
///
/// Only `Succeeded` moves the unit; every other value leaves it on its
/// current hex. The distinctions still matter: they carry different
/// observations (a blocked river edge, a prohibiting neighbour terrain)
/// and project to different schema results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveResult {
    Succeeded,
    Failed,
    Blocked,
    Vanished,
    Prohibited,
    ExhaustedMovementPoints,
    StatusLine,
    StayedInPlace,
    #[default]
    Unknown,
}

impl MoveResult {
    pub fn moved(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// Projection onto the schema document's four result values
    pub fn schema_name(&self) -> &'static str {
        match self {
            Self::Succeeded => "succeeded",
            Self::Vanished => "vanished",
            Self::Unknown => "unknown",
            _ => "failed",
        }
    }
}

impl fmt::Display for MoveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Blocked => "blocked",
            Self::Vanished => "vanished",
            Self::Prohibited => "prohibited",
            Self::ExhaustedMovementPoints => "exhausted movement points",
            Self::StatusLine => "status line",
            Self::StayedInPlace => "stayed in place",
            Self::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_success_moves() {
        assert!(MoveResult::Succeeded.moved());
        assert!(!MoveResult::Blocked.moved());
        assert!(!MoveResult::Prohibited.moved());
        assert!(!MoveResult::StayedInPlace.moved());
    }

    #[test]
    fn test_schema_projection() {
        assert_eq!(MoveResult::Succeeded.schema_name(), "succeeded");
        assert_eq!(MoveResult::Vanished.schema_name(), "vanished");
        assert_eq!(MoveResult::Unknown.schema_name(), "unknown");
        assert_eq!(MoveResult::Blocked.schema_name(), "failed");
        assert_eq!(MoveResult::ExhaustedMovementPoints.schema_name(), "failed");
    }
}
