//! Pipeline configuration with documented policy switches
//!
//! The handful of behaviours that changed over the game's history, or that
//! operators legitimately want to relax, are collected here instead of
//! being buried in the parser and walker.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::turn::TurnId;

/// Configuration for report processing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// First turn in which an obscured (`##`-prefixed) starting hex is a
    /// hard error.
    ///
    /// The game master stopped redacting starting hexes with turn 0902-01;
    /// a `##` origin at or after this turn means the report is corrupt.
    /// Earlier reports fall back to the unit's previous-turn location.
    pub obscured_origin_cutoff: TurnId,

    /// Whether the `Next Turn` id of each report must match the
    /// `Current Turn` id of the following report in the batch.
    ///
    /// Disabling this lets an operator process a batch with a missing
    /// month, at the cost of stale last-seen locations.
    pub strict_turn_chain: bool,

    /// Largest scout index a unit may dispatch in one turn.
    pub max_scouts_per_unit: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            obscured_origin_cutoff: TurnId { year: 902, month: 1 },
            strict_turn_chain: true,
            max_scouts_per_unit: 8,
        }
    }
}

impl MapConfig {
    /// Load configuration from a TOML file, filling omitted fields with
    /// defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = toml::from_str(&text)?;
        Ok(config)
    }

    /// True when an obscured origin is tolerated in the given turn
    pub fn tolerates_obscured_origin(&self, turn: &TurnId) -> bool {
        *turn < self.obscured_origin_cutoff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cutoff() {
        let config = MapConfig::default();
        let before = TurnId::parse("0901-12").unwrap();
        let at = TurnId::parse("0902-01").unwrap();
        let after = TurnId::parse("0902-02").unwrap();

        assert!(config.tolerates_obscured_origin(&before));
        assert!(!config.tolerates_obscured_origin(&at));
        assert!(!config.tolerates_obscured_origin(&after));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: MapConfig = toml::from_str("strict_turn_chain = false").unwrap();
        assert!(!config.strict_turn_chain);
        assert_eq!(config.max_scouts_per_unit, 8);
        assert_eq!(
            config.obscured_origin_cutoff,
            TurnId::parse("0902-01").unwrap()
        );
    }
}
