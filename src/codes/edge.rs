//! Hex border features
//!
//! An edge feature sits on one of the six borders of a hex and is reported
//! as a feature name followed by directions (`"Ford NE NW"`).

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Edge {
    Canal,
    Ford,
    Pass,
    River,
    StoneRoad,
}

impl Edge {
    pub const ALL: [Edge; 5] = [Self::Canal, Self::Ford, Self::Pass, Self::River, Self::StoneRoad];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Canal => "Canal",
            Self::Ford => "Ford",
            Self::Pass => "Pass",
            Self::River => "River",
            Self::StoneRoad => "Stone Road",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "canal" => Some(Self::Canal),
            "ford" => Some(Self::Ford),
            "pass" => Some(Self::Pass),
            "river" => Some(Self::River),
            "stone road" => Some(Self::StoneRoad),
            _ => None,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
