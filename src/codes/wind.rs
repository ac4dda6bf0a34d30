//! Wind strength reported on fleet movement lines

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WindStrength {
    Calm,
    Mild,
    Strong,
    Gale,
}

impl WindStrength {
    pub const ALL: [WindStrength; 4] = [Self::Calm, Self::Mild, Self::Strong, Self::Gale];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Calm => "Calm",
            Self::Mild => "Mild",
            Self::Strong => "Strong",
            Self::Gale => "Gale",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "calm" => Some(Self::Calm),
            "mild" => Some(Self::Mild),
            "strong" => Some(Self::Strong),
            "gale" => Some(Self::Gale),
            _ => None,
        }
    }
}

impl fmt::Display for WindStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
