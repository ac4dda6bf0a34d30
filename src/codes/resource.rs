//! Resource kinds found in hexes

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resource {
    #[default]
    None,
    Coal,
    CopperOre,
    Diamond,
    Frankincense,
    Gold,
    IronOre,
    Jade,
    Kaolin,
    LeadOre,
    Limestone,
    NickelOre,
    Pearls,
    Pyrite,
    Rubies,
    Salt,
    Silver,
    Sulphur,
    TinOre,
    VanadiumOre,
    ZincOre,
}

impl Resource {
    pub const ALL: [Resource; 20] = [
        Self::Coal,
        Self::CopperOre,
        Self::Diamond,
        Self::Frankincense,
        Self::Gold,
        Self::IronOre,
        Self::Jade,
        Self::Kaolin,
        Self::LeadOre,
        Self::Limestone,
        Self::NickelOre,
        Self::Pearls,
        Self::Pyrite,
        Self::Rubies,
        Self::Salt,
        Self::Silver,
        Self::Sulphur,
        Self::TinOre,
        Self::VanadiumOre,
        Self::ZincOre,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Coal => "Coal",
            Self::CopperOre => "Copper Ore",
            Self::Diamond => "Diamond",
            Self::Frankincense => "Frankincense",
            Self::Gold => "Gold",
            Self::IronOre => "Iron Ore",
            Self::Jade => "Jade",
            Self::Kaolin => "Kaolin",
            Self::LeadOre => "Lead Ore",
            Self::Limestone => "Limestone",
            Self::NickelOre => "Nickel Ore",
            Self::Pearls => "Pearls",
            Self::Pyrite => "Pyrite",
            Self::Rubies => "Rubies",
            Self::Salt => "Salt",
            Self::Silver => "Silver",
            Self::Sulphur => "Sulphur",
            Self::TinOre => "Tin Ore",
            Self::VanadiumOre => "Vanadium Ore",
            Self::ZincOre => "Zinc Ore",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.name().to_ascii_lowercase() == name)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for resource in Resource::ALL {
            assert_eq!(Resource::from_name(resource.name()), Some(resource));
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(Resource::from_name("iron ore"), Some(Resource::IronOre));
        assert_eq!(Resource::from_name("SALT"), Some(Resource::Salt));
        assert_eq!(Resource::from_name("mithril"), None);
    }
}
