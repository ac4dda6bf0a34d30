//! Terrain codes
//!
//! Reports name terrain two ways: short codes in movement steps
//! (`"NE-PR"`) and long names in status lines (`"0987 Status: PRAIRIE"`).
//! Both forms are closed; anything else is a parse failure.
//!
//! Four values are deliberate under-specifications. `UnknownMountain` and
//! `UnknownJungleSwamp` come from failed passes and early-game reports and
//! later unify with a specific kind. `UnknownLand` and `UnknownWater` are
//! what a fleet's crow's nest can tell from two hexes away.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Terrain {
    /// Tile exists but no observation has named its terrain yet
    #[default]
    Blank,
    Alps,
    AridHills,
    AridTundra,
    BrushFlat,
    BrushHills,
    ConiferHills,
    Deciduous,
    DeciduousHills,
    Desert,
    GrassyHills,
    GrassyHillsPlateau,
    HighSnowyMountains,
    Jungle,
    JungleHills,
    Lake,
    LowAridMountains,
    LowConiferMountains,
    LowJungleMountains,
    LowSnowyMountains,
    LowVolcanicMountains,
    Ocean,
    PolarIce,
    Prairie,
    PrairiePlateau,
    RockyHills,
    SnowyHills,
    Swamp,
    Tundra,
    UnknownJungleSwamp,
    UnknownLand,
    UnknownMountain,
    UnknownWater,
}

impl Terrain {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Blank => "",
            Self::Alps => "ALPS",
            Self::AridHills => "AH",
            Self::AridTundra => "AR",
            Self::BrushFlat => "BF",
            Self::BrushHills => "BH",
            Self::ConiferHills => "CH",
            Self::Deciduous => "D",
            Self::DeciduousHills => "DH",
            Self::Desert => "DE",
            Self::GrassyHills => "GH",
            Self::GrassyHillsPlateau => "GHP",
            Self::HighSnowyMountains => "HSM",
            Self::Jungle => "JG",
            Self::JungleHills => "JH",
            Self::Lake => "L",
            Self::LowAridMountains => "LAM",
            Self::LowConiferMountains => "LCM",
            Self::LowJungleMountains => "LJM",
            Self::LowSnowyMountains => "LSM",
            Self::LowVolcanicMountains => "LVM",
            Self::Ocean => "O",
            Self::PolarIce => "PI",
            Self::Prairie => "PR",
            Self::PrairiePlateau => "PPR",
            Self::RockyHills => "RH",
            Self::SnowyHills => "SH",
            Self::Swamp => "SW",
            Self::Tundra => "TU",
            Self::UnknownJungleSwamp => "UJS",
            Self::UnknownLand => "UL",
            Self::UnknownMountain => "UM",
            Self::UnknownWater => "UW",
        }
    }

    pub fn long_name(&self) -> &'static str {
        match self {
            Self::Blank => "",
            Self::Alps => "ALPS",
            Self::AridHills => "ARID HILLS",
            Self::AridTundra => "ARID TUNDRA",
            Self::BrushFlat => "BRUSH FLAT",
            Self::BrushHills => "BRUSH HILLS",
            Self::ConiferHills => "CONIFER HILLS",
            Self::Deciduous => "DECIDUOUS",
            Self::DeciduousHills => "DECIDUOUS HILLS",
            Self::Desert => "DESERT",
            Self::GrassyHills => "GRASSY HILLS",
            Self::GrassyHillsPlateau => "GRASSY HILLS PLATEAU",
            Self::HighSnowyMountains => "HIGH SNOWY MOUNTAINS",
            Self::Jungle => "JUNGLE",
            Self::JungleHills => "JUNGLE HILLS",
            Self::Lake => "LAKE",
            Self::LowAridMountains => "LOW ARID MOUNTAINS",
            Self::LowConiferMountains => "LOW CONIFER MOUNTAINS",
            Self::LowJungleMountains => "LOW JUNGLE MOUNTAINS",
            Self::LowSnowyMountains => "LOW SNOWY MOUNTAINS",
            Self::LowVolcanicMountains => "LOW VOLCANIC MOUNTAINS",
            Self::Ocean => "OCEAN",
            Self::PolarIce => "POLAR ICE",
            Self::Prairie => "PRAIRIE",
            Self::PrairiePlateau => "PRAIRIE PLATEAU",
            Self::RockyHills => "ROCKY HILLS",
            Self::SnowyHills => "SNOWY HILLS",
            Self::Swamp => "SWAMP",
            Self::Tundra => "TUNDRA",
            Self::UnknownJungleSwamp => "UNKNOWN JUNGLE OR SWAMP",
            Self::UnknownLand => "UNKNOWN LAND",
            Self::UnknownMountain => "UNKNOWN MOUNTAIN",
            Self::UnknownWater => "UNKNOWN WATER",
        }
    }

    /// All values with a non-empty code
    pub const ALL: [Terrain; 32] = [
        Self::Alps,
        Self::AridHills,
        Self::AridTundra,
        Self::BrushFlat,
        Self::BrushHills,
        Self::ConiferHills,
        Self::Deciduous,
        Self::DeciduousHills,
        Self::Desert,
        Self::GrassyHills,
        Self::GrassyHillsPlateau,
        Self::HighSnowyMountains,
        Self::Jungle,
        Self::JungleHills,
        Self::Lake,
        Self::LowAridMountains,
        Self::LowConiferMountains,
        Self::LowJungleMountains,
        Self::LowSnowyMountains,
        Self::LowVolcanicMountains,
        Self::Ocean,
        Self::PolarIce,
        Self::Prairie,
        Self::PrairiePlateau,
        Self::RockyHills,
        Self::SnowyHills,
        Self::Swamp,
        Self::Tundra,
        Self::UnknownJungleSwamp,
        Self::UnknownLand,
        Self::UnknownMountain,
        Self::UnknownWater,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.to_ascii_uppercase();
        Self::ALL.iter().copied().find(|t| t.code() == code)
    }

    pub fn from_long_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_uppercase();
        Self::ALL.iter().copied().find(|t| t.long_name() == name)
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    /// Partial placeholder reconcilable against a specific refinement
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::UnknownMountain | Self::UnknownJungleSwamp)
    }

    /// Terrain only a fleet can report (land/water with no detail)
    pub fn is_fleet_obscured(&self) -> bool {
        matches!(self, Self::UnknownLand | Self::UnknownWater)
    }

    pub fn is_water(&self) -> bool {
        matches!(self, Self::Lake | Self::Ocean | Self::UnknownWater)
    }

    pub fn is_mountain(&self) -> bool {
        matches!(
            self,
            Self::Alps
                | Self::HighSnowyMountains
                | Self::LowAridMountains
                | Self::LowConiferMountains
                | Self::LowJungleMountains
                | Self::LowSnowyMountains
                | Self::LowVolcanicMountains
                | Self::UnknownMountain
        )
    }

    /// True when `self` is a specific kind the placeholder stands in for
    pub fn refines(&self, placeholder: Terrain) -> bool {
        match placeholder {
            Terrain::UnknownMountain => self.is_mountain() && !self.is_placeholder(),
            Terrain::UnknownJungleSwamp => {
                matches!(self, Self::Jungle | Self::JungleHills | Self::Swamp)
            }
            _ => false,
        }
    }

    /// Codes legal in an obviously-visible-neighbour clause (`"O N NW"`).
    /// Only water and mountains are visible from an adjacent hex.
    pub fn is_visible_from_neighbor(&self) -> bool {
        self.is_water() || self.is_mountain()
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
