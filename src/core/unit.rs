//! Unit identifiers
//!
//! A tribe is four digits (`"0987"`). Couriers, elements, fleets and
//! garrisons append a kind letter and an index (`"0987c1"`). Every unit
//! rolls up to a clan, the tribe whose id is `0` followed by the last
//! three digits of the owning tribe.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::{MapError, Result};

/// What kind of unit an id names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    Tribe,
    Courier,
    Element,
    Fleet,
    Garrison,
}

impl UnitKind {
    /// Section-header keyword for this kind
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Tribe => "Tribe",
            Self::Courier => "Courier",
            Self::Element => "Element",
            Self::Fleet => "Fleet",
            Self::Garrison => "Garrison",
        }
    }

    fn from_suffix(letter: char) -> Option<Self> {
        match letter {
            'c' => Some(Self::Courier),
            'e' => Some(Self::Element),
            'f' => Some(Self::Fleet),
            'g' => Some(Self::Garrison),
            _ => None,
        }
    }
}

/// A validated unit identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitId(String);

impl UnitId {
    /// Parse and validate a unit id.
    ///
    /// Accepts `"0987"` and `"0987c1"` shapes; the kind letter is
    /// case-folded to lower.
    pub fn parse(text: &str) -> Result<Self> {
        let bad = || MapError::InvalidUnit(text.to_string());

        let bytes = text.as_bytes();
        match bytes.len() {
            4 => {
                if !bytes.iter().all(u8::is_ascii_digit) {
                    return Err(bad());
                }
                Ok(Self(text.to_string()))
            }
            6 => {
                if !bytes[..4].iter().all(u8::is_ascii_digit) {
                    return Err(bad());
                }
                let letter = (bytes[4] as char).to_ascii_lowercase();
                if UnitKind::from_suffix(letter).is_none() || !bytes[5].is_ascii_digit() {
                    return Err(bad());
                }
                let mut id = text[..4].to_string();
                id.push(letter);
                id.push(bytes[5] as char);
                Ok(Self(id))
            }
            _ => Err(bad()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn kind(&self) -> UnitKind {
        match self.0.as_bytes().get(4) {
            Some(&letter) => UnitKind::from_suffix(letter as char).unwrap_or(UnitKind::Tribe),
            None => UnitKind::Tribe,
        }
    }

    pub fn is_tribe(&self) -> bool {
        self.0.len() == 4
    }

    /// The clan this unit rolls up to
    pub fn clan(&self) -> UnitId {
        if self.0.len() == 4 {
            UnitId(format!("0{}", &self.0[1..]))
        } else {
            UnitId(self.0[..4].to_string())
        }
    }

    /// The unit whose location a newly created unit inherits: the owning
    /// tribe for sub-units, the clan for non-clan tribes.
    pub fn parent(&self) -> Option<UnitId> {
        if self.0.len() > 4 {
            return Some(UnitId(self.0[..4].to_string()));
        }
        let clan = self.clan();
        if clan == *self {
            None
        } else {
            Some(clan)
        }
    }

    /// True when this unit belongs to the given clan
    pub fn is_in_clan(&self, clan: &UnitId) -> bool {
        self.clan() == *clan
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tribe() {
        let unit = UnitId::parse("0987").unwrap();
        assert_eq!(unit.kind(), UnitKind::Tribe);
        assert!(unit.is_tribe());
    }

    #[test]
    fn test_parse_subunits() {
        assert_eq!(UnitId::parse("0987c1").unwrap().kind(), UnitKind::Courier);
        assert_eq!(UnitId::parse("0987e2").unwrap().kind(), UnitKind::Element);
        assert_eq!(UnitId::parse("0987f3").unwrap().kind(), UnitKind::Fleet);
        assert_eq!(UnitId::parse("0987g1").unwrap().kind(), UnitKind::Garrison);
    }

    #[test]
    fn test_suffix_case_folds() {
        assert_eq!(UnitId::parse("0987C1").unwrap().as_str(), "0987c1");
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(UnitId::parse("987").is_err());
        assert!(UnitId::parse("09871").is_err());
        assert!(UnitId::parse("0987x1").is_err());
        assert!(UnitId::parse("0987c").is_err());
        assert!(UnitId::parse("0987cc").is_err());
    }

    #[test]
    fn test_clan_derivation() {
        assert_eq!(UnitId::parse("0987").unwrap().clan().as_str(), "0987");
        assert_eq!(UnitId::parse("1987").unwrap().clan().as_str(), "0987");
        assert_eq!(UnitId::parse("1987e1").unwrap().clan().as_str(), "1987");
        assert_eq!(UnitId::parse("0987c1").unwrap().clan().as_str(), "0987");
    }

    #[test]
    fn test_parent_lineage() {
        assert_eq!(
            UnitId::parse("0987e1").unwrap().parent(),
            Some(UnitId::parse("0987").unwrap())
        );
        assert_eq!(
            UnitId::parse("1987").unwrap().parent(),
            Some(UnitId::parse("0987").unwrap())
        );
        assert_eq!(UnitId::parse("0987").unwrap().parent(), None);
    }

    #[test]
    fn test_clan_scope() {
        let clan = UnitId::parse("0987").unwrap();
        assert!(UnitId::parse("0987c1").unwrap().is_in_clan(&clan));
        assert!(UnitId::parse("1987").unwrap().is_in_clan(&clan));
        assert!(!UnitId::parse("0500").unwrap().is_in_clan(&clan));
    }
}
