//! Report sectioning
//!
//! A report is a flat list of lines. Unit headers (`Tribe 0987,`,
//! `Courier 0987c1,` ...) open sections; every following line belongs to
//! that unit until the next header. Headers must start in column 1 -
//! indented copies are game-master commentary gone wrong and are rejected
//! rather than silently skipped.

use std::collections::HashSet;

use crate::coords::Coord;
use crate::core::error::{MapError, Result};
use crate::core::unit::{UnitId, UnitKind};
use crate::report::moves::SpecialHex;
use crate::report::normalize::normalize_line;

/// A normalised line with its 1-based position in the report
#[derive(Debug, Clone)]
pub struct NumberedLine {
    pub number: usize,
    pub text: String,
}

/// One unit's slice of the report. The header line is included.
#[derive(Debug, Clone)]
pub struct Section {
    pub unit: UnitId,
    pub kind: UnitKind,
    pub lines: Vec<NumberedLine>,
}

/// A report split into per-unit sections plus preamble special hexes
#[derive(Debug, Clone)]
pub struct SplitReport {
    pub sections: Vec<Section>,
    pub special_hexes: Vec<SpecialHex>,
}

const HEADER_KEYWORDS: [(UnitKind, &str); 5] = [
    (UnitKind::Tribe, "Tribe "),
    (UnitKind::Courier, "Courier "),
    (UnitKind::Element, "Element "),
    (UnitKind::Fleet, "Fleet "),
    (UnitKind::Garrison, "Garrison "),
];

/// Recognise a section header. The line must already be normalised.
fn header_unit(line: &str) -> Option<(UnitKind, UnitId)> {
    for (kind, keyword) in HEADER_KEYWORDS {
        let Some(rest) = line.strip_prefix(keyword) else {
            continue;
        };
        let id_text = rest.split(',').next()?.trim();
        let unit = UnitId::parse(id_text).ok()?;
        if unit.kind() == kind {
            return Some((kind, unit));
        }
    }
    None
}

/// Parse a `>>>>` preamble line: a hex name, an optional `=`, and a grid
/// coordinate. The coordinate is always the last two tokens.
fn parse_special_hex(number: usize, normalized: &str) -> Result<SpecialHex> {
    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    if tokens.len() >= 3 {
        let coord_text = format!("{} {}", tokens[tokens.len() - 2], tokens[tokens.len() - 1]);
        if let Ok(location) = Coord::parse_grid(&coord_text) {
            let name = tokens[..tokens.len() - 2].join(" ");
            let name = name.trim_end_matches('=').trim_end();
            if !name.is_empty() {
                return Ok(SpecialHex { name: name.to_string(), location });
            }
        }
    }
    Err(MapError::BadLine {
        line: number,
        reason: format!("malformed special hex line: {normalized:?}"),
    })
}

/// Split a raw report into sections
pub fn split_report(input: &str) -> Result<SplitReport> {
    let mut sections: Vec<Section> = Vec::new();
    let mut special_hexes = Vec::new();
    let mut seen: HashSet<UnitId> = HashSet::new();

    for (index, raw) in input.lines().enumerate() {
        let number = index + 1;

        // Special-hex markers are recognised on the raw line; `>` is not
        // in the normaliser's alphabet.
        if let Some(rest) = raw.trim_start().strip_prefix(">>>>") {
            special_hexes.push(parse_special_hex(number, &normalize_line(rest))?);
            continue;
        }

        let line = normalize_line(raw);
        if line.trim().is_empty() {
            continue;
        }

        if let Some((kind, unit)) = header_unit(&line) {
            if !seen.insert(unit.clone()) {
                return Err(MapError::DuplicateUnit { unit });
            }
            sections.push(Section {
                unit,
                kind,
                lines: vec![NumberedLine { number, text: line }],
            });
            continue;
        }

        // An indented header is an error, not content.
        if line.starts_with(' ') && header_unit(line.trim_start()).is_some() {
            return Err(MapError::BadLine {
                line: number,
                reason: "unit header must start in column 1".to_string(),
            });
        }

        if let Some(section) = sections.last_mut() {
            section.lines.push(NumberedLine { number, text: line });
        }
        // Lines before the first header (other than special hexes) are
        // report boilerplate and carry no map data.
    }

    Ok(SplitReport { sections, special_hexes })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_by_header() {
        let report = "\
Tribe 0987, , Current Hex = OO 0202, (Previous Hex = OO 0201)
Tribe Movement: Move NE-PR
Element 0987e1, , Current Hex = OO 0202, (Previous Hex = OO 0202)
Tribe Movement: Move";
        let split = split_report(report).unwrap();
        assert_eq!(split.sections.len(), 2);
        assert_eq!(split.sections[0].unit.as_str(), "0987");
        assert_eq!(split.sections[0].lines.len(), 2);
        assert_eq!(split.sections[1].unit.as_str(), "0987e1");
        assert_eq!(split.sections[1].kind, UnitKind::Element);
    }

    #[test]
    fn test_duplicate_unit_is_fatal() {
        let report = "\
Tribe 0987, , Current Hex = OO 0202
Tribe 0987, , Current Hex = OO 0203";
        match split_report(report) {
            Err(MapError::DuplicateUnit { unit }) => assert_eq!(unit.as_str(), "0987"),
            other => panic!("expected DuplicateUnit, got {other:?}"),
        }
    }

    #[test]
    fn test_indented_header_rejected() {
        let report = "\
Tribe 0987, , Current Hex = OO 0202
   Tribe 0988, , Current Hex = OO 0203";
        match split_report(report) {
            Err(MapError::BadLine { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected BadLine, got {other:?}"),
        }
    }

    #[test]
    fn test_special_hexes_collected() {
        let report = "\
>>>> Crystal Falls = OO 0505
Tribe 0987, , Current Hex = OO 0202";
        let split = split_report(report).unwrap();
        assert_eq!(split.special_hexes.len(), 1);
        assert_eq!(split.special_hexes[0].name, "Crystal Falls");
        assert_eq!(split.special_hexes[0].location.to_grid(), "OO 0505");
    }

    #[test]
    fn test_preamble_noise_ignored() {
        let report = "\
Some cover letter text

Tribe 0987, , Current Hex = OO 0202";
        let split = split_report(report).unwrap();
        assert_eq!(split.sections.len(), 1);
    }

    #[test]
    fn test_crlf_tolerated() {
        let report = "Tribe 0987, , Current Hex = OO 0202\r\nTribe Movement: Move\r\n";
        let split = split_report(report).unwrap();
        assert_eq!(split.sections[0].lines.len(), 2);
        assert_eq!(split.sections[0].lines[1].text, "Tribe Movement: Move");
    }
}
