//! The report grammar
//!
//! `parse_report` takes one raw report and produces a `ParsedTurn`:
//! normalised lines are split into per-unit sections, each section's lines
//! run through the line grammar, and every movement line through the step
//! grammar. Failure is hard; a report that cannot be fully recognised is
//! surfaced to the operator rather than walked into a silently wrong map.

pub mod clauses;
pub mod lines;
pub mod tokens;

use crate::core::config::MapConfig;
use crate::core::error::Result;
use crate::report::moves::ParsedTurn;
use crate::report::section::split_report;

/// Parse one turn report
pub fn parse_report(input: &str, config: &MapConfig) -> Result<ParsedTurn> {
    let split = split_report(input)?;

    let mut turn = ParsedTurn {
        special_hexes: split.special_hexes,
        ..ParsedTurn::default()
    };

    for section in &split.sections {
        let moves = lines::parse_section(section, config, &mut turn)?;
        turn.units.insert(moves.unit.clone(), moves);
    }

    // A report without a turn-info line cannot be ordered into a batch.
    turn.turn()?;
    Ok(turn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{Direction, MoveResult, Terrain};
    use crate::report::moves::StepIntent;

    const REPORT: &str = "\
>>>> Crystal Falls = OO 0505
Tribe 0987, , Current Hex = OO 0202, (Previous Hex = OO 0201)
Current Turn 0900-04 (#4), Summer, FINE\tNext Turn 0900-05 (#5), 24/10/2023
Tribe Movement: Move NE-PR, River S\\SE-GH
0987 Status: PRAIRIE
Scout 1:Scout Still\\NE-PR
Element 0987e1, , Current Hex = OO 0202, (Previous Hex = N/A)
Current Turn 0900-04 (#4), Summer, FINE
Tribe Follows 0987
";

    #[test]
    fn test_parse_full_report() {
        let turn = parse_report(REPORT, &MapConfig::default()).unwrap();

        assert_eq!(turn.id.unwrap().to_string(), "0900-04");
        assert_eq!(turn.next.unwrap().to_string(), "0900-05");
        assert_eq!(turn.special_hexes.len(), 1);
        assert_eq!(turn.units.len(), 2);

        let tribe = &turn.units[&crate::core::unit::UnitId::parse("0987").unwrap()];
        assert_eq!(tribe.steps.len(), 3); // two moves plus the status line
        assert_eq!(tribe.steps[0].intent, StepIntent::Advance(Direction::NorthEast));
        assert_eq!(tribe.steps[2].result, MoveResult::StatusLine);
        assert_eq!(tribe.scouts.len(), 1);

        let element = &turn.units[&crate::core::unit::UnitId::parse("0987e1").unwrap()];
        assert_eq!(element.follows.as_ref().unwrap().as_str(), "0987");
    }

    #[test]
    fn test_noisy_report_parses() {
        // Smart punctuation and game-master shorthand fold away.
        let report = "\
Tribe 0987, , Current Hex = OO 0202, (Previous Hex = OO 0201)
Current Turn 0900-04 (#4), Summer, FINE
Tribe Movement: Move NE-PR\\-- River S 1234
";
        let turn = parse_report(report, &MapConfig::default()).unwrap();
        let tribe = &turn.units[&crate::core::unit::UnitId::parse("0987").unwrap()];
        let obs = tribe.steps[0].observation.as_ref().unwrap();
        assert_eq!(obs.terrain, Terrain::Prairie);
        assert_eq!(obs.encounters[0].as_str(), "1234");
    }

    #[test]
    fn test_report_without_turn_info_rejected() {
        let report = "\
Tribe 0987, , Current Hex = OO 0202
Tribe Movement: Move NE-PR
";
        assert!(parse_report(report, &MapConfig::default()).is_err());
    }
}
