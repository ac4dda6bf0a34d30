//! End-to-end pipeline tests: raw report bytes through parser, derivation,
//! walker, and schema emission.

use tribemap::codes::{Direction, Edge, Terrain};
use tribemap::coords::Coord;
use tribemap::core::config::MapConfig;
use tribemap::core::turn::TurnId;
use tribemap::core::unit::UnitId;
use tribemap::report::parse::parse_report;
use tribemap::report::ParsedTurn;
use tribemap::schema::{emit_document, EmitInfo};
use tribemap::tiles::{Note, TileMap};
use tribemap::walker::{stamp_turns, walk_turns};

fn grid(text: &str) -> Coord {
    Coord::parse_grid(text).unwrap()
}

fn process(reports: &[&str], clan: &str) -> (Vec<ParsedTurn>, TileMap, Vec<Note>) {
    let config = MapConfig::default();
    let clan = UnitId::parse(clan).unwrap();

    let mut turns: Vec<ParsedTurn> = reports
        .iter()
        .map(|r| parse_report(r, &config).unwrap())
        .collect();
    turns.sort_by_key(|t| t.id);

    let mut notes = Vec::new();
    stamp_turns(&mut turns, &mut notes).unwrap();
    let map = walk_turns(&mut turns, &clan, &config).unwrap();
    notes.extend(map.notes.iter().cloned());
    (turns, map, notes)
}

const TURN_FOUR: &str = "\
>>>> Crystal Falls = OO 0505
Tribe 0987, Wolf Clan, Current Hex = OO 0204, (Previous Hex = OO 0202)
Current Turn 0900-04 (#4), Summer, FINE\tNext Turn 0900-05 (#5), 24/10/2023
Tribe Movement: Move S-PR, River SE\\S-GH, Find Iron Ore
Scout 1:Scout Still\\N-PR, Grey's Folly
Element 0987e1, , Current Hex = OO 0204, (Previous Hex = OO 0202)
Current Turn 0900-04 (#4), Summer, FINE\tNext Turn 0900-05 (#5), 24/10/2023
Tribe Follows 0987
";

const TURN_FIVE: &str = "\
Tribe 0987, Wolf Clan, Current Hex = OO 0205, (Previous Hex = OO 0204)
Current Turn 0900-05 (#5), Summer, FINE
Tribe Movement: Move S-PR, 0300
0987 Status: PRAIRIE, Ford NE
Element 0987e1, , Current Hex = OO 0204, (Previous Hex = OO 0204)
Current Turn 0900-05 (#5), Summer, FINE
Tribe Movement: Move Not enough M.P's to move to S into PRAIRIE
";

#[test]
fn test_two_turn_batch_builds_one_map() {
    let (turns, map, _) = process(&[TURN_FIVE, TURN_FOUR], "0987");

    // Reports arrive out of order; the pipeline walks them ascending.
    assert_eq!(turns[0].id, Some(TurnId::parse("0900-04").unwrap()));
    assert_eq!(turns[1].id, Some(TurnId::parse("0900-05").unwrap()));

    // The tribe's path is stamped as visited turn by turn.
    let mid = map.get(&grid("OO 0203")).unwrap();
    assert_eq!(mid.terrain, Terrain::Prairie);
    assert_eq!(mid.visited, Some(TurnId::parse("0900-04").unwrap()));

    let end = map.get(&grid("OO 0205")).unwrap();
    assert_eq!(end.terrain, Terrain::Prairie);
    assert_eq!(end.visited, Some(TurnId::parse("0900-05").unwrap()));
}

#[test]
fn test_observations_accumulate_on_tiles() {
    let (_, map, _) = process(&[TURN_FOUR, TURN_FIVE], "0987");

    // Turn 4 walked into OO 0203 seeing a river; the scout saw a
    // settlement there on the way back north in the same turn.
    let tile = map.get(&grid("OO 0203")).unwrap();
    assert!(tile.has_edge(Direction::SouthEast, Edge::River));
    assert!(tile.has_settlement("Grey's Folly"));
    assert_eq!(tile.scouted, Some(TurnId::parse("0900-04").unwrap()));

    // Turn 4's second step found iron ore in OO 0204; turn 5's status
    // line added a ford where the tribe ended up.
    let camp = map.get(&grid("OO 0204")).unwrap();
    assert!(camp.resources.contains(&tribemap::codes::Resource::IronOre));
    let end = map.get(&grid("OO 0205")).unwrap();
    assert!(end.has_edge(Direction::NorthEast, Edge::Ford));
}

#[test]
fn test_encounters_are_stamped_with_turn_and_clan() {
    let (_, map, _) = process(&[TURN_FOUR, TURN_FIVE], "0987");

    let tile = map.get(&grid("OO 0205")).unwrap();
    assert_eq!(tile.encounters.len(), 1);
    let encounter = &tile.encounters[0];
    assert_eq!(encounter.unit.as_str(), "0300");
    assert_eq!(encounter.turn, TurnId::parse("0900-05").unwrap());
    assert!(!encounter.friendly);
}

#[test]
fn test_sources_record_contributing_units() {
    let (_, map, _) = process(&[TURN_FOUR, TURN_FIVE], "0987");

    let camp = map.get(&grid("OO 0204")).unwrap();
    assert!(camp.sources.contains(&UnitId::parse("0987").unwrap()));
    assert!(camp.sources.contains(&UnitId::parse("0987e1").unwrap()));
}

#[test]
fn test_follower_tracks_leader_across_turns() {
    let (turns, _, _) = process(&[TURN_FOUR, TURN_FIVE], "0987");

    let follower = &turns[0].units[&UnitId::parse("0987e1").unwrap()];
    assert_eq!(follower.final_location, Some(grid("OO 0204")));

    // Next turn the element stands where it followed to and fails to
    // move on; its location chain is unbroken.
    let element = &turns[1].units[&UnitId::parse("0987e1").unwrap()];
    assert_eq!(element.location, Some(grid("OO 0204")));
    assert_eq!(element.final_location, Some(grid("OO 0204")));
}

#[test]
fn test_emitted_document_round_trips_through_json() {
    let (turns, _, notes) = process(&[TURN_FOUR, TURN_FIVE], "0987");

    let document = emit_document(
        &turns,
        &notes,
        &EmitInfo {
            game: "TN1".to_string(),
            clan: UnitId::parse("0987").unwrap(),
            source: "turn4.txt, turn5.txt".to_string(),
            created: "1722470400".to_string(),
        },
    );

    assert_eq!(document.turn, "0900-05");
    assert_eq!(document.clans.len(), 1);
    assert_eq!(document.clans[0].units.len(), 2);
    assert_eq!(document.clans[0].units[0].moves.len(), 2);

    let json = serde_json::to_string(&document).unwrap();
    let back: tribemap::schema::Document = serde_json::from_str(&json).unwrap();
    assert_eq!(back.clans[0].units[0].id, "0987");
    assert_eq!(back.special_hexes[0].name, "Crystal Falls");
}

#[test]
fn test_status_line_derivation_matches_walk() {
    let (turns, _, _) = process(&[TURN_FOUR, TURN_FIVE], "0987");

    // The status line's observation is located at the unit's ending hex
    // by the derivation pass.
    let tribe = &turns[1].units[&UnitId::parse("0987").unwrap()];
    let status = tribe.steps.last().unwrap();
    assert_eq!(status.ending, Some(grid("OO 0205")));
    assert_eq!(
        status.observation.as_ref().unwrap().location,
        Some(grid("OO 0205"))
    );
}

#[test]
fn test_fleet_report_with_rings() {
    let report = "\
Fleet 0987f1, , Current Hex = OO 0302, (Previous Hex = OO 0202)
Current Turn 0900-04 (#4), Summer, FINE
Fleet Movement: Calm NE, Move NE-O-(O N NE)(Land NNE, Water SE)
";
    let (turns, map, _) = process(&[report], "0987");

    let fleet = &turns[0].units[&UnitId::parse("0987f1").unwrap()];
    assert_eq!(
        fleet.wind,
        Some((tribemap::codes::WindStrength::Calm, Direction::NorthEast))
    );

    // OO 0202 is absolute column 421 (odd): NE keeps the row.
    let at = map.get(&grid("OO 0302")).unwrap();
    assert_eq!(at.terrain, Terrain::Ocean);

    // The crow's nest fixed terrain two hexes out on each bearing.
    let landward = grid("OO 0302").checked_move2(Direction::North, Direction::NorthEast);
    let tile = map.get(&landward.unwrap()).unwrap();
    assert_eq!(tile.terrain, Terrain::UnknownLand);
}

#[test]
fn test_corrupt_step_fails_the_report() {
    let report = "\
Tribe 0987, , Current Hex = OO 0202, (Previous Hex = OO 0202)
Current Turn 0900-04 (#4), Summer, FINE
Tribe Movement: Move NE-PR\\garbled beyond recognition
";
    let config = MapConfig::default();
    assert!(parse_report(report, &config).is_err());
}
