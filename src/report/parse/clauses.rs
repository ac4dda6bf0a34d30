//! Step and clause grammar
//!
//! A movement line is a backslash-separated list of steps; a step is a
//! comma-separated list of clauses. The first clause, when present, is the
//! attempt outcome; every later clause refines the observation of the hex
//! the step ended on. Two decorations may trail the final clause: an inner
//! ring `-(...)` of neighbour terrains seen from the deck and an outer
//! ring `(...)` of far horizons seen from the crow's nest.
//!
//! Recognition is strict: a clause that fails every alternative aborts the
//! report with its line, step and clause position.

use nom::character::complete::char;
use nom::combinator::all_consuming;
use nom::Parser;

use crate::codes::direction::Direction;
use crate::codes::edge::Edge;
use crate::codes::result::MoveResult;
use crate::codes::terrain::Terrain;
use crate::codes::Bearing;
use crate::core::error::{MapError, Result};
use crate::core::unit::UnitId;
use crate::report::moves::{CompassPoint, ItemSight, MoveStep, Observation, StepIntent};
use crate::report::parse::tokens;

/// Where a step came from; changes which first clauses are legal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// A unit's own movement line
    Unit,
    /// A scout's movement line; `first` marks the first step
    Scout { first: bool },
    /// A status line; the first clause is a bare terrain name
    Status,
}

/// Position of a step for error reporting (1-based)
#[derive(Debug, Clone, Copy)]
pub struct StepPos {
    pub line: usize,
    pub step: usize,
}

/// The recognised attempt outcome of a step
#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    Advance { direction: Direction, terrain: Terrain },
    ProhibitedWater { direction: Direction, terrain: Terrain },
    ProhibitedTerrain { direction: Direction, terrain: Terrain },
    NoFord { direction: Direction },
    NoPass { direction: Direction },
    Exhausted { direction: Direction, terrain: Terrain },
    Still,
    DidNotReturn,
    Status { terrain: Terrain },
}

/// A non-outcome clause
#[derive(Debug, Clone, PartialEq, Eq)]
enum Clause {
    Edge { edge: Edge, directions: Vec<Direction> },
    Neighbor { terrain: Terrain, directions: Vec<Direction> },
    Patrolled(Vec<UnitId>),
    Encounter(UnitId),
    FoundResource(crate::codes::Resource),
    FoundItem(ItemSight),
    Settlement(String),
    /// Recognised but carrying no map data
    Chatter,
}

fn strip_prefix_ci<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    if text.len() >= prefix.len() && text[..prefix.len()].eq_ignore_ascii_case(prefix) {
        Some(&text[prefix.len()..])
    } else {
        None
    }
}

/// `<dir>-<terrain-code>`: an advance that succeeded
fn advance(clause: &str) -> Option<Outcome> {
    let (_, (direction, _, terrain)) =
        all_consuming((tokens::direction, char('-'), tokens::terrain_code))
            .parse(clause)
            .ok()?;
    Some(Outcome::Advance { direction, terrain })
}

/// The English failure sentences. Each names the direction tried and,
/// except for the ford case, what stood in the way.
fn failure_sentence(clause: &str) -> Option<Outcome> {
    if let Some(rest) = strip_prefix_ci(clause, "can't move on ") {
        let (terrain, rest) = if let Some(r) = strip_prefix_ci(rest, "lake") {
            (Terrain::Lake, r)
        } else if let Some(r) = strip_prefix_ci(rest, "ocean") {
            (Terrain::Ocean, r)
        } else {
            return None;
        };
        let direction = direction_of_hex(rest)?;
        return Some(Outcome::ProhibitedWater { direction, terrain });
    }

    if let Some(rest) = strip_prefix_ci(clause, "cannot move wagons into ") {
        let (name, tail) = split_on_ci(rest, " to ")?;
        let terrain = Terrain::from_long_name(name.trim())?;
        let direction = direction_of_hex_tail(tail)?;
        return Some(Outcome::ProhibitedTerrain { direction, terrain });
    }

    if let Some(rest) = strip_prefix_ci(clause, "no ford on river") {
        let direction = direction_of_hex(rest)?;
        return Some(Outcome::NoFord { direction });
    }

    if let Some(rest) = strip_prefix_ci(clause, "no pass into mountain") {
        let direction = direction_of_hex(rest)?;
        return Some(Outcome::NoPass { direction });
    }

    if let Some(rest) = strip_prefix_ci(clause, "not enough m.p's to move to ") {
        let (dir_text, terrain_text) = split_on_ci(rest, " into ")?;
        let direction = Direction::from_code(dir_text.trim())?;
        let terrain = Terrain::from_long_name(terrain_text.trim())?;
        return Some(Outcome::Exhausted { direction, terrain });
    }

    None
}

/// `" to <dir> of HEX"` tail shared by the failure sentences
fn direction_of_hex(rest: &str) -> Option<Direction> {
    let rest = strip_prefix_ci(rest.trim_start(), "to ")?;
    direction_of_hex_tail(rest)
}

/// `"<dir> of HEX"` once the `to` is gone
fn direction_of_hex_tail(rest: &str) -> Option<Direction> {
    let (dir_text, tail) = split_on_ci(rest.trim(), " of ")?;
    if !tail.trim().eq_ignore_ascii_case("hex") {
        return None;
    }
    Direction::from_code(dir_text.trim())
}

/// Case-insensitive split on the first occurrence of `needle`
fn split_on_ci<'a>(text: &'a str, needle: &str) -> Option<(&'a str, &'a str)> {
    let lower = text.to_ascii_lowercase();
    let at = lower.find(&needle.to_ascii_lowercase())?;
    Some((&text[..at], &text[at + needle.len()..]))
}

/// Try the outcome alternatives legal for this step kind
fn outcome(clause: &str, kind: StepKind) -> Option<Outcome> {
    if let Some(out) = advance(clause).or_else(|| failure_sentence(clause)) {
        return Some(out);
    }
    if matches!(kind, StepKind::Scout { .. }) {
        if clause.eq_ignore_ascii_case("still") {
            return Some(Outcome::Still);
        }
        if clause.eq_ignore_ascii_case("group did not return") {
            return Some(Outcome::DidNotReturn);
        }
    }
    if kind == StepKind::Status {
        if let Some(terrain) = Terrain::from_long_name(clause.trim()) {
            return Some(Outcome::Status { terrain });
        }
    }
    None
}

/// A feature name followed by one or more directions (`"Ford NE NW"`)
fn edge_clause(clause: &str) -> Option<Clause> {
    let tokens: Vec<&str> = clause.split_whitespace().collect();
    for take in [2, 1] {
        if tokens.len() <= take {
            continue;
        }
        let name = tokens[..take].join(" ");
        let Some(edge) = Edge::from_name(&name) else {
            continue;
        };
        let directions: Option<Vec<Direction>> =
            tokens[take..].iter().map(|t| Direction::from_code(t)).collect();
        if let Some(directions) = directions {
            return Some(Clause::Edge { edge, directions });
        }
    }
    None
}

/// A water or mountain code followed by directions (`"O N NW"`). Only
/// terrain tall or flat enough to be seen from an adjacent hex is legal.
fn neighbor_clause(clause: &str) -> Option<Clause> {
    let mut tokens = clause.split_whitespace();
    let terrain = Terrain::from_code(tokens.next()?)?;
    if !terrain.is_visible_from_neighbor() {
        return None;
    }
    let directions: Option<Vec<Direction>> = tokens.map(Direction::from_code).collect();
    let directions = directions?;
    if directions.is_empty() {
        return None;
    }
    Some(Clause::Neighbor { terrain, directions })
}

fn patrolled_clause(clause: &str) -> Option<Clause> {
    let rest = strip_prefix_ci(clause, "patrolled and found")?;
    let units: Option<Vec<UnitId>> = rest
        .split_whitespace()
        .map(|t| UnitId::parse(t).ok())
        .collect();
    let units = units?;
    if units.is_empty() {
        return None;
    }
    Some(Clause::Patrolled(units))
}

fn find_clause(clause: &str) -> Option<Clause> {
    let rest = strip_prefix_ci(clause, "find ").map(str::trim).unwrap_or(clause);
    if let Some(resource) = crate::codes::Resource::from_name(rest) {
        return Some(Clause::FoundResource(resource));
    }
    let mut tokens = rest.split_whitespace();
    let quantity: u32 = tokens.next()?.parse().ok()?;
    let name = tokens.collect::<Vec<_>>().join(" ");
    if name.is_empty() {
        return None;
    }
    Some(Clause::FoundItem(ItemSight { quantity, name }))
}

/// Capitalised words with nothing else to be: a settlement name
fn settlement_clause(clause: &str) -> Option<Clause> {
    let words: Vec<&str> = clause.split_whitespace().collect();
    if words.is_empty() {
        return None;
    }
    let named = words.iter().all(|word| {
        let mut chars = word.chars();
        chars.next().is_some_and(|c| c.is_ascii_uppercase())
            && chars.all(|c| c.is_ascii_alphabetic() || c == '\'')
    });
    if named {
        Some(Clause::Settlement(words.join(" ")))
    } else {
        None
    }
}

const CHATTER: [&str; 3] = [
    "no groups found",
    "nothing of interest found",
    "insufficient capacity to carry",
];

/// Classify a non-outcome clause
fn observation_clause(clause: &str) -> Option<Clause> {
    if CHATTER.iter().any(|c| clause.eq_ignore_ascii_case(c)) {
        return Some(Clause::Chatter);
    }
    if let Some(found) = edge_clause(clause) {
        return Some(found);
    }
    if let Some(found) = neighbor_clause(clause) {
        return Some(found);
    }
    if let Some(found) = patrolled_clause(clause) {
        return Some(found);
    }
    if let Ok((_, unit)) = all_consuming(tokens::unit_id).parse(clause) {
        return Some(Clause::Encounter(unit));
    }
    if let Some(found) = find_clause(clause) {
        return Some(found);
    }
    settlement_clause(clause)
}

/// Split a step's trailing ring decorations off its clause text.
///
/// Returns (clauses, inner ring, outer ring).
fn split_rings(step: &str) -> (&str, Option<&str>, Option<&str>) {
    let mut text = step.trim_end();
    let mut inner = None;
    let mut outer = None;

    for _ in 0..2 {
        if !text.ends_with(')') {
            break;
        }
        let Some(open) = matching_open(text) else {
            break;
        };
        let body = &text[open + 1..text.len() - 1];
        let before = &text[..open];
        if before.ends_with('-') {
            if inner.is_some() {
                break;
            }
            inner = Some(body);
            text = before[..before.len() - 1].trim_end();
        } else {
            if outer.is_some() || inner.is_some() {
                break;
            }
            outer = Some(body);
            text = before.trim_end();
        }
    }

    (text, inner, outer)
}

/// Index of the `(` matching the final `)` of `text`
fn matching_open(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (at, c) in text.char_indices().rev() {
        match c {
            ')' => depth += 1,
            '(' => {
                depth -= 1;
                if depth == 0 {
                    return Some(at);
                }
            }
            _ => {}
        }
    }
    None
}

/// Parse an inner ring body: comma-separated `CODE DIRS` entries
fn parse_inner_ring(body: &str, obs: &mut Observation) -> Option<()> {
    for entry in body.split(',') {
        let mut tokens = entry.split_whitespace();
        let terrain = Terrain::from_code(tokens.next()?)?;
        let mut any = false;
        for token in tokens {
            obs.neighbors.push((Direction::from_code(token)?, terrain));
            any = true;
        }
        if !any {
            return None;
        }
    }
    Some(())
}

/// Parse an outer ring body: `Land BEARINGS` / `Water BEARINGS` entries
fn parse_outer_ring(body: &str, obs: &mut Observation) -> Option<()> {
    for entry in body.split(',') {
        let mut tokens = entry.split_whitespace();
        let terrain = match tokens.next()? {
            t if t.eq_ignore_ascii_case("land") => Terrain::UnknownLand,
            t if t.eq_ignore_ascii_case("water") => Terrain::UnknownWater,
            _ => return None,
        };
        let mut any = false;
        for token in tokens {
            obs.far_horizons.push(CompassPoint {
                bearing: Bearing::from_code(token)?,
                terrain,
                location: None,
            });
            any = true;
        }
        if !any {
            return None;
        }
    }
    Some(())
}

fn slug(text: &str) -> String {
    const MAX: usize = 40;
    if text.len() <= MAX {
        text.to_string()
    } else {
        format!("{}...", &text[..MAX])
    }
}

/// Build the step skeleton an outcome implies
fn step_from_outcome(out: &Outcome) -> MoveStep {
    let mut obs = Observation::default();
    let (intent, result) = match out {
        Outcome::Advance { direction, terrain } => {
            obs.terrain = *terrain;
            (StepIntent::Advance(*direction), MoveResult::Succeeded)
        }
        Outcome::ProhibitedWater { direction, terrain } => {
            obs.neighbors.push((*direction, *terrain));
            (StepIntent::Advance(*direction), MoveResult::Prohibited)
        }
        Outcome::ProhibitedTerrain { direction, terrain } => {
            obs.neighbors.push((*direction, *terrain));
            (StepIntent::Advance(*direction), MoveResult::Prohibited)
        }
        Outcome::NoFord { direction } => {
            obs.edges.push((*direction, Edge::River));
            (StepIntent::Advance(*direction), MoveResult::Blocked)
        }
        Outcome::NoPass { direction } => {
            obs.neighbors.push((*direction, Terrain::UnknownMountain));
            (StepIntent::Advance(*direction), MoveResult::Prohibited)
        }
        Outcome::Exhausted { direction, terrain } => {
            obs.neighbors.push((*direction, *terrain));
            (
                StepIntent::Advance(*direction),
                MoveResult::ExhaustedMovementPoints,
            )
        }
        Outcome::Still => (StepIntent::Still, MoveResult::StayedInPlace),
        Outcome::DidNotReturn => (StepIntent::Still, MoveResult::Vanished),
        Outcome::Status { terrain } => {
            obs.terrain = *terrain;
            (StepIntent::Still, MoveResult::StatusLine)
        }
    };
    let mut step = MoveStep::new(intent, result);
    if !obs.is_empty() {
        step.observation = Some(obs);
    }
    step
}

fn apply_clause(found: Clause, obs: &mut Observation) {
    match found {
        Clause::Edge { edge, directions } => {
            for direction in directions {
                obs.edges.push((direction, edge));
            }
        }
        Clause::Neighbor { terrain, directions } => {
            for direction in directions {
                obs.neighbors.push((direction, terrain));
            }
        }
        Clause::Patrolled(units) => obs.encounters.extend(units),
        Clause::Encounter(unit) => obs.encounters.push(unit),
        Clause::FoundResource(resource) => obs.resources.push(resource),
        Clause::FoundItem(item) => obs.items.push(item),
        Clause::Settlement(name) => obs.settlements.push(name),
        Clause::Chatter => {}
    }
}

/// Parse one step's text into a `MoveStep`
pub fn parse_step(text: &str, pos: StepPos, kind: StepKind) -> Result<MoveStep> {
    let (clause_text, inner, outer) = split_rings(text);

    let clauses: Vec<&str> = clause_text
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect();

    let first = clauses.first().copied().ok_or_else(|| MapError::StepRecognition {
        line: pos.line,
        step: pos.step,
        clause: 1,
        slug: slug(text.trim()),
    })?;

    let Some(out) = outcome(first, kind) else {
        // Distinguish an out-of-order observation from plain noise.
        return if observation_clause(first).is_some() {
            Err(MapError::OrderViolation {
                line: pos.line,
                step: pos.step,
                clause: 1,
                what: "observation clause before the attempt outcome".to_string(),
            })
        } else {
            Err(MapError::StepRecognition {
                line: pos.line,
                step: pos.step,
                clause: 1,
                slug: slug(first),
            })
        };
    };

    if out == Outcome::Still && kind != (StepKind::Scout { first: true }) {
        return Err(MapError::OrderViolation {
            line: pos.line,
            step: pos.step,
            clause: 1,
            what: "Still is only legal as a scout's first step".to_string(),
        });
    }

    let mut step = step_from_outcome(&out);
    let mut obs = step.observation.take().unwrap_or_default();

    for (index, clause) in clauses.iter().enumerate().skip(1) {
        let number = index + 1;
        if outcome(clause, kind).is_some() {
            return Err(MapError::OrderViolation {
                line: pos.line,
                step: pos.step,
                clause: number,
                what: "second attempt outcome in one step".to_string(),
            });
        }
        match observation_clause(clause) {
            Some(found) => apply_clause(found, &mut obs),
            None => {
                return Err(MapError::StepRecognition {
                    line: pos.line,
                    step: pos.step,
                    clause: number,
                    slug: slug(clause),
                })
            }
        }
    }

    let ring_error = |clause: usize| MapError::StepRecognition {
        line: pos.line,
        step: pos.step,
        clause,
        slug: slug(text.trim()),
    };
    if let Some(body) = inner {
        parse_inner_ring(body, &mut obs).ok_or_else(|| ring_error(clauses.len() + 1))?;
    }
    if let Some(body) = outer {
        parse_outer_ring(body, &mut obs).ok_or_else(|| ring_error(clauses.len() + 1))?;
    }

    if !obs.is_empty() {
        step.observation = Some(obs);
    }
    Ok(step)
}

/// Parse a backslash-separated step list
pub fn parse_steps(text: &str, line: usize, kind: StepKind) -> Result<Vec<MoveStep>> {
    let mut steps = Vec::new();
    for (index, part) in text.split('\\').enumerate() {
        if part.trim().is_empty() {
            continue;
        }
        let step_kind = match kind {
            StepKind::Scout { .. } => StepKind::Scout { first: index == 0 },
            other => other,
        };
        let pos = StepPos { line, step: index + 1 };
        steps.push(parse_step(part, pos, step_kind)?);
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos() -> StepPos {
        StepPos { line: 3, step: 1 }
    }

    fn unit_step(text: &str) -> MoveStep {
        parse_step(text, pos(), StepKind::Unit).unwrap()
    }

    #[test]
    fn test_advance_step() {
        let step = unit_step("NE-PR");
        assert_eq!(step.intent, StepIntent::Advance(Direction::NorthEast));
        assert_eq!(step.result, MoveResult::Succeeded);
        assert_eq!(step.observation.unwrap().terrain, Terrain::Prairie);
    }

    #[test]
    fn test_advance_with_edge_and_neighbors() {
        let step = unit_step("NE-PR, River S, O N NW");
        let obs = step.observation.unwrap();
        assert_eq!(obs.edges, vec![(Direction::South, Edge::River)]);
        assert_eq!(
            obs.neighbors,
            vec![
                (Direction::North, Terrain::Ocean),
                (Direction::NorthWest, Terrain::Ocean),
            ]
        );
    }

    #[test]
    fn test_water_prohibition() {
        let step = unit_step("Can't Move on Ocean to NW of HEX");
        assert_eq!(step.intent, StepIntent::Advance(Direction::NorthWest));
        assert_eq!(step.result, MoveResult::Prohibited);
        let obs = step.observation.unwrap();
        assert_eq!(obs.neighbors, vec![(Direction::NorthWest, Terrain::Ocean)]);
    }

    #[test]
    fn test_wagon_prohibition() {
        let step = unit_step("Cannot Move Wagons into SWAMP to S of HEX");
        assert_eq!(step.result, MoveResult::Prohibited);
        let obs = step.observation.unwrap();
        assert_eq!(obs.neighbors, vec![(Direction::South, Terrain::Swamp)]);
    }

    #[test]
    fn test_no_ford_blocks_with_river_edge() {
        let step = unit_step("No Ford on River to SE of HEX");
        assert_eq!(step.result, MoveResult::Blocked);
        let obs = step.observation.unwrap();
        assert_eq!(obs.edges, vec![(Direction::SouthEast, Edge::River)]);
    }

    #[test]
    fn test_no_pass_reports_unknown_mountain() {
        let step = unit_step("No Pass into Mountain to N of HEX");
        assert_eq!(step.result, MoveResult::Prohibited);
        let obs = step.observation.unwrap();
        assert_eq!(
            obs.neighbors,
            vec![(Direction::North, Terrain::UnknownMountain)]
        );
    }

    #[test]
    fn test_exhausted_movement_points() {
        let step = unit_step("Not enough M.P's to move to NE into SWAMP");
        assert_eq!(step.result, MoveResult::ExhaustedMovementPoints);
        let obs = step.observation.unwrap();
        assert_eq!(obs.neighbors, vec![(Direction::NorthEast, Terrain::Swamp)]);
    }

    #[test]
    fn test_still_only_for_scout_first_step() {
        let step = parse_step("Still", pos(), StepKind::Scout { first: true }).unwrap();
        assert_eq!(step.intent, StepIntent::Still);
        assert_eq!(step.result, MoveResult::StayedInPlace);

        assert!(matches!(
            parse_step("Still", pos(), StepKind::Scout { first: false }),
            Err(MapError::OrderViolation { .. })
        ));
        assert!(parse_step("Still", pos(), StepKind::Unit).is_err());
    }

    #[test]
    fn test_group_did_not_return() {
        let step =
            parse_step("Group did not return", pos(), StepKind::Scout { first: true }).unwrap();
        assert_eq!(step.result, MoveResult::Vanished);
    }

    #[test]
    fn test_status_step() {
        let step = parse_step("PRAIRIE, River S, 1234", pos(), StepKind::Status).unwrap();
        assert_eq!(step.result, MoveResult::StatusLine);
        let obs = step.observation.unwrap();
        assert_eq!(obs.terrain, Terrain::Prairie);
        assert_eq!(obs.edges, vec![(Direction::South, Edge::River)]);
        assert_eq!(obs.encounters[0].as_str(), "1234");
    }

    #[test]
    fn test_encounters_and_patrol() {
        let step = unit_step("NE-PR, 0987c1, Patrolled and found 1234 5678");
        let obs = step.observation.unwrap();
        let ids: Vec<&str> = obs.encounters.iter().map(|u| u.as_str()).collect();
        assert_eq!(ids, vec!["0987c1", "1234", "5678"]);
    }

    #[test]
    fn test_resources_and_items() {
        let step = unit_step("NE-PR, Find Iron Ore, Find 3 Horses, Salt");
        let obs = step.observation.unwrap();
        assert_eq!(
            obs.resources,
            vec![crate::codes::Resource::IronOre, crate::codes::Resource::Salt]
        );
        assert_eq!(
            obs.items,
            vec![ItemSight { quantity: 3, name: "Horses".to_string() }]
        );
    }

    #[test]
    fn test_settlement_fallback() {
        let step = unit_step("NE-PR, Grey's Folly");
        let obs = step.observation.unwrap();
        assert_eq!(obs.settlements, vec!["Grey's Folly".to_string()]);
    }

    #[test]
    fn test_chatter_discarded() {
        let step = unit_step("NE-PR, Nothing of interest found, No groups found");
        let obs = step.observation.unwrap();
        assert!(obs.settlements.is_empty());
        assert!(obs.encounters.is_empty());
    }

    #[test]
    fn test_inner_and_outer_rings() {
        let step = unit_step("NE-O, Ford SE-(O NW, L SW)(Land N NNE, Water SE)");
        let obs = step.observation.unwrap();
        assert!(obs
            .neighbors
            .contains(&(Direction::NorthWest, Terrain::Ocean)));
        assert!(obs.neighbors.contains(&(Direction::SouthWest, Terrain::Lake)));
        assert_eq!(obs.far_horizons.len(), 3);
        assert_eq!(obs.far_horizons[0].bearing, Bearing::North);
        assert_eq!(obs.far_horizons[0].terrain, Terrain::UnknownLand);
        assert_eq!(obs.far_horizons[2].terrain, Terrain::UnknownWater);
    }

    #[test]
    fn test_order_violation_observation_first() {
        assert!(matches!(
            parse_step("River S, NE-PR", pos(), StepKind::Unit),
            Err(MapError::OrderViolation { clause: 1, .. })
        ));
    }

    #[test]
    fn test_order_violation_second_outcome() {
        assert!(matches!(
            parse_step("NE-PR, SW-GH", pos(), StepKind::Unit),
            Err(MapError::OrderViolation { clause: 2, .. })
        ));
    }

    #[test]
    fn test_unrecognised_clause_positions() {
        let err = parse_step("NE-PR, utter gibberish here", pos(), StepKind::Unit).unwrap_err();
        match err {
            MapError::StepRecognition { line, step, clause, slug } => {
                assert_eq!(line, 3);
                assert_eq!(step, 1);
                assert_eq!(clause, 2);
                assert!(slug.contains("gibberish"));
            }
            other => panic!("expected StepRecognition, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_steps_splits_on_backslash() {
        let steps =
            parse_steps("NE-PR\\SE-GH, River S", 7, StepKind::Unit).unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].intent, StepIntent::Advance(Direction::SouthEast));
    }

    #[test]
    fn test_scout_still_then_moves() {
        let steps = parse_steps("Still\\NE-PR", 7, StepKind::Scout { first: true }).unwrap();
        assert_eq!(steps[0].intent, StepIntent::Still);
        assert_eq!(steps[1].intent, StepIntent::Advance(Direction::NorthEast));
    }
}
