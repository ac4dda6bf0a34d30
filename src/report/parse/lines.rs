//! Line-level grammar
//!
//! Each section line is dispatched on its head: the location line (always
//! first), turn info, movement, follows/goes-to, scouts, status and scry
//! lines. Anything else in a section - inventories, morale chatter - is
//! not map data and is skipped.

use nom::character::complete::space0;
use nom::combinator::opt;
use nom::Parser;

use crate::codes::direction::Direction;
use crate::codes::result::MoveResult;
use crate::codes::wind::WindStrength;
use crate::core::config::MapConfig;
use crate::core::error::{MapError, Result};
use crate::core::turn::Season;
use crate::core::unit::UnitId;
use crate::report::moves::{
    MoveStep, MovesForUnit, ParsedTurn, ScoutMoves, Scry, ScryPayload, StepIntent,
};
use crate::report::parse::clauses::{parse_step, parse_steps, StepKind, StepPos};
use crate::report::parse::tokens;
use crate::report::section::{NumberedLine, Section};

fn bad_line(number: usize, reason: impl Into<String>) -> MapError {
    MapError::BadLine { line: number, reason: reason.into() }
}

fn strip_prefix_ci<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    if text.len() >= prefix.len() && text[..prefix.len()].eq_ignore_ascii_case(prefix) {
        Some(&text[prefix.len()..])
    } else {
        None
    }
}

/// Strip an optional `:` (the normaliser may have scrubbed it) and any
/// surrounding spaces
fn strip_colon(text: &str) -> &str {
    let text = text.trim_start();
    text.strip_prefix(':').unwrap_or(text).trim_start()
}

/// Case-insensitive find
fn find_ci(text: &str, needle: &str) -> Option<usize> {
    text.to_ascii_lowercase().find(&needle.to_ascii_lowercase())
}

/// Parse the section's first line:
/// `<Kind> <unit>, <nickname?>, Current Hex = <hex>, (Previous Hex = <hex>)`
pub fn parse_location_line(line: &NumberedLine, moves: &mut MovesForUnit) -> Result<()> {
    let text = &line.text;
    let current_at = find_ci(text, "current hex")
        .ok_or_else(|| bad_line(line.number, "location line carries no Current Hex"))?;

    // Between the unit id and Current Hex sits an optional nickname.
    let head = &text[..current_at];
    let mut fields = head.split(',').skip(1).map(str::trim).collect::<Vec<_>>();
    // Drop the empty field left of "Current Hex".
    if fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    let nickname = fields.join(", ");
    if !nickname.is_empty() {
        moves.nickname = Some(nickname);
    }

    let after = strip_assignment(&text[current_at + "current hex".len()..]);
    let (rest, to_hex) = tokens::hex_spec(after)
        .map_err(|_| bad_line(line.number, format!("bad current hex in {:?}", line.text)))?;
    moves.to_hex = to_hex;

    if let Some(previous_at) = find_ci(rest, "previous hex") {
        let after = strip_assignment(&rest[previous_at + "previous hex".len()..]);
        let (_, from_hex) = tokens::hex_spec(after)
            .map_err(|_| bad_line(line.number, format!("bad previous hex in {:?}", line.text)))?;
        moves.from_hex = from_hex;
    }

    Ok(())
}

/// Skip an `=` (possibly scrubbed to a space) and surrounding spaces
fn strip_assignment(text: &str) -> &str {
    let text = text.trim_start();
    text.strip_prefix('=').unwrap_or(text).trim_start()
}

/// Parse a turn-info line:
/// `Current Turn YYYY-MM (#N), <Season>, <Weather>[ Next Turn YYYY-MM (#N), DD/MM/YYYY]`
pub fn parse_turn_info(
    line: &NumberedLine,
    rest: &str,
    turn: &mut ParsedTurn,
) -> Result<()> {
    let rest = rest.trim_start();
    let (rest, (id, _, number)) = (tokens::turn_id, space0, opt(tokens::turn_number))
        .parse(rest)
        .map_err(|_| bad_line(line.number, format!("bad turn info in {:?}", line.text)))?;

    // Season, weather, and the optional Next Turn tail.
    let mut season = None;
    let mut weather = None;
    let mut next = None;

    let tail = rest.trim_start().trim_start_matches(',').trim();
    let (head, next_text) = match find_ci(tail, "next turn") {
        Some(at) => (&tail[..at], Some(&tail[at + "next turn".len()..])),
        None => (tail, None),
    };

    let mut fields = head.split(',').map(str::trim).filter(|f| !f.is_empty());
    if let Some(field) = fields.next() {
        season = Some(Season::from_name(field).ok_or_else(|| {
            bad_line(line.number, format!("unknown season {field:?}"))
        })?);
    }
    if let Some(field) = fields.next() {
        weather = Some(field.to_string());
    }

    if let Some(next_text) = next_text {
        let (_, (id, _, _)) = (tokens::turn_id, space0, opt(tokens::turn_number))
            .parse(next_text.trim_start())
            .map_err(|_| bad_line(line.number, format!("bad next turn in {:?}", line.text)))?;
        next = Some(id);
    }

    // Sections must agree about the turn they belong to.
    if let Some(existing) = turn.id {
        if existing != id {
            return Err(bad_line(
                line.number,
                format!("turn info {id} disagrees with earlier {existing}"),
            ));
        }
        return Ok(());
    }

    turn.id = Some(id);
    turn.number = number;
    turn.season = season;
    turn.weather = weather;
    turn.next = next;
    Ok(())
}

/// `Tribe Movement: Move <steps>` - the land-unit movement line. The
/// report generator uses the `Tribe` keyword for every land unit kind.
pub fn parse_tribe_movement(
    line: &NumberedLine,
    rest: &str,
    moves: &mut MovesForUnit,
) -> Result<()> {
    require_no_movement(line, moves)?;
    let rest = strip_colon(rest);
    let rest = strip_prefix_ci(rest, "move")
        .ok_or_else(|| bad_line(line.number, "movement line carries no Move keyword"))?;
    moves.steps = parse_steps(rest, line.number, StepKind::Unit)?;
    moves.moved = true;
    Ok(())
}

/// `Fleet Movement: <Wind> <Dir>, Move <steps>`
pub fn parse_fleet_movement(
    line: &NumberedLine,
    rest: &str,
    moves: &mut MovesForUnit,
) -> Result<()> {
    require_no_movement(line, moves)?;
    let mut rest = strip_colon(rest);

    if let Some((strength_text, tail)) = rest.trim_start().split_once(' ') {
        if let Some(strength) = WindStrength::from_name(strength_text) {
            let tail = tail.trim_start();
            let (dir_text, tail) = tail.split_once(&[',', ' '][..]).unwrap_or((tail, ""));
            let direction = Direction::from_code(dir_text).ok_or_else(|| {
                bad_line(line.number, format!("bad wind direction {dir_text:?}"))
            })?;
            moves.wind = Some((strength, direction));
            rest = tail.trim_start().trim_start_matches(',').trim_start();
        }
    }

    let rest = strip_prefix_ci(rest.trim_start(), "move")
        .ok_or_else(|| bad_line(line.number, "fleet movement line carries no Move keyword"))?;
    moves.steps = parse_steps(rest, line.number, StepKind::Unit)?;
    moves.moved = true;
    Ok(())
}

/// `Tribe Follows <unit>`
pub fn parse_follows(line: &NumberedLine, rest: &str, moves: &mut MovesForUnit) -> Result<()> {
    require_no_movement(line, moves)?;
    let (_, unit) = tokens::unit_id(rest.trim())
        .map_err(|_| bad_line(line.number, format!("bad follows target in {:?}", line.text)))?;
    moves.steps = vec![MoveStep::new(
        StepIntent::Follows(unit.clone()),
        MoveResult::Succeeded,
    )];
    moves.follows = Some(unit);
    moves.moved = true;
    Ok(())
}

/// `Tribe Goes to <coord>`
pub fn parse_goes_to(line: &NumberedLine, rest: &str, moves: &mut MovesForUnit) -> Result<()> {
    require_no_movement(line, moves)?;
    let (_, coord) = tokens::grid_coord(rest.trim())
        .map_err(|_| bad_line(line.number, format!("bad goes-to target in {:?}", line.text)))?;
    moves.steps = vec![MoveStep::new(StepIntent::GoesTo(coord), MoveResult::Succeeded)];
    moves.goes_to = Some(coord);
    moves.moved = true;
    Ok(())
}

fn require_no_movement(line: &NumberedLine, moves: &mut MovesForUnit) -> Result<()> {
    if moves.moved {
        Err(bad_line(
            line.number,
            format!("unit {} has more than one movement line", moves.unit),
        ))
    } else {
        Ok(())
    }
}

/// `Scout N: Scout <steps>` (the doubled keyword is the report
/// generator's own habit)
pub fn parse_scout_line(
    line: &NumberedLine,
    rest: &str,
    config: &MapConfig,
    moves: &mut MovesForUnit,
) -> Result<()> {
    let rest = rest.trim_start();
    let (digit_text, tail) = rest.split_at(rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len()));
    let id: u8 = digit_text
        .parse()
        .map_err(|_| bad_line(line.number, "scout line carries no index"))?;
    if id < 1 || id > config.max_scouts_per_unit {
        return Err(bad_line(line.number, format!("scout index {id} out of range")));
    }
    if moves.scouts.iter().any(|s| s.id == id) {
        return Err(bad_line(line.number, format!("duplicate scout {id}")));
    }

    let tail = strip_colon(tail);
    let tail = strip_prefix_ci(tail, "scout").map(str::trim_start).unwrap_or(tail);
    let steps = parse_steps(tail, line.number, StepKind::Scout { first: true })?;
    moves.scouts.push(ScoutMoves { id, steps, start: None });
    Ok(())
}

/// `<unit> Status: <terrain>, <clauses>` - the unit reports the hex it
/// sits on
pub fn parse_status_line(
    line: &NumberedLine,
    unit: &UnitId,
    rest: &str,
    moves: &mut MovesForUnit,
) -> Result<()> {
    let (reporter, rest) = match tokens::unit_id(rest.trim_start()) {
        Ok((tail, reporter)) => (reporter, tail),
        Err(_) => return Err(bad_line(line.number, "status line carries no unit id")),
    };
    if reporter != *unit {
        return Err(bad_line(
            line.number,
            format!("status line for {reporter} inside section of {unit}"),
        ));
    }
    let rest = strip_prefix_ci(rest.trim_start(), "status")
        .ok_or_else(|| bad_line(line.number, "status line carries no Status keyword"))?;
    let rest = strip_colon(rest);
    let step = parse_step(rest, StepPos { line: line.number, step: 1 }, StepKind::Status)?;
    moves.steps.push(step);
    Ok(())
}

/// `Scry <coord>: <scout line | status line>` - remote sensing from an
/// explicit origin
pub fn parse_scry_line(
    line: &NumberedLine,
    rest: &str,
    config: &MapConfig,
    moves: &mut MovesForUnit,
) -> Result<()> {
    let rest = rest.trim_start();
    let (rest, origin) = tokens::grid_coord(rest)
        .map_err(|_| bad_line(line.number, format!("bad scry origin in {:?}", line.text)))?;
    let rest = strip_colon(rest);

    if let Some(tail) = strip_prefix_ci(rest, "scout ") {
        let mut probe = MovesForUnit::new(moves.unit.clone(), moves.kind);
        parse_scout_line(line, tail, config, &mut probe)?;
        let scout = probe.scouts.pop().expect("scout line parsed");
        moves.scries.push(Scry { origin, payload: ScryPayload::Scout(scout) });
        return Ok(());
    }

    // Otherwise the payload is a status report at the scried hex.
    let (rest, _reporter) = tokens::unit_id(rest)
        .map_err(|_| bad_line(line.number, format!("bad scry payload in {:?}", line.text)))?;
    let rest = strip_prefix_ci(rest.trim_start(), "status")
        .ok_or_else(|| bad_line(line.number, format!("bad scry payload in {:?}", line.text)))?;
    let rest = strip_colon(rest);
    let step = parse_step(rest, StepPos { line: line.number, step: 1 }, StepKind::Status)?;
    moves.scries.push(Scry { origin, payload: ScryPayload::Status(step) });
    Ok(())
}

/// Parse one unit section into its movement container
pub fn parse_section(
    section: &Section,
    config: &MapConfig,
    turn: &mut ParsedTurn,
) -> Result<MovesForUnit> {
    let mut moves = MovesForUnit::new(section.unit.clone(), section.kind);

    let header = section.lines.first().expect("section always has its header");
    parse_location_line(header, &mut moves)?;

    for line in &section.lines[1..] {
        let text = line.text.trim_start();

        if let Some(rest) = strip_prefix_ci(text, "current turn") {
            parse_turn_info(line, rest, turn)?;
        } else if let Some(rest) = strip_prefix_ci(text, "tribe movement") {
            parse_tribe_movement(line, rest, &mut moves)?;
        } else if let Some(rest) = strip_prefix_ci(text, "fleet movement") {
            parse_fleet_movement(line, rest, &mut moves)?;
        } else if let Some(rest) = strip_prefix_ci(text, "tribe follows ") {
            parse_follows(line, rest, &mut moves)?;
        } else if let Some(rest) = strip_prefix_ci(text, "tribe goes to ") {
            parse_goes_to(line, rest, &mut moves)?;
        } else if let Some(rest) = strip_prefix_ci(text, "scout ") {
            parse_scout_line(line, rest, config, &mut moves)?;
        } else if let Some(rest) = strip_prefix_ci(text, "scry ") {
            parse_scry_line(line, rest, config, &mut moves)?;
        } else if status_line_head(text, &section.unit) {
            parse_status_line(line, &section.unit, text, &mut moves)?;
        }
        // Everything else (inventories, morale, goods) is not map data.
    }

    Ok(moves)
}

/// Does this line start with `<section unit> Status`?
fn status_line_head(text: &str, unit: &UnitId) -> bool {
    match tokens::unit_id(text) {
        Ok((rest, reporter)) => {
            reporter == *unit
                && strip_prefix_ci(rest.trim_start(), "status").is_some()
        }
        Err(_) => false,
    }
}
