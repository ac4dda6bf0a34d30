//! Location derivation for schema emission
//!
//! The only coordinate a report states outright and trustworthily is each
//! unit's ending hex. Step locations are therefore derived: backwards
//! from the ending for a unit's own steps (undoing each successful
//! advance), forwards from the ending for its scouts (who depart after
//! the unit has finished moving). Compass points expand to their two-step
//! targets last, once every observation knows where it was made.

use crate::core::error::{MapError, Result};
use crate::report::moves::{MoveStep, ParsedTurn, ScoutMoves, ScryPayload, StepIntent};
use crate::tiles::Note;

/// Stamp derived locations across a batch of turns
pub fn stamp_turns(turns: &mut [ParsedTurn], notes: &mut Vec<Note>) -> Result<()> {
    for turn in turns {
        stamp_turn(turn, notes)?;
    }
    Ok(())
}

/// Stamp derived locations across one turn
pub fn stamp_turn(turn: &mut ParsedTurn, notes: &mut Vec<Note>) -> Result<()> {
    for moves in turn.units.values_mut() {
        let ending = moves.to_hex.coord();

        if let Some(ending) = ending {
            backward_walk(&mut moves.steps, ending);
        }

        for scout in &mut moves.scouts {
            check_scout(scout, &moves.unit)?;
            if let Some(ending) = ending {
                scout.start = Some(ending);
                forward_walk(&mut scout.steps, ending);
            }
        }

        for scry in &mut moves.scries {
            match &mut scry.payload {
                ScryPayload::Scout(scout) => {
                    check_scout(scout, &moves.unit)?;
                    scout.start = Some(scry.origin);
                    forward_walk(&mut scout.steps, scry.origin);
                }
                ScryPayload::Status(step) => {
                    step.ending = Some(scry.origin);
                }
            }
        }

        for step in all_steps(moves) {
            stamp_observation(step, notes);
        }
    }
    Ok(())
}

/// Iterate every step of a unit, its scouts, and its scries
fn all_steps(
    moves: &mut crate::report::moves::MovesForUnit,
) -> impl Iterator<Item = &mut MoveStep> {
    let scout_steps = moves.scouts.iter_mut().flat_map(|s| s.steps.iter_mut());
    let scry_steps = moves.scries.iter_mut().flat_map(|s| match &mut s.payload {
        ScryPayload::Scout(scout) => scout.steps.iter_mut(),
        ScryPayload::Status(step) => std::slice::from_mut(step).iter_mut(),
    });
    moves.steps.iter_mut().chain(scout_steps).chain(scry_steps)
}

/// Walk endings backwards from the unit's trusted ending hex.
///
/// The last step ends exactly at the reported ending. Moving to the
/// previous step, a successful advance is undone by stepping in the
/// opposite direction; anything else left the unit in place.
fn backward_walk(steps: &mut [MoveStep], ending: crate::coords::Coord) {
    let mut current = ending;
    for step in steps.iter_mut().rev() {
        step.ending = Some(current);
        if let StepIntent::Advance(direction) = &step.intent {
            if step.result.moved() {
                current = current.add(direction.opposite());
            }
        }
    }
}

/// Walk endings forwards from the scout's starting hex
fn forward_walk(steps: &mut [MoveStep], start: crate::coords::Coord) {
    let mut current = start;
    for step in steps.iter_mut() {
        if let StepIntent::Advance(direction) = &step.intent {
            if step.result.moved() {
                current = current.add(*direction);
            }
        }
        step.ending = Some(current);
    }
}

fn check_scout(scout: &ScoutMoves, unit: &crate::core::unit::UnitId) -> Result<()> {
    for step in &scout.steps {
        if matches!(step.intent, StepIntent::Follows(_) | StepIntent::GoesTo(_)) {
            return Err(MapError::InvariantScout { unit: unit.clone(), scout: scout.id });
        }
    }
    Ok(())
}

/// Copy the step's ending into its observation and expand compass points
fn stamp_observation(step: &mut MoveStep, notes: &mut Vec<Note>) {
    let Some(obs) = step.observation.as_mut() else {
        return;
    };
    obs.location = step.ending;

    let Some(origin) = obs.location else {
        return;
    };
    for point in &mut obs.far_horizons {
        let (first, second) = point.bearing.expand();
        point.location = origin.checked_move2(first, second);
        if point.location.is_none() {
            notes.push(Note::warn(format!(
                "far horizon {} of {origin} lies outside the world",
                point.bearing,
            )));
        }
    }
}
