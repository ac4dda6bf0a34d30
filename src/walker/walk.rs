//! Turn-by-turn replay
//!
//! The walker replays each turn's parsed step sequences across the
//! coordinate space and merges every step's observation into the tile
//! map. The one datum it trusts unconditionally is a unit's reported
//! ending hex; everything else is derived, cross-checked, or warned
//! about.

use ahash::AHashMap;

use crate::coords::Coord;
use crate::core::config::MapConfig;
use crate::core::error::{MapError, Result};
use crate::core::turn::TurnId;
use crate::core::unit::UnitId;
use crate::report::moves::{
    HexSpec, MoveStep, MovesForUnit, Observation, ParsedTurn, ScryPayload, StepIntent,
};
use crate::tiles::{MergeContext, Note, TileMap};
use crate::walker::order::order_units;

/// Replays parsed turns into a tile map
pub struct Walker<'a> {
    config: &'a MapConfig,
    observer_clan: UnitId,
    map: TileMap,
    /// Last known location of every unit across turns
    last_seen: AHashMap<UnitId, Coord>,
}

impl<'a> Walker<'a> {
    pub fn new(observer_clan: UnitId, config: &'a MapConfig) -> Self {
        Self {
            config,
            observer_clan,
            map: TileMap::new(),
            last_seen: AHashMap::new(),
        }
    }

    /// Walk a batch of turns, ascending. Returns the populated tile map.
    pub fn walk(mut self, turns: &mut [ParsedTurn]) -> Result<TileMap> {
        turns.sort_by_key(|t| t.id);

        let mut expected: Option<TurnId> = None;
        for turn in turns.iter_mut() {
            let id = turn.turn()?;
            if let Some(expected) = expected {
                if self.config.strict_turn_chain && expected != id {
                    return Err(MapError::TurnSkipMismatch { expected, found: id });
                }
            }
            expected = turn.next.or_else(|| Some(id.next()));

            self.walk_turn(turn, id)?;
        }

        Ok(self.map)
    }

    fn walk_turn(&mut self, turn: &mut ParsedTurn, id: TurnId) -> Result<()> {
        self.seed_locations(turn, id)?;

        for unit in order_units(turn)? {
            let moves = turn.units.get_mut(&unit).expect("ordered units exist");
            self.walk_unit(moves, id)?;
        }

        Ok(())
    }

    /// Step A: give every unit a starting location.
    ///
    /// The reported previous hex seeds it when present; otherwise the
    /// unit's own last-seen location; otherwise the parent lineage for a
    /// unit created this turn.
    fn seed_locations(&mut self, turn: &mut ParsedTurn, id: TurnId) -> Result<()> {
        for (unit, moves) in turn.units.iter_mut() {
            match &moves.from_hex {
                HexSpec::Grid(coord) => {
                    moves.location = Some(*coord);
                    // Recorded as last-seen so a unit created this turn
                    // can inherit its lineage's location before the
                    // lineage has walked.
                    self.last_seen.insert(unit.clone(), *coord);
                }
                HexSpec::Obscured(_) => {
                    if !self.config.tolerates_obscured_origin(&id) {
                        return Err(MapError::ObscuredOrigin { unit: unit.clone(), turn: id });
                    }
                }
                HexSpec::NotAvailable => {}
            }
        }

        for (unit, moves) in turn.units.iter_mut() {
            if moves.location.is_some() {
                continue;
            }
            if let Some(coord) = self.last_seen.get(unit) {
                moves.location = Some(*coord);
                continue;
            }
            // A unit first seen this turn starts where its lineage was.
            let mut lineage = unit.parent();
            while let Some(ancestor) = lineage {
                if let Some(coord) = self.last_seen.get(&ancestor) {
                    moves.location = Some(*coord);
                    break;
                }
                lineage = ancestor.parent();
            }
            if moves.location.is_none() {
                // Fatal for this unit only; the turn keeps walking.
                self.map.notes.push(Note::warn(
                    MapError::MissingParent { unit: unit.clone() }.to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Step C: replay one unit's steps, then its scouts and scries
    fn walk_unit(&mut self, moves: &mut MovesForUnit, id: TurnId) -> Result<()> {
        let Some(start) = moves.location else {
            return Ok(()); // seeding already warned
        };

        let context = MergeContext {
            turn: id,
            source: moves.unit.clone(),
            observer_clan: self.observer_clan.clone(),
            scouting: false,
        };

        let mut current = start;
        for step in &moves.steps {
            current = self.walk_step(step, current, &context);
        }

        // The reported ending hex is the one trusted datum; a forward
        // walk that lands elsewhere means the start was stale.
        if let Some(reported) = moves.to_hex.coord() {
            if reported != current {
                self.map.notes.push(Note::warn(format!(
                    "unit {} walked to {current} but reports ending at {reported}",
                    moves.unit,
                )));
                current = reported;
            }
        }

        moves.final_location = Some(current);
        self.last_seen.insert(moves.unit.clone(), current);

        let scout_context = MergeContext { scouting: true, ..context.clone() };
        for scout in &mut moves.scouts {
            scout.start = Some(current);
            let mut at = current;
            for step in &scout.steps {
                self.check_scout_step(step, &moves.unit, scout.id)?;
                at = self.walk_step(step, at, &scout_context);
            }
        }

        for scry in &mut moves.scries {
            match &scry.payload {
                ScryPayload::Scout(scout) => {
                    let mut at = scry.origin;
                    for step in &scout.steps {
                        self.check_scout_step(step, &moves.unit, scout.id)?;
                        at = self.walk_step(step, at, &scout_context);
                    }
                }
                ScryPayload::Status(step) => {
                    self.walk_step(step, scry.origin, &context);
                }
            }
        }

        Ok(())
    }

    /// Replay one step from `current`; returns the hex the step ended on
    fn walk_step(&mut self, step: &MoveStep, current: Coord, context: &MergeContext) -> Coord {
        let at = match &step.intent {
            StepIntent::Still => current,
            StepIntent::Follows(leader) => {
                match self.last_seen.get(leader) {
                    Some(coord) => *coord,
                    None => {
                        self.map.notes.push(Note::warn(format!(
                            "unit {} follows {leader}, whose location is unknown",
                            context.source,
                        )));
                        current
                    }
                }
            }
            StepIntent::GoesTo(coord) => *coord,
            StepIntent::Advance(direction) => {
                if step.result.moved() {
                    current.add(*direction)
                } else {
                    current
                }
            }
        };

        // A step with no observation still visits its tile.
        let empty = Observation::default();
        let observation = step.observation.as_ref().unwrap_or(&empty);
        self.map.merge_observation(at, observation, context);

        at
    }

    fn check_scout_step(&self, step: &MoveStep, unit: &UnitId, scout: u8) -> Result<()> {
        if matches!(step.intent, StepIntent::Follows(_) | StepIntent::GoesTo(_)) {
            return Err(MapError::InvariantScout { unit: unit.clone(), scout });
        }
        Ok(())
    }
}

/// Walk a batch of parsed turns into a tile map
pub fn walk_turns(
    turns: &mut [ParsedTurn],
    observer_clan: &UnitId,
    config: &MapConfig,
) -> Result<TileMap> {
    Walker::new(observer_clan.clone(), config).walk(turns)
}
