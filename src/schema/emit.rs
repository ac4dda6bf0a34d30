//! Projection from parsed and walked turns into the schema document

use std::collections::BTreeMap;

use crate::core::unit::UnitId;
use crate::report::moves::{MoveStep, ParsedTurn, StepIntent};
use crate::schema::document::{
    ClanDoc, CompassPointDoc, Document, EdgeDoc, MoveDoc, ObservationDoc, ScoutDoc,
    SpecialHexDoc, StepDoc, UnitDoc, SCHEMA_VERSION,
};
use crate::tiles::Note;

/// Header fields the caller supplies
#[derive(Debug, Clone)]
pub struct EmitInfo {
    pub game: String,
    pub clan: UnitId,
    pub source: String,
    pub created: String,
}

/// Project a batch of turns (already stamped and walked) into a document
pub fn emit_document(turns: &[ParsedTurn], notes: &[Note], info: &EmitInfo) -> Document {
    let last_turn = turns
        .iter()
        .filter_map(|t| t.id)
        .max()
        .map(|t| t.to_string())
        .unwrap_or_default();

    let mut special_hexes: Vec<SpecialHexDoc> = Vec::new();
    for turn in turns {
        for hex in &turn.special_hexes {
            let doc = SpecialHexDoc {
                name: hex.name.clone(),
                location: hex.location.to_grid(),
            };
            if !special_hexes.iter().any(|s| s.name == doc.name) {
                special_hexes.push(doc);
            }
        }
    }

    // Group every unit's moves by clan, then by unit, across the batch.
    let mut units: BTreeMap<UnitId, UnitDoc> = BTreeMap::new();
    for turn in turns {
        let turn_name = turn.id.map(|t| t.to_string()).unwrap_or_default();
        for (unit, moves) in &turn.units {
            let entry = units.entry(unit.clone()).or_insert_with(|| UnitDoc {
                id: unit.to_string(),
                nickname: None,
                ending_location: None,
                moves: Vec::new(),
                scouts: Vec::new(),
            });
            if entry.nickname.is_none() {
                entry.nickname = moves.nickname.clone();
            }
            entry.ending_location = moves
                .final_location
                .or_else(|| moves.to_hex.coord())
                .map(|c| c.to_grid());

            entry.moves.push(MoveDoc {
                turn: turn_name.clone(),
                follows: moves.follows.as_ref().map(|u| u.to_string()),
                goes_to: moves.goes_to.map(|c| c.to_grid()),
                steps: moves.steps.iter().map(step_doc).collect(),
            });

            for scout in &moves.scouts {
                entry.scouts.push(ScoutDoc {
                    id: scout.id,
                    turn: turn_name.clone(),
                    starting_location: scout.start.map(|c| c.to_grid()),
                    steps: scout.steps.iter().map(step_doc).collect(),
                });
            }
        }
    }

    let mut clans: BTreeMap<UnitId, ClanDoc> = BTreeMap::new();
    for (unit, doc) in units {
        let clan = unit.clan();
        clans
            .entry(clan.clone())
            .or_insert_with(|| ClanDoc { id: clan.to_string(), units: Vec::new() })
            .units
            .push(doc);
    }

    Document {
        schema_version: SCHEMA_VERSION.to_string(),
        game: info.game.clone(),
        turn: last_turn,
        clan: info.clan.to_string(),
        source: info.source.clone(),
        created: info.created.clone(),
        special_hexes,
        clans: clans.into_values().collect(),
        notes: notes.to_vec(),
    }
}

fn step_doc(step: &MoveStep) -> StepDoc {
    let (intent, advance, follows, goes_to, still) = match &step.intent {
        StepIntent::Advance(direction) => {
            ("advance", Some(direction.code().to_string()), None, None, false)
        }
        StepIntent::Follows(unit) => ("follows", None, Some(unit.to_string()), None, false),
        StepIntent::GoesTo(coord) => ("goesTo", None, None, Some(coord.to_grid()), false),
        StepIntent::Still => ("still", None, None, None, true),
    };

    StepDoc {
        intent: intent.to_string(),
        advance,
        follows,
        goes_to,
        still,
        result: step.result.schema_name().to_string(),
        ending_location: step.ending.map(|c| c.to_grid()),
        observation: step.observation.as_ref().map(observation_doc),
    }
}

fn observation_doc(obs: &crate::report::moves::Observation) -> ObservationDoc {
    ObservationDoc {
        terrain: (!obs.terrain.is_blank()).then(|| obs.terrain.long_name().to_string()),
        edges: obs
            .edges
            .iter()
            .map(|(direction, edge)| EdgeDoc {
                direction: direction.code().to_string(),
                edge: edge.name().to_string(),
            })
            .collect(),
        encounters: obs.encounters.iter().map(|u| u.to_string()).collect(),
        settlements: obs.settlements.clone(),
        resources: obs.resources.iter().map(|r| r.name().to_string()).collect(),
        compass_points: obs
            .far_horizons
            .iter()
            .map(|point| CompassPointDoc {
                bearing: point.bearing.code().to_string(),
                neighbor_terrain: point.terrain.long_name().to_string(),
                location: point.location.map(|c| c.to_grid()),
            })
            .collect(),
    }
}
