//! Tile merge rules
//!
//! One observation merges into one tile. The rules are domain
//! reconciliation, not generic set union: partial terrain placeholders
//! unify with their refinements, fleet sightings never override ground
//! truth, and every collection appends only novel entries under its
//! de-duplication key.

use crate::codes::terrain::Terrain;
use crate::coords::Coord;
use crate::core::turn::TurnId;
use crate::core::unit::UnitId;
use crate::report::moves::Observation;
use crate::tiles::map::{Note, TileMap};
use crate::tiles::tile::Encounter;

/// Who is merging, when, and through which mechanism
#[derive(Debug, Clone)]
pub struct MergeContext {
    pub turn: TurnId,
    pub source: UnitId,
    pub observer_clan: UnitId,
    pub scouting: bool,
}

/// Reconcile an incoming terrain against what the tile already holds.
/// Returns the resulting terrain and a notice when ground truth was
/// overwritten.
fn merge_terrain(existing: Terrain, incoming: Terrain, at: Coord) -> (Terrain, Option<Note>) {
    if incoming.is_blank() || incoming == existing {
        return (existing, None);
    }
    if existing.is_blank() {
        return (incoming, None);
    }
    // Partial placeholders unify with their refinements either way round;
    // the specific kind wins.
    if existing.is_placeholder() && incoming.refines(existing) {
        return (incoming, None);
    }
    if incoming.is_placeholder() && existing.refines(incoming) {
        return (existing, None);
    }
    // A fleet's land/water blur never overrides a known terrain.
    if incoming.is_fleet_obscured() {
        return (existing, None);
    }
    let note = Note::info(format!(
        "useless tidbit: {at} was {}, now {}",
        existing.long_name(),
        incoming.long_name(),
    ));
    (incoming, Some(note))
}

impl TileMap {
    /// Merge one terrain fact into a tile without stamping a visit.
    /// Used for neighbour and far-horizon targets.
    fn merge_remote_terrain(&mut self, at: Coord, terrain: Terrain) {
        let tile = self.fetch(at);
        let (merged, note) = merge_terrain(tile.terrain, terrain, at);
        tile.terrain = merged;
        if let Some(note) = note {
            self.notes.push(note);
        }
    }

    /// Merge a step's observation into the tile at `at`
    pub fn merge_observation(&mut self, at: Coord, obs: &Observation, ctx: &MergeContext) {
        let mut pending: Vec<Note> = Vec::new();

        {
            let tile = self.fetch(at);

            // Input must arrive turn-sorted.
            let prior_visit = tile.visited;
            if let Some(previous) = prior_visit {
                if previous > ctx.turn {
                    pending.push(Note::warn(format!(
                        "observation for {at} arrived out of turn order ({} after {previous})",
                        ctx.turn,
                    )));
                }
            }
            tile.visited = Some(ctx.turn);
            if ctx.scouting {
                tile.scouted = Some(ctx.turn);
            }
            tile.sources.insert(ctx.source.clone());

            let (merged, note) = merge_terrain(tile.terrain, obs.terrain, at);
            tile.terrain = merged;
            pending.extend(note);

            for &(direction, edge) in &obs.edges {
                if !tile.has_edge(direction, edge) {
                    tile.edges.push((direction, edge));
                }
            }

            for &(direction, terrain) in &obs.neighbors {
                if !tile.has_border(direction, terrain) {
                    tile.borders.push((direction, terrain));
                }
            }

            for unit in &obs.encounters {
                if !tile.has_encounter(&ctx.turn, unit) {
                    tile.encounters.push(Encounter {
                        turn: ctx.turn,
                        unit: unit.clone(),
                        friendly: unit.is_in_clan(&ctx.observer_clan),
                    });
                }
            }

            for &resource in &obs.resources {
                if resource != crate::codes::Resource::None && !tile.resources.contains(&resource)
                {
                    tile.resources.push(resource);
                }
            }

            // A settlement surfacing on a hex that earlier turns saw bare
            // is worth one aggregated notice.
            let had_settlements = !tile.settlements.is_empty();
            let mut appeared = false;
            for name in &obs.settlements {
                if !tile.has_settlement(name) {
                    tile.settlements.push(name.clone());
                    appeared = true;
                }
            }
            if appeared && !had_settlements && prior_visit.is_some_and(|p| p < ctx.turn) {
                pending.push(Note::info(format!(
                    "settlement appeared at {at} in {}",
                    ctx.turn
                )));
            }

            for point in &obs.far_horizons {
                if !tile.has_far_horizon(point.bearing, point.terrain) {
                    tile.far_horizons.push((point.bearing, point.terrain));
                }
            }
        }

        // Border observations also fix the neighbour tile's terrain.
        for &(direction, terrain) in &obs.neighbors {
            match at.checked_add(direction) {
                Some(neighbor) => self.merge_remote_terrain(neighbor, terrain),
                None => pending.push(Note::warn(format!(
                    "neighbour of {at} to {direction} lies outside the world",
                ))),
            }
        }

        // Far horizons resolve two hexes out along their bearing.
        for point in &obs.far_horizons {
            let (first, second) = point.bearing.expand();
            let target = point
                .location
                .or_else(|| at.checked_move2(first, second));
            match target {
                Some(target) => self.merge_remote_terrain(target, point.terrain),
                None => pending.push(Note::warn(format!(
                    "far horizon {} of {at} lies outside the world",
                    point.bearing,
                ))),
            }
        }

        self.notes.append(&mut pending);
    }
}
