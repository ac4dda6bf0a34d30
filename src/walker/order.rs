//! Walk ordering
//!
//! A follower's destination is its leader's already-walked ending hex, so
//! leaders must walk first. Goes-to movers walk before everyone (their
//! destination depends on nothing), then the follow graph in dependency
//! order. Ties break by unit id, which makes the whole walk order a total
//! order and the tile map deterministic.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::core::error::{MapError, Result};
use crate::core::unit::UnitId;
use crate::report::moves::ParsedTurn;

/// The order units walk in this turn
pub fn order_units(turn: &ParsedTurn) -> Result<Vec<UnitId>> {
    let mut ordered: Vec<UnitId> = Vec::with_capacity(turn.units.len());

    // Goes-to movers first, by id (BTreeMap iteration is already sorted).
    for (unit, moves) in &turn.units {
        if moves.goes_to.is_some() {
            ordered.push(unit.clone());
        }
    }

    // The rest walk in topological order over follow edges. A follower
    // whose leader is absent from the turn (or walks in the goes-to
    // class) has its dependency already satisfied.
    let mut blocked_on: BTreeMap<UnitId, UnitId> = BTreeMap::new();
    let mut followers_of: BTreeMap<UnitId, Vec<UnitId>> = BTreeMap::new();
    let mut ready: BTreeSet<(bool, UnitId)> = BTreeSet::new();

    let in_class = |unit: &UnitId| {
        turn.units
            .get(unit)
            .is_some_and(|m| m.goes_to.is_none())
    };

    for (unit, moves) in &turn.units {
        if moves.goes_to.is_some() {
            continue;
        }
        match moves.follows.as_ref().filter(|leader| in_class(leader)) {
            Some(leader) => {
                blocked_on.insert(unit.clone(), leader.clone());
                followers_of
                    .entry(leader.clone())
                    .or_default()
                    .push(unit.clone());
            }
            None => {
                ready.insert((moves.follows.is_some(), unit.clone()));
            }
        }
    }

    while let Some(next) = ready.iter().next().cloned() {
        ready.remove(&next);
        let (_, unit) = next;
        if let Some(followers) = followers_of.remove(&unit) {
            for follower in followers {
                blocked_on.remove(&follower);
                ready.insert((true, follower));
            }
        }
        ordered.push(unit);
    }

    if !blocked_on.is_empty() {
        let cycle: Vec<String> = blocked_on.keys().map(|u| u.to_string()).collect();
        return Err(MapError::FollowsCycle(cycle.join(", ")));
    }

    Ok(ordered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::unit::UnitKind;
    use crate::coords::Coord;
    use crate::report::moves::MovesForUnit;

    fn unit(id: &str) -> UnitId {
        UnitId::parse(id).unwrap()
    }

    fn turn_with(movers: Vec<MovesForUnit>) -> ParsedTurn {
        let mut turn = ParsedTurn::default();
        for moves in movers {
            turn.units.insert(moves.unit.clone(), moves);
        }
        turn
    }

    fn mover(id: &str) -> MovesForUnit {
        MovesForUnit::new(unit(id), UnitKind::Tribe)
    }

    fn follower(id: &str, leader: &str) -> MovesForUnit {
        let mut moves = mover(id);
        moves.follows = Some(unit(leader));
        moves
    }

    fn goes_to(id: &str) -> MovesForUnit {
        let mut moves = mover(id);
        moves.goes_to = Some(Coord::parse_grid("OO 0505").unwrap());
        moves
    }

    #[test]
    fn test_goes_to_walk_first() {
        let turn = turn_with(vec![mover("0100"), goes_to("0900"), mover("0500")]);
        let order = order_units(&turn).unwrap();
        assert_eq!(order[0].as_str(), "0900");
        assert_eq!(order[1].as_str(), "0100");
        assert_eq!(order[2].as_str(), "0500");
    }

    #[test]
    fn test_followers_walk_after_leaders() {
        let turn = turn_with(vec![follower("0100", "0900"), mover("0900")]);
        let order = order_units(&turn).unwrap();
        assert_eq!(order[0].as_str(), "0900");
        assert_eq!(order[1].as_str(), "0100");
    }

    #[test]
    fn test_transitive_follows_chain() {
        // 0100 follows 0200 follows 0300: the chain walks leader-first.
        let turn = turn_with(vec![
            follower("0100", "0200"),
            follower("0200", "0300"),
            mover("0300"),
        ]);
        let order = order_units(&turn).unwrap();
        let ids: Vec<&str> = order.iter().map(|u| u.as_str()).collect();
        assert_eq!(ids, vec!["0300", "0200", "0100"]);
    }

    #[test]
    fn test_follower_of_absent_leader_is_ready() {
        let turn = turn_with(vec![follower("0100", "0900"), mover("0050")]);
        let order = order_units(&turn).unwrap();
        // Normal movers still walk before followers.
        assert_eq!(order[0].as_str(), "0050");
        assert_eq!(order[1].as_str(), "0100");
    }

    #[test]
    fn test_follows_cycle_is_fatal() {
        let turn = turn_with(vec![follower("0100", "0200"), follower("0200", "0100")]);
        assert!(matches!(order_units(&turn), Err(MapError::FollowsCycle(_))));
    }
}
