//! Merge-engine properties over the public API: idempotence,
//! commutativity, and terrain reconciliation.

use tribemap::codes::{Bearing, Direction, Edge, Resource, Terrain};
use tribemap::coords::Coord;
use tribemap::core::turn::TurnId;
use tribemap::core::unit::UnitId;
use tribemap::report::moves::{CompassPoint, Observation};
use tribemap::tiles::{MergeContext, TileMap};

fn grid(text: &str) -> Coord {
    Coord::parse_grid(text).unwrap()
}

fn context(turn: &str) -> MergeContext {
    MergeContext {
        turn: TurnId::parse(turn).unwrap(),
        source: UnitId::parse("0987").unwrap(),
        observer_clan: UnitId::parse("0987").unwrap(),
        scouting: false,
    }
}

fn rich_observation() -> Observation {
    Observation {
        terrain: Terrain::Prairie,
        edges: vec![
            (Direction::South, Edge::River),
            (Direction::NorthEast, Edge::Ford),
        ],
        neighbors: vec![(Direction::North, Terrain::Ocean)],
        far_horizons: vec![CompassPoint {
            bearing: Bearing::SouthEast,
            terrain: Terrain::UnknownWater,
            location: None,
        }],
        encounters: vec![UnitId::parse("0300").unwrap()],
        settlements: vec!["Grey's Folly".to_string()],
        resources: vec![Resource::Salt],
        ..Observation::default()
    }
}

#[test]
fn test_merge_idempotent_over_full_observation() {
    let at = grid("MM 1510");
    let obs = rich_observation();
    let ctx = context("0900-04");

    let mut map = TileMap::new();
    map.merge_observation(at, &obs, &ctx);
    let once: Vec<_> = map.sorted_tiles().into_iter().cloned().collect();

    map.merge_observation(at, &obs, &ctx);
    let twice: Vec<_> = map.sorted_tiles().into_iter().cloned().collect();

    assert_eq!(once, twice);
}

#[test]
fn test_merge_commutes_without_terrain_conflict() {
    let at = grid("MM 1510");
    let ctx = context("0900-04");

    let first = Observation {
        terrain: Terrain::Prairie,
        edges: vec![(Direction::South, Edge::River)],
        ..Observation::default()
    };
    let second = Observation {
        terrain: Terrain::Prairie,
        resources: vec![Resource::Gold],
        settlements: vec!["Stonewatch".to_string()],
        ..Observation::default()
    };

    let mut forward = TileMap::new();
    forward.merge_observation(at, &first, &ctx);
    forward.merge_observation(at, &second, &ctx);

    let mut reverse = TileMap::new();
    reverse.merge_observation(at, &second, &ctx);
    reverse.merge_observation(at, &first, &ctx);

    assert_eq!(forward.get(&at).unwrap().terrain, reverse.get(&at).unwrap().terrain);
    assert_eq!(
        forward.get(&at).unwrap().resources,
        reverse.get(&at).unwrap().resources
    );
    assert_eq!(
        forward.get(&at).unwrap().settlements,
        reverse.get(&at).unwrap().settlements
    );
    assert_eq!(forward.get(&at).unwrap().edges, reverse.get(&at).unwrap().edges);
}

#[test]
fn test_placeholder_reconciliation_is_order_independent() {
    // UnknownMountain and LowSnowyMountains resolve to the specific
    // kind whichever arrives first.
    let at = grid("MM 1510");
    let ctx = context("0900-04");

    let partial = Observation {
        terrain: Terrain::UnknownMountain,
        ..Observation::default()
    };
    let specific = Observation {
        terrain: Terrain::LowSnowyMountains,
        ..Observation::default()
    };

    let mut forward = TileMap::new();
    forward.merge_observation(at, &partial, &ctx);
    forward.merge_observation(at, &specific, &ctx);
    assert_eq!(forward.get(&at).unwrap().terrain, Terrain::LowSnowyMountains);

    let mut reverse = TileMap::new();
    reverse.merge_observation(at, &specific, &ctx);
    reverse.merge_observation(at, &partial, &ctx);
    assert_eq!(reverse.get(&at).unwrap().terrain, Terrain::LowSnowyMountains);

    // Neither direction is a conflict worth a notice.
    assert!(forward.notes.is_empty());
    assert!(reverse.notes.is_empty());
}

#[test]
fn test_jungle_swamp_placeholder_reconciliation() {
    let at = grid("MM 1510");
    let ctx = context("0900-04");

    let partial = Observation {
        terrain: Terrain::UnknownJungleSwamp,
        ..Observation::default()
    };
    let specific = Observation { terrain: Terrain::Jungle, ..Observation::default() };

    let mut map = TileMap::new();
    map.merge_observation(at, &partial, &ctx);
    map.merge_observation(at, &specific, &ctx);
    assert_eq!(map.get(&at).unwrap().terrain, Terrain::Jungle);
}

#[test]
fn test_no_duplicates_under_dedup_keys() {
    let at = grid("MM 1510");
    let obs = rich_observation();

    let mut map = TileMap::new();
    map.merge_observation(at, &obs, &context("0900-04"));
    // A later turn re-observes the same facts.
    map.merge_observation(at, &obs, &context("0900-05"));

    let tile = map.get(&at).unwrap();
    assert_eq!(tile.edges.len(), 2);
    assert_eq!(tile.borders.len(), 1);
    assert_eq!(tile.far_horizons.len(), 1);
    assert_eq!(tile.resources.len(), 1);
    assert_eq!(tile.settlements.len(), 1);
    // Encounters de-dup by (turn, unit): two turns, two entries.
    assert_eq!(tile.encounters.len(), 2);
}

#[test]
fn test_settlement_dedup_is_case_insensitive() {
    let at = grid("MM 1510");
    let ctx = context("0900-04");

    let mut map = TileMap::new();
    let lower = Observation {
        settlements: vec!["grey's folly".to_string()],
        ..Observation::default()
    };
    let upper = Observation {
        settlements: vec!["Grey's Folly".to_string()],
        ..Observation::default()
    };
    map.merge_observation(at, &lower, &ctx);
    map.merge_observation(at, &upper, &ctx);

    assert_eq!(map.get(&at).unwrap().settlements.len(), 1);
}

#[test]
fn test_tiles_only_accumulate() {
    // Tiles are never destroyed: merging a sparser observation later
    // leaves everything already known in place.
    let at = grid("MM 1510");

    let mut map = TileMap::new();
    map.merge_observation(at, &rich_observation(), &context("0900-04"));
    let before = map.get(&at).unwrap().clone();

    map.merge_observation(at, &Observation::default(), &context("0900-05"));
    let after = map.get(&at).unwrap();

    assert_eq!(after.terrain, before.terrain);
    assert_eq!(after.edges, before.edges);
    assert_eq!(after.settlements, before.settlements);
    assert_eq!(after.resources, before.resources);
    assert_eq!(after.visited, Some(TurnId::parse("0900-05").unwrap()));
}

#[test]
fn test_fleet_blur_vs_ground_truth() {
    let at = grid("MM 1510");
    let ctx = context("0900-04");

    let mut map = TileMap::new();
    map.merge_observation(
        at,
        &Observation { terrain: Terrain::Lake, ..Observation::default() },
        &ctx,
    );
    map.merge_observation(
        at,
        &Observation { terrain: Terrain::UnknownWater, ..Observation::default() },
        &ctx,
    );

    assert_eq!(map.get(&at).unwrap().terrain, Terrain::Lake);
    assert!(map.notes.is_empty());
}
