//! Integration test: floor generation and entity spawning
//!
//! Generates many seeded floors and checks the structural guarantees every
//! floor must hold: one exit inside the last room, disjoint rooms, full
//! connectivity from the spawn, and collision-free entity placement.

use delve::core::config::GameConfig;
use delve::core::error::{EntityKind, GenerationError};
use delve::dungeon::generation::{generate_floor, generate_layout};
use delve::dungeon::spawning::{enemy_hp_for_level, SpawnCounts};
use delve::dungeon::types::{Grid, Position, Tile, CARDINAL_OFFSETS};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::{HashSet, VecDeque};

const SEEDS: u64 = 200;

/// Every walkable tile reachable from `start` by 4-way steps.
fn reachable_from(grid: &Grid, start: Position) -> HashSet<Position> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(pos) = queue.pop_front() {
        for (dx, dy) in CARDINAL_OFFSETS {
            let next = pos.offset(dx, dy);
            if grid.is_walkable(next) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

#[test]
fn test_exactly_one_exit_in_last_room() {
    let config = GameConfig::default();
    for seed in 0..SEEDS {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let layout = generate_layout(&config, &mut rng).unwrap();

        assert_eq!(layout.grid.count(Tile::Exit), 1, "seed {seed}");
        let last = layout.rooms.last().unwrap();
        assert!(last.contains(layout.exit), "seed {seed}");
        assert_eq!(layout.exit, last.center());
        assert_eq!(layout.player_spawn, layout.rooms[0].center());
    }
}

#[test]
fn test_rooms_never_touch() {
    let config = GameConfig::default();
    for seed in 0..SEEDS {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let layout = generate_layout(&config, &mut rng).unwrap();
        for (i, a) in layout.rooms.iter().enumerate() {
            for b in layout.rooms.iter().skip(i + 1) {
                assert!(!a.intersects(b), "seed {seed}: {a:?} touches {b:?}");
            }
        }
    }
}

#[test]
fn test_every_walkable_tile_reachable_from_spawn() {
    let config = GameConfig::default();
    for seed in 0..SEEDS {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let layout = generate_layout(&config, &mut rng).unwrap();
        let reachable = reachable_from(&layout.grid, layout.player_spawn);

        for room in &layout.rooms {
            assert!(reachable.contains(&room.center()), "seed {seed}");
        }
        let walkable = layout
            .grid
            .iter()
            .filter(|(_, tile)| tile.is_walkable())
            .count();
        assert_eq!(reachable.len(), walkable, "seed {seed}");
    }
}

#[test]
fn test_map_border_stays_solid() {
    let config = GameConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let layout = generate_layout(&config, &mut rng).unwrap();
    let (w, h) = (layout.grid.width(), layout.grid.height());
    for x in 0..w {
        assert!(layout.grid.is_wall(Position::new(x, 0)));
        assert!(layout.grid.is_wall(Position::new(x, h - 1)));
    }
    for y in 0..h {
        assert!(layout.grid.is_wall(Position::new(0, y)));
        assert!(layout.grid.is_wall(Position::new(w - 1, y)));
    }
}

#[test]
fn test_entities_get_distinct_free_tiles() {
    let config = GameConfig::default();
    for seed in 0..SEEDS {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let floor = generate_floor(1, &config, &mut rng).unwrap();

        let counts = SpawnCounts::for_rooms(floor.rooms.len());
        assert_eq!(floor.enemies.len(), counts.enemies);
        assert_eq!(floor.consumables.len(), counts.consumables);
        assert_eq!(floor.containers.len(), counts.containers);

        let mut taken = HashSet::from([floor.player_spawn, floor.exit]);
        let positions = floor
            .enemies
            .iter()
            .map(|e| e.position)
            .chain(floor.consumables.iter().map(|c| c.position))
            .chain(floor.containers.iter().map(|c| c.position));
        for pos in positions {
            assert_eq!(floor.grid.get(pos), Some(Tile::Floor), "seed {seed}");
            assert!(taken.insert(pos), "seed {seed}: {pos:?} reused");
        }
    }
}

#[test]
fn test_enemies_scale_with_floor_level() {
    let config = GameConfig::default();
    for level in [1, 2, 5, 10] {
        let mut rng = ChaCha8Rng::seed_from_u64(u64::from(level));
        let floor = generate_floor(level, &config, &mut rng).unwrap();
        assert_eq!(floor.level, level);
        for enemy in &floor.enemies {
            assert_eq!(enemy.max_hp, enemy_hp_for_level(level));
            assert_eq!(enemy.hp, enemy.max_hp);
            assert!((4..=7).contains(&enemy.leash));
            assert!(!enemy.is_aggro());
        }
    }
    assert_eq!(enemy_hp_for_level(1), 4);
    assert_eq!(enemy_hp_for_level(4), 9);
}

#[test]
fn test_same_seed_same_floor() {
    let config = GameConfig::default();
    let a = generate_floor(3, &config, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
    let b = generate_floor(3, &config, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_cramped_map_reports_placement_failure() {
    // A single 2x2 room leaves three free tiles around the spawn, and every
    // floor needs at least four enemies
    let config = GameConfig {
        map_width: 9,
        map_height: 9,
        room_min_size: 2,
        room_max_size: 2,
        max_rooms: 1,
        max_placement_attempts: 3,
        ..GameConfig::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    match generate_floor(1, &config, &mut rng) {
        Err(GenerationError::PlacementExhausted { attempts, kind }) => {
            assert_eq!(attempts, 3);
            assert_eq!(kind, EntityKind::Enemy);
        }
        other => panic!("expected placement failure, got {other:?}"),
    }
}
