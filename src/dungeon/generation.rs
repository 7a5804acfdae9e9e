//! Floor generation: random room placement joined by L-shaped tunnels.

use super::floor::{DungeonFloor, Layout};
use super::spawning::spawn_entities;
use super::types::{Grid, Position, Room, Tile};
use crate::core::config::GameConfig;
use crate::core::error::{GenerationError, GenerationResult};
use rand::Rng;

/// Generates a complete floor: carved layout plus enemies, pickups and chests.
pub fn generate_floor(
    level: u32,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> GenerationResult<DungeonFloor> {
    let layout = generate_layout(config, rng)?;
    let mut floor = DungeonFloor::from_layout(level, layout);
    spawn_entities(&mut floor, config, rng)?;

    tracing::debug!(
        level,
        rooms = floor.rooms.len(),
        enemies = floor.enemies.len(),
        spawn = ?floor.player_spawn,
        exit = ?floor.exit,
        "generated floor"
    );
    Ok(floor)
}

/// Places up to `config.max_rooms` candidate rooms. A candidate that
/// intersects an accepted room is dropped, never retried. Each accepted
/// room after the first is tunnelled to the one accepted just before it,
/// which keeps the whole chain connected.
pub fn generate_layout(config: &GameConfig, rng: &mut impl Rng) -> GenerationResult<Layout> {
    config.validate()?;

    let mut grid = Grid::new(config.map_width, config.map_height);
    let mut rooms: Vec<Room> = Vec::new();

    for _ in 0..config.max_rooms {
        let candidate = roll_room(config, rng);

        if rooms.iter().any(|room| room.intersects(&candidate)) {
            continue;
        }

        carve_room(&mut grid, &candidate);

        if let Some(previous) = rooms.last() {
            carve_tunnel(&mut grid, previous.center(), candidate.center(), rng);
        }

        rooms.push(candidate);
    }

    // The first candidate never has anything to intersect
    let (Some(first), Some(last)) = (rooms.first().copied(), rooms.last().copied()) else {
        return Err(GenerationError::InvalidConfig(
            "no room could be placed".to_string(),
        ));
    };

    let player_spawn = first.center();
    let exit = last.center();
    grid.set(exit, Tile::Exit);

    if rooms.len() < 2 {
        tracing::debug!(rooms = rooms.len(), "degenerate floor, spawn and exit coincide");
    }

    Ok(Layout {
        grid,
        rooms,
        player_spawn,
        exit,
    })
}

fn roll_room(config: &GameConfig, rng: &mut impl Rng) -> Room {
    let width = rng.gen_range(config.room_min_size..=config.room_max_size);
    let height = rng.gen_range(config.room_min_size..=config.room_max_size);
    let x = rng.gen_range(1..=config.map_width - width - 2);
    let y = rng.gen_range(1..=config.map_height - height - 2);
    Room::new(x, y, width, height)
}

fn carve_room(grid: &mut Grid, room: &Room) {
    for y in room.y..room.y + room.height {
        for x in room.x..room.x + room.width {
            grid.set(Position::new(x, y), Tile::Floor);
        }
    }
}

fn carve_horizontal(grid: &mut Grid, x1: i32, x2: i32, y: i32) {
    for x in x1.min(x2)..=x1.max(x2) {
        grid.set(Position::new(x, y), Tile::Floor);
    }
}

fn carve_vertical(grid: &mut Grid, y1: i32, y2: i32, x: i32) {
    for y in y1.min(y2)..=y1.max(y2) {
        grid.set(Position::new(x, y), Tile::Floor);
    }
}

/// Two-segment corridor between centers, bending at a random corner.
fn carve_tunnel(grid: &mut Grid, from: Position, to: Position, rng: &mut impl Rng) {
    if rng.gen_bool(0.5) {
        carve_horizontal(grid, from.x, to.x, from.y);
        carve_vertical(grid, from.y, to.y, to.x);
    } else {
        carve_vertical(grid, from.y, to.y, from.x);
        carve_horizontal(grid, from.x, to.x, to.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::{HashSet, VecDeque};

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    /// BFS over walkable tiles with 4-way adjacency
    fn reachable_from(grid: &Grid, start: Position) -> HashSet<Position> {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(pos) = queue.pop_front() {
            for (dx, dy) in crate::dungeon::types::CARDINAL_OFFSETS {
                let next = pos.offset(dx, dy);
                if grid.is_walkable(next) && visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        visited
    }

    #[test]
    fn test_exactly_one_exit() {
        let config = GameConfig::default();
        for seed in 0..50 {
            let layout = generate_layout(&config, &mut rng(seed)).unwrap();
            assert_eq!(layout.grid.count(Tile::Exit), 1, "seed {seed}");
            assert_eq!(layout.grid.get(layout.exit), Some(Tile::Exit));
        }
    }

    #[test]
    fn test_exit_in_last_room_and_spawn_in_first() {
        let config = GameConfig::default();
        for seed in 0..50 {
            let layout = generate_layout(&config, &mut rng(seed)).unwrap();
            let first = layout.rooms.first().unwrap();
            let last = layout.rooms.last().unwrap();
            assert!(last.contains(layout.exit));
            assert_eq!(layout.exit, last.center());
            assert_eq!(layout.player_spawn, first.center());
        }
    }

    #[test]
    fn test_rooms_pairwise_disjoint() {
        let config = GameConfig::default();
        for seed in 0..50 {
            let layout = generate_layout(&config, &mut rng(seed)).unwrap();
            for (i, a) in layout.rooms.iter().enumerate() {
                for b in layout.rooms.iter().skip(i + 1) {
                    assert!(!a.intersects(b), "seed {seed}: {a:?} touches {b:?}");
                }
            }
        }
    }

    #[test]
    fn test_rooms_respect_border_margin() {
        let config = GameConfig::default();
        for seed in 0..50 {
            let layout = generate_layout(&config, &mut rng(seed)).unwrap();
            for room in &layout.rooms {
                assert!(room.x >= 1 && room.y >= 1);
                assert!(room.x + room.width <= config.map_width - 2);
                assert!(room.y + room.height <= config.map_height - 2);
                assert!((config.room_min_size..=config.room_max_size).contains(&room.width));
                assert!((config.room_min_size..=config.room_max_size).contains(&room.height));
            }
        }
    }

    #[test]
    fn test_all_walkable_tiles_reachable_from_spawn() {
        let config = GameConfig::default();
        for seed in 0..50 {
            let layout = generate_layout(&config, &mut rng(seed)).unwrap();
            let reachable = reachable_from(&layout.grid, layout.player_spawn);
            let walkable = layout
                .grid
                .iter()
                .filter(|(_, t)| t.is_walkable())
                .count();
            assert_eq!(reachable.len(), walkable, "seed {seed}");
            for room in &layout.rooms {
                assert!(reachable.contains(&room.center()));
            }
        }
    }

    #[test]
    fn test_rooms_are_carved() {
        let config = GameConfig::default();
        let layout = generate_layout(&config, &mut rng(7)).unwrap();
        for room in &layout.rooms {
            for y in room.y..room.y + room.height {
                for x in room.x..room.x + room.width {
                    assert!(layout.grid.is_walkable(Position::new(x, y)));
                }
            }
        }
    }

    #[test]
    fn test_single_room_spawn_equals_exit() {
        let config = GameConfig {
            max_rooms: 1,
            ..GameConfig::default()
        };
        let layout = generate_layout(&config, &mut rng(3)).unwrap();
        assert_eq!(layout.rooms.len(), 1);
        assert_eq!(layout.player_spawn, layout.exit);
        assert_eq!(layout.grid.count(Tile::Exit), 1);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let config = GameConfig::default();
        let a = generate_layout(&config, &mut rng(99)).unwrap();
        let b = generate_layout(&config, &mut rng(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let config = GameConfig {
            map_width: 8,
            ..GameConfig::default()
        };
        assert!(generate_layout(&config, &mut rng(1)).is_err());
    }

    #[test]
    fn test_generate_floor_sets_level() {
        let floor = generate_floor(3, &GameConfig::default(), &mut rng(11)).unwrap();
        assert_eq!(floor.level, 3);
        assert!(!floor.enemies.is_empty());
    }
}
