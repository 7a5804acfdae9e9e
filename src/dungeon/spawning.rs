//! Places enemies, heal pickups and chests on free floor tiles.

use super::floor::{Consumable, Container, DungeonFloor};
use super::types::{Grid, Position, Room, Tile};
use crate::core::config::GameConfig;
use crate::core::constants::{
    ENEMY_BASE_HP, HEAL_BASE, LEASH_MAX, LEASH_MIN, MIN_CONSUMABLES, MIN_CONTAINERS, MIN_ENEMIES,
};
use crate::core::error::{EntityKind, GenerationError, GenerationResult};
use crate::enemies::types::Enemy;
use rand::Rng;
use std::collections::HashSet;

/// How many of each entity a floor gets, based on its room count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnCounts {
    pub enemies: usize,
    pub consumables: usize,
    pub containers: usize,
}

impl SpawnCounts {
    pub fn for_rooms(room_count: usize) -> Self {
        Self {
            enemies: MIN_ENEMIES.max(room_count / 2),
            consumables: MIN_CONSUMABLES.max(room_count / 3),
            containers: MIN_CONTAINERS.max(room_count / 4),
        }
    }
}

/// `3 + level + floor(level / 2)`
pub fn enemy_hp_for_level(level: u32) -> u32 {
    ENEMY_BASE_HP + level + level / 2
}

pub fn heal_amount_for_level(level: u32) -> u32 {
    HEAL_BASE + level / 2
}

/// Fills the floor with entities. Every entity gets its own tile, and none
/// sits on the player spawn or the exit.
pub fn spawn_entities(
    floor: &mut DungeonFloor,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> GenerationResult<()> {
    let counts = SpawnCounts::for_rooms(floor.rooms.len());
    let mut used: HashSet<Position> = HashSet::from([floor.player_spawn, floor.exit]);
    let attempts = config.max_placement_attempts;

    let hp = enemy_hp_for_level(floor.level);
    for _ in 0..counts.enemies {
        let position = claim_free_tile(
            &floor.grid,
            &floor.rooms,
            &mut used,
            attempts,
            EntityKind::Enemy,
            rng,
        )?;
        let leash = rng.gen_range(LEASH_MIN..=LEASH_MAX);
        floor.enemies.push(Enemy::new(position, leash, hp));
    }

    let heal_amount = heal_amount_for_level(floor.level);
    for _ in 0..counts.consumables {
        let position = claim_free_tile(
            &floor.grid,
            &floor.rooms,
            &mut used,
            attempts,
            EntityKind::Consumable,
            rng,
        )?;
        floor.consumables.push(Consumable {
            position,
            heal_amount,
        });
    }

    for _ in 0..counts.containers {
        let position = claim_free_tile(
            &floor.grid,
            &floor.rooms,
            &mut used,
            attempts,
            EntityKind::Container,
            rng,
        )?;
        floor.containers.push(Container {
            position,
            opened: false,
        });
    }

    Ok(())
}

/// Draws a random room, then a random tile inside it, until the tile is
/// Floor and unclaimed. Gives up after `max_attempts` draws.
fn claim_free_tile(
    grid: &Grid,
    rooms: &[Room],
    used: &mut HashSet<Position>,
    max_attempts: u32,
    kind: EntityKind,
    rng: &mut impl Rng,
) -> GenerationResult<Position> {
    if !rooms.is_empty() {
        for _ in 0..max_attempts {
            let room = &rooms[rng.gen_range(0..rooms.len())];
            let pos = Position::new(
                rng.gen_range(room.x..room.x + room.width),
                rng.gen_range(room.y..room.y + room.height),
            );
            if grid.get(pos) == Some(Tile::Floor) && used.insert(pos) {
                return Ok(pos);
            }
        }
    }

    tracing::warn!(%kind, max_attempts, "entity placement exhausted");
    Err(GenerationError::PlacementExhausted {
        kind,
        attempts: max_attempts,
    })
}
