//! Everything that belongs to a single floor and is rebuilt on descent.

use super::types::{Grid, Position, Room, Tile};
use super::visibility::Visibility;
use crate::enemies::types::Enemy;
use serde::{Deserialize, Serialize};

/// One-shot heal pickup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consumable {
    pub position: Position,
    pub heal_amount: u32,
}

/// Loot chest. Removed from the floor once opened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub position: Position,
    pub opened: bool,
}

impl Container {
    /// Marks the chest opened. False if it already was.
    pub fn open(&mut self) -> bool {
        !std::mem::replace(&mut self.opened, true)
    }
}

/// Output of the generator: the carved layout before anything is spawned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub grid: Grid,
    /// Accepted rooms in acceptance order
    pub rooms: Vec<Room>,
    pub player_spawn: Position,
    pub exit: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DungeonFloor {
    /// 1-based depth; drives enemy and loot scaling
    pub level: u32,
    pub grid: Grid,
    pub rooms: Vec<Room>,
    pub player_spawn: Position,
    pub exit: Position,
    pub enemies: Vec<Enemy>,
    pub consumables: Vec<Consumable>,
    pub containers: Vec<Container>,
    pub visibility: Visibility,
}

impl DungeonFloor {
    pub fn from_layout(level: u32, layout: Layout) -> Self {
        let visibility = Visibility::new(layout.grid.width(), layout.grid.height());
        Self {
            level,
            grid: layout.grid,
            rooms: layout.rooms,
            player_spawn: layout.player_spawn,
            exit: layout.exit,
            enemies: Vec::new(),
            consumables: Vec::new(),
            containers: Vec::new(),
            visibility,
        }
    }

    pub fn enemy_at(&self, pos: Position) -> Option<usize> {
        self.enemies.iter().position(|e| e.position == pos)
    }

    pub fn consumable_at(&self, pos: Position) -> Option<usize> {
        self.consumables.iter().position(|c| c.position == pos)
    }

    pub fn container_at(&self, pos: Position) -> Option<usize> {
        self.containers
            .iter()
            .position(|c| c.position == pos && !c.opened)
    }

    pub fn is_exit(&self, pos: Position) -> bool {
        self.grid.get(pos) == Some(Tile::Exit)
    }
}
