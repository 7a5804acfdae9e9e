//! The player entity. Survives floor transitions; only `restart` rebuilds it.

use crate::core::constants::{STARTING_HP, STARTING_XP_TO_NEXT};
use crate::dungeon::types::Position;
use crate::items::equipment::Equipment;
use crate::items::types::Item;
use serde::{Deserialize, Serialize};

/// Horizontal sprite facing. Vertical moves keep the previous facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Position,
    pub facing: Facing,
    pub hp: u32,
    pub max_hp: u32,
    pub level: u32,
    pub xp: u64,
    pub xp_to_next: u64,
    pub equipment: Equipment,
    pub inventory: Vec<Item>,
}

impl Player {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            facing: Facing::Right,
            hp: STARTING_HP,
            max_hp: STARTING_HP,
            level: 1,
            xp: 0,
            xp_to_next: STARTING_XP_TO_NEXT,
            equipment: Equipment::new(),
            inventory: Vec::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Heals up to max HP and returns how much was actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }

    /// Applies damage, flooring HP at zero. Returns the HP left.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.hp = self.hp.saturating_sub(amount);
        self.hp
    }

    pub fn face_towards(&mut self, dx: i32) {
        if dx < 0 {
            self.facing = Facing::Left;
        } else if dx > 0 {
            self.facing = Facing::Right;
        }
    }
}
