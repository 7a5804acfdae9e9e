//! Enemy entity and its behaviour states.

use crate::dungeon::types::Position;
use serde::{Deserialize, Serialize};

/// Behaviour state. `Aggroed` is terminal: there is no transition back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiState {
    /// Wanders randomly within its leash around the spawn point
    Dormant,
    /// Pursues the player directly, ignoring the leash
    Aggroed,
}

impl AiState {
    /// Pure transition function. Sight only ever promotes Dormant to Aggroed.
    pub fn next(self, sees_player: bool) -> AiState {
        match (self, sees_player) {
            (AiState::Dormant, true) => AiState::Aggroed,
            (state, _) => state,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub position: Position,
    pub spawn: Position,
    /// Maximum Manhattan distance from `spawn` while dormant
    pub leash: i32,
    pub hp: u32,
    pub max_hp: u32,
    pub state: AiState,
}

impl Enemy {
    pub fn new(position: Position, leash: i32, max_hp: u32) -> Self {
        Self {
            position,
            spawn: position,
            leash,
            hp: max_hp,
            max_hp,
            state: AiState::Dormant,
        }
    }

    pub fn is_aggro(&self) -> bool {
        self.state == AiState::Aggroed
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Aggroed enemies are never leashed.
    pub fn within_leash(&self, pos: Position) -> bool {
        self.is_aggro() || pos.manhattan(self.spawn) <= self.leash
    }
}
