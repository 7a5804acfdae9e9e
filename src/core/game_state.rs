use crate::character::player::Player;
use crate::core::config::GameConfig;
use crate::core::constants::MAX_MESSAGE_LOG;
use crate::core::effects::DamageFloat;
use crate::core::error::GenerationResult;
use crate::dungeon::floor::DungeonFloor;
use crate::dungeon::generation::generate_floor;
use crate::items::types::Item;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Which inputs the turn processor currently accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GamePhase {
    Exploring,
    /// A chest was opened; movement is blocked until the item is dealt with
    LootDecision(Item),
    /// Terminal until restart
    GameOver,
}

/// The whole game: one owned aggregate handed to every system.
///
/// Serializing it yields the per-frame snapshot consumed by the front-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub player: Player,
    pub floor: DungeonFloor,
    pub phase: GamePhase,
    /// Most recent last
    pub messages: VecDeque<String>,
    pub floats: Vec<DamageFloat>,
    /// Set once the first intent has been processed
    pub ambient_started: bool,
}

impl GameState {
    /// Builds floor 1 and places a fresh player on its spawn tile.
    pub fn new(config: GameConfig, rng: &mut impl Rng) -> GenerationResult<Self> {
        let floor = generate_floor(1, &config, rng)?;
        let player = Player::new(floor.player_spawn);

        let mut state = Self {
            config,
            player,
            floor,
            phase: GamePhase::Exploring,
            messages: VecDeque::with_capacity(MAX_MESSAGE_LOG),
            floats: Vec::new(),
            ambient_started: false,
        };
        state.refresh_visibility();
        state.push_message("Explore the dungeon.");
        Ok(state)
    }

    /// Render-clock step: recompute the fog around the player and fade floats.
    pub fn frame(&mut self, delta: f64) {
        self.refresh_visibility();
        self.floats.retain_mut(|f| f.update(delta));
    }

    pub fn refresh_visibility(&mut self) {
        self.floor
            .visibility
            .recompute(self.player.position, self.config.fog_radius);
    }

    pub fn push_message(&mut self, message: impl Into<String>) {
        if self.messages.len() >= MAX_MESSAGE_LOG {
            self.messages.pop_front();
        }
        self.messages.push_back(message.into());
    }

    /// The latest status line.
    pub fn status(&self) -> &str {
        self.messages.back().map(String::as_str).unwrap_or("")
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn pending_loot(&self) -> Option<&Item> {
        match &self.phase {
            GamePhase::LootDecision(item) => Some(item),
            _ => None,
        }
    }

    pub fn floor_level(&self) -> u32 {
        self.floor.level
    }
}
