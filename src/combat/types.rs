use serde::{Deserialize, Serialize};

/// Inclusive damage bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRange {
    pub min: u32,
    pub max: u32,
}

impl DamageRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// One resolved swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackResult {
    /// The uniform roll before any crit
    pub roll: u32,
    /// Damage dealt (after crit multiplier if applicable)
    pub damage: u32,
    pub is_crit: bool,
}

/// Outcome of a player-initiated exchange: both sides strike at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeResult {
    pub player_attack: AttackResult,
    pub counter_damage: u32,
    pub enemy_hp_after: u32,
    pub player_hp_after: u32,
}

impl ExchangeResult {
    pub fn enemy_killed(&self) -> bool {
        self.enemy_hp_after == 0
    }

    pub fn player_died(&self) -> bool {
        self.player_hp_after == 0
    }
}
