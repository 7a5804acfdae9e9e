//! Experience, level-ups and passive regeneration.

use super::player::Player;
use crate::core::constants::{
    LEVEL_UP_HEAL, LEVEL_UP_MAX_HP_GAIN, XP_THRESHOLD_GROWTH_FLAT, XP_THRESHOLD_GROWTH_PERCENT,
};

/// Next threshold after a level-up: `floor(threshold * 1.35) + 2`.
pub fn next_xp_threshold(threshold: u64) -> u64 {
    threshold * XP_THRESHOLD_GROWTH_PERCENT / 100 + XP_THRESHOLD_GROWTH_FLAT
}

/// Adds experience and processes every threshold crossing it causes.
/// Returns the number of levels gained. Afterwards `xp < xp_to_next`.
pub fn award_xp(player: &mut Player, amount: u64) -> u32 {
    player.xp += amount;
    let mut levels_gained = 0;

    while player.xp >= player.xp_to_next {
        player.xp -= player.xp_to_next;
        player.level += 1;
        player.xp_to_next = next_xp_threshold(player.xp_to_next);
        player.max_hp += LEVEL_UP_MAX_HP_GAIN;
        player.heal(LEVEL_UP_HEAL);
        levels_gained += 1;

        tracing::info!(level = player.level, max_hp = player.max_hp, "level up");
    }

    levels_gained
}

/// End-of-turn heal from equipped armor. Returns HP restored.
pub fn apply_regen(player: &mut Player) -> u32 {
    let regen = player.equipment.regen();
    if regen == 0 || !player.is_alive() {
        return 0;
    }
    player.heal(regen)
}
