//! Damage ranges, rolls and melee exchanges.
//!
//! These are pure functions over the player, an enemy and an injected rng,
//! so the turn processor and tests share the exact same math.

use super::types::{AttackResult, DamageRange, ExchangeResult};
use crate::character::player::Player;
use crate::core::constants::{
    BASE_CRIT_CHANCE, CRIT_MULTIPLIER, ENEMY_BASE_DAMAGE, ENEMY_XP_BASE, PLAYER_BASE_DAMAGE,
};
use crate::enemies::types::Enemy;
use rand::Rng;

/// Base [1,3], plus one per two levels past the first, plus weapon bonuses.
pub fn player_damage_range(player: &Player) -> DamageRange {
    let bonus = player.level.saturating_sub(1) / 2 + player.equipment.damage_bonus();
    DamageRange::new(PLAYER_BASE_DAMAGE.0 + bonus, PLAYER_BASE_DAMAGE.1 + bonus)
}

/// Base [1,2] with `floor/3` added to the low end and `floor/2` to the high end.
pub fn enemy_damage_range(floor_level: u32) -> DamageRange {
    DamageRange::new(
        ENEMY_BASE_DAMAGE.0 + floor_level / 3,
        ENEMY_BASE_DAMAGE.1 + floor_level / 2,
    )
}

/// Probability in 0.0..=1.0.
pub fn player_crit_chance(player: &Player) -> f64 {
    BASE_CRIT_CHANCE + player.equipment.crit_bonus()
}

pub fn xp_for_kill(floor_level: u32) -> u64 {
    ENEMY_XP_BASE + floor_level as u64
}

pub fn roll_damage(range: DamageRange, rng: &mut impl Rng) -> u32 {
    rng.gen_range(range.min..=range.max.max(range.min))
}

pub fn roll_crit(chance: f64, rng: &mut impl Rng) -> bool {
    rng.gen_bool(chance.clamp(0.0, 1.0))
}

/// Crits double the roll after it is made; nothing is re-rolled.
pub fn apply_crit(roll: u32, is_crit: bool) -> u32 {
    if is_crit {
        roll * CRIT_MULTIPLIER
    } else {
        roll
    }
}

pub fn roll_player_attack(player: &Player, rng: &mut impl Rng) -> AttackResult {
    let roll = roll_damage(player_damage_range(player), rng);
    let is_crit = roll_crit(player_crit_chance(player), rng);
    AttackResult {
        roll,
        damage: apply_crit(roll, is_crit),
        is_crit,
    }
}

/// Enemies never crit.
pub fn roll_enemy_attack(floor_level: u32, rng: &mut impl Rng) -> AttackResult {
    let roll = roll_damage(enemy_damage_range(floor_level), rng);
    AttackResult {
        roll,
        damage: roll,
        is_crit: false,
    }
}

/// Player strikes `enemy` and the enemy hits back in the same step, even if
/// the blow killed it. Both HP pools floor at zero.
pub fn resolve_exchange(
    player: &mut Player,
    enemy: &mut Enemy,
    floor_level: u32,
    rng: &mut impl Rng,
) -> ExchangeResult {
    let player_attack = roll_player_attack(player, rng);
    let counter = roll_enemy_attack(floor_level, rng);

    enemy.hp = enemy.hp.saturating_sub(player_attack.damage);
    player.take_damage(counter.damage);

    ExchangeResult {
        player_attack,
        counter_damage: counter.damage,
        enemy_hp_after: enemy.hp,
        player_hp_after: player.hp,
    }
}
