//! The discrete turn clock.
//!
//! Every player intent goes through one of the functions here. A turn runs to
//! completion before returning and reports what happened as a list of
//! [`TurnEvent`]s, in order. The front-end maps those to log lines, sounds and
//! camera resets; nothing in here knows about the terminal.

use super::effects::{DamageFloat, FloatColor};
use super::error::GenerationResult;
use super::game_state::{GamePhase, GameState};
use crate::character::progression::{apply_regen, award_xp};
use crate::combat::logic::{resolve_exchange, roll_enemy_attack, xp_for_kill};
use crate::dungeon::generation::generate_floor;
use crate::dungeon::types::Position;
use crate::enemies::logic::run_enemy_phase;
use crate::items::generation::roll_loot;
use crate::items::loot::{self, LootDecision, LootOutcome};
use crate::items::types::Item;
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub enum TurnEvent {
    /// Fired once, on the first intent of a session
    AmbientStart,
    /// Fired once per combat resolution
    AttackSound,
    PlayerAttack {
        target: Position,
        damage: u32,
        is_crit: bool,
    },
    EnemyAttack {
        from: Position,
        damage: u32,
    },
    EnemyDefeated {
        position: Position,
        xp_gained: u64,
    },
    /// One per level gained
    LevelUp {
        new_level: u32,
    },
    ConsumableUsed {
        healed: u32,
    },
    ItemFound {
        item: Item,
    },
    Regenerated {
        amount: u32,
    },
    FloorTransition {
        new_level: u32,
    },
    PlayerDied {
        floor_level: u32,
    },
}

/// Moves the player one tile, attacking whatever stands there.
///
/// Blocked or gated intents change nothing but the status line and return
/// no events. Errors only come from generating the next floor.
pub fn move_player(
    state: &mut GameState,
    dx: i32,
    dy: i32,
    rng: &mut impl Rng,
) -> GenerationResult<Vec<TurnEvent>> {
    let mut events = Vec::new();

    match &state.phase {
        GamePhase::GameOver => {
            state.push_message("You have fallen. Press R to try again.");
            return Ok(events);
        }
        GamePhase::LootDecision(item) => {
            let message = format!("Decide what to do with the {} first.", item.name);
            state.push_message(message);
            return Ok(events);
        }
        GamePhase::Exploring => {}
    }

    if !is_unit_step(dx, dy) {
        state.push_message("You can only move one tile in a straight line.");
        return Ok(events);
    }

    if !state.ambient_started {
        state.ambient_started = true;
        events.push(TurnEvent::AmbientStart);
    }

    state.player.face_towards(dx);
    let target = state.player.position.offset(dx, dy);
    let mut acted: Vec<usize> = Vec::new();

    if let Some(index) = state.floor.enemy_at(target) {
        let level = state.floor.level;
        let result = resolve_exchange(
            &mut state.player,
            &mut state.floor.enemies[index],
            level,
            rng,
        );

        events.push(TurnEvent::AttackSound);
        events.push(TurnEvent::PlayerAttack {
            target,
            damage: result.player_attack.damage,
            is_crit: result.player_attack.is_crit,
        });
        events.push(TurnEvent::EnemyAttack {
            from: target,
            damage: result.counter_damage,
        });

        let color = if result.player_attack.is_crit {
            FloatColor::Yellow
        } else {
            FloatColor::White
        };
        state
            .floats
            .push(DamageFloat::new(target, result.player_attack.damage, color));
        state.floats.push(DamageFloat::new(
            state.player.position,
            result.counter_damage,
            FloatColor::Red,
        ));

        let crit = if result.player_attack.is_crit {
            " Critical hit!"
        } else {
            ""
        };
        state.push_message(format!(
            "You hit for {}.{crit} It hits back for {}.",
            result.player_attack.damage, result.counter_damage
        ));

        // A dead player earns no XP, even for a killing blow
        if result.player_died() {
            if result.enemy_killed() {
                state.floor.enemies.remove(index);
                events.push(TurnEvent::EnemyDefeated {
                    position: target,
                    xp_gained: 0,
                });
                state.push_message("The enemy falls with you.");
            }
            enter_game_over(state, &mut events);
            return Ok(events);
        }

        if result.enemy_killed() {
            state.floor.enemies.remove(index);
            let xp = xp_for_kill(level);
            events.push(TurnEvent::EnemyDefeated {
                position: target,
                xp_gained: xp,
            });
            state.push_message(format!("The enemy falls. +{xp} XP."));
            grant_xp(state, xp, &mut events);
        } else {
            acted.push(index);
        }
    } else if !state.floor.grid.is_walkable(target) {
        state.push_message("A wall blocks your path.");
        return Ok(events);
    } else if state.floor.is_exit(target) {
        descend(state, rng, &mut events)?;
        return Ok(events);
    } else {
        state.player.position = target;
        collect_pickups(state, rng, &mut events);
    }

    run_enemies(state, &acted, rng, &mut events);

    if !state.player.is_alive() {
        enter_game_over(state, &mut events);
        return Ok(events);
    }

    let regen = apply_regen(&mut state.player);
    if regen > 0 {
        events.push(TurnEvent::Regenerated { amount: regen });
        state.floats.push(DamageFloat::new(
            state.player.position,
            regen,
            FloatColor::Green,
        ));
    }

    state.refresh_visibility();
    Ok(events)
}

/// Settles a pending chest item. Outside a loot decision this is a no-op.
pub fn resolve_loot(state: &mut GameState, decision: LootDecision) -> Option<LootOutcome> {
    if !matches!(state.phase, GamePhase::LootDecision(_)) {
        state.push_message("There is nothing to decide on.");
        return None;
    }
    let GamePhase::LootDecision(item) = std::mem::replace(&mut state.phase, GamePhase::Exploring)
    else {
        return None;
    };

    let outcome = loot::apply_loot_decision(&mut state.player, item, decision);
    tracing::debug!(?decision, ?outcome, "loot resolved");
    state.push_message(outcome.message());
    Some(outcome)
}

/// Equips the inventory item at `index`. Takes no turn, but is refused while
/// a modal is open.
pub fn equip_from_inventory(state: &mut GameState, index: usize) -> Option<LootOutcome> {
    if state.phase != GamePhase::Exploring {
        state.push_message("You can't rummage through your pack right now.");
        return None;
    }
    match loot::equip_from_inventory(&mut state.player, index) {
        Some(outcome) => {
            state.push_message(outcome.message());
            Some(outcome)
        }
        None => {
            state.push_message("There is nothing in that pack slot.");
            None
        }
    }
}

/// Throws everything away and starts again on floor 1. Valid at any time.
pub fn restart(state: &mut GameState, rng: &mut impl Rng) -> GenerationResult<()> {
    let fresh = GameState::new(state.config.clone(), rng)?;
    let ambient_started = state.ambient_started;
    *state = GameState {
        ambient_started,
        ..fresh
    };
    tracing::info!("game restarted");
    Ok(())
}

fn is_unit_step(dx: i32, dy: i32) -> bool {
    matches!((dx.abs(), dy.abs()), (1, 0) | (0, 1))
}

fn grant_xp(state: &mut GameState, xp: u64, events: &mut Vec<TurnEvent>) {
    let before = state.player.level;
    let gained = award_xp(&mut state.player, xp);
    for new_level in (before + 1)..=(before + gained) {
        events.push(TurnEvent::LevelUp { new_level });
        state.push_message(format!("You reach level {new_level}!"));
    }
}

fn collect_pickups(state: &mut GameState, rng: &mut impl Rng, events: &mut Vec<TurnEvent>) {
    let pos = state.player.position;

    if let Some(index) = state.floor.consumable_at(pos) {
        let consumable = state.floor.consumables.remove(index);
        let healed = state.player.heal(consumable.heal_amount);
        events.push(TurnEvent::ConsumableUsed { healed });
        if healed > 0 {
            state
                .floats
                .push(DamageFloat::new(pos, healed, FloatColor::Green));
        }
        state.push_message(format!("You drink a tonic and recover {healed} HP."));
    }

    if let Some(index) = state.floor.container_at(pos) {
        let mut chest = state.floor.containers.remove(index);
        if !chest.open() {
            return;
        }
        tracing::debug!(position = ?chest.position, "chest opened");
        let item = roll_loot(state.floor.level, rng);
        state.push_message(format!(
            "The chest holds a {} {} ({}). [E]quip, [S]tore or [I]gnore?",
            item.rarity.name(),
            item.name,
            item.stat_summary()
        ));
        events.push(TurnEvent::ItemFound { item: item.clone() });
        state.phase = GamePhase::LootDecision(item);
    }
}

/// Enemy phase for the current turn. Attacks stop as soon as the player drops.
fn run_enemies(
    state: &mut GameState,
    acted: &[usize],
    rng: &mut impl Rng,
    events: &mut Vec<TurnEvent>,
) {
    let player_pos = state.player.position;
    let attackers = run_enemy_phase(&mut state.floor, player_pos, acted, rng);

    for index in attackers {
        if !state.player.is_alive() {
            break;
        }
        let from = state.floor.enemies[index].position;
        let attack = roll_enemy_attack(state.floor.level, rng);
        state.player.take_damage(attack.damage);

        events.push(TurnEvent::AttackSound);
        events.push(TurnEvent::EnemyAttack {
            from,
            damage: attack.damage,
        });
        state.floats.push(DamageFloat::new(
            player_pos,
            attack.damage,
            FloatColor::Red,
        ));
        state.push_message(format!("An enemy strikes you for {}.", attack.damage));
    }
}

fn descend(
    state: &mut GameState,
    rng: &mut impl Rng,
    events: &mut Vec<TurnEvent>,
) -> GenerationResult<()> {
    let new_level = state.floor.level + 1;
    state.floor = generate_floor(new_level, &state.config, rng)?;
    state.player.position = state.floor.player_spawn;
    state.floats.clear();
    state.refresh_visibility();

    tracing::info!(level = new_level, "descended");
    events.push(TurnEvent::FloorTransition { new_level });
    state.push_message(format!("You descend to floor {new_level}."));
    Ok(())
}

fn enter_game_over(state: &mut GameState, events: &mut Vec<TurnEvent>) {
    state.phase = GamePhase::GameOver;
    let floor_level = state.floor.level;
    tracing::info!(
        floor = floor_level,
        level = state.player.level,
        "player died"
    );
    events.push(TurnEvent::PlayerDied { floor_level });
    state.push_message(format!(
        "You died on floor {floor_level}. Press R to restart."
    ));
}
