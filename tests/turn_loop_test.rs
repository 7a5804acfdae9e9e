//! Integration test: the turn loop end to end
//!
//! Drives whole sessions through the public intent functions with seeded
//! rngs and checks the invariants that must hold after every turn.

use delve::core::config::GameConfig;
use delve::core::game_state::{GamePhase, GameState};
use delve::core::turn::{move_player, resolve_loot, restart, TurnEvent};
use delve::dungeon::floor::{DungeonFloor, Layout};
use delve::dungeon::types::{Grid, Position, Room, Tile, CARDINAL_OFFSETS};
use delve::enemies::types::Enemy;
use delve::items::generation::roll_loot;
use delve::items::loot::LootDecision;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

fn new_game(seed: u64) -> (GameState, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let state = GameState::new(GameConfig::default(), &mut rng).unwrap();
    (state, rng)
}

/// Replaces the floor with one open room, the player at its centre.
fn open_room(state: &mut GameState) {
    let mut grid = Grid::new(15, 15);
    for y in 1..14 {
        for x in 1..14 {
            grid.set(Position::new(x, y), Tile::Floor);
        }
    }
    grid.set(Position::new(13, 13), Tile::Exit);
    state.floor = DungeonFloor::from_layout(
        1,
        Layout {
            grid,
            rooms: vec![Room::new(1, 1, 13, 13)],
            player_spawn: Position::new(7, 7),
            exit: Position::new(13, 13),
        },
    );
    state.player.position = Position::new(7, 7);
}

/// Checks everything that must be true between turns.
fn assert_turn_invariants(state: &GameState) {
    let player = &state.player;
    assert!(player.hp <= player.max_hp);
    assert!(player.xp < player.xp_to_next);
    assert!(state.floor.grid.is_walkable(player.position));

    let mut tiles = HashSet::new();
    for enemy in &state.floor.enemies {
        assert!(enemy.is_alive());
        assert_ne!(enemy.position, player.position);
        assert!(state.floor.grid.is_walkable(enemy.position));
        assert!(tiles.insert(enemy.position), "two enemies share a tile");
        if !enemy.is_aggro() {
            assert!(enemy.position.manhattan(enemy.spawn) <= enemy.leash);
        }
    }

    if state.is_game_over() {
        assert_eq!(player.hp, 0);
    } else {
        assert!(player.hp > 0);
    }
}

#[test]
fn test_attack_scenario_on_floor_one() {
    let (mut state, mut rng) = new_game(1);
    open_room(&mut state);
    state.floor.enemies.push(Enemy::new(Position::new(8, 7), 5, 30));

    let events = move_player(&mut state, 1, 0, &mut rng).unwrap();

    // Attacking never moves the player onto the enemy
    assert_eq!(state.player.position, Position::new(7, 7));
    let (damage, is_crit) = events
        .iter()
        .find_map(|e| match e {
            TurnEvent::PlayerAttack {
                damage, is_crit, ..
            } => Some((*damage, *is_crit)),
            _ => None,
        })
        .unwrap();
    if is_crit {
        assert!([2, 4, 6].contains(&damage));
    } else {
        assert!((1..=3).contains(&damage));
    }
    assert_eq!(state.floor.enemies[0].hp, 30 - damage);
    assert!((8..=9).contains(&state.player.hp));
}

#[test]
fn test_random_sessions_hold_invariants() {
    for seed in 0..12 {
        let (mut state, mut rng) = new_game(seed);

        for _ in 0..400 {
            if state.is_game_over() {
                restart(&mut state, &mut rng).unwrap();
                assert_eq!(state.floor_level(), 1);
                continue;
            }
            if state.pending_loot().is_some() {
                resolve_loot(&mut state, LootDecision::Equip).unwrap();
                continue;
            }

            let aggro_before: Vec<bool> =
                state.floor.enemies.iter().map(|e| e.is_aggro()).collect();
            let (dx, dy) = CARDINAL_OFFSETS[rng.gen_range(0..4)];
            let events = move_player(&mut state, dx, dy, &mut rng).unwrap();

            let roster_changed = events.iter().any(|e| {
                matches!(
                    e,
                    TurnEvent::EnemyDefeated { .. } | TurnEvent::FloorTransition { .. }
                )
            });
            if !roster_changed {
                for (before, enemy) in aggro_before.iter().zip(&state.floor.enemies) {
                    if *before {
                        assert!(enemy.is_aggro(), "aggro reverted (seed {seed})");
                    }
                }
            }

            assert_turn_invariants(&state);
        }
    }
}

#[test]
fn test_game_over_ignores_every_intent_but_restart() {
    let (mut state, mut rng) = new_game(3);
    open_room(&mut state);
    state.player.hp = 1;
    state
        .floor
        .enemies
        .push(Enemy::new(Position::new(7, 6), 5, 100));

    move_player(&mut state, 0, -1, &mut rng).unwrap();
    assert_eq!(state.phase, GamePhase::GameOver);

    let snapshot = state.player.clone();
    for (dx, dy) in CARDINAL_OFFSETS {
        assert!(move_player(&mut state, dx, dy, &mut rng).unwrap().is_empty());
    }
    assert!(resolve_loot(&mut state, LootDecision::Equip).is_none());
    assert_eq!(state.player, snapshot);
    assert!(state.is_game_over());

    restart(&mut state, &mut rng).unwrap();
    assert!(!state.is_game_over());
    assert_eq!(state.player.level, 1);
    assert!(state.player.inventory.is_empty());
}

#[test]
fn test_descending_rebuilds_floor_but_keeps_the_player() {
    let (mut state, mut rng) = new_game(4);
    open_room(&mut state);
    state.player.position = Position::new(12, 13);
    state.player.level = 3;
    state.player.xp = 5;
    state.player.xp_to_next = 22;
    state.player.inventory.push(roll_loot(1, &mut rng));

    let events = move_player(&mut state, 1, 0, &mut rng).unwrap();
    assert!(events.contains(&TurnEvent::FloorTransition { new_level: 2 }));

    assert_eq!(state.floor_level(), 2);
    assert_eq!(state.player.position, state.floor.player_spawn);
    assert_eq!(state.player.level, 3);
    assert_eq!(state.player.xp, 5);
    assert_eq!(state.player.inventory.len(), 1);
    assert!(state.floor.visibility.is_discovered(state.floor.player_spawn));
}

#[test]
fn test_snapshot_serializes() {
    let (mut state, mut rng) = new_game(5);
    move_player(&mut state, 1, 0, &mut rng).unwrap();

    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["player"]["hp"], state.player.hp);
    assert_eq!(json["floor"]["level"], 1);
    assert!(json["floor"]["enemies"].is_array());

    let restored: GameState = serde_json::from_value(json).unwrap();
    assert_eq!(restored.player, state.player);
    assert_eq!(restored.floor.enemies, state.floor.enemies);
    assert_eq!(restored.phase, state.phase);

    // The fog travels with the snapshot, not just the discovered tiles
    let player = restored.player.position;
    assert!(restored.floor.visibility.is_visible(player));
    assert_eq!(
        restored.floor.visibility.visible_count(),
        state.floor.visibility.visible_count()
    );
    assert!(restored.floor.visibility.visible_count() > 0);
    assert_eq!(restored.floor.visibility, state.floor.visibility);
}
