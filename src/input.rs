//! Key handling: maps key presses to intents and feeds them to the turn
//! processor.

use crate::core::error::GenerationResult;
use crate::core::game_state::{GamePhase, GameState};
use crate::core::turn::{self, TurnEvent};
use crate::items::loot::LootDecision;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use rand::Rng;

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Move { dx: i32, dy: i32 },
    Loot(LootDecision),
    /// Zero-based pack index
    EquipFromPack(usize),
    Restart,
    Quit,
    Ignore,
}

/// Result of handling a game input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Key bindings depend on the phase: E/S/I only mean loot choices while a
/// chest item is pending, so S still moves down the rest of the time.
pub fn map_key(key: KeyEvent, phase: &GamePhase) -> Intent {
    if key.kind == KeyEventKind::Release {
        return Intent::Ignore;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Intent::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => return Intent::Restart,
        _ => {}
    }

    if matches!(phase, GamePhase::LootDecision(_)) {
        return match key.code {
            KeyCode::Char('e') | KeyCode::Char('E') => Intent::Loot(LootDecision::Equip),
            KeyCode::Char('s') | KeyCode::Char('S') => Intent::Loot(LootDecision::Store),
            KeyCode::Char('i') | KeyCode::Char('I') => Intent::Loot(LootDecision::Ignore),
            _ => Intent::Ignore,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Intent::Move { dx: 0, dy: -1 },
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Intent::Move { dx: 0, dy: 1 },
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Intent::Move { dx: -1, dy: 0 },
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Intent::Move { dx: 1, dy: 0 },
        KeyCode::Char(c @ '1'..='9') => Intent::EquipFromPack(c as usize - '1' as usize),
        _ => Intent::Ignore,
    }
}

/// Dispatches one key press. Only floor generation can fail.
pub fn handle_game_input(
    key: KeyEvent,
    state: &mut GameState,
    rng: &mut impl Rng,
) -> GenerationResult<InputResult> {
    match map_key(key, &state.phase) {
        Intent::Quit => return Ok(InputResult::Quit),
        Intent::Restart => turn::restart(state, rng)?,
        Intent::Move { dx, dy } => {
            let events = turn::move_player(state, dx, dy, rng)?;
            log_side_channel(&events);
        }
        Intent::Loot(decision) => {
            turn::resolve_loot(state, decision);
        }
        Intent::EquipFromPack(index) => {
            turn::equip_from_inventory(state, index);
        }
        Intent::Ignore => {}
    }
    Ok(InputResult::Continue)
}

/// Audio is not wired up; these cues only reach the log.
fn log_side_channel(events: &[TurnEvent]) {
    for event in events {
        match event {
            TurnEvent::AmbientStart => tracing::debug!("ambient loop start"),
            TurnEvent::AttackSound => tracing::trace!("attack sound"),
            TurnEvent::FloorTransition { new_level } => {
                tracing::debug!(new_level, "floor transition")
            }
            _ => {}
        }
    }
}
