//! Enemy turn: sight check, state transition, then pursue or wander.
//!
//! Decisions are pure (`choose_action`) so they can be driven with a seeded
//! rng in tests. `run_enemy_phase` applies them to a floor and reports who
//! attacks the player, in order; the turn processor resolves the damage.

use super::types::{AiState, Enemy};
use crate::dungeon::floor::DungeonFloor;
use crate::dungeon::types::{Grid, Position, CARDINAL_OFFSETS};
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyAction {
    /// The chosen step lands on the player: strike instead of moving
    Attack,
    MoveTo(Position),
    Stay,
}

/// Sight only exists along a shared row or column with no wall strictly
/// between the two tiles. Diagonals never see each other.
pub fn has_line_of_sight(grid: &Grid, from: Position, to: Position) -> bool {
    if from.x == to.x {
        let step = if from.y < to.y { 1 } else { -1 };
        let mut y = from.y + step;
        while y != to.y {
            if grid.is_wall(Position::new(from.x, y)) {
                return false;
            }
            y += step;
        }
        return true;
    }

    if from.y == to.y {
        let step = if from.x < to.x { 1 } else { -1 };
        let mut x = from.x + step;
        while x != to.x {
            if grid.is_wall(Position::new(x, from.y)) {
                return false;
            }
            x += step;
        }
        return true;
    }

    false
}

fn can_step(enemy: &Enemy, grid: &Grid, dest: Position, occupied: &[Position]) -> bool {
    grid.is_walkable(dest) && !occupied.contains(&dest) && enemy.within_leash(dest)
}

/// Picks this enemy's action. `occupied` holds every other enemy's tile.
pub fn choose_action(
    enemy: &Enemy,
    grid: &Grid,
    player: Position,
    occupied: &[Position],
    rng: &mut impl Rng,
) -> EnemyAction {
    match enemy.state {
        AiState::Aggroed => pursue(enemy, grid, player, occupied, rng),
        AiState::Dormant => wander(enemy, grid, player, occupied, rng),
    }
}

/// Closes the longer axis first, then the other, then falls back to a
/// random step.
fn pursue(
    enemy: &Enemy,
    grid: &Grid,
    player: Position,
    occupied: &[Position],
    rng: &mut impl Rng,
) -> EnemyAction {
    let pos = enemy.position;
    let dist_x = player.x - pos.x;
    let dist_y = player.y - pos.y;
    let step_x = (dist_x.signum(), 0);
    let step_y = (0, dist_y.signum());

    let options = if dist_x.abs() >= dist_y.abs() {
        [step_x, step_y]
    } else {
        [step_y, step_x]
    };

    for (dx, dy) in options {
        if dx == 0 && dy == 0 {
            continue;
        }
        let dest = pos.offset(dx, dy);
        if dest == player {
            return EnemyAction::Attack;
        }
        if can_step(enemy, grid, dest, occupied) {
            return EnemyAction::MoveTo(dest);
        }
    }

    wander(enemy, grid, player, occupied, rng)
}

/// One random step in shuffled order. Stepping onto the player is an attack
/// whatever the leash says.
fn wander(
    enemy: &Enemy,
    grid: &Grid,
    player: Position,
    occupied: &[Position],
    rng: &mut impl Rng,
) -> EnemyAction {
    let mut directions = CARDINAL_OFFSETS;
    directions.shuffle(rng);

    for (dx, dy) in directions {
        let dest = enemy.position.offset(dx, dy);
        if dest == player {
            return EnemyAction::Attack;
        }
        if can_step(enemy, grid, dest, occupied) {
            return EnemyAction::MoveTo(dest);
        }
    }

    EnemyAction::Stay
}

/// Moves every enemy once and returns the indices of enemies that attack
/// the player, in resolution order. `acted` lists enemies that already
/// struck this turn (the one the player just fought); they update their
/// state but take no action.
///
/// A sweep after movement adds every enemy left orthogonally adjacent to
/// the player. Each enemy appears at most once in the result.
pub fn run_enemy_phase(
    floor: &mut DungeonFloor,
    player: Position,
    acted: &[usize],
    rng: &mut impl Rng,
) -> Vec<usize> {
    let mut attackers: Vec<usize> = Vec::new();

    for i in 0..floor.enemies.len() {
        let sees = has_line_of_sight(&floor.grid, floor.enemies[i].position, player);
        let enemy = &mut floor.enemies[i];
        let before = enemy.state;
        enemy.state = enemy.state.next(sees);
        if before != enemy.state {
            tracing::debug!(enemy = i, position = ?enemy.position, "enemy aggroed");
        }

        if acted.contains(&i) {
            continue;
        }

        let occupied: Vec<Position> = floor
            .enemies
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, e)| e.position)
            .collect();

        match choose_action(&floor.enemies[i], &floor.grid, player, &occupied, rng) {
            EnemyAction::Attack => attackers.push(i),
            EnemyAction::MoveTo(dest) => floor.enemies[i].position = dest,
            EnemyAction::Stay => {}
        }
    }

    for (i, enemy) in floor.enemies.iter().enumerate() {
        if enemy.position.manhattan(player) == 1 && !acted.contains(&i) && !attackers.contains(&i)
        {
            attackers.push(i);
        }
    }

    attackers
}
