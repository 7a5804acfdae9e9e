//! Dungeon map view with fog of war, centred on the player.

use crate::core::effects::FloatColor;
use crate::core::game_state::GameState;
use crate::dungeon::types::{Position, Tile};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// Glyphs used for map rendering (all single-cell)
mod symbols {
    pub const PLAYER: char = '@';
    pub const ENEMY: char = 'g';
    pub const ENEMY_AGGRO: char = 'G';
    pub const TONIC: char = '!';
    pub const CHEST: char = '$';
    pub const WALL: char = '#';
    pub const FLOOR: char = '.';
    pub const EXIT: char = '>';
}

/// Widget for rendering the current floor
pub struct DungeonMapWidget<'a> {
    state: &'a GameState,
}

impl<'a> DungeonMapWidget<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self { state }
    }

    /// Map coordinate drawn in the top-left cell so the player sits in the middle.
    fn camera_origin(&self, area: Rect) -> Position {
        let player = self.state.player.position;
        Position::new(
            player.x - i32::from(area.width) / 2,
            player.y - i32::from(area.height) / 2,
        )
    }

    /// Glyph and style for one map tile, or None while it is undiscovered.
    fn tile_display(&self, pos: Position) -> Option<(char, Style)> {
        let floor = &self.state.floor;
        let tile = floor.grid.get(pos)?;
        if !floor.visibility.is_discovered(pos) {
            return None;
        }

        let visible = floor.visibility.is_visible(pos);
        if visible {
            if pos == self.state.player.position {
                return Some((
                    symbols::PLAYER,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            if let Some(i) = floor.enemy_at(pos) {
                let enemy = &floor.enemies[i];
                let (glyph, color) = if enemy.is_aggro() {
                    (symbols::ENEMY_AGGRO, Color::Red)
                } else {
                    (symbols::ENEMY, Color::LightRed)
                };
                return Some((
                    glyph,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ));
            }
            if floor.consumable_at(pos).is_some() {
                return Some((symbols::TONIC, Style::default().fg(Color::Green)));
            }
            if floor.container_at(pos).is_some() {
                return Some((symbols::CHEST, Style::default().fg(Color::Yellow)));
            }
        }

        let (glyph, color) = match tile {
            Tile::Wall => (symbols::WALL, Color::Gray),
            Tile::Floor => (symbols::FLOOR, Color::White),
            Tile::Exit => (symbols::EXIT, Color::Cyan),
        };
        let color = if visible { color } else { Color::DarkGray };
        Some((glyph, Style::default().fg(color)))
    }
}

fn float_color(color: FloatColor) -> Color {
    match color {
        FloatColor::White => Color::White,
        FloatColor::Yellow => Color::Yellow,
        FloatColor::Red => Color::Red,
        FloatColor::Green => Color::Green,
    }
}

impl Widget for DungeonMapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let origin = self.camera_origin(area);

        for sy in 0..area.height {
            for sx in 0..area.width {
                let pos = Position::new(origin.x + i32::from(sx), origin.y + i32::from(sy));
                if let Some((glyph, style)) = self.tile_display(pos) {
                    buf.get_mut(area.x + sx, area.y + sy)
                        .set_char(glyph)
                        .set_style(style);
                }
            }
        }

        // Floats drift up one row in the second half of their life
        for float in &self.state.floats {
            if !self.state.floor.visibility.is_visible(float.position) {
                continue;
            }
            let rise = if float.progress() > 0.5 { 1 } else { 0 };
            let sx = float.position.x - origin.x;
            let sy = float.position.y - origin.y - 1 - rise;
            if sx < 0 || sy < 0 {
                continue;
            }
            let style = Style::default()
                .fg(float_color(float.color))
                .add_modifier(Modifier::BOLD);
            for (i, ch) in float.amount.to_string().chars().enumerate() {
                let x = sx + i as i32;
                if x >= i32::from(area.width) || sy >= i32::from(area.height) {
                    break;
                }
                buf.get_mut(area.x + x as u16, area.y + sy as u16)
                    .set_char(ch)
                    .set_style(style);
            }
        }
    }
}
