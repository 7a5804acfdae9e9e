mod dungeon_map;
mod overlays;
mod stats_panel;

use crate::core::game_state::{GamePhase, GameState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the stats column
const STATS_PANEL_WIDTH: u16 = 34;

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, state: &GameState) {
    let size = frame.size();

    // Split vertically: map + stats on top, message log and footer below
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Map and stats
            Constraint::Length(7), // Message log
            Constraint::Length(1), // Footer
        ])
        .split(size);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),                    // Map
            Constraint::Length(STATS_PANEL_WIDTH), // Stats panel
        ])
        .split(v_chunks[0]);

    draw_map_panel(frame, h_chunks[0], state);
    stats_panel::draw_stats_panel(frame, h_chunks[1], state);
    draw_message_log(frame, v_chunks[1], state);
    draw_footer(frame, v_chunks[2]);

    match &state.phase {
        GamePhase::LootDecision(item) => overlays::draw_loot_decision(frame, state, item),
        GamePhase::GameOver => overlays::draw_game_over(frame, state),
        GamePhase::Exploring => {}
    }
}

fn draw_map_panel(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default()
        .title(format!(" Floor {} ", state.floor_level()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(dungeon_map::DungeonMapWidget::new(state), inner);
}

/// Newest message at the bottom, older ones fading out
fn draw_message_log(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default().borders(Borders::ALL).title("Log");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let shown = inner.height as usize;
    let skip = state.messages.len().saturating_sub(shown);
    let newest = state.messages.len().saturating_sub(1);

    let lines: Vec<Line> = state
        .messages
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(i, msg)| {
            let style = if i == newest {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(msg.clone(), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        "Move: arrows/WASD   Equip: 1-9   Restart: R   Quit: Q",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
