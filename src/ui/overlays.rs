//! Modal dialogs drawn over the map.

use super::stats_panel::rarity_color;
use crate::core::game_state::GameState;
use crate::items::types::Item;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Centred rect of at most `width` x `height`, leaving a 2-cell margin.
fn centered_dialog(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(4));
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

fn dialog_block(title: &'static str, color: Color) -> Block<'static> {
    Block::default()
        .title(Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

/// Shown while a chest item waits for equip / store / ignore.
pub fn draw_loot_decision(frame: &mut Frame, state: &GameState, item: &Item) {
    let dialog_area = centered_dialog(frame.size(), 44, 11);
    frame.render_widget(Clear, dialog_area);

    let current = state
        .player
        .equipment
        .get(item.slot)
        .as_ref()
        .map(|old| format!("{} ({})", old.name, old.stat_summary()))
        .unwrap_or_else(|| "nothing".to_string());

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                item.name.clone(),
                Style::default()
                    .fg(rarity_color(item.rarity))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" ({})", item.rarity.name()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(format!("{}: {}", item.slot.name(), item.stat_summary())),
        Line::from(Span::styled(
            format!("Currently wearing {current}"),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[E] Equip",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(
                "[S] Store",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(
                "[I] Ignore",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(dialog_block(" Treasure! ", Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, dialog_area);
}

pub fn draw_game_over(frame: &mut Frame, state: &GameState) {
    let dialog_area = centered_dialog(frame.size(), 40, 9);
    frame.render_widget(Clear, dialog_area);

    let lines = vec![
        Line::from(""),
        Line::from(format!(
            "You fell on floor {} at level {}.",
            state.floor_level(),
            state.player.level
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[R] Restart",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(
                "[Q] Quit",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(dialog_block(" You Died ", Color::Red))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, dialog_area);
}
