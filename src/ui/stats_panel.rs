use crate::combat::logic::{player_crit_chance, player_damage_range};
use crate::core::game_state::GameState;
use crate::items::types::{EquipmentSlot, Rarity};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Inventory entries shown (and selectable with 1-9)
const INVENTORY_SHOWN: usize = 9;

pub fn rarity_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Common => Color::Gray,
        Rarity::Rare => Color::Blue,
        Rarity::Epic => Color::Magenta,
        Rarity::Legendary => Color::Rgb(255, 165, 0),
    }
}

/// Draws the right-hand panel: vitals, equipment and pack
pub fn draw_stats_panel(frame: &mut Frame, area: Rect, state: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // HP gauge
            Constraint::Length(7), // Character
            Constraint::Length(5), // Equipment (3 slots + borders)
            Constraint::Min(3),    // Inventory
        ])
        .split(area);

    draw_hp_gauge(frame, chunks[0], state);
    draw_character(frame, chunks[1], state);
    draw_equipment(frame, chunks[2], state);
    draw_inventory(frame, chunks[3], state);
}

fn draw_hp_gauge(frame: &mut Frame, area: Rect, state: &GameState) {
    let player = &state.player;
    let ratio = if player.max_hp > 0 {
        f64::from(player.hp) / f64::from(player.max_hp)
    } else {
        0.0
    };
    let color = if ratio > 0.5 {
        Color::Green
    } else if ratio > 0.25 {
        Color::Yellow
    } else {
        Color::Red
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("HP"))
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{}/{}", player.hp, player.max_hp));

    frame.render_widget(gauge, area);
}

fn draw_character(frame: &mut Frame, area: Rect, state: &GameState) {
    let player = &state.player;
    let range = player_damage_range(player);
    let label = Style::default().fg(Color::DarkGray);

    let lines = vec![
        Line::from(vec![
            Span::styled("Floor  ", label),
            Span::styled(
                state.floor_level().to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Level  ", label),
            Span::styled(
                player.level.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("XP     ", label),
            Span::raw(format!("{}/{}", player.xp, player.xp_to_next)),
        ]),
        Line::from(vec![
            Span::styled("Damage ", label),
            Span::raw(format!("{}-{}", range.min, range.max)),
        ]),
        Line::from(vec![
            Span::styled("Crit   ", label),
            Span::raw(format!("{:.0}%", player_crit_chance(player) * 100.0)),
            Span::styled("  Regen ", label),
            Span::raw(player.equipment.regen().to_string()),
        ]),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Character"));
    frame.render_widget(paragraph, area);
}

fn draw_equipment(frame: &mut Frame, area: Rect, state: &GameState) {
    let lines: Vec<Line> = EquipmentSlot::ALL
        .iter()
        .map(|&slot| {
            let head = Span::styled(
                format!("{:<9} ", slot.name()),
                Style::default().fg(Color::DarkGray),
            );
            match state.player.equipment.get(slot) {
                Some(item) => Line::from(vec![
                    head,
                    Span::styled(
                        item.name.clone(),
                        Style::default().fg(rarity_color(item.rarity)),
                    ),
                    Span::raw(format!(" {}", item.stat_summary())),
                ]),
                None => Line::from(vec![
                    head,
                    Span::styled("-", Style::default().fg(Color::DarkGray)),
                ]),
            }
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Equipment"));
    frame.render_widget(paragraph, area);
}

fn draw_inventory(frame: &mut Frame, area: Rect, state: &GameState) {
    let inventory = &state.player.inventory;

    let mut lines: Vec<Line> = inventory
        .iter()
        .take(INVENTORY_SHOWN)
        .enumerate()
        .map(|(i, item)| {
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::Cyan)),
                Span::styled(
                    item.name.clone(),
                    Style::default().fg(rarity_color(item.rarity)),
                ),
                Span::raw(format!(" {}", item.stat_summary())),
            ])
        })
        .collect();

    if inventory.is_empty() {
        lines.push(Line::from(Span::styled(
            "Empty",
            Style::default().fg(Color::DarkGray),
        )));
    } else if inventory.len() > INVENTORY_SHOWN {
        lines.push(Line::from(Span::styled(
            format!("+{} more", inventory.len() - INVENTORY_SHOWN),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Pack [1-9 to equip]"),
    );
    frame.render_widget(paragraph, area);
}
