//! Palette grid rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::helpers::{swatch_colors, top_padding};
use crate::app::App;
use crate::models::ColorEntry;
use crate::theme::{
    ACCENT_LIGHT, BG_SECONDARY, BORDER_SUBTLE, ROUNDED_BORDERS, TEXT_MUTED, THICK_BORDERS,
};
use crate::utils::{spinner_frame, truncate};

/// Render the palette as a row of equal-width swatch cards
pub fn render_palette(area: Rect, app: &App, frame: &mut Frame) {
    let colors = match &app.current_scheme {
        Some(scheme) if !scheme.colors.is_empty() => &scheme.colors,
        _ => {
            render_placeholder(area, app, frame);
            return;
        }
    };

    let count = colors.len() as u32;
    let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count)).collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (index, (color, column)) in colors.iter().zip(columns.iter()).enumerate() {
        render_swatch(
            *column,
            color,
            index,
            index == app.selected_index,
            app.copied_index == Some(index),
            frame,
        );
    }
}

/// Render a single swatch card
/// Shows position, hex value, color name and a check mark once copied
pub fn render_swatch(
    area: Rect,
    color: &ColorEntry,
    index: usize,
    selected: bool,
    copied: bool,
    frame: &mut Frame,
) {
    let (bg, fg) = swatch_colors(color);

    // Selected card gets a thick light outline; others blend into the swatch
    let (border_set, border_color) = if selected {
        (THICK_BORDERS, ACCENT_LIGHT)
    } else {
        (ROUNDED_BORDERS, bg)
    };

    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border_set)
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));

    let inner_width = area.width.saturating_sub(2) as usize;
    let footer = if copied { "✓ Copied" } else { "" };

    let content = vec![
        Line::from(Span::styled(
            format!("{}", index + 1),
            Style::default().fg(fg).add_modifier(Modifier::DIM),
        )),
        Line::from(Span::styled(
            color.hex.value.clone(),
            Style::default().fg(fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate(&color.name.value.to_uppercase(), inner_width),
            Style::default().fg(fg),
        )),
        Line::from(""),
        Line::from(Span::styled(
            footer,
            Style::default().fg(fg).add_modifier(Modifier::BOLD),
        )),
    ];

    let padding = top_padding(area.height.saturating_sub(2), content.len());
    let mut lines = vec![Line::from(""); padding];
    lines.extend(content);

    let paragraph = Paragraph::new(lines)
        .block(card_block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_placeholder(area: Rect, app: &App, frame: &mut Frame) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let message = if app.is_loading {
        format!("{} Generating palette...", spinner_frame(app.animation_tick))
    } else {
        "No palette yet. Press g to generate.".to_string()
    };

    let padding = top_padding(area.height.saturating_sub(2), 1);
    let mut lines = vec![Line::from(""); padding];
    lines.push(Line::from(Span::styled(message, Style::default().fg(TEXT_MUTED))));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
