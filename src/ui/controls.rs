//! Control bar rendering functions

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::helpers::seed_color;
use crate::app::App;
use crate::models::{InputMode, SchemeMode};
use crate::theme::{
    ACCENT_LIGHT, ACCENT_PRIMARY, AMBER_WARNING, BG_SECONDARY, BORDER_SUBTLE, ROUNDED_BORDERS,
    TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::utils::spinner_frame;

fn card(title: &'static str, focused: bool) -> Block<'static> {
    let border_color = if focused { ACCENT_PRIMARY } else { BORDER_SUBTLE };
    Block::default()
        .title(Span::styled(title, Style::default().fg(TEXT_MUTED)))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(BG_SECONDARY))
}

/// Render seed, mode and count cards in a given area
pub fn render_controls(area: Rect, app: &App, frame: &mut Frame) {
    let card_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24), // Seed color
            Constraint::Min(20),    // Mode selector
            Constraint::Length(16), // Count + loading
        ])
        .split(area);

    render_seed_card(card_layout[0], app, frame);
    render_mode_card(card_layout[1], app.mode, frame);
    render_count_card(card_layout[2], app, frame);
}

fn render_seed_card(area: Rect, app: &App, frame: &mut Frame) {
    let editing = app.input_mode == InputMode::EditingSeed;
    let block = card(" SEED COLOR ", editing);

    let text = if editing {
        Span::styled(
            format!("{}_", app.seed_input),
            Style::default().fg(AMBER_WARNING).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            app.seed_color.to_string(),
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        )
    };

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled("      ", Style::default().bg(seed_color(&app.seed_color))),
        Span::raw("  "),
        text,
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_mode_card(area: Rect, mode: SchemeMode, frame: &mut Frame) {
    let block = card(" MODE ", false);

    let mut spans = vec![Span::raw(" ")];
    for candidate in SchemeMode::ALL {
        let style = if candidate == mode {
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT_LIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_SECONDARY)
        };
        spans.push(Span::styled(format!(" {} ", candidate.label()), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_count_card(area: Rect, app: &App, frame: &mut Frame) {
    let block = card(" COLORS ", false);

    let mut spans = vec![Span::styled(
        format!(" {}", app.count),
        Style::default().fg(ACCENT_LIGHT).add_modifier(Modifier::BOLD),
    )];
    if app.is_loading {
        spans.push(Span::styled(
            format!("  {}", spinner_frame(app.animation_tick)),
            Style::default().fg(AMBER_WARNING),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
