//! Full-frame rendering

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use super::controls::render_controls;
use super::palette::render_palette;
use crate::app::{App, StatusLine};
use crate::models::InputMode;
use crate::theme::{
    ACCENT_LIGHT, ACCENT_PRIMARY, BG_PRIMARY, GREEN_SUCCESS, RED_ERROR, TEXT_MUTED, TEXT_PRIMARY,
};

/// Draw the whole app
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BG_PRIMARY)), area);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Controls
            Constraint::Min(6),    // Palette
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_title(main_layout[0], app, frame);
    render_controls(main_layout[1], app, frame);
    render_palette(main_layout[2], app, frame);
    render_status(main_layout[3], app, frame);
    render_hints(main_layout[4], app.input_mode, frame);
}

fn render_title(area: Rect, app: &App, frame: &mut Frame) {
    let mut spans = vec![
        Span::styled(
            " Chroma ",
            Style::default().fg(ACCENT_LIGHT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("Color Scheme Generator", Style::default().fg(TEXT_PRIMARY)),
    ];
    if let Some(scheme) = &app.current_scheme {
        spans.push(Span::styled(
            format!("  {} from {}", scheme.mode.label(), scheme.seed.hex.value),
            Style::default().fg(TEXT_MUTED),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status(area: Rect, app: &App, frame: &mut Frame) {
    let line = match &app.status {
        Some(StatusLine::Info(text)) => {
            Line::from(Span::styled(format!(" {text}"), Style::default().fg(GREEN_SUCCESS)))
        }
        Some(StatusLine::Error(text)) => {
            Line::from(Span::styled(format!(" {text}"), Style::default().fg(RED_ERROR)))
        }
        None => Line::from(Span::styled(
            " Press c or 1-9 to copy a HEX value",
            Style::default().fg(TEXT_MUTED),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_hints(area: Rect, mode: InputMode, frame: &mut Frame) {
    let hints = match mode {
        InputMode::Normal => {
            " g: Generate | r: Randomize | Tab: Mode | ←/→: Select | c/1-9: Copy | x: Export CSS | e: Edit seed | q: Quit "
        }
        InputMode::EditingSeed => " Type hex digits | Enter: Apply | Esc: Cancel ",
    };
    let keybindings =
        Paragraph::new(hints).style(Style::default().fg(Color::Black).bg(ACCENT_PRIMARY));
    frame.render_widget(keybindings, area);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::backend::TestBackend;

    use super::*;
    use crate::models::SchemeMode;
    use crate::test_support::{scheme, test_app, FakeSource};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_palette_shows_hex_and_names() {
        let (mut app, _clipboard) = test_app(Arc::new(FakeSource::ok()));
        app.current_scheme = Some(scheme(
            SchemeMode::Triad,
            &[("FF0000", "Red"), ("00FF00", "Lime"), ("0000FF", "Blue")],
        ));
        app.copied_index = Some(1);

        let mut terminal = Terminal::new(TestBackend::new(120, 24)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
        let text = buffer_text(&terminal);

        for expected in ["#FF0000", "#00FF00", "#0000FF", "LIME", "Copied", "Triad"] {
            assert!(text.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn test_render_placeholder_while_loading() {
        let (mut app, _clipboard) = test_app(Arc::new(FakeSource::ok()));
        app.is_loading = true;

        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();

        assert!(buffer_text(&terminal).contains("Generating palette"));
    }

    #[test]
    fn test_render_seed_editor_and_error() {
        let (mut app, _clipboard) = test_app(Arc::new(FakeSource::ok()));
        app.begin_seed_edit();
        app.seed_input = "#12".to_string();
        app.commit_seed_edit();

        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("#12_"));
        assert!(text.contains("Invalid seed color"));
        assert!(text.contains("Enter: Apply"));
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let (mut app, _clipboard) = test_app(Arc::new(FakeSource::ok()));
        app.current_scheme = Some(scheme(SchemeMode::Quad, &[("123456", "Blue"); 4]));
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
    }
}
