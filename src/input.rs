//! Keyboard input mapping.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::models::InputMode;

/// Everything a key press can ask the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Generate,
    Randomize,
    NextMode,
    PreviousMode,
    SelectNext,
    SelectPrevious,
    CopySelected,
    /// Zero-based swatch position
    CopySwatch(usize),
    ExportPalette,
    EditSeed,
    SeedChar(char),
    SeedBackspace,
    CommitSeed,
    CancelSeed,
}

/// Translate a key event into an action for the current input mode.
///
/// Returns `None` for keys that do nothing in that mode.
pub fn map_key(mode: InputMode, key_code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    // Ctrl+C always quits, even while typing
    if modifiers.contains(KeyModifiers::CONTROL) && key_code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match mode {
        InputMode::Normal => match key_code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('g') | KeyCode::Enter => Some(Action::Generate),
            KeyCode::Char('r') => Some(Action::Randomize),
            KeyCode::Tab | KeyCode::Char('m') => Some(Action::NextMode),
            KeyCode::BackTab | KeyCode::Char('M') => Some(Action::PreviousMode),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::SelectNext),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::SelectPrevious),
            KeyCode::Char('c') | KeyCode::Char(' ') => Some(Action::CopySelected),
            // Number keys copy by position: 1 is the first swatch
            KeyCode::Char(c @ '1'..='9') => {
                let position = c.to_digit(10)? as usize;
                Some(Action::CopySwatch(position - 1))
            }
            KeyCode::Char('x') => Some(Action::ExportPalette),
            KeyCode::Char('e') | KeyCode::Char('s') => Some(Action::EditSeed),
            _ => None,
        },
        InputMode::EditingSeed => match key_code {
            KeyCode::Enter => Some(Action::CommitSeed),
            KeyCode::Esc => Some(Action::CancelSeed),
            KeyCode::Backspace => Some(Action::SeedBackspace),
            KeyCode::Char(c) => Some(Action::SeedChar(c)),
            _ => None,
        },
    }
}
