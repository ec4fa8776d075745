//! Keyboard event decoding.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Action;

/// Decode a key press into a picker action.
///
/// Interrupt and submit are checked first, then the help key, so a help key
/// that collides with a separator or digit still opens help.
pub fn decode_key(key: KeyEvent, help_key: Option<char>) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'C') => Action::Interrupt,
            // EOT
            KeyCode::Char('d' | 'D') => Action::Submit,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char('\n' | '\r') => Action::Submit,

        KeyCode::Char(c) if Some(c) == help_key => Action::ShowHelp,

        KeyCode::Up => Action::Increment,
        KeyCode::Down => Action::Decrement,
        KeyCode::Left => Action::FocusPrev,
        KeyCode::Right | KeyCode::Tab | KeyCode::Char(':' | ' ' | '-') => Action::FocusNext,

        KeyCode::Char(c @ '0'..='9') => Action::Digit(c),

        _ => Action::None,
    }
}
