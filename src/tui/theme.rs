use std::io::IsTerminal;

use ratatui::style::{Color, Modifier, Style};

// Prompt colors
pub const QUESTION_GREEN: Color = Color::Green;
pub const FIELD_CYAN: Color = Color::Cyan;
pub const HIGHLIGHT_CYAN: Color = Color::LightCyan;
pub const HIGHLIGHT_TEXT: Color = Color::Black;
pub const HIGHLIGHT_PLAIN: Color = Color::White;

/// Styles for the picker prompt, with or without color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub color: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Theme {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Color unless forced off, `NO_COLOR` is set, or stderr is not a terminal.
    pub fn detect(force: Option<bool>) -> Self {
        let color = force.unwrap_or_else(|| {
            Self::color_allowed(std::env::var_os("NO_COLOR").as_deref())
                && std::io::stderr().is_terminal()
        });
        Self { color }
    }

    fn color_allowed(no_color: Option<&std::ffi::OsStr>) -> bool {
        no_color.is_none_or(|v| v.is_empty())
    }

    fn colored(&self, style: Style) -> Style {
        if self.color { style } else { Style::new() }
    }

    pub fn question_icon(&self) -> Style {
        self.colored(Style::new().fg(QUESTION_GREEN).add_modifier(Modifier::BOLD))
    }

    pub fn help_icon(&self) -> Style {
        self.colored(Style::new().fg(FIELD_CYAN))
    }

    pub fn message(&self) -> Style {
        Style::new().add_modifier(Modifier::BOLD)
    }

    pub fn hint(&self) -> Style {
        self.colored(Style::new().fg(FIELD_CYAN))
    }

    pub fn answer(&self) -> Style {
        self.colored(Style::new().fg(FIELD_CYAN))
    }

    pub fn field(&self) -> Style {
        self.colored(Style::new().fg(FIELD_CYAN))
    }

    /// The focused field. Without color it falls back to black on white so
    /// the focus stays visible.
    pub fn highlight(&self) -> Style {
        let bg = if self.color { HIGHLIGHT_CYAN } else { HIGHLIGHT_PLAIN };
        Style::new().fg(HIGHLIGHT_TEXT).bg(bg)
    }
}
