//! Terminal-backed key source and renderer.

use std::io::{self, Stderr};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal;
use ratatui::{
    Terminal, TerminalOptions, Viewport,
    backend::{Backend, CrosstermBackend},
    layout::Position,
};

use crate::error::{PickerError, Result};
use crate::picker::{KeySource, Renderer};

use super::components::{PICKER_HEIGHT, PickerView, picker_height, render_date_picker};

/// Raw mode for the lifetime of the guard.
struct RawModeGuard;

impl RawModeGuard {
    /// Enable terminal raw mode and return a guard that disables it on drop.
    fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Reads key presses from the controlling terminal.
///
/// Raw mode is held only while a read is in flight.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl CrosstermKeys {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for CrosstermKeys {
    fn read_key(&mut self) -> Result<KeyEvent> {
        let _guard = RawModeGuard::acquire()?;
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(key),
                _ => continue,
            }
        }
    }
}

/// Draws the prompt through a ratatui terminal.
///
/// The inline viewport is sized for the tallest frame. `rows_used` tracks
/// the last frame so `finish` can park the cursor on its final line and
/// leave the rows below free for whatever is printed next.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    rows_used: u16,
}

impl TerminalRenderer<CrosstermBackend<Stderr>> {
    /// An inline prompt on stderr, below the current cursor line.
    pub fn stderr() -> Result<Self> {
        let terminal = Terminal::with_options(
            CrosstermBackend::new(io::stderr()),
            TerminalOptions {
                viewport: Viewport::Inline(PICKER_HEIGHT),
            },
        )?;
        Ok(Self::new(terminal))
    }
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            rows_used: PICKER_HEIGHT,
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

fn terminal_error(err: impl std::fmt::Display) -> PickerError {
    PickerError::Terminal(err.to_string())
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn draw(&mut self, view: &PickerView<'_>) -> Result<()> {
        self.terminal
            .draw(|frame| {
                let area = frame.area();
                render_date_picker(frame, area, view)
            })
            .map_err(terminal_error)?;
        self.rows_used = picker_height(view);
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.terminal.hide_cursor().map_err(terminal_error)
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.terminal.show_cursor().map_err(terminal_error)
    }

    fn finish(&mut self) -> Result<()> {
        let area = self.terminal.get_frame().area();
        let last_row = area.y + self.rows_used.min(area.height).saturating_sub(1);
        self.terminal
            .set_cursor_position(Position::new(0, last_row))
            .map_err(terminal_error)
    }
}
