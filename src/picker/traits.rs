//! Collaborator traits for the picker
//!
//! The prompt loop talks to the terminal only through these two seams, so
//! it can be driven by scripted keys and an in-memory backend in tests.

use crossterm::event::KeyEvent;

use crate::error::Result;
use crate::tui::PickerView;

/// A blocking source of key presses.
pub trait KeySource {
    /// Block until the next key press is available.
    ///
    /// Implementations that touch the terminal must leave it in the mode
    /// they found it in, whether the read succeeds or fails.
    fn read_key(&mut self) -> Result<KeyEvent>;
}

/// Something that can draw the prompt.
pub trait Renderer {
    /// Draw one frame of the prompt.
    fn draw(&mut self, view: &PickerView<'_>) -> Result<()>;

    fn hide_cursor(&mut self) -> Result<()>;

    fn show_cursor(&mut self) -> Result<()>;

    /// Leave the output positioned after the prompt.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
