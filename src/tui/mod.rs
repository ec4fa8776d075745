//! Terminal drawing and input for the picker.

pub mod components;
pub mod terminal;
pub mod theme;

pub use components::{PickerBody, PickerView};
pub use terminal::{CrosstermKeys, TerminalRenderer};
pub use theme::Theme;
