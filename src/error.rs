//! Error types for chronopick
//!
//! Only two kinds of failure ever reach a caller of the picker:
//! - `PickerError::Interrupted` when the user cancels with Ctrl-C
//! - I/O or terminal failures while reading keys or drawing
//!
//! Bad numeric entry is absorbed by the picker and never surfaces here.

use thiserror::Error;

/// Top-level error type for chronopick
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("interrupted")]
    Interrupted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl PickerError {
    /// True when the user cancelled the prompt.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, PickerError::Interrupted)
    }
}

/// Result type alias for PickerError
pub type Result<T> = std::result::Result<T, PickerError>;

impl From<toml::de::Error> for PickerError {
    fn from(err: toml::de::Error) -> Self {
        PickerError::Config(err.to_string())
    }
}
