//! chronopick: an interactive terminal date/time picker.
//!
//! ```ignore
//! use chronopick::DatePicker;
//!
//! let when = DatePicker::new("Scheduled start time")
//!     .with_help("Use the arrow keys or type digits")
//!     .ask()?;
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod log;
pub mod picker;
pub mod tui;

pub use error::{PickerError, Result};
pub use picker::{DatePicker, PickerValue};
