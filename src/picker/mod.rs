//! Interactive date/time picker
//!
//! A `DatePicker` asks for a timestamp one field at a time. `PickerState`
//! holds the editing state machine; `time` has the calendar arithmetic it
//! relies on.

mod component;
mod prompt;
mod state;
mod time;
mod traits;

pub use component::{Component, FieldLimits};
pub use prompt::{AnswerFormatter, DatePicker, default_answer, now_or_timestamp};
pub use state::{PickerState, Transition};
pub use time::{
    Bounds, PickerValue, add_component, component_value, set_component, truncate_to_seconds,
};
pub use traits::{KeySource, Renderer};
