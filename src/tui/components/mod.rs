//! UI components for the prompt.
//!
//! - `date_picker` - Question line, help line, and the field editor

mod date_picker;

pub use date_picker::{
    PICKER_HEIGHT, PickerBody, PickerView, field_line, offset_label, picker_height,
    render_date_picker,
};
