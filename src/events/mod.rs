//! Key decoding for the picker.
//!
//! Terminal key events are turned into `Action`s here so the state machine
//! can be driven and tested without a terminal.

mod action;
mod keyboard;

pub use action::Action;
pub use keyboard::decode_key;
