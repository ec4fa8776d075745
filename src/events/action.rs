//! Action enum for decoupling terminal key decoding from picker state changes.
//!
//! Actions represent user intents; the picker state machine only ever sees
//! these, never raw key codes.

/// Actions decoded from a single key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Ctrl-C: abandon the prompt
    Interrupt,
    /// Enter or end-of-transmission: commit and finish
    Submit,
    /// The configured help key
    ShowHelp,
    /// Up arrow: add one unit to the focused field
    Increment,
    /// Down arrow: subtract one unit from the focused field
    Decrement,
    /// Left arrow
    FocusPrev,
    /// Right arrow, Tab, or one of the separator keys
    FocusNext,
    /// A decimal digit typed into the focused field
    Digit(char),
    /// Anything else
    None,
}
