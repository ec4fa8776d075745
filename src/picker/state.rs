//! Picker state machine.
//!
//! A `PickerState` lives for exactly one prompt. It holds the working value,
//! the focused field, and any digits typed into that field but not yet
//! written back. Only committed digits ever reach `value`.

use crate::events::Action;
use crate::log;

use super::time::{self, Bounds, PickerValue};
use super::Component;

/// What the prompt loop should do after an action has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep reading keys
    Continue,
    /// The value is final
    Submit,
    /// The user cancelled; the value must not be returned
    Cancel,
}

/// Mutable state of one picker invocation.
#[derive(Debug, Clone)]
pub struct PickerState {
    value: PickerValue,
    selected: Component,
    buffer: String,
    help_visible: bool,
    help_enabled: bool,
    bounds: Bounds,
}

impl PickerState {
    /// Start editing `initial`, truncated and clamped, with focus on the year.
    pub fn new(initial: PickerValue, bounds: Bounds, help_enabled: bool) -> Self {
        Self {
            value: bounds.clamp(time::truncate_to_seconds(initial)),
            selected: Component::Year,
            buffer: String::new(),
            help_visible: false,
            help_enabled,
            bounds,
        }
    }

    pub fn value(&self) -> PickerValue {
        self.value
    }

    pub fn selected(&self) -> Component {
        self.selected
    }

    /// Digits typed into the focused field and not yet committed.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    /// Drop focus so the next render shows no highlighted field.
    pub fn clear_focus(&mut self) {
        self.selected = Component::None;
    }

    /// Apply one decoded action.
    pub fn apply(&mut self, action: Action) -> Transition {
        match action {
            Action::Interrupt => return Transition::Cancel,
            Action::Submit => {
                self.commit_and_clamp();
                return Transition::Submit;
            }
            Action::ShowHelp => {
                if self.help_enabled {
                    self.help_visible = true;
                }
            }
            Action::Increment => {
                let committed = self.commit_buffer();
                self.value = self
                    .bounds
                    .clamp(time::add_component(committed, self.selected, 1));
            }
            Action::Decrement => {
                let committed = self.commit_buffer();
                self.value = self
                    .bounds
                    .clamp(time::add_component(committed, self.selected, -1));
            }
            Action::FocusPrev => {
                self.commit_and_clamp();
                self.selected = self.selected.prev();
            }
            Action::FocusNext => {
                self.commit_and_clamp();
                self.selected = self.selected.next();
            }
            Action::Digit(d) => self.push_digit(d),
            Action::None => {}
        }
        Transition::Continue
    }

    /// Parse the buffer into the focused field and clear it.
    ///
    /// Returns the updated value without clamping. An empty buffer leaves the
    /// value untouched; an unparseable one is discarded.
    fn commit_buffer(&mut self) -> PickerValue {
        if self.buffer.is_empty() {
            return self.value;
        }
        let parsed = self.buffer.parse::<u32>();
        self.buffer.clear();
        match parsed {
            Ok(v) => {
                log::log_event(&format!("commit {:?} = {}", self.selected, v));
                time::set_component(self.value, self.selected, v)
            }
            Err(_) => self.value,
        }
    }

    fn commit_and_clamp(&mut self) {
        let committed = self.commit_buffer();
        self.value = self.bounds.clamp(committed);
    }

    /// Buffer a digit for the focused field, committing once the field is full.
    fn push_digit(&mut self, d: char) {
        let Some(limits) = self.selected.limits() else {
            self.buffer.clear();
            return;
        };

        self.buffer.push(d);
        let Ok(v) = self.buffer.parse::<u32>() else {
            self.buffer.clear();
            return;
        };

        if v > limits.max_value {
            // e.g. '3' then '2' in the month field
            log::log_event(&format!("overflow {:?}: {}", self.selected, self.buffer));
            self.buffer.clear();
        } else if self.buffer.len() >= limits.max_digits {
            self.commit_and_clamp();
            self.selected = self.selected.next();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn at(s: &str) -> PickerValue {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn state(initial: &str) -> PickerState {
        PickerState::new(at(initial), Bounds::default(), true)
    }

    fn focus(state: &mut PickerState, target: Component) {
        while state.selected() < target {
            state.apply(Action::FocusNext);
        }
    }

    fn type_digits(state: &mut PickerState, digits: &str) {
        for d in digits.chars() {
            assert_eq!(state.apply(Action::Digit(d)), Transition::Continue);
        }
    }

    #[test]
    fn test_initial_state() {
        let s = PickerState::new(at("2023-06-15T10:30:00.500Z"), Bounds::default(), false);
        assert_eq!(s.value(), at("2023-06-15T10:30:00Z"));
        assert_eq!(s.selected(), Component::Year);
        assert!(s.buffer().is_empty());
        assert!(!s.help_visible());
    }

    #[test]
    fn test_initial_value_is_clamped() {
        let bounds = Bounds::new(Some(at("2024-01-01T00:00:00Z")), None);
        let s = PickerState::new(at("2020-05-05T00:00:00Z"), bounds, false);
        assert_eq!(s.value(), at("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn test_full_field_commits_and_advances() {
        let mut s = state("2023-06-15T10:30:00Z");
        focus(&mut s, Component::Month);
        type_digits(&mut s, "0");
        assert_eq!(s.buffer(), "0");
        assert_eq!(s.value(), at("2023-06-15T10:30:00Z"));

        type_digits(&mut s, "9");
        assert_eq!(s.value(), at("2023-09-15T10:30:00Z"));
        assert_eq!(s.selected(), Component::Day);
        assert!(s.buffer().is_empty());
    }

    #[test]
    fn test_overflow_resets_buffer() {
        let mut s = state("2023-06-15T10:30:00Z");
        focus(&mut s, Component::Month);
        type_digits(&mut s, "32");
        assert!(s.buffer().is_empty());
        assert_eq!(s.value(), at("2023-06-15T10:30:00Z"));
        assert_eq!(s.selected(), Component::Month);
    }

    #[test]
    fn test_hour_accepts_24() {
        let mut s = state("2023-06-15T10:30:00Z");
        focus(&mut s, Component::Hour);
        type_digits(&mut s, "25");
        assert_eq!(s.value(), at("2023-06-15T10:30:00Z"));
        type_digits(&mut s, "24");
        assert_eq!(s.value(), at("2023-06-16T00:30:00Z"));
        assert_eq!(s.selected(), Component::Minute);
    }

    #[test]
    fn test_commit_before_navigate() {
        let mut s = state("2023-06-15T10:30:00Z");
        focus(&mut s, Component::Hour);
        type_digits(&mut s, "5");
        s.apply(Action::FocusNext);
        assert_eq!(s.value(), at("2023-06-15T05:30:00Z"));
        assert_eq!(s.selected(), Component::Minute);
    }

    #[test]
    fn test_commit_before_increment() {
        let mut s = state("2023-06-15T10:30:00Z");
        focus(&mut s, Component::Minute);
        type_digits(&mut s, "4");
        s.apply(Action::Increment);
        assert_eq!(s.value(), at("2023-06-15T10:05:00Z"));
        assert_eq!(s.selected(), Component::Minute);
    }

    #[test]
    fn test_increment_commits_before_clamping() {
        let bounds = Bounds::new(Some(at("2024-02-01T00:00:00Z")), None);
        let mut s = PickerState::new(at("2024-03-15T00:00:00Z"), bounds, false);
        focus(&mut s, Component::Month);
        type_digits(&mut s, "1");
        // January is out of range on its own; one month later it is not
        s.apply(Action::Increment);
        assert_eq!(s.value(), at("2024-02-15T00:00:00Z"));
    }

    #[test]
    fn test_navigation_boundaries() {
        let mut s = state("2023-06-15T10:30:00Z");
        s.apply(Action::FocusPrev);
        assert_eq!(s.selected(), Component::Year);
        focus(&mut s, Component::Second);
        s.apply(Action::FocusNext);
        assert_eq!(s.selected(), Component::Second);
    }

    #[test]
    fn test_increment_month_is_clamped_to_max() {
        let bounds = Bounds::new(
            Some(at("2024-01-01T00:00:00Z")),
            Some(at("2024-01-31T23:59:59Z")),
        );
        let mut s = PickerState::new(at("2024-01-10T12:00:00Z"), bounds, false);
        focus(&mut s, Component::Month);
        s.apply(Action::Increment);
        assert_eq!(s.value(), at("2024-01-31T23:59:59Z"));
        s.apply(Action::Decrement);
        assert_eq!(s.value(), at("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn test_increment_month_rolls_past_short_month() {
        let mut s = state("2023-01-31T10:30:00Z");
        focus(&mut s, Component::Month);
        s.apply(Action::Increment);
        assert_eq!(s.value(), at("2023-03-03T10:30:00Z"));
        s.apply(Action::Decrement);
        assert_eq!(s.value(), at("2023-02-03T10:30:00Z"));
    }

    #[test]
    fn test_interrupt_discards_buffer() {
        let mut s = state("2023-06-15T10:30:00Z");
        type_digits(&mut s, "19");
        assert_eq!(s.apply(Action::Interrupt), Transition::Cancel);
        assert_eq!(s.value(), at("2023-06-15T10:30:00Z"));
    }

    #[test]
    fn test_submit_commits_pending_digits() {
        let mut s = state("2023-06-15T10:30:00Z");
        focus(&mut s, Component::Day);
        type_digits(&mut s, "3");
        assert_eq!(s.apply(Action::Submit), Transition::Submit);
        assert_eq!(s.value(), at("2023-06-03T10:30:00Z"));
        assert!(s.buffer().is_empty());
    }

    #[test]
    fn test_submit_clamps_committed_value() {
        let bounds = Bounds::new(None, Some(at("2023-06-20T00:00:00Z")));
        let mut s = PickerState::new(at("2023-06-15T10:30:00Z"), bounds, false);
        focus(&mut s, Component::Day);
        type_digits(&mut s, "2");
        s.apply(Action::Submit);
        assert_eq!(s.value(), at("2023-06-02T10:30:00Z"));

        let mut s = PickerState::new(at("2023-06-15T10:30:00Z"), bounds, false);
        focus(&mut s, Component::Month);
        type_digits(&mut s, "7");
        s.apply(Action::Submit);
        assert_eq!(s.value(), at("2023-06-20T00:00:00Z"));
    }

    #[test]
    fn test_help_is_sticky_and_needs_help_text() {
        let mut s = state("2023-06-15T10:30:00Z");
        s.apply(Action::ShowHelp);
        assert!(s.help_visible());
        s.apply(Action::FocusNext);
        assert!(s.help_visible());

        let mut s = PickerState::new(at("2023-06-15T10:30:00Z"), Bounds::default(), false);
        s.apply(Action::ShowHelp);
        assert!(!s.help_visible());
    }

    #[test]
    fn test_ignored_action_changes_nothing() {
        let mut s = state("2023-06-15T10:30:00Z");
        type_digits(&mut s, "20");
        assert_eq!(s.apply(Action::None), Transition::Continue);
        assert_eq!(s.buffer(), "20");
        assert_eq!(s.value(), at("2023-06-15T10:30:00Z"));
    }

    #[test]
    fn test_invalid_day_rolls_over() {
        let mut s = state("2023-02-10T10:30:00Z");
        focus(&mut s, Component::Day);
        type_digits(&mut s, "31");
        assert_eq!(s.value(), at("2023-03-03T10:30:00Z"));
        assert_eq!(s.selected(), Component::Hour);
    }

    #[test]
    fn test_end_to_end_edit() {
        let mut s = state("2023-06-15T10:30:00Z");
        type_digits(&mut s, "2024");
        assert_eq!(s.selected(), Component::Month);
        for _ in 0..4 {
            s.apply(Action::FocusNext);
        }
        assert_eq!(s.selected(), Component::Second);
        s.apply(Action::Increment);
        assert_eq!(s.apply(Action::Submit), Transition::Submit);
        assert_eq!(s.value(), at("2024-06-15T10:30:01Z"));
    }
}
