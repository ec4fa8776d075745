//! The date picker prompt.

use chrono::{Local, TimeDelta};

use crate::error::{PickerError, Result};
use crate::events::decode_key;
use crate::log;
use crate::tui::{CrosstermKeys, PickerBody, PickerView, TerminalRenderer, Theme};

use super::state::{PickerState, Transition};
use super::time::{Bounds, PickerValue};
use super::traits::{KeySource, Renderer};

/// Formats the final answer line. Arguments are "now" and the selected value.
pub type AnswerFormatter = Box<dyn Fn(PickerValue, PickerValue) -> String + Send + Sync>;

/// Plain textual form of the selected value.
pub fn default_answer(_now: PickerValue, selected: PickerValue) -> String {
    selected.to_string()
}

/// Shows `Now` for anything less than a minute after `now`.
///
/// Useful for scheduling prompts where "as soon as possible" is the default.
pub fn now_or_timestamp(now: PickerValue, selected: PickerValue) -> String {
    if selected < now + TimeDelta::minutes(1) {
        "Now".to_string()
    } else {
        selected.to_string()
    }
}

/// A prompt that asks for a date and time.
///
/// Every bound is optional. Without a default the picker starts at "now",
/// clamped into the bounds.
pub struct DatePicker {
    message: String,
    default: Option<PickerValue>,
    min: Option<PickerValue>,
    max: Option<PickerValue>,
    help: Option<String>,
    help_key: Option<char>,
    answer_formatter: Option<AnswerFormatter>,
    override_now: Option<PickerValue>,
    theme: Theme,
}

impl DatePicker {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            default: None,
            min: None,
            max: None,
            help: None,
            help_key: Some('?'),
            answer_formatter: None,
            override_now: None,
            theme: Theme::default(),
        }
    }

    pub fn with_default(mut self, default: PickerValue) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_min(mut self, min: PickerValue) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: PickerValue) -> Self {
        self.max = Some(max);
        self
    }

    /// Help text revealed by the help key. Empty text means no help.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        let help = help.into();
        self.help = (!help.is_empty()).then_some(help);
        self
    }

    /// Key that reveals the help text; None disables it.
    pub fn with_help_key(mut self, key: Option<char>) -> Self {
        self.help_key = key;
        self
    }

    pub fn with_answer_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(PickerValue, PickerValue) -> String + Send + Sync + 'static,
    {
        self.answer_formatter = Some(Box::new(formatter));
        self
    }

    /// Pin what the picker considers "now".
    pub fn with_now(mut self, now: PickerValue) -> Self {
        self.override_now = Some(now);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// The pinned "now", or the local clock.
    pub fn now(&self) -> PickerValue {
        self.override_now
            .unwrap_or_else(|| Local::now().fixed_offset())
    }

    /// Run the prompt on the controlling terminal.
    pub fn ask(&self) -> Result<PickerValue> {
        let mut renderer = TerminalRenderer::stderr()?;
        let mut keys = CrosstermKeys::new();
        let result = self.prompt(&mut renderer, &mut keys);
        drop(renderer);
        eprintln!();
        result
    }

    /// Run the prompt against the given renderer and key source.
    ///
    /// Returns the committed, clamped value, `PickerError::Interrupted` if
    /// the user pressed Ctrl-C, or the first I/O error encountered.
    pub fn prompt<R, K>(&self, renderer: &mut R, keys: &mut K) -> Result<PickerValue>
    where
        R: Renderer,
        K: KeySource,
    {
        let bounds = Bounds::new(self.min, self.max);
        let initial = self.default.unwrap_or_else(|| self.now());
        let mut state = PickerState::new(initial, bounds, self.help.is_some());
        log::log_event(&format!(
            "prompt '{}' start={} min={:?} max={:?}",
            self.message,
            state.value(),
            bounds.min(),
            bounds.max()
        ));

        let _ = renderer.hide_cursor();
        let result = self.run(&mut state, renderer, keys);
        let _ = renderer.show_cursor();

        match &result {
            Ok(value) => log::log_event(&format!("answered {}", value)),
            Err(e) => log::log_event(&format!("aborted: {}", e)),
        }
        result
    }

    fn run<R, K>(&self, state: &mut PickerState, renderer: &mut R, keys: &mut K) -> Result<PickerValue>
    where
        R: Renderer,
        K: KeySource,
    {
        loop {
            renderer.draw(&self.editing_view(state))?;

            let key = keys.read_key()?;
            let action = decode_key(key, self.help_key);
            log::log_event(&format!("{:?} -> {:?}", key.code, action));

            match state.apply(action) {
                Transition::Continue => {}
                Transition::Submit => break,
                Transition::Cancel => return Err(PickerError::Interrupted),
            }
        }

        // one last plain render so no half-typed digits linger on screen
        state.clear_focus();
        renderer.draw(&self.editing_view(state))?;

        let value = state.value();
        let answer = match &self.answer_formatter {
            Some(formatter) => formatter(self.now(), value),
            None => default_answer(self.now(), value),
        };
        renderer.draw(&self.view(state, PickerBody::Answer(answer)))?;
        renderer.finish()?;

        Ok(value)
    }

    fn editing_view<'a>(&'a self, state: &'a PickerState) -> PickerView<'a> {
        self.view(
            state,
            PickerBody::Editing {
                value: state.value(),
                selected: state.selected(),
                buffer: state.buffer(),
            },
        )
    }

    fn view<'a>(&'a self, state: &PickerState, body: PickerBody<'a>) -> PickerView<'a> {
        PickerView {
            message: &self.message,
            help: self.help.as_deref(),
            help_key: self.help_key,
            show_help: state.help_visible(),
            body,
            theme: self.theme,
        }
    }
}
