//! Date picker prompt component.

use chrono::FixedOffset;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::picker::{Component, PickerValue, component_value};
use crate::tui::theme::Theme;

const SEPARATORS: [&str; 5] = ["/", "/", " ", ":", ":"];

/// Everything needed to draw one frame of the prompt.
#[derive(Debug, Clone)]
pub struct PickerView<'a> {
    pub message: &'a str,
    pub help: Option<&'a str>,
    pub help_key: Option<char>,
    pub show_help: bool,
    pub body: PickerBody<'a>,
    pub theme: Theme,
}

/// The part of the prompt below the question.
#[derive(Debug, Clone)]
pub enum PickerBody<'a> {
    /// Live field editor
    Editing {
        value: PickerValue,
        selected: Component,
        buffer: &'a str,
    },
    /// Final answer shown in place of the editor
    Answer(String),
}

/// Number of terminal rows the prompt can occupy.
pub const PICKER_HEIGHT: u16 = 3;

/// Render the picker prompt.
pub fn render_date_picker(frame: &mut Frame, area: Rect, view: &PickerView) {
    let lines = picker_lines(view);
    frame.render_widget(Paragraph::new(lines), area);
}

/// Rows a frame of `view` actually fills.
pub fn picker_height(view: &PickerView) -> u16 {
    let help = u16::from(view.show_help && view.help.is_some());
    let body = match view.body {
        PickerBody::Answer(_) => 1,
        PickerBody::Editing { .. } => 2,
    };
    help + body
}

fn picker_lines(view: &PickerView) -> Vec<Line<'static>> {
    let theme = &view.theme;
    let mut lines = vec![];

    if view.show_help {
        if let Some(help) = view.help {
            lines.push(Line::from(vec![
                Span::styled("?", theme.help_icon()),
                Span::raw(format!(" {}", help)),
            ]));
        }
    }

    let mut question = vec![
        Span::styled("? ", theme.question_icon()),
        Span::styled(view.message.to_string(), theme.message()),
        Span::raw(" "),
    ];

    match &view.body {
        PickerBody::Answer(answer) => {
            question.push(Span::styled(answer.clone(), theme.answer()));
            lines.push(Line::from(question));
        }
        PickerBody::Editing {
            value,
            selected,
            buffer,
        } => {
            if let (Some(_), Some(key), false) = (view.help, view.help_key, view.show_help) {
                question.push(Span::styled(format!("[{} for help]", key), theme.hint()));
                question.push(Span::raw(" "));
            }
            lines.push(Line::from(question));

            let mut editor = vec![Span::raw("  ")];
            editor.extend(field_line(value, *selected, buffer, theme).spans);
            lines.push(Line::from(editor));
        }
    }

    lines
}

/// `YYYY/MM/DD HH:MM:SS  GMT ±HH:MM` with the selected field highlighted.
///
/// While digits are buffered the selected field shows them as typed,
/// left-justified in the field's width, instead of the committed value.
pub fn field_line(
    value: &PickerValue,
    selected: Component,
    buffer: &str,
    theme: &Theme,
) -> Line<'static> {
    let mut spans = Vec::with_capacity(Component::FIELDS.len() * 2 + 1);

    for (i, component) in Component::FIELDS.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(SEPARATORS[i - 1]));
        }

        let width = component.width();
        let committed = format!("{:0width$}", component_value(value, component));
        let span = if component == selected {
            let text = if buffer.is_empty() {
                committed
            } else {
                format!("{:<width$}", buffer)
            };
            Span::styled(text, theme.highlight())
        } else {
            Span::styled(committed, theme.field())
        };
        spans.push(span);
    }

    spans.push(Span::raw(format!("  GMT {}", offset_label(value.offset()))));
    Line::from(spans)
}

/// Sign-explicit `±HH:MM` offset from UTC.
pub fn offset_label(offset: &FixedOffset) -> String {
    let secs = offset.local_minus_utc();
    let sign = if secs < 0 { '-' } else { '+' };
    let secs = secs.unsigned_abs();
    format!("{}{:02}:{:02}", sign, secs / 3600, (secs % 3600) / 60)
}
