use crate::core::field::Field;
use crate::core::state::{AppState, FocusTarget};
use crate::terminal::CursorPos;
use crate::ui::frame::{Frame, Line};
use crate::ui::span::pad_to_width;
use crate::ui::theme::Theme;
use unicode_width::UnicodeWidthStr;

pub const CONFIRM_LABEL: &str = "[ Confirm ]";
pub const CONTINUE_LABEL: &str = "[ Continue ]";
pub const THANK_YOU: &str = "Thank you!!!";
pub const ADDED_MESSAGE: &str = "We have added your card details";
pub const KEY_HINT: &str = "Tab/Shift+Tab move · Enter next/confirm · Ctrl+S submit · Esc quit";

const INDENT: &str = " ";
const CVC_COLUMN: usize = 21;

fn box_width(field: Field, value: &str) -> usize {
    let min = match field {
        Field::Name => 24,
        Field::CardNumber => 19,
        Field::Month | Field::Year => 2,
        Field::Cvc => 7,
    };
    min.max(value.width() + 1)
}

fn pad_line_to(line: &mut Line, column: usize) {
    let fill = column.saturating_sub(line.width());
    line.text(" ".repeat(fill));
}

struct FormPainter<'a> {
    state: &'a AppState,
    theme: &'a Theme,
    frame: Frame,
}

impl<'a> FormPainter<'a> {
    fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self {
            state,
            theme,
            frame: Frame::new(),
        }
    }

    fn label_line(&mut self, labels: &[(Field, usize)]) {
        let mut line = Line::new();
        for (field, column) in labels {
            pad_line_to(&mut line, *column);
            let style = if self.state.focus() == FocusTarget::Field(*field) {
                self.theme.focused_label
            } else {
                self.theme.label
            };
            line.styled(field.label(), style);
        }
        self.frame.push_line(line);
    }

    /// Draw `[value]` for `field` onto `line`, recording the cursor when the
    /// field has focus.
    fn input_box(&mut self, line: &mut Line, field: Field) {
        let value = self.state.form.value(field);
        let focused = self.state.focus() == FocusTarget::Field(field);
        let border = if self.state.form.error(field).is_some() {
            self.theme.error
        } else if focused {
            self.theme.focused
        } else {
            self.theme.input_border
        };
        let width = box_width(field, value);

        line.styled("[", border);
        if focused {
            let col = line.width() + self.state.input(field).cursor_width(value);
            self.frame.set_cursor(CursorPos {
                col: u16::try_from(col).unwrap_or(u16::MAX),
                row: self.frame.next_row(),
            });
        }
        if value.is_empty() {
            line.styled(pad_to_width(field.placeholder(), width), self.theme.placeholder);
        } else {
            line.text(pad_to_width(value, width));
        }
        line.styled("]", border);
    }

    fn error_lines(&mut self, fields: &[Field]) {
        for field in fields {
            if let Some(message) = self.state.form.error(*field) {
                let mut line = Line::new();
                line.text(INDENT).styled(format!("! {message}"), self.theme.error);
                self.frame.push_line(line);
            }
        }
    }

    fn single_field(&mut self, field: Field) {
        self.label_line(&[(field, 0)]);
        let mut line = Line::new();
        line.text(INDENT);
        self.input_box(&mut line, field);
        self.frame.push_line(line);
        self.error_lines(&[field]);
    }

    fn expiry_and_cvc(&mut self) {
        self.label_line(&[(Field::Month, 0), (Field::Cvc, CVC_COLUMN)]);
        let mut line = Line::new();
        line.text(INDENT);
        self.input_box(&mut line, Field::Month);
        line.text(" ");
        self.input_box(&mut line, Field::Year);
        pad_line_to(&mut line, CVC_COLUMN);
        self.input_box(&mut line, Field::Cvc);
        self.frame.push_line(line);
        self.error_lines(&[Field::Month, Field::Year, Field::Cvc]);
    }

    fn confirm_button(&mut self) {
        let enabled = self.state.form.is_valid();
        let focused = self.state.focus() == FocusTarget::Confirm;
        let style = if enabled {
            self.theme.button
        } else {
            self.theme.button_disabled
        };
        let mut line = Line::new();
        line.styled(if focused { ">" } else { INDENT }, self.theme.focused)
            .styled(CONFIRM_LABEL, style);
        self.frame.blank_line();
        self.frame.push_line(line);
    }

    fn finish(self) -> Frame {
        self.frame
    }
}

/// Five inputs with inline errors and the Confirm button.
pub fn render_form(state: &AppState, theme: &Theme) -> Frame {
    let mut painter = FormPainter::new(state, theme);
    painter.single_field(Field::Name);
    painter.single_field(Field::CardNumber);
    painter.expiry_and_cvc();
    painter.confirm_button();
    painter.finish()
}

/// Panel shown in place of the form once the card has been accepted.
pub fn render_confirmation(state: &AppState, theme: &Theme) -> Frame {
    let mut frame = Frame::new();

    let mut icon = Line::new();
    icon.text("     ").styled("✓", theme.heading);
    frame.push_line(icon);

    let mut heading = Line::new();
    heading.text(INDENT).styled(THANK_YOU, theme.heading);
    frame.push_line(heading);

    let mut message = Line::new();
    message.text(INDENT).styled(ADDED_MESSAGE, theme.muted);
    frame.push_line(message);

    frame.blank_line();
    let focused = state.focus() == FocusTarget::Continue;
    let mut button = Line::new();
    button
        .styled(if focused { ">" } else { INDENT }, theme.focused)
        .styled(CONTINUE_LABEL, theme.button);
    frame.push_line(button);
    frame
}

pub fn render_hint(theme: &Theme) -> Frame {
    let mut frame = Frame::new();
    let mut line = Line::new();
    line.styled(KEY_HINT, theme.hint);
    frame.push_line(line);
    frame
}
