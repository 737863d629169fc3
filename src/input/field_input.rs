use crate::core::field::Field;
use crate::input::text_edit;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The key means nothing to this input.
    Ignored,
    /// Cursor moved or an edit was refused; the value is unchanged.
    Handled,
    /// New raw text, to be passed through `FormState::update_field`.
    Edited(String),
    Advance,
}

/// Cursor state for one form field. The value itself lives in `FormState`;
/// the input only proposes raw edits and re-anchors its cursor afterwards.
#[derive(Debug, Clone)]
pub struct FieldInput {
    field: Field,
    cursor: usize,
    max_len: Option<usize>,
}

impl FieldInput {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            cursor: 0,
            max_len: field.max_len(),
        }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn handle_key(&mut self, value: &str, key: KeyEvent) -> EditOutcome {
        let len = text_edit::char_count(value);
        self.cursor = self.cursor.min(len);
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if let Some(ch) = key.printable() {
            if self.max_len.is_some_and(|max| len >= max) || ch.is_control() {
                return EditOutcome::Handled;
            }
            let mut raw = value.to_string();
            text_edit::insert_char(&mut raw, &mut self.cursor, ch);
            return EditOutcome::Edited(raw);
        }

        match key.code {
            KeyCode::Backspace if ctrl => self.delete_word(value),
            KeyCode::Char('w') if ctrl => self.delete_word(value),
            KeyCode::Backspace => self.backspace(value),
            KeyCode::Delete => self.delete(value),
            KeyCode::Left if ctrl => {
                self.cursor = text_edit::word_left(value, self.cursor);
                EditOutcome::Handled
            }
            KeyCode::Right if ctrl => {
                self.cursor = text_edit::word_right(value, self.cursor);
                EditOutcome::Handled
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                EditOutcome::Handled
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(len);
                EditOutcome::Handled
            }
            KeyCode::Home => {
                self.cursor = 0;
                EditOutcome::Handled
            }
            KeyCode::End => {
                self.cursor = len;
                EditOutcome::Handled
            }
            KeyCode::Enter => EditOutcome::Advance,
            _ => EditOutcome::Ignored,
        }
    }

    /// Re-anchor the cursor once the stored value is known. `raw` is what
    /// [`FieldInput::handle_key`] proposed, `stored` what the form kept.
    pub fn settle(&mut self, raw: &str, stored: &str) {
        if self.field == Field::CardNumber {
            let digits_before = raw
                .chars()
                .take(self.cursor)
                .filter(char::is_ascii_digit)
                .count();
            self.cursor = cursor_after_digits(stored, digits_before);
        } else {
            self.cursor = self.cursor.min(text_edit::char_count(stored));
        }
    }

    pub fn move_to_end(&mut self, value: &str) {
        self.cursor = text_edit::char_count(value);
    }

    pub fn cursor_width(&self, value: &str) -> usize {
        text_edit::cursor_width(value, self.cursor.min(text_edit::char_count(value)))
    }

    fn backspace(&mut self, value: &str) -> EditOutcome {
        let mut raw = value.to_string();
        if !text_edit::backspace(&mut raw, &mut self.cursor) {
            return EditOutcome::Handled;
        }
        // A group separator goes together with the digit in front of it.
        if self.field == Field::CardNumber && value.chars().nth(self.cursor) == Some(' ') {
            text_edit::backspace(&mut raw, &mut self.cursor);
        }
        EditOutcome::Edited(raw)
    }

    fn delete(&self, value: &str) -> EditOutcome {
        let mut raw = value.to_string();
        if !text_edit::delete(&mut raw, self.cursor) {
            return EditOutcome::Handled;
        }
        // Same rule forwards: the separator goes with the digit after it.
        if self.field == Field::CardNumber && value.chars().nth(self.cursor) == Some(' ') {
            text_edit::delete(&mut raw, self.cursor);
        }
        EditOutcome::Edited(raw)
    }

    fn delete_word(&mut self, value: &str) -> EditOutcome {
        let mut raw = value.to_string();
        if text_edit::delete_word(&mut raw, &mut self.cursor) {
            EditOutcome::Edited(raw)
        } else {
            EditOutcome::Handled
        }
    }
}

fn cursor_after_digits(formatted: &str, digits: usize) -> usize {
    if digits == 0 {
        return 0;
    }
    let mut seen = 0;
    for (idx, ch) in formatted.chars().enumerate() {
        if ch.is_ascii_digit() {
            seen += 1;
            if seen == digits {
                return idx + 1;
            }
        }
    }
    text_edit::char_count(formatted)
}
