//! Char-indexed editing on plain strings. Cursor positions count chars,
//! not bytes.

use unicode_width::UnicodeWidthStr;

pub fn char_count(value: &str) -> usize {
    value.chars().count()
}

fn byte_index(value: &str, cursor: usize) -> usize {
    value
        .char_indices()
        .nth(cursor)
        .map_or(value.len(), |(idx, _)| idx)
}

pub fn insert_char(value: &mut String, cursor: &mut usize, ch: char) {
    let pos = byte_index(value, *cursor);
    value.insert(pos, ch);
    *cursor += 1;
}

pub fn backspace(value: &mut String, cursor: &mut usize) -> bool {
    if *cursor == 0 {
        return false;
    }
    let pos = byte_index(value, *cursor - 1);
    value.remove(pos);
    *cursor -= 1;
    true
}

pub fn delete(value: &mut String, cursor: usize) -> bool {
    if cursor >= char_count(value) {
        return false;
    }
    let pos = byte_index(value, cursor);
    value.remove(pos);
    true
}

fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '.' | '/' | ',' | '-')
}

pub fn word_left(value: &str, cursor: usize) -> usize {
    let chars: Vec<char> = value.chars().collect();
    let mut pos = cursor.min(chars.len());

    while pos > 0 && is_separator(chars[pos - 1]) {
        pos -= 1;
    }
    while pos > 0 && !is_separator(chars[pos - 1]) {
        pos -= 1;
    }
    pos
}

pub fn word_right(value: &str, cursor: usize) -> usize {
    let chars: Vec<char> = value.chars().collect();
    let mut pos = cursor.min(chars.len());

    while pos < chars.len() && is_separator(chars[pos]) {
        pos += 1;
    }
    while pos < chars.len() && !is_separator(chars[pos]) {
        pos += 1;
    }
    pos
}

pub fn delete_word(value: &mut String, cursor: &mut usize) -> bool {
    let start = word_left(value, *cursor);
    if start == *cursor {
        return false;
    }
    let from = byte_index(value, start);
    let to = byte_index(value, *cursor);
    value.replace_range(from..to, "");
    *cursor = start;
    true
}

/// Display columns occupied by the first `cursor` chars.
pub fn cursor_width(value: &str, cursor: usize) -> usize {
    value[..byte_index(value, cursor)].width()
}
