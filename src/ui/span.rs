use crate::ui::style::Style;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn width(&self) -> usize {
        self.text.width()
    }
}

/// Longest prefix of `text` that fits in `max_width` display columns.
pub fn truncate_to_width(text: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width {
            return &text[..idx];
        }
        used += w;
    }
    text
}

/// `text` truncated, then right-padded with spaces to exactly `width` columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let fitted = truncate_to_width(text, width);
    let fill = width.saturating_sub(fitted.width());
    let mut out = String::with_capacity(fitted.len() + fill);
    out.push_str(fitted);
    out.extend(std::iter::repeat_n(' ', fill));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_wide_chars() {
        assert_eq!(truncate_to_width("日本語", 4), "日本");
        assert_eq!(truncate_to_width("日本語", 5), "日本");
        assert_eq!(truncate_to_width("abc", 10), "abc");
    }

    #[test]
    fn pad_fills_to_exact_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 4), "abcd");
        assert_eq!(pad_to_width("日本語", 5).width(), 5);
    }
}
