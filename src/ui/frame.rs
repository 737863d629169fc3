use crate::terminal::CursorPos;
use crate::ui::span::Span;
use crate::ui::style::Style;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn push(&mut self, span: Span) {
        if !span.text.is_empty() {
            self.spans.push(span);
        }
    }

    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Span::new(text));
        self
    }

    pub fn styled(&mut self, text: impl Into<String>, style: Style) -> &mut Self {
        self.push(Span::styled(text, style));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Frame {
    lines: Vec<Line>,
    cursor: Option<CursorPos>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn push_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn blank_line(&mut self) {
        self.lines.push(Line::new());
    }

    /// Row index the next pushed line will occupy.
    pub fn next_row(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    pub fn extend(&mut self, other: Frame) {
        let offset = self.next_row();
        if self.cursor.is_none() {
            self.cursor = other.cursor.map(|c| CursorPos {
                col: c.col,
                row: c.row.saturating_add(offset),
            });
        }
        self.lines.extend(other.lines);
    }

    pub fn cursor(&self) -> Option<CursorPos> {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: CursorPos) {
        self.cursor = Some(cursor);
    }

    pub fn to_plain_text(&self) -> String {
        self.lines
            .iter()
            .map(Line::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_spans_are_dropped() {
        let mut line = Line::new();
        line.text("").text("ab");
        assert_eq!(line.spans().len(), 1);
        assert_eq!(line.width(), 2);
    }

    #[test]
    fn extend_offsets_cursor_rows() {
        let mut top = Frame::new();
        top.blank_line();
        top.blank_line();

        let mut bottom = Frame::new();
        bottom.blank_line();
        bottom.set_cursor(CursorPos { col: 3, row: 0 });

        top.extend(bottom);
        assert_eq!(top.cursor(), Some(CursorPos { col: 3, row: 2 }));
        assert_eq!(top.lines().len(), 3);
    }
}
