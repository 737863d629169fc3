use crate::core::form_state::FormFields;
use crate::ui::frame::{Frame, Line};
use crate::ui::span::{Span, pad_to_width, truncate_to_width};
use crate::ui::theme::Theme;

pub const CARD_INNER_WIDTH: usize = 34;

pub const NUMBER_PLACEHOLDER: &str = "0000 0000 0000 0000";
pub const NAME_PLACEHOLDER: &str = "JANE APPLESEED";
pub const EXPIRY_PART_PLACEHOLDER: &str = "00";
pub const CVC_PLACEHOLDER: &str = "000";

const NUMBER_WIDTH: usize = 30;
const NAME_WIDTH: usize = 23;
const CVC_WIDTH: usize = 3;

fn value_span(value: &str, placeholder: &str, width: Option<usize>, theme: &Theme) -> Span {
    let (text, style) = if value.is_empty() {
        (placeholder, theme.placeholder)
    } else {
        (value, theme.card_value)
    };
    match width {
        Some(width) => Span::styled(pad_to_width(text, width), style),
        None => Span::styled(text, style),
    }
}

fn edge(theme: &Theme, left: &str, right: &str) -> Line {
    let mut line = Line::new();
    line.styled(
        format!("{left}{}{right}", "─".repeat(CARD_INNER_WIDTH)),
        theme.card_border,
    );
    line
}

fn row(theme: &Theme, content: Vec<Span>) -> Line {
    let mut line = Line::new();
    line.styled("│", theme.card_border);
    let mut used = 0;
    for span in content {
        used += span.width();
        line.push(span);
    }
    line.text(" ".repeat(CARD_INNER_WIDTH.saturating_sub(used)));
    line.styled("│", theme.card_border);
    line
}

/// Back face: magnetic stripe and the CVC panel.
pub fn render_back(fields: &FormFields, theme: &Theme) -> Frame {
    let mut frame = Frame::new();
    frame.push_line(edge(theme, "╭", "╮"));
    frame.push_line(row(
        theme,
        vec![Span::styled("█".repeat(CARD_INNER_WIDTH), theme.muted)],
    ));
    frame.push_line(row(theme, vec![]));
    frame.push_line(row(
        theme,
        vec![Span::styled(
            format!("   ┌{}┬{}┐", "─".repeat(22), "─".repeat(CVC_WIDTH + 2)),
            theme.muted,
        )],
    ));
    frame.push_line(row(
        theme,
        vec![
            Span::styled(format!("   │{}│ ", " ".repeat(22)), theme.muted),
            value_span(&fields.cvc, CVC_PLACEHOLDER, Some(CVC_WIDTH), theme),
            Span::styled(" │", theme.muted),
        ],
    ));
    frame.push_line(row(
        theme,
        vec![Span::styled(
            format!("   └{}┴{}┘", "─".repeat(22), "─".repeat(CVC_WIDTH + 2)),
            theme.muted,
        )],
    ));
    frame.push_line(edge(theme, "╰", "╯"));
    frame
}

/// Front face: number, holder name and expiry, placeholders where empty.
pub fn render_front(fields: &FormFields, theme: &Theme) -> Frame {
    let mut frame = Frame::new();
    frame.push_line(edge(theme, "╭", "╮"));
    frame.push_line(row(
        theme,
        vec![
            Span::new("  "),
            Span::styled("●", theme.card_value),
            Span::new("  "),
            Span::styled("○", theme.card_value),
        ],
    ));
    frame.push_line(row(theme, vec![]));
    frame.push_line(row(
        theme,
        vec![
            Span::new("  "),
            value_span(&fields.card_number, NUMBER_PLACEHOLDER, Some(NUMBER_WIDTH), theme),
        ],
    ));
    frame.push_line(row(theme, vec![]));

    let month = value_span(
        truncate_to_width(&fields.month, 2),
        EXPIRY_PART_PLACEHOLDER,
        None,
        theme,
    );
    let year = value_span(
        truncate_to_width(&fields.year, 2),
        EXPIRY_PART_PLACEHOLDER,
        None,
        theme,
    );
    let expiry_width = month.width() + 1 + year.width();
    let name_width = NAME_WIDTH + 5usize.saturating_sub(expiry_width);
    frame.push_line(row(
        theme,
        vec![
            Span::new("  "),
            value_span(&fields.name, NAME_PLACEHOLDER, Some(name_width), theme),
            Span::new("  "),
            month,
            Span::styled("/", theme.card_value),
            year,
        ],
    ));
    frame.push_line(edge(theme, "╰", "╯"));
    frame
}
