use crate::ui::frame::Frame;
use crate::ui::style::{Color, Style};

pub fn frame_to_json(frame: &Frame) -> serde_json::Value {
    let cursor = frame.cursor().map(|c| {
        serde_json::json!({
            "row": c.row,
            "col": c.col,
        })
    });

    let lines = frame
        .lines()
        .iter()
        .map(|line| {
            serde_json::Value::Array(
                line.spans()
                    .iter()
                    .map(|span| {
                        serde_json::json!({
                            "text": span.text,
                            "style": style_to_json(&span.style),
                        })
                    })
                    .collect(),
            )
        })
        .collect::<Vec<_>>();

    serde_json::json!({
        "cursor": cursor,
        "text": frame.to_plain_text(),
        "lines": lines,
    })
}

fn style_to_json(style: &Style) -> serde_json::Value {
    serde_json::json!({
        "color": style.color.map(color_to_json),
        "background": style.background.map(color_to_json),
        "bold": style.bold,
        "dim": style.dim,
        "underline": style.underline,
    })
}

fn color_to_json(color: Color) -> serde_json::Value {
    match color {
        Color::Reset => serde_json::json!("reset"),
        Color::Black => serde_json::json!("black"),
        Color::DarkGrey => serde_json::json!("dark_grey"),
        Color::Red => serde_json::json!("red"),
        Color::Green => serde_json::json!("green"),
        Color::Yellow => serde_json::json!("yellow"),
        Color::Blue => serde_json::json!("blue"),
        Color::Magenta => serde_json::json!("magenta"),
        Color::Cyan => serde_json::json!("cyan"),
        Color::White => serde_json::json!("white"),
        Color::Rgb([r, g, b]) => serde_json::json!({
            "rgb": [r, g, b]
        }),
    }
}
