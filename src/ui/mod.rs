pub mod card_preview;
pub mod form_view;
pub mod frame;
pub mod frame_json;
pub mod renderer;
pub mod span;
pub mod style;
pub mod theme;
