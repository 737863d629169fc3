pub mod action_bindings;
pub mod app;
pub mod event;
pub mod field;
pub mod form_event;
pub mod form_state;
pub mod format;
pub mod reducer;
pub mod state;
pub mod validation;
