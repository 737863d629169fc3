pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod logging;
pub mod snapshot;
pub mod terminal;
pub mod ui;

pub use crate::core::action_bindings;
pub use crate::core::app;
pub use crate::core::event;
pub use crate::core::field;
pub use crate::core::form_event;
pub use crate::core::form_state;
pub use crate::core::format;
pub use crate::core::reducer;
pub use crate::core::state;
pub use crate::core::validation;

pub use input::field_input;
pub use input::text_edit;
pub use input::validators;

pub use crate::core::field::Field;
pub use crate::core::form_state::{ErrorMap, FormFields, FormState};
pub use crate::core::format::format_card_number;
pub use crate::core::validation::{validate, validate_field};
