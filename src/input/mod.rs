pub mod field_input;
pub mod text_edit;
pub mod validators;

pub use field_input::{EditOutcome, FieldInput};
