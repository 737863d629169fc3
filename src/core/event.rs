use crate::core::field::Field;
use crate::terminal::KeyEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Exit,
    NextInput,
    PrevInput,
    /// Run the full validation pass regardless of the button state.
    Submit,
    /// Replace a field's raw text, as an input-change event would.
    Change { field: Field, raw: String },
    InputKey(KeyEvent),
}
