use crate::core::field::Field;
use crate::core::state::{FocusTarget, Outcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    FieldChanged {
        field: Field,
        has_error: bool,
    },
    FocusChanged {
        from: FocusTarget,
        to: FocusTarget,
    },
    /// Confirm was activated while the live check said the form is invalid.
    SubmitBlocked,
    SubmitRejected {
        fields: Vec<Field>,
    },
    Submitted,
    Exited(Outcome),
}
