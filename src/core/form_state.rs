//! Form values, per-field errors, and the pure transitions over them.
//!
//! Every transition takes the current state by reference and returns the
//! next one; nothing here mutates a live state in place.

use crate::core::field::Field;
use crate::core::format::{format_card_number, strip_whitespace};
use crate::core::validation;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub name: String,
    pub card_number: String,
    pub month: String,
    pub year: String,
    pub cvc: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::CardNumber => &self.card_number,
            Field::Month => &self.month,
            Field::Year => &self.year,
            Field::Cvc => &self.cvc,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::CardNumber => &mut self.card_number,
            Field::Month => &mut self.month,
            Field::Year => &mut self.year,
            Field::Cvc => &mut self.cvc,
        }
    }

    pub fn all_filled(&self) -> bool {
        Field::ALL.iter().all(|field| !self.get(*field).is_empty())
    }
}

/// Field → message. A missing key and an empty message both mean "no error".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap(IndexMap<Field, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0
            .get(&field)
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }

    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn contains_key(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_clear(&self) -> bool {
        self.0.values().all(String::is_empty)
    }

    /// Non-empty entries, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0
            .iter()
            .filter(|(_, message)| !message.is_empty())
            .map(|(field, message)| (*field, message.as_str()))
    }

    pub fn first_error(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|field| self.get(*field).is_some())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub fields: FormFields,
    pub errors: ErrorMap,
    pub submitted: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the edited value (card numbers are regrouped first) and
    /// re-validate that one field. Never fails and never touches
    /// `submitted`.
    #[must_use]
    pub fn update_field(&self, field: Field, raw_value: &str) -> Self {
        let display = match field {
            Field::CardNumber => format_card_number(raw_value),
            _ => raw_value.to_string(),
        };
        let error = validation::error_message(field, &strip_whitespace(&display));
        debug!(field = %field, has_error = !error.is_empty(), "field updated");

        let mut next = self.clone();
        *next.fields.slot_mut(field) = display;
        next.errors.set(field, error);
        next
    }

    /// String-keyed variant of [`FormState::update_field`]; unknown names
    /// leave the state as it was.
    #[must_use]
    pub fn update_named(&self, field_name: &str, raw_value: &str) -> Self {
        match field_name.parse::<Field>() {
            Ok(field) => self.update_field(field, raw_value),
            Err(err) => {
                debug!(%err, "ignoring update");
                self.clone()
            }
        }
    }

    /// Live submit-button check. Only looks at the errors recorded so far,
    /// so a field that was never edited counts as error-free here;
    /// [`FormState::submit_all`] is the authoritative check.
    pub fn is_valid(&self) -> bool {
        self.fields.all_filled() && self.errors.is_clear()
    }

    /// Re-validate every field from its stored value. The fresh map
    /// replaces `errors`; `submitted` flips only when it is clear.
    #[must_use]
    pub fn submit_all(&self) -> Self {
        let mut errors = ErrorMap::new();
        for field in Field::ALL {
            let message = validation::error_message(field, self.fields.get(field));
            if !message.is_empty() {
                errors.set(field, message);
            }
        }

        let submitted = errors.is_clear();
        Self {
            fields: self.fields.clone(),
            errors,
            submitted,
        }
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.get(field)
    }
}
