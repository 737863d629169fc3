use crate::core::field::Field;
use crate::input::validators::{self, ValidationError, Validator, run_validators};
use std::sync::LazyLock;

pub const NAME_ERROR: &str = "Name must contain only letters";
pub const CARD_NUMBER_ERROR: &str = "Card number must be 16 digits";
pub const MONTH_ERROR: &str = "Enter valid month (01 - 12)";
pub const YEAR_ERROR: &str = "Enter a valid 2-digit year";
pub const CVC_ERROR: &str = "CVC must be 3 digits";

struct FieldRules {
    name: Vec<Validator>,
    card_number: Vec<Validator>,
    month: Vec<Validator>,
    year: Vec<Validator>,
    cvc: Vec<Validator>,
}

impl FieldRules {
    fn build() -> Self {
        // Digit classes are spelled [0-9]: `\d` would also accept non-ASCII digits.
        Self {
            name: vec![
                validators::required(NAME_ERROR),
                validators::pattern(r"^[A-Za-z\s]+$", NAME_ERROR),
            ],
            card_number: vec![
                validators::required(CARD_NUMBER_ERROR),
                validators::without_whitespace(validators::pattern(
                    r"^[0-9]{16}$",
                    CARD_NUMBER_ERROR,
                )),
            ],
            month: vec![
                validators::required(MONTH_ERROR),
                validators::pattern(r"^(0?[1-9]|1[0-2])$", MONTH_ERROR),
            ],
            year: vec![
                validators::required(YEAR_ERROR),
                validators::pattern(r"^[0-9]{2}$", YEAR_ERROR),
            ],
            cvc: vec![
                validators::required(CVC_ERROR),
                validators::pattern(r"^[0-9]{3}$", CVC_ERROR),
            ],
        }
    }

    fn for_field(&self, field: Field) -> &[Validator] {
        match field {
            Field::Name => &self.name,
            Field::CardNumber => &self.card_number,
            Field::Month => &self.month,
            Field::Year => &self.year,
            Field::Cvc => &self.cvc,
        }
    }
}

static RULES: LazyLock<FieldRules> = LazyLock::new(FieldRules::build);

/// Check one field value. The empty string fails every field.
pub fn validate_field(field: Field, value: &str) -> Result<(), ValidationError> {
    run_validators(RULES.for_field(field), value)
}

/// String-keyed variant; unknown field names always pass.
pub fn validate(field_name: &str, value: &str) -> Result<(), ValidationError> {
    match field_name.parse::<Field>() {
        Ok(field) => validate_field(field, value),
        Err(_) => Ok(()),
    }
}

/// Message for the ErrorMap: empty when the value is valid.
pub fn error_message(field: Field, value: &str) -> String {
    validate_field(field, value).err().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_accepts_letters_and_spaces() {
        assert_eq!(validate_field(Field::Name, "Jane Appleseed"), Ok(()));
        assert_eq!(validate_field(Field::Name, "   "), Ok(()));
        assert_eq!(
            validate_field(Field::Name, "Jane 2"),
            Err(NAME_ERROR.to_string())
        );
        assert_eq!(validate_field(Field::Name, ""), Err(NAME_ERROR.to_string()));
    }

    #[test]
    fn card_number_checks_digit_only_form() {
        assert_eq!(validate_field(Field::CardNumber, "4242424242424242"), Ok(()));
        assert_eq!(
            validate_field(Field::CardNumber, "4242 4242 4242 4242"),
            Ok(())
        );
        assert_eq!(
            validate_field(Field::CardNumber, "424242424242424"),
            Err(CARD_NUMBER_ERROR.to_string())
        );
        assert_eq!(
            validate_field(Field::CardNumber, "42424242424242424"),
            Err(CARD_NUMBER_ERROR.to_string())
        );
    }

    #[test]
    fn card_number_rejects_non_ascii_digits() {
        let arabic_indic = "٤".repeat(16);
        assert!(validate_field(Field::CardNumber, &arabic_indic).is_err());
    }

    #[test]
    fn month_range() {
        assert!(validate_field(Field::Month, "00").is_err());
        assert!(validate_field(Field::Month, "01").is_ok());
        assert!(validate_field(Field::Month, "1").is_ok());
        assert!(validate_field(Field::Month, "12").is_ok());
        assert!(validate_field(Field::Month, "13").is_err());
        assert_eq!(
            validate_field(Field::Month, ""),
            Err(MONTH_ERROR.to_string())
        );
    }

    #[test]
    fn year_is_two_digits() {
        assert!(validate_field(Field::Year, "25").is_ok());
        assert_eq!(validate_field(Field::Year, "5"), Err(YEAR_ERROR.to_string()));
        assert!(validate_field(Field::Year, "abc").is_err());
        assert!(validate_field(Field::Year, "2025").is_err());
    }

    #[test]
    fn cvc_is_three_digits() {
        assert!(validate_field(Field::Cvc, "123").is_ok());
        assert_eq!(validate_field(Field::Cvc, "12"), Err(CVC_ERROR.to_string()));
        assert!(validate_field(Field::Cvc, "1234").is_err());
    }

    #[test]
    fn unknown_field_passes_through() {
        assert_eq!(validate("email", "not an email"), Ok(()));
        assert_eq!(validate("cvc", "12"), Err(CVC_ERROR.to_string()));
    }

    #[test]
    fn error_message_is_empty_when_valid() {
        assert_eq!(error_message(Field::Year, "25"), "");
        assert_eq!(error_message(Field::Year, "2"), YEAR_ERROR);
    }
}
