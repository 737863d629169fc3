use regex::Regex;

pub type ValidationError = String;
pub type Validator = Box<dyn Fn(&str) -> Result<(), ValidationError> + Send + Sync>;

/// Run a list of validators against `value`, returning the first error.
pub fn run_validators(validators: &[Validator], value: &str) -> Result<(), ValidationError> {
    for validator in validators {
        validator(value)?;
    }
    Ok(())
}

/// Fails on the empty string only; whitespace counts as a value.
pub fn required(message: impl Into<String>) -> Validator {
    predicate(|value| !value.is_empty(), message)
}

pub fn predicate<F>(check: F, message: impl Into<String>) -> Validator
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    let message = message.into();
    Box::new(move |value: &str| {
        if check(value) {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}

/// Full-match regex check. Panics on an invalid pattern, so only feed it
/// literals.
pub fn pattern(pattern: &str, message: impl Into<String>) -> Validator {
    let re = Regex::new(pattern).expect("invalid validator pattern");
    let message = message.into();
    Box::new(move |value: &str| {
        if re.is_match(value) {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}

/// Apply `inner` to `value` with every whitespace character removed.
pub fn without_whitespace(inner: Validator) -> Validator {
    Box::new(move |value: &str| {
        let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
        inner(&compact)
    })
}
