use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

/// State choices offered by the listing forms.
pub const STATE_CODES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

pub fn validate_state(value: &str) -> Result<(), ValidationError> {
    if STATE_CODES.contains(&value) {
        Ok(())
    } else {
        Err(invalid("state", "State must be a two-letter US state code"))
    }
}

pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')' | '.'));
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();

    if allowed && (7..=15).contains(&digits) {
        Ok(())
    } else {
        Err(invalid("phone", "Phone must contain 7 to 15 digits"))
    }
}

pub fn trimmed(value: String) -> String {
    let t = value.trim();
    if t.len() == value.len() { value } else { t.to_string() }
}

/// Forms submit empty inputs as "", which means "not provided".
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value.map(trimmed).filter(|v| !v.is_empty())
}

/// Checks shared by venue and artist forms that the derive cannot express.
/// Blank required fields are already reported by the derive.
pub fn check_location(errors: &mut ValidationErrors, state: &str, phone: Option<&str>) {
    if !state.is_empty() {
        if let Err(e) = validate_state(state) {
            errors.add("state", e);
        }
    }
    if let Some(phone) = phone {
        if let Err(e) = validate_phone(phone) {
            errors.add("phone", e);
        }
    }
}

pub fn into_result(errors: ValidationErrors) -> Result<(), ValidationErrors> {
    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
