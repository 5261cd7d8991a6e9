//! Field validation rules and the phone number formatter.

use super::definition::FormKind;
use super::error::FormError;
use super::field::{FieldKind, FieldState};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+]?[0-9\s\-()]{10,}$").expect("PHONE_REGEX: invalid regex pattern")
});

/// Country calling code prepended to local numbers.
///
const COUNTRY_CODE: &str = "62";

/// Outcome of validating one field.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        ValidationResult {
            valid: true,
            message: None,
        }
    }
}

impl From<Result<(), FormError>> for ValidationResult {
    fn from(result: Result<(), FormError>) -> Self {
        match result {
            Ok(()) => ValidationResult::ok(),
            Err(e) => ValidationResult {
                valid: false,
                message: Some(e.to_string()),
            },
        }
    }
}

/// Return whether the value looks like an email address.
///
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Return whether the value looks like a phone number.
///
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

/// Rewrite a typed phone number into international form.
///
/// Non-digits are stripped, a leading trunk `0` becomes the country code and
/// numbers starting with the country code are rendered as `+62 <rest>`.
/// Input that already starts with `+` is returned untouched, which keeps the
/// formatter idempotent while the user keeps typing.
///
pub fn normalize_phone(raw: &str) -> String {
    if raw.starts_with('+') {
        return raw.to_string();
    }
    let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if let Some(rest) = digits.strip_prefix('0') {
        digits = format!("{}{}", COUNTRY_CODE, rest);
    }
    match digits.strip_prefix(COUNTRY_CODE) {
        Some(rest) => format!("+{} {}", COUNTRY_CODE, rest),
        None => digits,
    }
}

/// Validates fields according to the rules of one form.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldValidator {
    check_phone_format: bool,
}

impl FieldValidator {
    /// Return the validator used by the given form. Only the lead form
    /// checks phone numbers; the case form formats them instead.
    ///
    pub fn for_form(kind: FormKind) -> Self {
        FieldValidator {
            check_phone_format: kind == FormKind::Lead,
        }
    }

    /// Check a field, returning the first rule it breaks.
    ///
    pub fn check(&self, field: &FieldState) -> Result<(), FormError> {
        if field.required && field.value.trim().is_empty() {
            return Err(FormError::RequiredFieldEmpty);
        }
        if field.value.is_empty() {
            return Ok(());
        }
        match field.kind {
            FieldKind::Email if !is_valid_email(&field.value) => {
                Err(FormError::InvalidEmailFormat)
            }
            FieldKind::Tel if self.check_phone_format && !is_valid_phone(&field.value) => {
                Err(FormError::InvalidPhoneFormat)
            }
            _ => Ok(()),
        }
    }

    pub fn validate(&self, field: &FieldState) -> ValidationResult {
        ValidationResult::from(self.check(field))
    }

    /// Return whether a field takes part in the submission check: required
    /// fields always, format-checked fields once they hold a value.
    ///
    pub fn gates_submission(&self, field: &FieldState) -> bool {
        if field.required {
            return true;
        }
        if field.value.is_empty() {
            return false;
        }
        match field.kind {
            FieldKind::Email => true,
            FieldKind::Tel => self.check_phone_format,
            _ => false,
        }
    }
}
