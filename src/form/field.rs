//! Field state types.
//!
//! A `FieldState` is created when a form is bound and mutated by every input
//! and blur event on it. Its validity flag and error message only ever change
//! together, so a field is either valid or showing exactly one error.

use super::validator::ValidationResult;

/// Specifying the kind of input a field accepts.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select,
}

/// A single entry of a select field.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

impl SelectOption {
    pub fn new(value: &str, text: &str) -> Self {
        SelectOption {
            value: value.to_string(),
            text: text.to_string(),
        }
    }
}

/// Visual validation marker of a field.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldMark {
    Neutral,
    Success,
    Error(String),
}

/// Houses the value and validation state of one form field.
///
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    pub name: String,
    pub label: String,
    pub value: String,
    pub required: bool,
    pub kind: FieldKind,
    pub multiline: bool,
    pub placeholder: String,
    pub options: Vec<SelectOption>,
    pub disabled: bool,
    valid: bool,
    error_message: Option<String>,
    checked: bool, // Passed validation since the last edit
}

impl FieldState {
    /// Return a new empty, valid field.
    ///
    pub fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        FieldState {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            required: false,
            kind,
            multiline: false,
            placeholder: String::new(),
            options: vec![],
            disabled: false,
            valid: true,
            error_message: None,
            checked: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn options(mut self, options: &[(&str, &str)]) -> Self {
        self.options = options
            .iter()
            .map(|(value, text)| SelectOption::new(value, text))
            .collect();
        self
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Apply a validation result, keeping the flag and message in step.
    ///
    pub fn apply(&mut self, result: &ValidationResult) {
        match &result.message {
            Some(message) if !result.valid => {
                self.valid = false;
                self.error_message = Some(message.clone());
                self.checked = false;
            }
            _ => {
                self.valid = true;
                self.error_message = None;
                self.checked = true;
            }
        }
    }

    /// Drop any error or success marker without re-validating.
    ///
    pub fn clear_error(&mut self) {
        self.valid = true;
        self.error_message = None;
        self.checked = false;
    }

    /// Return the field to its bound state with an empty value.
    ///
    pub fn reset(&mut self) {
        self.value.clear();
        self.clear_error();
    }

    pub fn mark(&self) -> FieldMark {
        match &self.error_message {
            Some(message) => FieldMark::Error(message.clone()),
            None if self.checked => FieldMark::Success,
            None => FieldMark::Neutral,
        }
    }

    /// Return the display text of the selected option, if any.
    ///
    pub fn selected_text(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == self.value)
            .map(|o| o.text.as_str())
    }

    /// Return the option value after (or before) the current one. The empty
    /// placeholder value sits between the last and the first option.
    ///
    pub fn cycle_option(&self, forward: bool) -> String {
        if self.options.is_empty() {
            return String::new();
        }
        let current = self.options.iter().position(|o| o.value == self.value);
        let next = match (current, forward) {
            (None, true) => Some(0),
            (None, false) => Some(self.options.len() - 1),
            (Some(i), true) if i + 1 < self.options.len() => Some(i + 1),
            (Some(_), true) => None,
            (Some(0), false) => None,
            (Some(i), false) => Some(i - 1),
        };
        next.map(|i| self.options[i].value.clone())
            .unwrap_or_default()
    }
}
