//! Field layouts of the support-case and lead-capture forms.

use super::dynamic;
use super::field::{FieldKind, FieldState};
use std::fmt;
use std::str::FromStr;

/// Storage key of the case form draft.
///
pub const CASE_DRAFT_KEY: &str = "newCaseForm_draft";

pub const TYPE_FIELD: &str = "type";
pub const PRIORITY_FIELD: &str = "priority";
pub const DESCRIPTION_FIELD: &str = "description";
pub const COUNTRY_FIELD: &str = "country_code";
pub const STATE_FIELD: &str = "state_code";

/// Specifying the forms this application can present.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Case,
    Lead,
}

impl FormKind {
    pub fn title(&self) -> &'static str {
        match self {
            FormKind::Case => "New Support Case",
            FormKind::Lead => "Contact Sales",
        }
    }

    /// Return the storage key drafts are kept under, if this form keeps any.
    ///
    pub fn draft_key(&self) -> Option<&'static str> {
        match self {
            FormKind::Case => Some(CASE_DRAFT_KEY),
            FormKind::Lead => None,
        }
    }

    /// Whether phone input is rewritten into international form as it is typed.
    ///
    pub fn formats_phone(&self) -> bool {
        *self == FormKind::Case
    }

    /// Whether keyboard shortcuts (Ctrl/Cmd+Enter, Escape) are bound.
    ///
    pub fn has_shortcuts(&self) -> bool {
        *self == FormKind::Case
    }

    /// Return the fields of this form in display order.
    ///
    pub fn fields(&self) -> Vec<FieldState> {
        match self {
            FormKind::Case => case_fields(),
            FormKind::Lead => lead_fields(),
        }
    }
}

impl FromStr for FormKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "case" => Ok(FormKind::Case),
            "lead" => Ok(FormKind::Lead),
            other => Err(format!("Unknown form '{}'", other)),
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormKind::Case => write!(f, "case"),
            FormKind::Lead => write!(f, "lead"),
        }
    }
}

fn case_fields() -> Vec<FieldState> {
    vec![
        FieldState::new("customer_name", "Full Name", FieldKind::Text)
            .required()
            .placeholder("Jane Doe"),
        FieldState::new("email", "Email", FieldKind::Email)
            .required()
            .placeholder("you@example.com"),
        FieldState::new("phone", "Phone", FieldKind::Tel).placeholder("0812 3456 7890"),
        FieldState::new(TYPE_FIELD, "Case Type", FieldKind::Select)
            .required()
            .placeholder("Select case type")
            .options(&[
                ("Technical Support", "Technical Support"),
                ("Bug Report", "Bug Report"),
                ("Feature Request", "Feature Request"),
                ("Order Issue", "Order Issue"),
                ("General Inquiry", "General Inquiry"),
            ]),
        FieldState::new(PRIORITY_FIELD, "Priority", FieldKind::Select)
            .required()
            .placeholder("Select priority")
            .options(&[("High", "High"), ("Medium", "Medium"), ("Low", "Low")]),
        FieldState::new("subject", "Subject", FieldKind::Text)
            .required()
            .placeholder("Short summary of the issue"),
        FieldState::new(DESCRIPTION_FIELD, "Description", FieldKind::Text)
            .required()
            .multiline()
            .placeholder(dynamic::DEFAULT_DESCRIPTION_PLACEHOLDER),
    ]
}

fn lead_fields() -> Vec<FieldState> {
    vec![
        FieldState::new("first_name", "First Name", FieldKind::Text).required(),
        FieldState::new("last_name", "Last Name", FieldKind::Text).required(),
        FieldState::new("email", "Email", FieldKind::Email)
            .required()
            .placeholder("you@company.com"),
        FieldState::new("phone", "Phone", FieldKind::Tel)
            .required()
            .placeholder("+62 812 3456 7890"),
        FieldState::new("company", "Company", FieldKind::Text),
        FieldState::new(COUNTRY_FIELD, "Country", FieldKind::Select)
            .required()
            .placeholder("Select country")
            .options(dynamic::COUNTRIES),
        FieldState::new(STATE_FIELD, "State / Province", FieldKind::Select)
            .placeholder(dynamic::STATE_PLACEHOLDER),
        FieldState::new("message", "Message", FieldKind::Text)
            .multiline()
            .placeholder("How can we help?"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_kind_from_str() {
        assert_eq!("case".parse::<FormKind>(), Ok(FormKind::Case));
        assert_eq!("LEAD".parse::<FormKind>(), Ok(FormKind::Lead));
        assert!("survey".parse::<FormKind>().is_err());
    }

    #[test]
    fn test_form_kind_display_round_trips() {
        for kind in [FormKind::Case, FormKind::Lead] {
            assert_eq!(kind.to_string().parse::<FormKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_only_case_form_keeps_drafts() {
        assert_eq!(FormKind::Case.draft_key(), Some("newCaseForm_draft"));
        assert_eq!(FormKind::Lead.draft_key(), None);
    }

    #[test]
    fn test_field_names_are_unique() {
        for kind in [FormKind::Case, FormKind::Lead] {
            let fields = kind.fields();
            let mut names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), fields.len());
        }
    }

    #[test]
    fn test_case_form_layout() {
        let fields = FormKind::Case.fields();
        let description = fields.iter().find(|f| f.name == "description").unwrap();
        assert!(description.required);
        assert!(description.multiline);
        let phone = fields.iter().find(|f| f.name == "phone").unwrap();
        assert_eq!(phone.kind, FieldKind::Tel);
        assert!(!phone.required);
    }

    #[test]
    fn test_lead_form_layout() {
        let fields = FormKind::Lead.fields();
        let country = fields.iter().find(|f| f.name == "country_code").unwrap();
        assert!(country.options.iter().any(|o| o.value == "SG"));
        let state = fields.iter().find(|f| f.name == "state_code").unwrap();
        assert!(state.options.is_empty());
    }
}
