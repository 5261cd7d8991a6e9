//! Form-specific error types.

/// Errors that can occur while validating, restoring, or submitting a form.
///
/// The validation variants render as the inline message shown next to the
/// offending field, so their `Display` text is user-facing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// Required field is empty after trimming whitespace
    #[error("This field is required")]
    RequiredFieldEmpty,

    /// Email field does not look like an address
    #[error("Please enter a valid email address")]
    InvalidEmailFormat,

    /// Phone field does not look like a phone number
    #[error("Please enter a valid phone number")]
    InvalidPhoneFormat,

    /// Stored draft could not be decoded
    #[error("Could not load saved form data: {0}")]
    DraftParseFailure(String),

    /// Submission collaborator reported a failure
    #[error("Form submission failed")]
    ServerRoundTripFailure,
}
