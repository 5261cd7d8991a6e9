//! Form state and validation.
//!
//! This module contains the terminal-independent core of the application:
//! - Field state and validation rules
//! - The submission gate state machine
//! - Draft persistence
//! - Dynamic field interactions (priority colour, placeholders, dependent selectors)
//! - The controller routing form events to side effects, and its render instructions

mod controller;
mod definition;
mod draft;
mod error;
mod event;
mod field;
mod gate;

pub mod dynamic;
pub mod render;
pub mod validator;

pub use controller::{
    FormController, FormSnapshot, CASE_SENT_NOTICE, LEAD_SENT_NOTICE, REQUIRED_FIELDS_NOTICE,
    RESET_PROMPT,
};
pub use definition::{FormKind, CASE_DRAFT_KEY};
pub use draft::{DraftPersistence, DraftValues};
pub use error::FormError;
pub use event::{Effect, FormEvent, Key, Modifiers, Notification, NotificationKind, Submission};
pub use field::{FieldKind, FieldMark, FieldState, SelectOption};
pub use gate::{GateState, SubmissionGate};
pub use validator::{FieldValidator, ValidationResult};
