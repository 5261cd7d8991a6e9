//! Form events and the side effects they produce.

use super::definition::FormKind;
use super::draft::DraftValues;

/// Keys the controller reacts to.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
}

/// Modifier state of a key press. `meta` is the Cmd key where the terminal
/// reports it.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
}

/// Specifying the events a form reacts to.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Input { field: String, value: String },
    Blur { field: String },
    Change { field: String, value: String },
    Submit,
    Reset,
    ResetConfirmed,
    KeyDown {
        key: Key,
        modifiers: Modifiers,
        focused: Option<String>,
    },
    SubmissionSucceeded,
    SubmissionFailed,
}

/// Field values handed to the submission collaborator, in form order.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub form: FormKind,
    pub fields: Vec<(String, String)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn color(&self) -> &'static str {
        match self {
            NotificationKind::Info => "#3498db",
            NotificationKind::Success => "#27ae60",
            NotificationKind::Error => "#e74c3c",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: &str) -> Self {
        Notification {
            kind,
            message: message.to_string(),
        }
    }
}

/// Side effects requested by the controller and carried out by its host.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    WriteDraft { key: String, values: DraftValues },
    ClearDraft { key: String },
    Submit(Submission),
    ConfirmReset { prompt: &'static str },
    Notify(Notification),
    Focus { field: String },
    Blur { field: String },
}
