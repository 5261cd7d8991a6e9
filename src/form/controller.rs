//! Form controller.
//!
//! Binds a form's fields, routes form events to their handlers, and returns
//! the side effects each event requires. The controller never touches the
//! terminal or storage itself, which keeps every rule testable in isolation.

use super::definition::{
    FormKind, COUNTRY_FIELD, DESCRIPTION_FIELD, PRIORITY_FIELD, STATE_FIELD, TYPE_FIELD,
};
use super::draft::DraftValues;
use super::dynamic;
use super::error::FormError;
use super::event::{Effect, FormEvent, Key, Modifiers, Notification, NotificationKind, Submission};
use super::field::{FieldKind, FieldState};
use super::gate::{GateState, SubmissionGate};
use super::validator::{normalize_phone, FieldValidator};
use log::*;

pub const RESET_PROMPT: &str = "Are you sure you want to reset the form? All data will be lost.";
pub const REQUIRED_FIELDS_NOTICE: &str = "Please fill in all required fields";
pub const LEAD_SENT_NOTICE: &str = "Message sent successfully! We'll get back to you soon.";
pub const CASE_SENT_NOTICE: &str = "Your case has been submitted.";

/// Aggregate validity of a form at one point in time.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub valid: bool,
    pub invalid_fields: Vec<String>,
    pub gate: GateState,
}

/// Houses the fields, draft, and submission gate of one bound form.
///
#[derive(Debug, Clone)]
pub struct FormController {
    kind: FormKind,
    fields: Vec<FieldState>,
    gate: SubmissionGate,
    validator: FieldValidator,
    draft: DraftValues,
    accepted: bool,
}

impl FormController {
    /// Bind the given form, filling empty fields from a stored draft.
    ///
    pub fn bind(kind: FormKind, stored: Option<DraftValues>) -> Self {
        Self::with_fields(kind, kind.fields(), stored)
    }

    /// Bind a form whose fields may already hold values. Prefilled values
    /// are never overwritten by the draft.
    ///
    pub fn with_fields(kind: FormKind, fields: Vec<FieldState>, stored: Option<DraftValues>) -> Self {
        let mut controller = FormController {
            kind,
            fields,
            gate: SubmissionGate::new(),
            validator: FieldValidator::for_form(kind),
            draft: DraftValues::new(),
            accepted: false,
        };
        if let Some(values) = stored {
            controller.draft = controller.restore(&values);
        }
        controller.refresh_state_options(false);
        info!(
            "Bound {} form with {} field(s)",
            controller.kind,
            controller.fields.len()
        );
        controller
    }

    /// Fill empty fields from the draft and return the entries applied.
    ///
    fn restore(&mut self, values: &DraftValues) -> DraftValues {
        let mut restored = DraftValues::new();
        for field in self.fields.iter_mut().filter(|f| f.value.is_empty()) {
            if let Some(value) = values.get(&field.name) {
                field.value = value.clone();
                restored.insert(field.name.clone(), value.clone());
            }
        }
        debug!("Restored {} field(s) from draft", restored.len());
        restored
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FieldState> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub fn gate_state(&self) -> GateState {
        self.gate.state()
    }

    pub fn is_submitting(&self) -> bool {
        self.gate.is_submitting()
    }

    /// True once the server took a form that stays submitted afterwards.
    ///
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// True while a handed-off submission has no answer yet.
    ///
    pub fn is_awaiting_response(&self) -> bool {
        self.gate.is_submitting() && !self.accepted
    }

    /// Return the aggregate validity of the fields that gate submission,
    /// without marking any of them.
    ///
    pub fn snapshot(&self) -> FormSnapshot {
        let invalid_fields: Vec<String> = self
            .fields
            .iter()
            .filter(|f| !f.disabled && self.validator.gates_submission(f))
            .filter(|f| self.validator.check(f).is_err())
            .map(|f| f.name.clone())
            .collect();
        FormSnapshot {
            valid: invalid_fields.is_empty(),
            invalid_fields,
            gate: self.gate.state(),
        }
    }

    /// Return the enabled fields as name/value pairs in form order.
    ///
    pub fn values(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .filter(|f| !f.disabled)
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect()
    }

    /// Handle a form event and return the side effects it requires.
    ///
    pub fn dispatch(&mut self, event: FormEvent) -> Vec<Effect> {
        debug!("Processing form event '{:?}'...", event);
        match event {
            FormEvent::Input { field, value } => self.on_input(&field, value),
            FormEvent::Blur { field } => self.on_blur(&field),
            FormEvent::Change { field, value } => self.on_change(&field, value),
            FormEvent::Submit => self.on_submit(),
            FormEvent::Reset => self.on_reset(),
            FormEvent::ResetConfirmed => self.on_reset_confirmed(),
            FormEvent::KeyDown {
                key,
                modifiers,
                focused,
            } => self.on_key_down(key, modifiers, focused),
            FormEvent::SubmissionSucceeded => self.on_submission_succeeded(),
            FormEvent::SubmissionFailed => self.on_submission_failed(),
        }
    }

    fn on_input(&mut self, name: &str, value: String) -> Vec<Effect> {
        if self.gate.is_submitting() {
            debug!("Ignoring input on '{}' while submitting", name);
            return vec![];
        }
        let kind = self.kind;
        let validator = self.validator;
        let field = match self.field_mut(name) {
            Some(field) if !field.disabled => field,
            Some(_) => return vec![],
            None => {
                warn!("Input for unknown field '{}'", name);
                return vec![];
            }
        };

        field.value = if kind.formats_phone() && field.kind == FieldKind::Tel {
            normalize_phone(&value)
        } else {
            value
        };

        // Validation runs before the draft is saved
        match kind {
            FormKind::Case if field.required => field.clear_error(),
            FormKind::Lead if matches!(field.kind, FieldKind::Email | FieldKind::Tel) => {
                let result = validator.validate(field);
                if result.valid || field.value.is_empty() {
                    field.clear_error();
                } else {
                    field.apply(&result);
                }
            }
            _ => (),
        }

        let saved = field.value.clone();
        match kind.draft_key() {
            Some(key) if !saved.is_empty() => {
                self.draft.insert(name.to_string(), saved);
                vec![Effect::WriteDraft {
                    key: key.to_string(),
                    values: self.draft.clone(),
                }]
            }
            _ => vec![],
        }
    }

    fn on_blur(&mut self, name: &str) -> Vec<Effect> {
        if self.gate.is_submitting() || !self.kind.has_shortcuts() {
            return vec![];
        }
        let validator = self.validator;
        if let Some(field) = self.field_mut(name) {
            let result = validator.validate(field);
            if field.required {
                field.apply(&result);
            } else if field.kind == FieldKind::Email && !result.valid {
                field.apply(&result);
            }
        }
        vec![]
    }

    fn on_change(&mut self, name: &str, value: String) -> Vec<Effect> {
        if self.gate.is_submitting() {
            return vec![];
        }
        match self.field_mut(name) {
            Some(field) if !field.disabled => field.value = value,
            _ => return vec![],
        }
        match (self.kind, name) {
            (FormKind::Case, PRIORITY_FIELD) => {
                debug!(
                    "Priority styling now {:?}",
                    self.field(PRIORITY_FIELD)
                        .and_then(|f| dynamic::priority_color(&f.value))
                );
            }
            (FormKind::Case, TYPE_FIELD) => self.update_description_placeholder(),
            (FormKind::Lead, COUNTRY_FIELD) => self.refresh_state_options(true),
            _ => (),
        }
        vec![]
    }

    fn update_description_placeholder(&mut self) {
        let case_type = self
            .field(TYPE_FIELD)
            .map(|f| f.value.clone())
            .unwrap_or_default();
        if let Some(description) = self.field_mut(DESCRIPTION_FIELD) {
            if description.value.is_empty() {
                description.placeholder = dynamic::case_type_placeholder(&case_type).to_string();
            }
        }
    }

    /// Rebuild the state selector from the selected country. Its value is
    /// cleared when `clear_value` is set or when it no longer matches an
    /// option.
    ///
    fn refresh_state_options(&mut self, clear_value: bool) {
        if self.kind != FormKind::Lead {
            return;
        }
        let country = self
            .field(COUNTRY_FIELD)
            .map(|f| f.value.clone())
            .unwrap_or_default();
        if let Some(state) = self.field_mut(STATE_FIELD) {
            state.options = dynamic::state_options(&country);
            state.disabled = state.options.is_empty();
            if clear_value || !state.options.iter().any(|o| o.value == state.value) {
                state.value.clear();
            }
            state.clear_error();
            debug!(
                "State selector now has {} option(s) for '{}'",
                state.options.len(),
                country
            );
        }
    }

    fn on_submit(&mut self) -> Vec<Effect> {
        if !self.gate.begin() {
            return vec![];
        }
        let failing = self.validate_for_submission();
        if let Some(first) = failing.first() {
            self.gate.resolve(false);
            info!("Submission blocked by {} invalid field(s)", failing.len());
            let mut effects = vec![Effect::Focus {
                field: first.clone(),
            }];
            if self.kind == FormKind::Lead {
                effects.push(Effect::Notify(Notification::new(
                    NotificationKind::Error,
                    REQUIRED_FIELDS_NOTICE,
                )));
            }
            return effects;
        }

        self.gate.resolve(true);
        let mut effects = vec![];
        if let Some(key) = self.kind.draft_key() {
            self.draft.clear();
            effects.push(Effect::ClearDraft {
                key: key.to_string(),
            });
        }
        info!("Handing {} form to submission...", self.kind);
        effects.push(Effect::Submit(Submission {
            form: self.kind,
            fields: self.values(),
        }));
        effects
    }

    /// Mark every field that gates submission and return the failing names
    /// in form order.
    ///
    fn validate_for_submission(&mut self) -> Vec<String> {
        let validator = self.validator;
        let mut failing = vec![];
        for field in self.fields.iter_mut().filter(|f| !f.disabled) {
            if !validator.gates_submission(field) {
                continue;
            }
            let result = validator.validate(field);
            field.apply(&result);
            if !result.valid {
                failing.push(field.name.clone());
            }
        }
        failing
    }

    fn on_reset(&mut self) -> Vec<Effect> {
        if self.gate.is_submitting() {
            return vec![];
        }
        vec![Effect::ConfirmReset {
            prompt: RESET_PROMPT,
        }]
    }

    fn on_reset_confirmed(&mut self) -> Vec<Effect> {
        if self.gate.is_submitting() {
            return vec![];
        }
        self.clear_fields();
        info!("Reset {} form", self.kind);
        let mut effects = vec![];
        if let Some(key) = self.kind.draft_key() {
            effects.push(Effect::ClearDraft {
                key: key.to_string(),
            });
        }
        if let Some(first) = self.fields.first() {
            effects.push(Effect::Focus {
                field: first.name.clone(),
            });
        }
        effects
    }

    fn clear_fields(&mut self) {
        for field in self.fields.iter_mut() {
            field.reset();
        }
        self.draft.clear();
        self.gate.reset();
        self.accepted = false;
        self.refresh_state_options(true);
    }

    fn on_key_down(&mut self, key: Key, modifiers: Modifiers, focused: Option<String>) -> Vec<Effect> {
        if !self.kind.has_shortcuts() {
            return vec![];
        }
        match key {
            Key::Enter if modifiers.ctrl || modifiers.meta => self.on_submit(),
            Key::Escape => match focused {
                Some(name) => {
                    let mut effects = vec![Effect::Blur {
                        field: name.clone(),
                    }];
                    effects.extend(self.on_blur(&name));
                    effects
                }
                None => vec![],
            },
            _ => vec![],
        }
    }

    fn on_submission_succeeded(&mut self) -> Vec<Effect> {
        if !self.is_awaiting_response() {
            debug!("Ignoring submission result in state {:?}", self.gate.state());
            return vec![];
        }
        match self.kind {
            FormKind::Lead => {
                self.clear_fields();
                vec![Effect::Notify(Notification::new(
                    NotificationKind::Success,
                    LEAD_SENT_NOTICE,
                ))]
            }
            FormKind::Case => {
                self.accepted = true;
                vec![Effect::Notify(Notification::new(
                    NotificationKind::Success,
                    CASE_SENT_NOTICE,
                ))]
            }
        }
    }

    fn on_submission_failed(&mut self) -> Vec<Effect> {
        if self.accepted {
            return vec![];
        }
        if self.gate.fail() {
            warn!("{}, re-enabling the {} form", FormError::ServerRoundTripFailure, self.kind);
        }
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::draft::DraftPersistence;
    use crate::form::field::{FieldMark, SelectOption};
    use crate::storage::MemoryStore;

    fn input(controller: &mut FormController, field: &str, value: &str) -> Vec<Effect> {
        controller.dispatch(FormEvent::Input {
            field: field.to_string(),
            value: value.to_string(),
        })
    }

    fn change(controller: &mut FormController, field: &str, value: &str) -> Vec<Effect> {
        input(controller, field, value);
        controller.dispatch(FormEvent::Change {
            field: field.to_string(),
            value: value.to_string(),
        })
    }

    fn filled_case_form() -> FormController {
        let mut controller = FormController::bind(FormKind::Case, None);
        input(&mut controller, "customer_name", "Ada Lovelace");
        input(&mut controller, "email", "ada@example.com");
        change(&mut controller, TYPE_FIELD, "Bug Report");
        change(&mut controller, PRIORITY_FIELD, "High");
        input(&mut controller, "subject", "Engine halts");
        input(&mut controller, DESCRIPTION_FIELD, "It stops on the second loop.");
        controller
    }

    fn filled_lead_form() -> FormController {
        let mut controller = FormController::bind(FormKind::Lead, None);
        input(&mut controller, "first_name", "Grace");
        input(&mut controller, "last_name", "Hopper");
        input(&mut controller, "email", "grace@example.com");
        input(&mut controller, "phone", "+62 812 3456 7890");
        change(&mut controller, COUNTRY_FIELD, "SG");
        controller
    }

    fn error_count(controller: &FormController) -> usize {
        controller
            .fields()
            .iter()
            .filter(|f| f.error_message().is_some())
            .count()
    }

    fn submissions(effects: &[Effect]) -> usize {
        effects
            .iter()
            .filter(|e| matches!(e, Effect::Submit(_)))
            .count()
    }

    #[test]
    fn test_draft_restores_only_empty_fields() {
        let mut fields = FormKind::Case.fields();
        fields[0].value = "Prefilled".to_string();
        let mut draft = DraftValues::new();
        draft.insert("customer_name".to_string(), "From draft".to_string());
        draft.insert("subject".to_string(), "Saved subject".to_string());
        draft.insert("unknown".to_string(), "ignored".to_string());

        let controller = FormController::with_fields(FormKind::Case, fields, Some(draft));
        assert_eq!(controller.field("customer_name").unwrap().value, "Prefilled");
        assert_eq!(controller.field("subject").unwrap().value, "Saved subject");
    }

    #[test]
    fn test_prefilled_value_is_not_written_back_from_draft() {
        let mut fields = FormKind::Case.fields();
        fields[0].value = "Prefilled".to_string();
        let mut draft = DraftValues::new();
        draft.insert("customer_name".to_string(), "Stale".to_string());

        let mut controller = FormController::with_fields(FormKind::Case, fields, Some(draft));
        match &input(&mut controller, "subject", "x")[..] {
            [Effect::WriteDraft { values, .. }] => {
                assert_eq!(values.get("customer_name"), None);
                assert_eq!(values.get("subject").map(String::as_str), Some("x"));
            }
            other => panic!("unexpected effects {:?}", other),
        }
    }

    #[test]
    fn test_draft_round_trip_through_storage() {
        let mut drafts = DraftPersistence::new(Box::new(MemoryStore::new()), "newCaseForm_draft");
        let mut controller = FormController::bind(FormKind::Case, None);
        for (field, value) in [("customer_name", "1"), ("subject", "2")] {
            for effect in input(&mut controller, field, value) {
                if let Effect::WriteDraft { values, .. } = effect {
                    drafts.write(&values).unwrap();
                }
            }
        }

        let reloaded = FormController::bind(FormKind::Case, drafts.load());
        assert_eq!(reloaded.field("customer_name").unwrap().value, "1");
        assert_eq!(reloaded.field("subject").unwrap().value, "2");
    }

    #[test]
    fn test_input_merges_into_restored_draft() {
        let mut draft = DraftValues::new();
        draft.insert("subject".to_string(), "Saved subject".to_string());
        let mut controller = FormController::bind(FormKind::Case, Some(draft));
        let effects = input(&mut controller, "customer_name", "Ada");
        match &effects[..] {
            [Effect::WriteDraft { key, values }] => {
                assert_eq!(key, "newCaseForm_draft");
                assert_eq!(values.len(), 2);
                assert_eq!(values.get("subject").map(String::as_str), Some("Saved subject"));
            }
            other => panic!("unexpected effects {:?}", other),
        }
    }

    #[test]
    fn test_empty_input_is_not_saved() {
        let mut controller = FormController::bind(FormKind::Case, None);
        assert!(input(&mut controller, "subject", "").is_empty());
    }

    #[test]
    fn test_lead_form_keeps_no_draft() {
        let mut controller = FormController::bind(FormKind::Lead, None);
        assert!(input(&mut controller, "first_name", "Grace").is_empty());
    }

    #[test]
    fn test_case_phone_is_formatted_before_saving() {
        let mut controller = FormController::bind(FormKind::Case, None);
        let effects = input(&mut controller, "phone", "081234567");
        assert_eq!(controller.field("phone").unwrap().value, "+62 81234567");
        match &effects[..] {
            [Effect::WriteDraft { values, .. }] => {
                assert_eq!(values.get("phone").map(String::as_str), Some("+62 81234567"));
            }
            other => panic!("unexpected effects {:?}", other),
        }
    }

    #[test]
    fn test_lead_phone_is_not_formatted() {
        let mut controller = FormController::bind(FormKind::Lead, None);
        input(&mut controller, "phone", "081234567");
        let phone = controller.field("phone").unwrap();
        assert_eq!(phone.value, "081234567");
        assert!(!phone.is_valid());
    }

    #[test]
    fn test_blur_marks_required_field() {
        let mut controller = FormController::bind(FormKind::Case, None);
        controller.dispatch(FormEvent::Blur {
            field: "subject".to_string(),
        });
        assert_eq!(
            controller.field("subject").unwrap().mark(),
            FieldMark::Error("This field is required".to_string())
        );

        input(&mut controller, "subject", "x");
        assert_eq!(controller.field("subject").unwrap().mark(), FieldMark::Neutral);

        controller.dispatch(FormEvent::Blur {
            field: "subject".to_string(),
        });
        assert_eq!(controller.field("subject").unwrap().mark(), FieldMark::Success);
    }

    #[test]
    fn test_blur_checks_email_format() {
        let mut controller = FormController::bind(FormKind::Case, None);
        input(&mut controller, "email", "user@@example");
        controller.dispatch(FormEvent::Blur {
            field: "email".to_string(),
        });
        let email = controller.field("email").unwrap();
        assert!(!email.is_valid());
        assert_eq!(email.error_message(), Some("Please enter a valid email address"));
    }

    #[test]
    fn test_lead_email_checked_on_input() {
        let mut controller = FormController::bind(FormKind::Lead, None);
        input(&mut controller, "email", "grace@");
        assert!(!controller.field("email").unwrap().is_valid());
        input(&mut controller, "email", "grace@example.com");
        assert!(controller.field("email").unwrap().is_valid());
        assert_eq!(controller.field("email").unwrap().error_message(), None);
    }

    #[test]
    fn test_valid_flag_and_error_message_stay_consistent() {
        let mut controller = FormController::bind(FormKind::Lead, None);
        controller.dispatch(FormEvent::Submit);
        input(&mut controller, "email", "nope");
        input(&mut controller, "phone", "12");
        for field in controller.fields() {
            assert_eq!(field.is_valid(), field.error_message().is_none(), "{}", field.name);
        }
    }

    #[test]
    fn test_one_empty_required_field_blocks_submission() {
        let mut controller = filled_case_form();
        input(&mut controller, "subject", "");
        let effects = controller.dispatch(FormEvent::Submit);

        assert_eq!(submissions(&effects), 0);
        assert_eq!(error_count(&controller), 1);
        assert_eq!(
            effects,
            vec![Effect::Focus {
                field: "subject".to_string()
            }]
        );
        assert_eq!(controller.gate_state(), GateState::Idle);
    }

    #[test]
    fn test_first_failing_field_is_focused() {
        let mut controller = FormController::bind(FormKind::Case, None);
        let effects = controller.dispatch(FormEvent::Submit);
        assert_eq!(
            effects.first(),
            Some(&Effect::Focus {
                field: "customer_name".to_string()
            })
        );
        assert_eq!(error_count(&controller), 6);
    }

    #[test]
    fn test_valid_case_form_is_handed_off() {
        let mut controller = filled_case_form();
        assert!(controller.snapshot().valid);
        let effects = controller.dispatch(FormEvent::Submit);

        assert_eq!(
            effects[0],
            Effect::ClearDraft {
                key: "newCaseForm_draft".to_string()
            }
        );
        match &effects[1] {
            Effect::Submit(submission) => {
                assert_eq!(submission.form, FormKind::Case);
                assert!(submission
                    .fields
                    .contains(&("email".to_string(), "ada@example.com".to_string())));
            }
            other => panic!("unexpected effect {:?}", other),
        }
        assert!(controller.is_submitting());
    }

    #[test]
    fn test_submit_ignored_while_submitting() {
        let mut controller = filled_case_form();
        controller.dispatch(FormEvent::Submit);
        assert!(controller.dispatch(FormEvent::Submit).is_empty());
        assert!(controller.dispatch(FormEvent::Reset).is_empty());
        assert!(input(&mut controller, "subject", "changed").is_empty());
        assert_eq!(controller.field("subject").unwrap().value, "Engine halts");
    }

    #[test]
    fn test_failure_reenables_form() {
        let mut controller = filled_case_form();
        controller.dispatch(FormEvent::Submit);
        assert!(controller.dispatch(FormEvent::SubmissionFailed).is_empty());
        assert_eq!(controller.gate_state(), GateState::Error);

        let effects = controller.dispatch(FormEvent::Submit);
        assert_eq!(submissions(&effects), 1);
    }

    #[test]
    fn test_case_success_stays_submitted() {
        let mut controller = filled_case_form();
        controller.dispatch(FormEvent::Submit);
        let effects = controller.dispatch(FormEvent::SubmissionSucceeded);
        assert!(matches!(&effects[..], [Effect::Notify(n)] if n.kind == NotificationKind::Success));
        assert!(controller.is_submitting());
        assert!(controller.is_accepted());
        assert!(!controller.is_awaiting_response());

        // A late answer cannot reopen an accepted form
        assert!(controller.dispatch(FormEvent::SubmissionFailed).is_empty());
        assert!(controller.dispatch(FormEvent::SubmissionSucceeded).is_empty());
        assert_eq!(controller.gate_state(), GateState::Submitting);
    }

    #[test]
    fn test_ctrl_enter_submits_case_form() {
        let mut controller = filled_case_form();
        let effects = controller.dispatch(FormEvent::KeyDown {
            key: Key::Enter,
            modifiers: Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
            focused: Some("subject".to_string()),
        });
        assert_eq!(submissions(&effects), 1);
    }

    #[test]
    fn test_cmd_enter_submits_case_form() {
        let mut controller = filled_case_form();
        let effects = controller.dispatch(FormEvent::KeyDown {
            key: Key::Enter,
            modifiers: Modifiers {
                meta: true,
                ..Modifiers::default()
            },
            focused: None,
        });
        assert_eq!(submissions(&effects), 1);
    }

    #[test]
    fn test_plain_enter_does_not_submit() {
        let mut controller = filled_case_form();
        let effects = controller.dispatch(FormEvent::KeyDown {
            key: Key::Enter,
            modifiers: Modifiers::default(),
            focused: None,
        });
        assert!(effects.is_empty());
    }

    #[test]
    fn test_shortcuts_unbound_on_lead_form() {
        let mut controller = filled_lead_form();
        let effects = controller.dispatch(FormEvent::KeyDown {
            key: Key::Enter,
            modifiers: Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
            focused: None,
        });
        assert!(effects.is_empty());
        assert_eq!(controller.gate_state(), GateState::Idle);
    }

    #[test]
    fn test_escape_blurs_and_validates() {
        let mut controller = FormController::bind(FormKind::Case, None);
        let effects = controller.dispatch(FormEvent::KeyDown {
            key: Key::Escape,
            modifiers: Modifiers::default(),
            focused: Some("subject".to_string()),
        });
        assert_eq!(
            effects,
            vec![Effect::Blur {
                field: "subject".to_string()
            }]
        );
        assert!(!controller.field("subject").unwrap().is_valid());
    }

    #[test]
    fn test_reset_asks_for_confirmation() {
        let mut controller = filled_case_form();
        let effects = controller.dispatch(FormEvent::Reset);
        assert_eq!(effects, vec![Effect::ConfirmReset { prompt: RESET_PROMPT }]);
        assert_eq!(controller.field("subject").unwrap().value, "Engine halts");
    }

    #[test]
    fn test_confirmed_reset_clears_everything() {
        let mut controller = filled_case_form();
        controller.dispatch(FormEvent::Blur {
            field: "subject".to_string(),
        });
        let effects = controller.dispatch(FormEvent::ResetConfirmed);

        assert!(controller.fields().iter().all(|f| f.value.is_empty()));
        assert!(controller
            .fields()
            .iter()
            .all(|f| f.mark() == FieldMark::Neutral));
        assert_eq!(
            effects,
            vec![
                Effect::ClearDraft {
                    key: "newCaseForm_draft".to_string()
                },
                Effect::Focus {
                    field: "customer_name".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_case_type_sets_placeholder_while_description_empty() {
        let mut controller = FormController::bind(FormKind::Case, None);
        change(&mut controller, TYPE_FIELD, "Order Issue");
        assert!(controller
            .field(DESCRIPTION_FIELD)
            .unwrap()
            .placeholder
            .contains("order number"));

        change(&mut controller, TYPE_FIELD, "Unheard Of");
        assert_eq!(
            controller.field(DESCRIPTION_FIELD).unwrap().placeholder,
            dynamic::DEFAULT_DESCRIPTION_PLACEHOLDER
        );

        input(&mut controller, DESCRIPTION_FIELD, "Already typing");
        change(&mut controller, TYPE_FIELD, "Bug Report");
        assert_eq!(
            controller.field(DESCRIPTION_FIELD).unwrap().placeholder,
            dynamic::DEFAULT_DESCRIPTION_PLACEHOLDER
        );
    }

    #[test]
    fn test_country_populates_state_selector() {
        let mut controller = FormController::bind(FormKind::Lead, None);
        assert!(controller.field(STATE_FIELD).unwrap().disabled);

        change(&mut controller, COUNTRY_FIELD, "SG");
        let state = controller.field(STATE_FIELD).unwrap();
        assert_eq!(state.options, vec![SelectOption::new("SG", "Singapore")]);
        assert!(!state.disabled);
    }

    #[test]
    fn test_unknown_country_disables_state_selector() {
        let mut controller = FormController::bind(FormKind::Lead, None);
        change(&mut controller, COUNTRY_FIELD, "ID");
        change(&mut controller, STATE_FIELD, "BA");
        assert_eq!(controller.field(STATE_FIELD).unwrap().value, "BA");

        change(&mut controller, COUNTRY_FIELD, "VN");
        let state = controller.field(STATE_FIELD).unwrap();
        assert!(state.disabled);
        assert!(state.options.is_empty());
        assert!(state.value.is_empty());
    }

    #[test]
    fn test_country_change_clears_state_value() {
        let mut controller = FormController::bind(FormKind::Lead, None);
        change(&mut controller, COUNTRY_FIELD, "ID");
        change(&mut controller, STATE_FIELD, "SG");
        change(&mut controller, COUNTRY_FIELD, "SG");
        assert!(controller.field(STATE_FIELD).unwrap().value.is_empty());
    }

    #[test]
    fn test_lead_submission_notifies_on_missing_fields() {
        let mut controller = FormController::bind(FormKind::Lead, None);
        let effects = controller.dispatch(FormEvent::Submit);
        assert!(effects.contains(&Effect::Notify(Notification::new(
            NotificationKind::Error,
            REQUIRED_FIELDS_NOTICE
        ))));
        assert_eq!(submissions(&effects), 0);
    }

    #[test]
    fn test_lead_success_resets_form() {
        let mut controller = filled_lead_form();
        let effects = controller.dispatch(FormEvent::Submit);
        assert_eq!(submissions(&effects), 1);

        let effects = controller.dispatch(FormEvent::SubmissionSucceeded);
        assert_eq!(
            effects,
            vec![Effect::Notify(Notification::new(
                NotificationKind::Success,
                LEAD_SENT_NOTICE
            ))]
        );
        assert_eq!(controller.gate_state(), GateState::Idle);
        assert!(controller.fields().iter().all(|f| f.value.is_empty()));
        assert!(controller.field(STATE_FIELD).unwrap().disabled);
    }

    #[test]
    fn test_disabled_state_selector_is_not_submitted() {
        let mut controller = filled_lead_form();
        change(&mut controller, COUNTRY_FIELD, "OTHER");
        assert!(controller.values().iter().all(|(name, _)| name != STATE_FIELD));
    }

    #[test]
    fn test_snapshot_does_not_mark_fields() {
        let controller = FormController::bind(FormKind::Case, None);
        let snapshot = controller.snapshot();
        assert!(!snapshot.valid);
        assert_eq!(snapshot.invalid_fields.len(), 6);
        assert_eq!(error_count(&controller), 0);
    }
}
