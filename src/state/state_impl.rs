use crate::app::SubmissionEventSender;
use crate::events::submission::Event as SubmissionEvent;
use crate::form::render::{self, FormView};
use crate::form::{
    DraftPersistence, Effect, FieldKind, FieldState, FormController, FormEvent, FormKind, Key,
    Modifiers, Notification,
};
use crate::logger::LogBuffer;
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;
use std::time::{Duration, Instant};

use super::focus::Focus;

const DEFAULT_NOTIFICATION_TIMEOUT_SECS: u64 = 5;

/// A notification and the moment it was shown.
///
#[derive(Debug, Clone)]
pub struct ActiveNotification {
    pub notification: Notification,
    pub shown_at: Instant,
}

/// Houses data representative of application state.
///
pub struct State {
    controller: FormController,
    drafts: Option<DraftPersistence>,
    submission_sender: Option<SubmissionEventSender>,
    focus: Option<Focus>,
    reset_prompt: Option<&'static str>,
    notification: Option<ActiveNotification>,
    notification_timeout: Duration,
    spinner_index: usize,
    log_visible: bool,
    log_buffer: LogBuffer,
    theme: Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            controller: FormController::bind(FormKind::Case, None),
            drafts: None,
            submission_sender: None,
            focus: None,
            reset_prompt: None,
            notification: None,
            notification_timeout: Duration::from_secs(DEFAULT_NOTIFICATION_TIMEOUT_SECS),
            spinner_index: 0,
            log_visible: false,
            log_buffer: LogBuffer::new(),
            theme: Theme::default(),
        }
    }
}

impl State {
    /// Return new state around a bound controller. The first field starts
    /// focused.
    ///
    pub fn new(
        controller: FormController,
        drafts: Option<DraftPersistence>,
        submission_sender: Option<SubmissionEventSender>,
        notification_timeout: Duration,
    ) -> Self {
        let focus = if controller.fields().is_empty() {
            None
        } else {
            Some(Focus::Field(0))
        };
        State {
            controller,
            drafts,
            submission_sender,
            focus,
            notification_timeout,
            ..State::default()
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_log_buffer(mut self, log_buffer: LogBuffer) -> Self {
        self.log_buffer = log_buffer;
        self
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    /// Return the render instructions for the bound form.
    ///
    pub fn view(&self) -> FormView {
        render::instructions(&self.controller)
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Route an event through the controller and carry out its effects.
    ///
    pub fn apply_form_event(&mut self, event: FormEvent) {
        let effects = self.controller.dispatch(event);
        for effect in effects {
            self.apply_effect(effect);
        }
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::WriteDraft { key, values } => {
                if let Some(drafts) = self.drafts_for(&key) {
                    if let Err(err) = drafts.write(&values) {
                        warn!("Failed to save draft '{}': {}", key, err);
                    }
                }
            }
            Effect::ClearDraft { key } => {
                if let Some(drafts) = self.drafts_for(&key) {
                    if let Err(err) = drafts.clear() {
                        warn!("Failed to clear draft '{}': {}", key, err);
                    }
                }
            }
            Effect::Submit(submission) => self.dispatch(SubmissionEvent::Submit(submission)),
            Effect::ConfirmReset { prompt } => self.reset_prompt = Some(prompt),
            Effect::Notify(notification) => self.notify(notification),
            Effect::Focus { field } => {
                self.focus = self
                    .controller
                    .fields()
                    .iter()
                    .position(|f| f.name == field)
                    .map(Focus::Field);
            }
            Effect::Blur { field } => {
                if self.focused_field().map(|f| f.name == field).unwrap_or(false) {
                    self.focus = None;
                }
            }
        }
    }

    fn drafts_for(&mut self, key: &str) -> Option<&mut DraftPersistence> {
        match self.drafts.as_mut() {
            Some(drafts) if drafts.key() == key => Some(drafts),
            Some(drafts) => {
                warn!("Draft key '{}' does not match '{}'", key, drafts.key());
                None
            }
            None => None,
        }
    }

    pub fn focus(&self) -> Option<Focus> {
        self.focus
    }

    pub fn focused_field(&self) -> Option<&FieldState> {
        self.focus
            .and_then(|focus| focus.field_index())
            .and_then(|index| self.controller.fields().get(index))
    }

    fn focused_field_name(&self) -> Option<String> {
        self.focused_field().map(|f| f.name.clone())
    }

    /// Enabled fields in form order followed by the buttons.
    ///
    fn focus_order(&self) -> Vec<Focus> {
        let mut order: Vec<Focus> = self
            .controller
            .fields()
            .iter()
            .enumerate()
            .filter(|(_, f)| !f.disabled)
            .map(|(index, _)| Focus::Field(index))
            .collect();
        order.push(Focus::Submit);
        order.push(Focus::Reset);
        order
    }

    pub fn focus_next(&mut self) {
        self.move_focus(true);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(false);
    }

    fn move_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        let len = order.len();
        let next = match self.focus.and_then(|f| order.iter().position(|o| *o == f)) {
            Some(pos) if forward => order[(pos + 1) % len],
            Some(pos) => order[(pos + len - 1) % len],
            None if forward => order[0],
            None => order[len - 1],
        };
        if let Some(field) = self.focused_field_name() {
            self.apply_form_event(FormEvent::Blur { field });
        }
        self.focus = Some(next);
    }

    /// Return name and current value of the focused field if it takes text.
    ///
    fn focused_text_field(&self) -> Option<(String, String)> {
        match self.focused_field() {
            Some(f) if f.kind != FieldKind::Select && !f.disabled => {
                Some((f.name.clone(), f.value.clone()))
            }
            _ => None,
        }
    }

    pub fn type_char(&mut self, c: char) {
        if let Some((field, mut value)) = self.focused_text_field() {
            value.push(c);
            self.apply_form_event(FormEvent::Input { field, value });
        }
    }

    pub fn backspace(&mut self) {
        if let Some((field, mut value)) = self.focused_text_field() {
            if value.pop().is_some() {
                self.apply_form_event(FormEvent::Input { field, value });
            }
        }
    }

    /// Move to the next option of the focused selector.
    ///
    pub fn cycle_option(&mut self, forward: bool) {
        let (field, value) = match self.focused_field() {
            Some(f) if f.kind == FieldKind::Select && !f.disabled => {
                (f.name.clone(), f.cycle_option(forward))
            }
            _ => return,
        };
        self.apply_form_event(FormEvent::Input {
            field: field.clone(),
            value: value.clone(),
        });
        self.apply_form_event(FormEvent::Change { field, value });
    }

    /// Handle Enter on whatever holds the focus.
    ///
    pub fn activate(&mut self) {
        match self.focus {
            Some(Focus::Field(_)) => {
                let (select, multiline) = self
                    .focused_field()
                    .map(|f| (f.kind == FieldKind::Select, f.multiline))
                    .unwrap_or_default();
                if select {
                    self.cycle_option(true);
                } else if multiline {
                    self.type_char('\n');
                } else {
                    self.focus_next();
                }
            }
            Some(Focus::Submit) => self.apply_form_event(FormEvent::Submit),
            Some(Focus::Reset) => self.apply_form_event(FormEvent::Reset),
            None => self.focus_next(),
        }
    }

    pub fn key_down(&mut self, key: Key, modifiers: Modifiers) {
        let focused = self.focused_field_name();
        self.apply_form_event(FormEvent::KeyDown {
            key,
            modifiers,
            focused,
        });
    }

    /// Ctrl+Enter and its terminal fallbacks.
    ///
    pub fn submit_shortcut(&mut self) {
        self.key_down(
            Key::Enter,
            Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
        );
    }

    pub fn escape(&mut self) {
        self.key_down(Key::Escape, Modifiers::default());
    }

    pub fn reset_prompt(&self) -> Option<&'static str> {
        self.reset_prompt
    }

    pub fn is_confirming_reset(&self) -> bool {
        self.reset_prompt.is_some()
    }

    /// Close the reset confirmation, resetting the form when accepted.
    ///
    pub fn answer_reset(&mut self, accepted: bool) {
        if self.reset_prompt.take().is_none() {
            return;
        }
        if accepted {
            self.apply_form_event(FormEvent::ResetConfirmed);
        } else {
            debug!("Reset cancelled");
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        info!("{}", notification.message);
        self.notification = Some(ActiveNotification {
            notification,
            shown_at: Instant::now(),
        });
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref().map(|active| &active.notification)
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Advance the spinner and drop an expired notification.
    ///
    pub fn tick_at(&mut self, now: Instant) {
        if self.controller.is_awaiting_response() {
            self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
        }
        let expired = self
            .notification
            .as_ref()
            .map(|active| now.saturating_duration_since(active.shown_at) >= self.notification_timeout)
            .unwrap_or(false);
        if expired {
            self.notification = None;
        }
    }

    pub fn spinner_index(&self) -> usize {
        self.spinner_index
    }

    pub fn toggle_log(&mut self) {
        self.log_visible = !self.log_visible;
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    pub fn log_entries(&self, count: usize) -> Vec<String> {
        self.log_buffer.tail(count)
    }

    /// Ask the submission worker to cancel anything still pending.
    ///
    pub fn teardown(&self) {
        self.dispatch(SubmissionEvent::Teardown);
    }

    /// Send a submission event to the worker thread.
    ///
    pub fn dispatch(&self, event: SubmissionEvent) {
        match &self.submission_sender {
            Some(sender) => {
                if let Err(err) = sender.send(event) {
                    error!("Received error from submission dispatch: {}", err);
                }
            }
            None => warn!("No submission worker for '{:?}'", event),
        }
    }
}
