//! Render instructions.
//!
//! Turns the controller's current state into plain view data. Whatever
//! draws the form only needs a `FormView`; it never inspects fields or
//! validation rules itself.

use super::controller::FormController;
use super::definition::PRIORITY_FIELD;
use super::dynamic;
use super::field::{FieldKind, FieldMark, SelectOption};
use super::gate::GateState;

/// Everything needed to draw one field.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub name: String,
    pub label: String,
    pub value: String,
    pub display: String,
    pub placeholder: String,
    pub required: bool,
    pub multiline: bool,
    pub kind: FieldKind,
    pub mark: FieldMark,
    pub border_color: Option<&'static str>,
    pub disabled: bool,
    pub options: Vec<SelectOption>,
}

/// Everything needed to draw a form.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub title: &'static str,
    pub fields: Vec<FieldView>,
    pub submit_enabled: bool,
    pub reset_enabled: bool,
    pub loading: bool,
    pub submitted: bool,
    pub retry_hint: bool,
}

/// Return the render instructions for the controller's current state.
///
pub fn instructions(controller: &FormController) -> FormView {
    let fields = controller
        .fields()
        .iter()
        .map(|field| {
            let display = match field.kind {
                FieldKind::Select => field.selected_text().unwrap_or(&field.value).to_string(),
                _ => field.value.clone(),
            };
            let border_color = if field.name == PRIORITY_FIELD {
                dynamic::priority_color(&field.value)
            } else {
                None
            };
            FieldView {
                name: field.name.clone(),
                label: field.label.clone(),
                value: field.value.clone(),
                display,
                placeholder: field.placeholder.clone(),
                required: field.required,
                multiline: field.multiline,
                kind: field.kind,
                mark: field.mark(),
                border_color,
                disabled: field.disabled,
                options: field.options.clone(),
            }
        })
        .collect();

    let submitting = controller.is_submitting();
    FormView {
        title: controller.kind().title(),
        fields,
        submit_enabled: !submitting,
        reset_enabled: !submitting,
        loading: controller.is_awaiting_response(),
        submitted: controller.is_accepted(),
        retry_hint: controller.gate_state() == GateState::Error,
    }
}
