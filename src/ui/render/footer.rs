use super::Frame;
use crate::form::FieldKind;
use crate::state::{Focus, State};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the hint text for the current focus.
///
fn hints(state: &State) -> String {
    if state.is_confirming_reset() {
        return " y/Enter: reset, n/Esc: cancel".to_string();
    }
    let mut hints = vec!["Tab/↑↓: move"];
    match state.focus() {
        Some(Focus::Field(_)) => match state.focused_field() {
            Some(f) if f.kind == FieldKind::Select => hints.push("←/→/Enter: choose"),
            Some(f) if f.multiline => hints.push("Enter: new line"),
            _ => hints.push("type to edit"),
        },
        Some(Focus::Submit) | Some(Focus::Reset) => hints.push("Enter: press"),
        None => (),
    }
    if state.controller().kind().has_shortcuts() {
        hints.push("Ctrl+S: submit");
        hints.push("Esc: leave field");
    }
    if state.notification().is_some() {
        hints.push("Ctrl+X: dismiss");
    }
    hints.push("F2: log");
    hints.push("Ctrl+Q: quit");
    format!(" {}", hints.join(", "))
}

/// Render footer with hints for the current focus.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let background = if state.is_confirming_reset() {
        theme.footer_confirm
    } else if state.focused_field().is_some() {
        theme.footer_edit
    } else {
        theme.primary
    };
    let line = Line::from(Span::styled(
        hints(state),
        Style::default()
            .fg(theme.footer_normal.to_color())
            .bg(background.to_color())
            .add_modifier(Modifier::BOLD),
    ));
    let paragraph = Paragraph::new(line).style(Style::default().bg(background.to_color()));
    frame.render_widget(paragraph, size);
}
