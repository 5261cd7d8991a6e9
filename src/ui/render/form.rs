use super::Frame;
use crate::form::render::{FieldView, FormView};
use crate::form::{FieldKind, FieldMark};
use crate::state::{Focus, State};
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Block, Borders, Paragraph, Wrap,
    },
};

const FIELD_HEIGHT: u16 = 3;
const MULTILINE_FIELD_HEIGHT: u16 = 6;
const BUTTONS_HEIGHT: u16 = 3;
const RETRY_HINT: &str = "Submission failed. Fix anything marked and submit again.";

/// Render the bound form according to state.
///
pub fn form(frame: &mut Frame, size: Rect, state: &State) {
    let view = state.view();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),                 // Fields
            Constraint::Length(1),              // Retry hint
            Constraint::Length(BUTTONS_HEIGHT), // Buttons
        ])
        .split(size);

    fields(frame, chunks[0], &view, state);
    if view.retry_hint {
        let hint = Paragraph::new(Span::styled(
            RETRY_HINT,
            Style::default().fg(state.theme().error.to_color()),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[1]);
    }
    buttons(frame, chunks[2], &view, state);
}

fn field_height(field: &FieldView) -> u16 {
    if field.multiline {
        MULTILINE_FIELD_HEIGHT
    } else {
        FIELD_HEIGHT
    }
}

/// Return the index of the first field to draw so the focused one fits.
///
fn first_visible(view: &FormView, focused: Option<usize>, available: u16) -> usize {
    let focused = match focused {
        Some(index) if index < view.fields.len() => index,
        _ => return 0,
    };
    let mut start = 0;
    let height_through = |start: usize| -> u16 {
        view.fields[start..=focused].iter().map(field_height).sum()
    };
    while start < focused && height_through(start) > available {
        start += 1;
    }
    start
}

fn fields(frame: &mut Frame, size: Rect, view: &FormView, state: &State) {
    let focused = state.focus().and_then(|f| f.field_index());
    let start = first_visible(view, focused, size.height);

    let mut constraints = vec![];
    let mut visible = vec![];
    let mut used = 0u16;
    for (index, field) in view.fields.iter().enumerate().skip(start) {
        let height = field_height(field);
        if used + height > size.height {
            break;
        }
        used += height;
        constraints.push(Constraint::Length(height));
        visible.push(index);
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    for (chunk, index) in chunks.iter().zip(visible) {
        field(frame, *chunk, &view.fields[index], focused == Some(index), state);
    }
}

fn field(frame: &mut Frame, size: Rect, field: &FieldView, focused: bool, state: &State) {
    let theme = state.theme();
    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.clone()
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::field_border_style(field, focused, theme))
        .title(Span::styled(
            label,
            if focused {
                styling::active_block_title_style()
            } else {
                styling::normal_text_style(theme)
            },
        ));
    match &field.mark {
        FieldMark::Error(message) => {
            block = block.title(
                Title::from(Span::styled(
                    format!(" {} ", message),
                    Style::default().fg(theme.error.to_color()),
                ))
                .position(Position::Bottom),
            );
        }
        FieldMark::Success => {
            block = block.title(
                Title::from(Span::styled(
                    " ✓ ",
                    Style::default().fg(theme.success.to_color()),
                ))
                .position(Position::Bottom)
                .alignment(Alignment::Right),
            );
        }
        FieldMark::Neutral => (),
    }

    let content = field_content(field, focused, state);
    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, size);
}

fn field_content(field: &FieldView, focused: bool, state: &State) -> Vec<Line<'static>> {
    let theme = state.theme();
    if field.disabled {
        return vec![Line::from(Span::styled(
            field.placeholder.clone(),
            styling::muted_text_style(theme),
        ))];
    }

    if field.kind == FieldKind::Select {
        let text = if field.value.is_empty() {
            Span::styled(field.placeholder.clone(), styling::muted_text_style(theme))
        } else {
            Span::styled(field.display.clone(), styling::normal_text_style(theme))
        };
        return if focused {
            vec![Line::from(vec![
                Span::styled("◂ ", styling::muted_text_style(theme)),
                text,
                Span::styled(" ▸", styling::muted_text_style(theme)),
            ])]
        } else {
            vec![Line::from(text)]
        };
    }

    if field.value.is_empty() {
        let mut spans = vec![];
        if focused {
            spans.push(Span::styled("▏", styling::normal_text_style(theme)));
        }
        spans.push(Span::styled(
            field.placeholder.clone(),
            styling::muted_text_style(theme),
        ));
        return vec![Line::from(spans)];
    }

    let mut lines: Vec<Line> = field
        .value
        .split('\n')
        .map(|line| Line::from(Span::styled(line.to_string(), styling::normal_text_style(theme))))
        .collect();
    if focused {
        if let Some(last) = lines.last_mut() {
            last.spans
                .push(Span::styled("▏", styling::normal_text_style(theme)));
        }
    }
    lines
}

fn buttons(frame: &mut Frame, size: Rect, view: &FormView, state: &State) {
    let theme = state.theme();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(size);

    let submit_label = if view.loading {
        format!("{} Submitting...", spinner::frame(state.spinner_index()))
    } else if view.submitted {
        "Submitted".to_string()
    } else {
        "Submit".to_string()
    };
    let submit_focused = state.focus() == Some(Focus::Submit);
    let submit = Paragraph::new(Span::styled(
        submit_label,
        styling::button_style(submit_focused, view.submit_enabled, theme),
    ))
    .alignment(Alignment::Center)
    .block(button_block(submit_focused, state));
    frame.render_widget(submit, chunks[0]);

    let reset_focused = state.focus() == Some(Focus::Reset);
    let reset = Paragraph::new(Span::styled(
        "Reset",
        styling::button_style(reset_focused, view.reset_enabled, theme),
    ))
    .alignment(Alignment::Center)
    .block(button_block(reset_focused, state));
    frame.render_widget(reset, chunks[1]);
}

fn button_block(focused: bool, state: &State) -> Block<'static> {
    let border_style = if focused {
        styling::active_block_border_style(state.theme()).add_modifier(Modifier::BOLD)
    } else {
        styling::normal_block_border_style(state.theme())
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
}
