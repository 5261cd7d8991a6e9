use super::{confirm_reset, footer, form, log, notification, Frame};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::Modifier,
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

const LOG_HEIGHT: u16 = 10;

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &State) {
    let size = frame.size();
    let mut constraints = vec![
        Constraint::Length(3), // Title
        Constraint::Min(1),    // Form
    ];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    constraints.push(Constraint::Length(1)); // Footer

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    let theme = state.theme();
    let title = Paragraph::new(Span::styled(
        state.controller().kind().title(),
        styling::banner_style(theme).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(title, chunks[0]);

    form(frame, chunks[1], state);
    if state.is_log_visible() {
        log(frame, chunks[2], state);
    }
    footer(frame, chunks[chunks.len() - 1], state);

    // Overlays render last so they sit on top
    notification(frame, size, state);
    if state.is_confirming_reset() {
        confirm_reset(frame, size, state);
    }
}
