use super::Frame;
use crate::state::State;
use crate::ui::theme::ColorSpec;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const NOTIFICATION_WIDTH: u16 = 48;
const NOTIFICATION_HEIGHT: u16 = 4;

/// Render the reset confirmation dialog on top of the form.
///
pub fn confirm_reset(frame: &mut Frame, size: Rect, state: &State) {
    let prompt = match state.reset_prompt() {
        Some(prompt) => prompt,
        None => return,
    };
    let popup_area = centered_rect(60, 25, size);
    frame.render_widget(Clear, popup_area);

    let theme = state.theme();
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            prompt,
            Style::default()
                .fg(theme.text.to_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "y/Enter: reset, n/Esc: cancel",
            styling::muted_text_style(theme),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    "Confirm Reset",
                    Style::default()
                        .fg(theme.warning.to_color())
                        .add_modifier(Modifier::BOLD),
                ))
                .border_style(Style::default().fg(theme.warning.to_color())),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, popup_area);
}

/// Render the active notification in the top-right corner.
///
pub fn notification(frame: &mut Frame, size: Rect, state: &State) {
    let notification = match state.notification() {
        Some(notification) => notification,
        None => return,
    };
    let area = top_right_rect(NOTIFICATION_WIDTH, NOTIFICATION_HEIGHT, size);
    frame.render_widget(Clear, area);

    let color = ColorSpec::from_hex(notification.kind.color())
        .unwrap_or(state.theme().info)
        .to_color();
    let paragraph = Paragraph::new(notification.message.as_str())
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .title(Span::styled(" ✕ Ctrl+X ", styling::muted_text_style(state.theme())))
                .title_alignment(Alignment::Right),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Helper function to create a centered rectangle (ratatui modal pattern).
///
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Return a rectangle anchored to the top-right corner, clipped to `r`.
///
fn top_right_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}
