use crate::form::render::FieldView;
use crate::form::FieldMark;
use crate::ui::theme::{ColorSpec, Theme};
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the border style for a field. Validation marks win over the
/// priority colour, which wins over focus.
///
pub fn field_border_style(field: &FieldView, focused: bool, theme: &Theme) -> Style {
    let style = match &field.mark {
        FieldMark::Error(_) => Style::default().fg(theme.error.to_color()),
        FieldMark::Success => Style::default().fg(theme.success.to_color()),
        FieldMark::Neutral => match field.border_color.and_then(ColorSpec::from_hex) {
            Some(color) => Style::default().fg(color.to_color()),
            None if focused => active_block_border_style(theme),
            None => normal_block_border_style(theme),
        },
    };
    if focused {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Return the style for a button.
///
pub fn button_style(focused: bool, enabled: bool, theme: &Theme) -> Style {
    if !enabled {
        muted_text_style(theme)
    } else if focused {
        Style::default()
            .fg(theme.highlight_fg.to_color())
            .bg(theme.highlight_bg.to_color())
            .add_modifier(Modifier::BOLD)
    } else {
        normal_text_style(theme)
    }
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

/// Return the style for placeholders and disabled content.
///
pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for the banner.
///
pub fn banner_style(theme: &Theme) -> Style {
    Style::default().fg(theme.banner.to_color())
}
