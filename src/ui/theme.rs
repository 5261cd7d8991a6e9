use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub background: ColorSpec,
    pub surface: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Footer mode colors
    pub footer_edit: ColorSpec,
    pub footer_confirm: ColorSpec,
    pub footer_normal: ColorSpec,
}

/// RGB color that converts to a terminal color.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    /// Parse a `#rrggbb` string.
    ///
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(ColorSpec::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec::rgb(125, 207, 255),       // Blue
            accent: ColorSpec::rgb(255, 159, 196),        // Magenta
            banner: ColorSpec::rgb(255, 159, 196),        // Magenta
            text: ColorSpec::rgb(169, 177, 214),          // Foreground
            text_muted: ColorSpec::rgb(117, 121, 148),    // Comment
            background: ColorSpec::rgb(26, 27, 38),       // Background
            surface: ColorSpec::rgb(36, 40, 59),          // Selection
            success: ColorSpec::rgb(158, 206, 106),       // Green
            warning: ColorSpec::rgb(255, 202, 40),        // Yellow
            error: ColorSpec::rgb(247, 118, 142),         // Red
            info: ColorSpec::rgb(125, 207, 255),          // Blue
            border_active: ColorSpec::rgb(125, 207, 255), // Blue
            border_normal: ColorSpec::rgb(117, 121, 148), // Comment
            highlight_bg: ColorSpec::rgb(125, 207, 255),  // Blue
            highlight_fg: ColorSpec::rgb(26, 27, 38),     // Background
            footer_edit: ColorSpec::rgb(255, 202, 40),    // Yellow
            footer_confirm: ColorSpec::rgb(247, 118, 142), // Red
            footer_normal: ColorSpec::rgb(0, 0, 0),       // Black
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: ColorSpec::rgb(161, 119, 255),       // Purple
            accent: ColorSpec::rgb(255, 109, 146),        // Pink
            banner: ColorSpec::rgb(255, 109, 146),        // Pink
            text: ColorSpec::rgb(88, 82, 96),             // Text
            text_muted: ColorSpec::rgb(152, 147, 165),    // Muted
            background: ColorSpec::rgb(250, 244, 237),    // Base
            surface: ColorSpec::rgb(255, 250, 243),       // Surface
            success: ColorSpec::rgb(59, 247, 209),        // Pine
            warning: ColorSpec::rgb(255, 210, 0),         // Gold
            error: ColorSpec::rgb(235, 111, 146),         // Love
            info: ColorSpec::rgb(61, 174, 233),           // Foam
            border_active: ColorSpec::rgb(161, 119, 255), // Purple
            border_normal: ColorSpec::rgb(88, 82, 96),    // Text
            highlight_bg: ColorSpec::rgb(61, 174, 233),   // Foam
            highlight_fg: ColorSpec::rgb(0, 0, 0),        // Black
            footer_edit: ColorSpec::rgb(255, 210, 0),     // Gold
            footer_confirm: ColorSpec::rgb(235, 111, 146), // Love
            footer_normal: ColorSpec::rgb(0, 0, 0),       // Black
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: ColorSpec::rgb(189, 147, 249),       // Purple
            accent: ColorSpec::rgb(255, 121, 198),        // Pink
            banner: ColorSpec::rgb(255, 121, 198),        // Pink
            text: ColorSpec::rgb(248, 248, 242),          // Foreground
            text_muted: ColorSpec::rgb(98, 114, 164),     // Comment
            background: ColorSpec::rgb(40, 42, 54),       // Background
            surface: ColorSpec::rgb(68, 71, 90),          // Selection
            success: ColorSpec::rgb(80, 250, 123),        // Green
            warning: ColorSpec::rgb(255, 184, 108),       // Orange
            error: ColorSpec::rgb(255, 85, 85),           // Red
            info: ColorSpec::rgb(139, 233, 253),          // Cyan
            border_active: ColorSpec::rgb(189, 147, 249), // Purple
            border_normal: ColorSpec::rgb(98, 114, 164),  // Comment
            highlight_bg: ColorSpec::rgb(139, 233, 253),  // Cyan
            highlight_fg: ColorSpec::rgb(40, 42, 54),     // Background
            footer_edit: ColorSpec::rgb(255, 184, 108),   // Orange
            footer_confirm: ColorSpec::rgb(255, 85, 85),  // Red
            footer_normal: ColorSpec::rgb(0, 0, 0),       // Black
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            "dracula" => Some(Self::dracula()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "tokyo-night".to_string(),
            "rose-pine-dawn".to_string(),
            "dracula".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(
            ColorSpec::from_hex("#ef4444"),
            Some(ColorSpec::rgb(0xef, 0x44, 0x44))
        );
        assert_eq!(
            ColorSpec::from_hex("#10B981"),
            Some(ColorSpec::rgb(0x10, 0xb9, 0x81))
        );
        assert_eq!(ColorSpec::from_hex("ef4444"), None);
        assert_eq!(ColorSpec::from_hex("#ef44"), None);
        assert_eq!(ColorSpec::from_hex("#gg4444"), None);
    }

    #[test]
    fn test_every_listed_theme_resolves() {
        for name in Theme::available_themes() {
            let theme = Theme::from_name(&name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn test_default_theme() {
        assert_eq!(Theme::default().name, "tokyo-night");
    }
}
