//! Colors for the terminal host.

use ratatui::style::Color;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Borders, titles, and emphasis
    pub primary: Color,
    /// Highlights and focus states
    pub accent: Color,
    /// Fired-shortcut entries in the activity log
    pub success: Color,
    /// Disabled-dispatcher indicator
    pub warning: Color,
    /// Primary text content color
    pub text: Color,
    /// Help text and dim content
    pub text_muted: Color,
    /// Main background color
    pub background: Color,
}

impl Theme {
    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            warning: Color::Red,
            text: Color::White,
            text_muted: Color::DarkGray,
            background: Color::Black,
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            success: Color::Rgb(0, 128, 0),
            warning: Color::Red,
            text: Color::Black,
            text_muted: Color::Gray,
            background: Color::White,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
