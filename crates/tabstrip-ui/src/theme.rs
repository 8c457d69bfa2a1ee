//! Theme palette for the terminal tab strip.
//!
//! A small, programmatically constructed palette; the tab bar only
//! needs background, accent, and muted colors.

use ratatui::style::Color;

/// Complete theme definition
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Theme display name
    pub name: String,
    /// Color palette
    pub colors: ThemeColors,
}

/// Color palette for the theme
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    /// Main background color
    pub background: Color,
    /// Main foreground/text color
    pub foreground: Color,
    /// Accent color for the highlighted tab
    pub accent: Color,
    /// Muted color for inactive tabs
    pub muted: Color,
}

impl Theme {
    /// Creates the default dark theme
    #[must_use]
    pub fn dark() -> Self {
        Theme {
            name: "Dark".to_string(),
            colors: ThemeColors {
                background: Color::Rgb(30, 30, 46),
                foreground: Color::Rgb(205, 214, 244),
                accent: Color::Rgb(137, 180, 250),
                muted: Color::Rgb(108, 112, 134),
            },
        }
    }

    /// Creates a light theme
    #[must_use]
    pub fn light() -> Self {
        Theme {
            name: "Light".to_string(),
            colors: ThemeColors {
                background: Color::Rgb(239, 241, 245),
                foreground: Color::Rgb(76, 79, 105),
                accent: Color::Rgb(30, 102, 245),
                muted: Color::Rgb(156, 160, 176),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
