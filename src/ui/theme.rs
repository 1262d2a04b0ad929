//! Theme system for UI styling
//!
//! Provides consistent styling across the demo UI and the prompt modal with
//! support for a few named themes.

use ratatui::style::{Color, Modifier, Style};

use crate::error::AppResult;

/// UI theme containing all style definitions
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name
    pub name: String,
    /// Color scheme
    pub colors: ColorScheme,
}

impl Theme {
    /// Load a theme by name, falling back to the default
    pub fn load(theme_name: &str) -> AppResult<Self> {
        match theme_name {
            "default" => Ok(Self::default_theme()),
            "light" => Ok(Self::light_theme()),
            _ => Ok(Self::default_theme()),
        }
    }

    /// Default theme (dark with blue accents)
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            colors: ColorScheme {
                background: Color::Reset,
                foreground: Color::White,
                primary: Color::Blue,
                accent: Color::Yellow,
                success: Color::Green,
                danger: Color::Red,
                muted: Color::DarkGray,
            },
        }
    }

    /// Light theme for bright terminals
    pub fn light_theme() -> Self {
        Self {
            name: "light".to_string(),
            colors: ColorScheme {
                background: Color::White,
                foreground: Color::Black,
                primary: Color::Rgb(0, 100, 200),
                accent: Color::Rgb(200, 150, 0),
                success: Color::Rgb(0, 150, 0),
                danger: Color::Rgb(200, 0, 0),
                muted: Color::Rgb(120, 120, 120),
            },
        }
    }

    /// Get style for borders
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.colors.muted)
    }

    /// Get style for normal text
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.colors.foreground)
    }

    /// Get style for selected/highlighted text
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.colors.background)
            .bg(self.colors.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for error messages
    pub fn error_style(&self) -> Style {
        Style::default()
            .fg(self.colors.danger)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for muted/disabled text
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.colors.muted)
    }
}

/// Color scheme for themes
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub background: Color,
    pub foreground: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub danger: Color,
    pub muted: Color,
}
