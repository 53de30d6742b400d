//! Widget styling.
//!
//! A single immutable value constructed once and passed by reference to
//! every widget constructor.

use ratatui::style::{Color, Modifier, Style};

/// Named styles shared by all widgets.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Unfocused pointer/border style
    pub indicator: Style,
    /// Focused pointer/border style
    pub indicator_hi: Style,
    /// Header and label text
    pub text_box: Style,
    /// Transient error messages
    pub error: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            indicator: Style::default().fg(Color::Rgb(50, 50, 50)),
            indicator_hi: Style::default()
                .fg(Color::Rgb(255, 255, 255))
                .add_modifier(Modifier::BOLD),
            text_box: Style::default().fg(Color::Rgb(160, 160, 160)),
            error: Style::default().fg(Color::Rgb(255, 0, 43)),
        }
    }
}
