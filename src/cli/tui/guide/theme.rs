use ratatui::style::{Color, Modifier, Style};

use crate::wizard::Role;

/// Consistent theme for the TUI
pub struct Theme {
    pub selected: Style,
    pub cursor: Style,
    pub success: Style,
    pub muted: Style,
    pub disabled: Style,
    pub highlight: Style,
    pub title: Style,
    pub help_bar: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            selected: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            cursor: Style::default()
                .bg(Color::Rgb(50, 50, 80))
                .add_modifier(Modifier::BOLD),
            success: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::DarkGray),
            disabled: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
            highlight: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            title: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            help_bar: Style::default().bg(Color::DarkGray),
        }
    }
}

impl Theme {
    /// Heading color for a result group
    pub fn role_color(&self, role: Role) -> Color {
        match role {
            Role::Socket => Color::Cyan,
            Role::Tab => Color::Yellow,
            Role::Header => Color::Magenta,
        }
    }

    /// Spinner frame for the loading placeholder
    pub fn spinner(tick: usize) -> &'static str {
        const FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
        FRAMES[tick % FRAMES.len()]
    }
}
