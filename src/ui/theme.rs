//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme: change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── slider ─────────────────────────────────────────────────
    pub fn track_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn fill_style(disabled: bool) -> Style {
        if disabled {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::Cyan)
        }
    }

    pub fn handle_style(highlighted: bool, disabled: bool) -> Style {
        match (disabled, highlighted) {
            (true, _) => Style::default().fg(Color::Gray),
            (false, true) => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            (false, false) => Style::default().fg(Color::White),
        }
    }

    pub fn label_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn value_style() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn scale_style() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    // ── change log ─────────────────────────────────────────────
    pub fn move_event_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn commit_event_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    pub fn error_style() -> Style {
        Style::default().bg(Color::Red).fg(Color::White)
    }
}
