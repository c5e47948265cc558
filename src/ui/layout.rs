//! Layout helpers: split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows the slider pane needs: border, label, track, scale, border.
const SLIDER_PANE_HEIGHT: u16 = 5;

/// Primary screen layout: slider pane, change log, and a bottom status bar.
pub struct AppLayout {
    pub slider_area: Rect,
    pub log_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SLIDER_PANE_HEIGHT), // slider pane
                Constraint::Min(3),                     // change log
                Constraint::Length(1),                  // status bar
            ])
            .split(area);

        Self {
            slider_area: chunks[0],
            log_area: chunks[1],
            status_area: chunks[2],
        }
    }
}
