//! Terminal event abstraction.
//!
//! Wraps crossterm events into a simpler enum and runs a background task that
//! forwards them over a channel so the main loop stays non-blocking.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind, MouseEvent};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// The terminal was resized; the next draw re-measures the track.
    Resize,
    /// The terminal lost focus; any drag in progress is abandoned.
    FocusLost,
    Tick,
}

impl AppEvent {
    /// Map a raw crossterm event, dropping the ones the playground ignores
    /// (key releases, focus gained, paste).
    fn from_crossterm(ev: CtEvent) -> Option<Self> {
        match ev {
            CtEvent::Key(k) if k.kind != KeyEventKind::Release => Some(AppEvent::Key(k)),
            CtEvent::Mouse(m) => Some(AppEvent::Mouse(m)),
            CtEvent::Resize(..) => Some(AppEvent::Resize),
            CtEvent::FocusLost => Some(AppEvent::FocusLost),
            _ => None,
        }
    }
}

/// Spawns a background task that polls the terminal for events and sends them
/// through the returned channel.  A `Tick` is sent whenever nothing happened
/// within `tick_rate`.
pub fn spawn_event_reader(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            let next = if event::poll(tick_rate).unwrap_or(false) {
                match event::read() {
                    Ok(ev) => AppEvent::from_crossterm(ev),
                    Err(err) => {
                        tracing::warn!("terminal read failed: {err}");
                        None
                    }
                }
            } else {
                Some(AppEvent::Tick)
            };

            if let Some(app_event) = next {
                if tx.send(app_event).is_err() {
                    break; // receiver dropped
                }
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn resize_and_focus_loss_are_forwarded() {
        assert!(matches!(
            AppEvent::from_crossterm(CtEvent::Resize(80, 24)),
            Some(AppEvent::Resize)
        ));
        assert!(matches!(
            AppEvent::from_crossterm(CtEvent::FocusLost),
            Some(AppEvent::FocusLost)
        ));
        assert!(AppEvent::from_crossterm(CtEvent::FocusGained).is_none());
    }

    #[test]
    fn key_releases_are_dropped() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(AppEvent::from_crossterm(CtEvent::Key(release)).is_none());
        let press = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(matches!(
            AppEvent::from_crossterm(CtEvent::Key(press)),
            Some(AppEvent::Key(_))
        ));
    }
}
