//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use std::collections::VecDeque;

use crate::config::AppConfig;
use crate::core::drag::{Change, ChangeCause, ChangeKind};
use crate::core::slider::Slider;
use crate::core::value::{HandleId, SliderValue};
use crate::ui::slider_widget::SliderWidgetState;

/// One line in the change-log pane.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub kind: ChangeKind,
    pub text: String,
}

/// Top-level application state.
pub struct AppState {
    pub slider: Slider,
    /// Track geometry measured by the last render.
    pub widget_state: SliderWidgetState,
    /// Handle targeted by keyboard stepping.
    pub focused: HandleId,
    /// In controlled mode, the value owned by the "parent" (this app).  Every
    /// change notification is written back into the slider from here.
    pub parent_value: Option<SliderValue>,
    /// Most recent change notifications, newest last.
    pub log: VecDeque<LogEntry>,
    pub config: AppConfig,
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(slider: Slider, config: AppConfig) -> Self {
        let committed = slider.resolve();
        let focused = if committed.has(HandleId::Upper) {
            HandleId::Upper
        } else {
            HandleId::Lower
        };
        let parent_value = if slider.source().is_controlled() {
            committed.to_value()
        } else {
            None
        };

        Self {
            slider,
            widget_state: SliderWidgetState::default(),
            focused,
            parent_value,
            log: VecDeque::new(),
            config,
            should_quit: false,
            status_message: None,
        }
    }

    /// The change listener: log the notification and, when controlled,
    /// write the value back as the parent would.
    pub fn on_change(&mut self, change: Change) {
        let source = match change.cause {
            ChangeCause::Pointer { handle, px } => format!("{handle:?} @ {px:.0}"),
            ChangeCause::Key { handle, direction } => format!("{handle:?} {direction:?}"),
        };
        let verb = match change.kind {
            ChangeKind::Move => "move",
            ChangeKind::Commit => "change",
        };
        self.log.push_back(LogEntry {
            kind: change.kind,
            text: format!("{verb:<6} {:<14} ({source})", change.value.to_string()),
        });
        while self.log.len() > self.config.log_capacity {
            self.log.pop_front();
        }

        if self.parent_value.is_some() {
            self.parent_value = Some(change.value);
            self.slider.set_value(change.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::drag::StepDirection;
    use crate::core::props::SliderProps;

    fn change(kind: ChangeKind, value: SliderValue) -> Change {
        Change {
            kind,
            cause: ChangeCause::Key {
                handle: HandleId::Upper,
                direction: StepDirection::Increase,
            },
            value,
        }
    }

    #[test]
    fn log_is_bounded_by_capacity() {
        let slider = Slider::new(SliderProps::default()).unwrap();
        let config = AppConfig {
            log_capacity: 5,
            ..AppConfig::default()
        };
        let mut state = AppState::new(slider, config);

        for i in 0..8 {
            state.on_change(change(ChangeKind::Move, SliderValue::Single(f64::from(i))));
        }
        assert_eq!(state.log.len(), 5);
        assert!(state.log.front().unwrap().text.contains('3'));
    }

    #[test]
    fn controlled_changes_are_written_back() {
        let slider = Slider::controlled(SliderProps::default(), SliderValue::Single(4.0)).unwrap();
        let mut state = AppState::new(slider, AppConfig::default());
        assert_eq!(state.parent_value, Some(SliderValue::Single(4.0)));

        state.on_change(change(ChangeKind::Commit, SliderValue::Single(6.0)));
        assert_eq!(state.parent_value, Some(SliderValue::Single(6.0)));
        assert_eq!(state.slider.resolve().upper, Some(6.0));
    }

    #[test]
    fn lower_only_slider_focuses_the_lower_handle() {
        let slider = Slider::new(SliderProps {
            start: None,
            double_start: Some(2.0),
            ..SliderProps::default()
        })
        .unwrap();
        assert_eq!(AppState::new(slider, AppConfig::default()).focused, HandleId::Lower);
    }
}
