//! Input handling: maps key/mouse events to slider operations.
//!
//! Every operation that yields a change notification is routed through
//! [`AppState::on_change`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::config::Action;
use crate::core::drag::{Change, StepDirection};
use crate::core::error::SliderError;
use crate::ui::geometry::TrackGeometry;

use super::state::AppState;

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }
    if key.code == KeyCode::Esc {
        if state.slider.is_dragging() {
            state.slider.cancel_drag();
            state.status_message = Some("Drag cancelled".into());
        }
        return;
    }

    let Some(action) = state.config.match_key(key) else {
        return;
    };

    match action {
        Action::Quit => state.should_quit = true,
        Action::Decrease => step(state, StepDirection::Decrease),
        Action::Increase => step(state, StepDirection::Increase),
        Action::SwitchHandle => {
            let other = state.focused.other();
            if state.slider.resolve().has(other) {
                state.focused = other;
            }
        }
        Action::ToggleReversed => {
            state.slider.toggle_reversed();
            state.status_message = Some(format!("Reversed: {}", state.slider.props().reversed));
        }
        Action::ToggleSmooth => {
            state.slider.toggle_smooth();
            state.status_message = Some(format!("Smooth: {}", state.slider.props().smooth));
        }
    }
}

fn step(state: &mut AppState, direction: StepDirection) {
    let result = state.slider.step_handle(state.focused, direction);
    dispatch(state, result);
}

/// Process a mouse event: press starts a drag on the nearest handle, drag
/// moves it, release commits.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let px = state.widget_state.pointer_offset(mouse.column);
    let width = state.widget_state.measured_width();

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if !state.widget_state.contains(mouse.column, mouse.row) {
                return;
            }
            let geom = TrackGeometry::from_slider(&state.slider);
            let Some(handle) = state.widget_state.nearest_handle(&geom, mouse.column) else {
                return;
            };
            if !state.slider.drag_start(handle) {
                return;
            }
            // A press on the track jumps the handle straight to the pointer.
            drag_to(state, px, width);
        }
        MouseEventKind::Drag(MouseButton::Left) => drag_to(state, px, width),
        MouseEventKind::Up(MouseButton::Left) => {
            let result = state.slider.drag_stop(px, width);
            dispatch(state, result);
        }
        _ => {}
    }
}

fn drag_to(state: &mut AppState, px: f64, width: Option<f64>) {
    let result = state.slider.drag_move(px, width);
    // Crossing the other handle hands keyboard focus over with the drag.
    if let Some(handle) = state.slider.active_handle() {
        state.focused = handle;
    }
    dispatch(state, result);
}

fn dispatch(state: &mut AppState, result: Result<Option<Change>, SliderError>) {
    match result {
        Ok(Some(change)) => state.on_change(change),
        Ok(None) => {}
        Err(err) => {
            tracing::warn!("slider input rejected: {err}");
            state.status_message = Some(err.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::drag::ChangeKind;
    use crate::core::props::SliderProps;
    use crate::core::slider::Slider;
    use crate::core::value::{HandleId, SliderValue};
    use ratatui::layout::Rect;

    /// Slider over [0, 10] with a 101-cell track starting at column 1, so a
    /// column maps to `column - 1` percent.
    fn mounted_state(props: SliderProps) -> AppState {
        let slider = Slider::new(SliderProps {
            max: 10.0,
            ..props
        })
        .unwrap();
        let mut state = AppState::new(slider, AppConfig::default());
        state.widget_state.track = Some(Rect::new(1, 1, 101, 1));
        state.widget_state.area = Some(Rect::new(0, 0, 103, 3));
        state
    }

    fn mouse(kind: MouseEventKind, column: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row: 1,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn click_drag_release_commits_once() {
        let mut state = mounted_state(SliderProps {
            start: Some(5.0),
            ..SliderProps::default()
        });

        handle_mouse(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 74));
        handle_mouse(&mut state, mouse(MouseEventKind::Drag(MouseButton::Left), 84));
        handle_mouse(&mut state, mouse(MouseEventKind::Up(MouseButton::Left), 84));

        let kinds: Vec<ChangeKind> = state.log.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![ChangeKind::Move, ChangeKind::Move, ChangeKind::Commit]);
        assert!(state.log[0].text.contains('7'));
        assert_eq!(state.slider.resolve().to_value(), Some(SliderValue::Single(8.0)));
    }

    #[test]
    fn clicks_outside_the_widget_are_ignored() {
        let mut state = mounted_state(SliderProps::default());
        handle_mouse(
            &mut state,
            MouseEvent {
                row: 9,
                ..mouse(MouseEventKind::Down(MouseButton::Left), 50)
            },
        );
        assert!(!state.slider.is_dragging());
        assert!(state.log.is_empty());
    }

    #[test]
    fn crossing_moves_keyboard_focus() {
        let mut state = mounted_state(SliderProps {
            start: Some(8.0),
            double_start: Some(2.0),
            ..SliderProps::default()
        });
        handle_mouse(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 21));
        assert_eq!(state.focused, HandleId::Lower);
        handle_mouse(&mut state, mouse(MouseEventKind::Drag(MouseButton::Left), 91));
        assert_eq!(state.focused, HandleId::Upper);
        handle_mouse(&mut state, mouse(MouseEventKind::Up(MouseButton::Left), 91));

        assert_eq!(
            state.slider.resolve().to_value(),
            Some(SliderValue::Range([8.0, 9.0]))
        );
    }

    #[test]
    fn escape_cancels_without_committing() {
        let mut state = mounted_state(SliderProps {
            start: Some(5.0),
            notify_on_move: false,
            ..SliderProps::default()
        });
        handle_mouse(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 31));
        handle_key(&mut state, press(KeyCode::Esc));
        handle_mouse(&mut state, mouse(MouseEventKind::Up(MouseButton::Left), 31));

        assert!(state.log.is_empty());
        assert_eq!(state.slider.resolve().upper, Some(5.0));
    }

    #[test]
    fn drag_before_first_render_reports_an_error() {
        let mut state = mounted_state(SliderProps::default());
        state.widget_state.track = None;
        state.slider.drag_start(HandleId::Upper);
        handle_mouse(&mut state, mouse(MouseEventKind::Drag(MouseButton::Left), 10));
        assert!(state.status_message.is_some());
    }

    #[test]
    fn keys_step_switch_and_quit() {
        let mut state = mounted_state(SliderProps {
            start: Some(6.0),
            double_start: Some(3.0),
            ..SliderProps::default()
        });
        handle_key(&mut state, press(KeyCode::Right));
        assert_eq!(state.slider.resolve().upper, Some(7.0));

        handle_key(&mut state, press(KeyCode::Tab));
        assert_eq!(state.focused, HandleId::Lower);
        handle_key(&mut state, press(KeyCode::Left));
        assert_eq!(state.slider.resolve().lower, Some(2.0));
        assert_eq!(state.log.len(), 2);

        handle_key(&mut state, press(KeyCode::Char('q')));
        assert!(state.should_quit);
    }
}
