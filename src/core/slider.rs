//! The slider model: props + value ownership + drag state machine.
//!
//! All mutation goes through `drag_*` and `step_handle`, called from the
//! single-threaded input handler.  Each returns the change notification (if
//! any) for the caller to dispatch.

use super::drag::{apply_crossing, Change, ChangeCause, ChangeKind, DragSession, DragState, StepDirection};
use super::error::SliderError;
use super::numeric::{clamp, percent_to_value, pixel_to_percent};
use super::props::SliderProps;
use super::value::{Bounds, HandleId, SliderValue, ValueSource};

#[derive(Debug, Clone)]
pub struct Slider {
    props: SliderProps,
    source: ValueSource,
    drag: DragState,
}

impl Slider {
    /// An uncontrolled slider that starts at the props' start values.
    pub fn new(props: SliderProps) -> Result<Self, SliderError> {
        props.validate()?;
        let source = ValueSource::Uncontrolled(props.initial_bounds());
        Ok(Self {
            props,
            source,
            drag: DragState::Idle,
        })
    }

    /// A slider whose committed value is owned by the caller.
    pub fn controlled(props: SliderProps, value: SliderValue) -> Result<Self, SliderError> {
        props.validate()?;
        Ok(Self {
            props,
            source: ValueSource::Controlled(value),
            drag: DragState::Idle,
        })
    }

    pub fn props(&self) -> &SliderProps {
        &self.props
    }

    pub fn source(&self) -> &ValueSource {
        &self.source
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging(_))
    }

    /// Handle being edited by the active drag, if any.
    pub fn active_handle(&self) -> Option<HandleId> {
        match &self.drag {
            DragState::Dragging(session) => Some(session.editing()),
            DragState::Idle => None,
        }
    }

    pub fn toggle_reversed(&mut self) {
        self.props.reversed = !self.props.reversed;
    }

    pub fn toggle_smooth(&mut self) {
        self.props.smooth = !self.props.smooth;
    }

    /// Replace the committed value (the parent writing back a controlled
    /// value, or an imperative reset of an uncontrolled one).
    pub fn set_value(&mut self, value: SliderValue) {
        self.source = match self.source {
            ValueSource::Controlled(_) => ValueSource::Controlled(value),
            ValueSource::Uncontrolled(_) => {
                ValueSource::Uncontrolled(self.props.initial_bounds().reshape(value))
            }
        };
    }

    /// Committed bounds, clamped into `[min, max]` with `lower <= upper`.
    fn committed(&self) -> Bounds {
        let bounds = self.source.committed(self.props.initial_bounds());
        let (min, max) = (self.props.min, self.props.max);
        let lower = bounds.lower.map(|v| clamp(v, min, max));
        let upper = bounds.upper.map(|v| clamp(v, min, max));
        match (lower, upper) {
            (Some(l), Some(u)) if l > u => Bounds::new(Some(u), Some(l)),
            _ => Bounds::new(lower, upper),
        }
    }

    /// Snapped bounds for this render pass: the drag's working copy while
    /// dragging, the committed value otherwise.
    pub fn resolve(&self) -> Bounds {
        match &self.drag {
            DragState::Dragging(session) => session.rounded,
            DragState::Idle => self.committed(),
        }
    }

    /// Bounds used for positioning: raw drag values in smooth mode.
    pub fn display_bounds(&self) -> Bounds {
        match &self.drag {
            DragState::Dragging(session) if self.props.smooth => session.raw,
            _ => self.resolve(),
        }
    }

    /// Grab `handle`.  Returns `false` when the slider is disabled or the
    /// handle is not rendered.
    pub fn drag_start(&mut self, handle: HandleId) -> bool {
        let original = self.committed();
        if self.props.disabled || !original.has(handle) {
            return false;
        }
        tracing::debug!(?handle, ?original, "slider drag start");
        self.drag = DragState::Dragging(DragSession::new(handle, original));
        true
    }

    /// Move the grabbed handle to track offset `px` within a track of
    /// `width`.  `width` is `None` until the track has been laid out.
    pub fn drag_move(&mut self, px: f64, width: Option<f64>) -> Result<Option<Change>, SliderError> {
        let DragState::Dragging(session) = &mut self.drag else {
            return Ok(None);
        };

        let pct = pixel_to_percent(px, width, self.props.reversed)?;
        let raw = percent_to_value(pct, self.props.min, self.props.max);
        let rounded = self.props.snap(raw)?;

        session.raw = apply_crossing(session.handle, raw, session.original);
        session.rounded = apply_crossing(session.handle, rounded, session.original);

        if !self.props.notify_on_move {
            return Ok(None);
        }
        Ok(session.rounded.to_value().map(|value| Change {
            kind: ChangeKind::Move,
            cause: ChangeCause::Pointer {
                handle: session.handle,
                px,
            },
            value,
        }))
    }

    /// Release the grabbed handle at `px`, commit, and end the session.
    ///
    /// Errors also end the session so a failed release cannot leave the
    /// slider stuck in the dragging state.
    pub fn drag_stop(&mut self, px: f64, width: Option<f64>) -> Result<Option<Change>, SliderError> {
        if !self.is_dragging() {
            return Ok(None);
        }
        if let Err(err) = self.drag_move(px, width) {
            self.drag = DragState::Idle;
            return Err(err);
        }
        let DragState::Dragging(session) = std::mem::take(&mut self.drag) else {
            return Ok(None);
        };

        let committed = session.rounded;
        if let ValueSource::Uncontrolled(bounds) = &mut self.source {
            *bounds = committed;
        }
        tracing::debug!(handle = ?session.handle, ?committed, "slider drag stop");

        Ok(committed.to_value().map(|value| Change {
            kind: ChangeKind::Commit,
            cause: ChangeCause::Pointer {
                handle: session.handle,
                px,
            },
            value,
        }))
    }

    /// Drop an in-flight drag without notifying anyone.
    pub fn cancel_drag(&mut self) {
        if let DragState::Dragging(session) = std::mem::take(&mut self.drag) {
            tracing::debug!(handle = ?session.handle, "slider drag cancelled");
        }
    }

    /// Move `handle` one increment (1% of the range when snapping is off).
    /// The handle stops at the opposite handle rather than crossing it.
    pub fn step_handle(
        &mut self,
        handle: HandleId,
        direction: StepDirection,
    ) -> Result<Option<Change>, SliderError> {
        if self.props.disabled || self.is_dragging() {
            return Ok(None);
        }
        let mut bounds = self.committed();
        let Some(current) = bounds.get(handle) else {
            return Ok(None);
        };

        let increment = if self.props.step > 0.0 {
            self.props.step
        } else {
            (self.props.max - self.props.min) / 100.0
        };
        let target = match direction {
            StepDirection::Decrease => current - increment,
            StepDirection::Increase => current + increment,
        };
        let mut next = self.props.snap(target)?;
        match handle {
            HandleId::Lower => {
                if let Some(upper) = bounds.upper {
                    next = next.min(upper);
                }
            }
            HandleId::Upper => {
                if let Some(lower) = bounds.lower {
                    next = next.max(lower);
                }
            }
        }
        if next == current {
            return Ok(None);
        }

        bounds.set(handle, next);
        if let ValueSource::Uncontrolled(own) = &mut self.source {
            *own = bounds;
        }
        Ok(bounds.to_value().map(|value| Change {
            kind: ChangeKind::Commit,
            cause: ChangeCause::Key { handle, direction },
            value,
        }))
    }
}
