//! Drag session state and the handle-crossing rule.

use super::value::{Bounds, HandleId, SliderValue};

/// `Idle → Dragging → Idle`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Transient data that only lives between drag start and drag stop.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Handle grabbed at drag start.
    pub handle: HandleId,
    /// Committed bounds captured at drag start.
    pub original: Bounds,
    /// Unsnapped positions, used for display in smooth mode.
    pub raw: Bounds,
    /// Snapped positions, the ones reported to listeners.
    pub rounded: Bounds,
}

impl DragSession {
    pub fn new(handle: HandleId, original: Bounds) -> Self {
        Self {
            handle,
            original,
            raw: original,
            rounded: original,
        }
    }

    /// Handle whose value the session is currently editing.  Differs from
    /// the grabbed handle once the drag has crossed the opposite handle.
    pub fn editing(&self) -> HandleId {
        // Without a crossing the opposite handle keeps its original value.
        let other = self.handle.other();
        if self.rounded.get(other) != self.original.get(other) {
            self.handle.other()
        } else {
            self.handle
        }
    }
}

/// Place `value` for the dragged `handle`, swapping roles when it passes the
/// opposite handle's original position.
///
/// Dragging the lower handle past the original upper value pins the lower
/// bound at that original upper value and hands `value` to the upper bound;
/// the upper handle mirrors this below the original lower value.
pub fn apply_crossing(handle: HandleId, value: f64, original: Bounds) -> Bounds {
    let mut next = original;
    match handle {
        HandleId::Lower => match original.upper {
            Some(upper) if value > upper => {
                next.lower = Some(upper);
                next.upper = Some(value);
            }
            _ => next.lower = Some(value),
        },
        HandleId::Upper => match original.lower {
            Some(lower) if value < lower => {
                next.upper = Some(lower);
                next.lower = Some(value);
            }
            _ => next.upper = Some(value),
        },
    }
    next
}

/// Whether a change is an intermediate drag update or the final value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Move,
    Commit,
}

/// Direction for keyboard stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Decrease,
    Increase,
}

/// Input that caused a change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChangeCause {
    /// Pointer offset (track-relative) for the grabbed handle.
    Pointer { handle: HandleId, px: f64 },
    Key {
        handle: HandleId,
        direction: StepDirection,
    },
}

/// Change notification handed to the owner of the slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Change {
    pub kind: ChangeKind,
    pub cause: ChangeCause,
    pub value: SliderValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(lower: f64, upper: f64) -> Bounds {
        Bounds::new(Some(lower), Some(upper))
    }

    #[test]
    fn lower_handle_inside_range_only_moves_lower() {
        assert_eq!(apply_crossing(HandleId::Lower, 5.0, range(2.0, 8.0)), range(5.0, 8.0));
    }

    #[test]
    fn lower_handle_past_upper_swaps_roles() {
        assert_eq!(apply_crossing(HandleId::Lower, 9.0, range(2.0, 8.0)), range(8.0, 9.0));
    }

    #[test]
    fn upper_handle_past_lower_swaps_roles() {
        assert_eq!(apply_crossing(HandleId::Upper, 1.0, range(2.0, 8.0)), range(1.0, 2.0));
        assert_eq!(apply_crossing(HandleId::Upper, 3.0, range(2.0, 8.0)), range(2.0, 3.0));
    }

    #[test]
    fn touching_the_other_handle_does_not_swap() {
        assert_eq!(apply_crossing(HandleId::Lower, 8.0, range(2.0, 8.0)), range(8.0, 8.0));
    }

    #[test]
    fn single_handle_never_crosses() {
        let single = Bounds::new(None, Some(4.0));
        assert_eq!(
            apply_crossing(HandleId::Upper, 0.0, single),
            Bounds::new(None, Some(0.0))
        );
    }

    #[test]
    fn session_reports_the_handle_being_edited() {
        let mut session = DragSession::new(HandleId::Lower, range(2.0, 8.0));
        assert_eq!(session.editing(), HandleId::Lower);

        session.rounded = apply_crossing(HandleId::Lower, 9.0, session.original);
        assert_eq!(session.editing(), HandleId::Upper);

        session.rounded = apply_crossing(HandleId::Lower, 6.0, session.original);
        assert_eq!(session.editing(), HandleId::Lower);
    }
}
