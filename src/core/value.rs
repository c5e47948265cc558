//! Handle identity, the working lower/upper copy, and the controlled vs.
//! uncontrolled ownership of the committed value.

use std::fmt;

/// Which draggable handle a drag session or key press targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleId {
    Lower,
    Upper,
}

impl HandleId {
    pub fn other(self) -> Self {
        match self {
            HandleId::Lower => HandleId::Upper,
            HandleId::Upper => HandleId::Lower,
        }
    }

    /// Class name carried by the rendered thumb element.
    pub fn class_name(self) -> &'static str {
        match self {
            HandleId::Lower => "lowerBound",
            HandleId::Upper => "upperBound",
        }
    }
}

/// Working copy of the handle positions.
///
/// A handle only exists when its value is `Some`; a single-value slider has
/// just the upper (primary) handle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl Bounds {
    pub fn new(lower: Option<f64>, upper: Option<f64>) -> Self {
        Self { lower, upper }
    }

    pub fn get(&self, handle: HandleId) -> Option<f64> {
        match handle {
            HandleId::Lower => self.lower,
            HandleId::Upper => self.upper,
        }
    }

    pub fn set(&mut self, handle: HandleId, value: f64) {
        match handle {
            HandleId::Lower => self.lower = Some(value),
            HandleId::Upper => self.upper = Some(value),
        }
    }

    pub fn has(&self, handle: HandleId) -> bool {
        self.get(handle).is_some()
    }

    /// Put a reported value back onto handles shaped like `self`.  A single
    /// value lands on whichever handle exists, the upper one by default.
    pub fn reshape(&self, value: SliderValue) -> Bounds {
        match value {
            SliderValue::Single(v) if self.lower.is_some() && self.upper.is_none() => {
                Bounds::new(Some(v), None)
            }
            other => Bounds::from(other),
        }
    }

    /// Value reported to the change listener, or `None` if no handle exists.
    pub fn to_value(&self) -> Option<SliderValue> {
        match (self.lower, self.upper) {
            (Some(lower), Some(upper)) => Some(SliderValue::Range([lower, upper])),
            (Some(v), None) | (None, Some(v)) => Some(SliderValue::Single(v)),
            (None, None) => None,
        }
    }
}

/// A committed value as seen by the outside world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderValue {
    Single(f64),
    /// `[lower, upper]`
    Range([f64; 2]),
}

impl From<SliderValue> for Bounds {
    fn from(value: SliderValue) -> Self {
        match value {
            SliderValue::Single(v) => Bounds::new(None, Some(v)),
            SliderValue::Range([lower, upper]) => Bounds::new(Some(lower), Some(upper)),
        }
    }
}

impl fmt::Display for SliderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliderValue::Single(v) => write!(f, "{v}"),
            SliderValue::Range([lower, upper]) => write!(f, "[{lower}, {upper}]"),
        }
    }
}

/// Who owns the committed value.
///
/// `Controlled` sliders render whatever the parent last handed them and only
/// report changes; `Uncontrolled` sliders keep their own bounds and update
/// them on commit.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueSource {
    Controlled(SliderValue),
    Uncontrolled(Bounds),
}

impl ValueSource {
    /// Committed bounds; `shape` says which handles a single value maps to.
    pub fn committed(&self, shape: Bounds) -> Bounds {
        match self {
            ValueSource::Controlled(value) => shape.reshape(*value),
            ValueSource::Uncontrolled(bounds) => *bounds,
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, ValueSource::Controlled(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_report_single_or_range() {
        assert_eq!(
            Bounds::new(None, Some(4.0)).to_value(),
            Some(SliderValue::Single(4.0))
        );
        assert_eq!(
            Bounds::new(Some(2.0), Some(8.0)).to_value(),
            Some(SliderValue::Range([2.0, 8.0]))
        );
        assert_eq!(Bounds::default().to_value(), None);
    }

    #[test]
    fn controlled_value_resolves_to_bounds() {
        let source = ValueSource::Controlled(SliderValue::Range([1.0, 3.0]));
        assert!(source.is_controlled());
        assert_eq!(
            source.committed(Bounds::default()),
            Bounds::new(Some(1.0), Some(3.0))
        );

        let lower_only = Bounds::new(Some(0.0), None);
        assert_eq!(
            ValueSource::Controlled(SliderValue::Single(2.0)).committed(lower_only),
            lower_only.reshape(SliderValue::Single(2.0))
        );
        assert_eq!(lower_only.reshape(SliderValue::Single(2.0)).lower, Some(2.0));
        assert!(!lower_only.has(HandleId::Upper));
    }

    #[test]
    fn values_display_like_the_change_payload() {
        assert_eq!(SliderValue::Single(7.0).to_string(), "7");
        assert_eq!(SliderValue::Range([8.0, 9.0]).to_string(), "[8, 9]");
    }
}
