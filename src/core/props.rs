//! Slider configuration and its boundary validation.

use std::collections::BTreeMap;

use super::error::SliderError;
use super::numeric::{clamp, decimal_scale, round_to_increment};
use super::value::Bounds;

/// Attribute names that belong on the input-like part of the root element.
/// Anything else in [`SliderProps::attrs`] is passed straight through.
pub const HTML_INPUT_ATTRS: &[&str] = &[
    "selected",
    "defaultValue",
    "defaultChecked",
    "accept",
    "autoCapitalize",
    "autoComplete",
    "autoCorrect",
    "autoFocus",
    "checked",
    "disabled",
    "form",
    "id",
    "lang",
    "list",
    "max",
    "maxLength",
    "min",
    "minLength",
    "multiple",
    "name",
    "pattern",
    "placeholder",
    "readOnly",
    "required",
    "step",
    "title",
    "type",
    "value",
];

/// Most decimal places a rendered percentage may keep.
pub const MAX_PRECISION: u32 = 15;

/// Everything a slider is configured with.  Immutable for the duration of a
/// render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderProps {
    pub min: f64,
    pub max: f64,
    /// Increment values snap to; `0` disables snapping.
    pub step: f64,
    /// Start value of the primary (upper) handle.
    pub start: Option<f64>,
    /// Start value of the second (lower) handle; `Some` makes a range slider.
    pub double_start: Option<f64>,
    /// Mirror the track so `min` sits on the right.
    pub reversed: bool,
    /// Show raw drag positions instead of snapped ones while dragging.
    pub smooth: bool,
    pub disabled: bool,
    /// Drop label padding.  Applied automatically when there is no label.
    pub fitted: bool,
    /// Decimal places kept in rendered percentages.
    pub precision: u32,
    /// Emit a change on every drag move, not only on release.
    pub notify_on_move: bool,
    pub label: Option<String>,
    /// Root element tag.
    pub element: String,
    pub class_name: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub tab_index: Option<i32>,
    /// Unrecognised attributes, forwarded to the root element.
    pub attrs: BTreeMap<String, String>,
}

impl Default for SliderProps {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 20.0,
            step: 1.0,
            start: Some(1.0),
            double_start: None,
            reversed: false,
            smooth: false,
            disabled: false,
            fitted: false,
            precision: 1,
            notify_on_move: true,
            label: None,
            element: "div".into(),
            class_name: None,
            id: None,
            name: None,
            tab_index: None,
            attrs: BTreeMap::new(),
        }
    }
}

impl SliderProps {
    /// Handle positions before any interaction.
    pub fn initial_bounds(&self) -> Bounds {
        Bounds::new(self.double_start, self.start)
    }

    /// Snap a value to the step grid and keep it inside `[min, max]`.
    ///
    /// A snap that lands past `max` falls back one step so the result stays on
    /// the grid whenever the grid has a point in range.
    pub fn snap(&self, value: f64) -> Result<f64, SliderError> {
        let mut snapped = round_to_increment(value, self.min, self.step)?;
        if self.step > 0.0 && snapped > self.max {
            snapped = round_to_increment(snapped - self.step, self.min, self.step)?;
        }
        Ok(clamp(snapped, self.min, self.max))
    }

    /// Reject configurations the widget cannot render faithfully.
    pub fn validate(&self) -> Result<(), SliderError> {
        let (min, max) = (self.min, self.max);
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(SliderError::InvalidRange { min, max });
        }

        if !self.step.is_finite() || self.step < 0.0 {
            return Err(SliderError::InvalidIncrement {
                increment: self.step,
                max_digits: super::numeric::MAX_DECIMAL_DIGITS,
            });
        }
        if self.step > 0.0 {
            decimal_scale(self.step)?;
        }

        if self.precision > MAX_PRECISION {
            return Err(SliderError::InvalidPrecision {
                precision: self.precision,
                max: MAX_PRECISION,
            });
        }

        for (field, value) in [("start", self.start), ("double_start", self.double_start)] {
            if let Some(value) = value {
                if !(min..=max).contains(&value) {
                    return Err(SliderError::OutOfRange {
                        field,
                        value,
                        min,
                        max,
                    });
                }
            }
        }

        if let (Some(lower), Some(upper)) = (self.double_start, self.start) {
            if lower > upper {
                return Err(SliderError::InvertedBounds { lower, upper });
            }
        }

        Ok(())
    }
}

/// Split pass-through attributes into `(input_attrs, rest)`.
pub fn partition_html_props(
    attrs: &BTreeMap<String, String>,
) -> (Vec<(String, String)>, Vec<(String, String)>) {
    attrs
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .partition(|(k, _)| HTML_INPUT_ATTRS.contains(&k.as_str()))
}
