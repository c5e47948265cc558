//! Display percentages for the fill segment and handles.
//!
//! Shared by the HTML markup and the terminal widget so both draw the same
//! thing from one slider state.

use crate::core::numeric::{precision_round, value_to_percent};
use crate::core::slider::Slider;
use crate::core::value::HandleId;

/// Percent positions (0–100, left to right on screen) for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    /// Distance of the fill's left edge from the track's left edge.
    pub fill_left: f64,
    /// Distance of the fill's right edge from the track's right edge.
    pub fill_right: f64,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl TrackGeometry {
    pub fn from_slider(slider: &Slider) -> Self {
        let props = slider.props();
        let bounds = slider.display_bounds();
        let pct = |v: f64| {
            precision_round(
                value_to_percent(v, props.min, props.max, props.reversed),
                props.precision,
            )
        };

        let lower = bounds.lower.map(pct);
        let upper = bounds.upper.map(pct);
        // A missing handle anchors its end of the fill at min / max.
        let lower_edge = lower.unwrap_or_else(|| pct(props.min));
        let upper_edge = upper.unwrap_or_else(|| pct(props.max));

        Self {
            fill_left: lower_edge.min(upper_edge),
            fill_right: precision_round(100.0 - lower_edge.max(upper_edge), props.precision),
            lower,
            upper,
        }
    }

    pub fn handle(&self, handle: HandleId) -> Option<f64> {
        match handle {
            HandleId::Lower => self.lower,
            HandleId::Upper => self.upper,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::props::SliderProps;

    fn slider(props: SliderProps) -> Slider {
        Slider::new(props).unwrap()
    }

    #[test]
    fn single_value_fills_from_min() {
        let geom = TrackGeometry::from_slider(&slider(SliderProps {
            max: 10.0,
            start: Some(3.0),
            ..SliderProps::default()
        }));
        assert_eq!(geom.fill_left, 0.0);
        assert_eq!(geom.fill_right, 70.0);
        assert_eq!(geom.upper, Some(30.0));
        assert_eq!(geom.lower, None);
    }

    #[test]
    fn reversed_fill_starts_at_the_mirrored_value() {
        let geom = TrackGeometry::from_slider(&slider(SliderProps {
            max: 10.0,
            start: Some(3.0),
            reversed: true,
            ..SliderProps::default()
        }));
        assert_eq!(geom.fill_left, 70.0);
        assert_eq!(geom.fill_right, 0.0);
    }

    #[test]
    fn range_fill_spans_both_handles() {
        let geom = TrackGeometry::from_slider(&slider(SliderProps {
            max: 10.0,
            start: Some(8.0),
            double_start: Some(2.0),
            ..SliderProps::default()
        }));
        assert_eq!(geom.fill_left, 20.0);
        assert_eq!(geom.fill_right, 20.0);
        assert_eq!(geom.handle(HandleId::Lower), Some(20.0));
    }

    #[test]
    fn precision_limits_rendered_digits() {
        let geom = TrackGeometry::from_slider(&slider(SliderProps {
            max: 3.0,
            step: 0.0,
            start: Some(1.0),
            ..SliderProps::default()
        }));
        assert_eq!(geom.upper, Some(33.3));
        assert_eq!(geom.fill_right, 66.7);
    }
}
