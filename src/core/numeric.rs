//! Pixel ↔ percent ↔ value conversions and increment snapping.
//!
//! Everything here is a pure function over `f64`.  Percentages are on a
//! 0–100 scale; "reversed" means the percentage is mirrored (`100 - pct`).

use super::error::SliderError;

/// How many decimal digits [`decimal_scale`] may try before giving up.
pub const MAX_DECIMAL_DIGITS: u32 = 10;

/// Bound `x` to `[lo, hi]`.
pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

/// Convert a pointer offset inside the track into a percentage.
///
/// `container_width` is the measured track width; `None` means the widget has
/// not been laid out yet, which is a usage error.  The result keeps one
/// decimal place.
pub fn pixel_to_percent(
    px: f64,
    container_width: Option<f64>,
    reversed: bool,
) -> Result<f64, SliderError> {
    let width = match container_width {
        Some(w) if w.is_finite() && w > 0.0 => w,
        _ => return Err(SliderError::NotMounted),
    };
    let px = if px.is_nan() { 0.0 } else { clamp(px, 0.0, width) };
    let pct = (1000.0 * px / width).round() / 10.0;

    Ok(if reversed { 100.0 - pct } else { pct })
}

/// Linear interpolation from a percentage into `[min, max]`.
pub fn percent_to_value(pct: f64, min: f64, max: f64) -> f64 {
    min + (max - min) * pct / 100.0
}

/// Inverse of [`percent_to_value`].  The value is clamped into range first;
/// a degenerate range maps everything to 0.
pub fn value_to_percent(value: f64, min: f64, max: f64, reversed: bool) -> f64 {
    let span = max - min;
    if span == 0.0 || !span.is_finite() {
        return 0.0;
    }
    let pct = 100.0 * (clamp(value, min, max) - min) / span;
    if reversed {
        100.0 - pct
    } else {
        pct
    }
}

/// Smallest power of ten that turns `x` into an integer, trying at most
/// [`MAX_DECIMAL_DIGITS`] digits.
///
/// Values such as `1.0 / 3.0` never become integral and are rejected.
pub fn decimal_scale(x: f64) -> Result<f64, SliderError> {
    let invalid = || SliderError::InvalidIncrement {
        increment: x,
        max_digits: MAX_DECIMAL_DIGITS,
    };
    if !x.is_finite() {
        return Err(invalid());
    }

    for digits in 0..=MAX_DECIMAL_DIGITS {
        let factor = 10f64.powi(digits as i32);
        let scaled = x * factor;
        let tolerance = 8.0 * f64::EPSILON * scaled.abs().max(1.0);
        if (scaled - scaled.round()).abs() <= tolerance {
            return Ok(factor);
        }
    }
    Err(invalid())
}

/// `a mod b` computed on integers: both operands are scaled by
/// [`decimal_scale`]`(b)` so that `b` is exact before the remainder is taken.
///
/// The result is always in `[0, |b|)`.
pub fn safe_modulo(a: f64, b: f64) -> Result<f64, SliderError> {
    if b == 0.0 {
        return Err(SliderError::InvalidIncrement {
            increment: b,
            max_digits: MAX_DECIMAL_DIGITS,
        });
    }
    let factor = decimal_scale(b)?;
    let divisor = (b.abs() * factor).round();
    Ok((a * factor).rem_euclid(divisor) / factor)
}

/// Snap `value` to the nearest `min + k * increment` (ties go up).
///
/// An increment of zero disables snapping.  The snapped value is cleaned to
/// the decimal precision of `increment` and `min` so that e.g. a step of
/// `0.1` yields `0.3` rather than `0.30000000000000004`.
pub fn round_to_increment(value: f64, min: f64, increment: f64) -> Result<f64, SliderError> {
    if increment == 0.0 {
        return Ok(value);
    }
    let increment = increment.abs();
    let offset = value - min;
    let rem = safe_modulo(offset, increment)?;

    let mut snapped = offset - rem;
    if rem * 2.0 >= increment {
        snapped += increment;
    }

    let step_scale = decimal_scale(increment)?;
    Ok(match decimal_scale(min) {
        Ok(min_scale) => {
            let scale = step_scale.max(min_scale);
            ((min + snapped) * scale).round() / scale
        }
        Err(_) => min + snapped,
    })
}

/// Round to a fixed number of decimal places.
pub fn precision_round(x: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (x * factor).round() / factor
}

/// Render a percentage as a CSS length, e.g. `70%`.
pub fn format_percent(pct: f64) -> String {
    format!("{pct}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn clamp_bounds_both_sides() {
        assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(13.0, 0.0, 10.0), 10.0);
        assert_eq!(clamp(4.5, 0.0, 10.0), 4.5);
    }

    #[test]
    fn pixel_offsets_outside_the_track_are_clamped() {
        assert_eq!(pixel_to_percent(-50.0, Some(200.0), false).unwrap(), 0.0);
        assert_eq!(pixel_to_percent(250.0, Some(200.0), false).unwrap(), 100.0);
        assert_eq!(pixel_to_percent(-50.0, Some(200.0), true).unwrap(), 100.0);
    }

    #[test]
    fn pixel_percent_keeps_one_decimal() {
        assert_eq!(pixel_to_percent(1.0, Some(3.0), false).unwrap(), 33.3);
        assert_eq!(pixel_to_percent(73.0, Some(100.0), false).unwrap(), 73.0);
    }

    #[test]
    fn unmounted_track_is_an_error() {
        assert_eq!(pixel_to_percent(10.0, None, false), Err(SliderError::NotMounted));
        assert_eq!(pixel_to_percent(10.0, Some(0.0), false), Err(SliderError::NotMounted));
    }

    #[test]
    fn value_percent_round_trip() {
        let (min, max) = (-20.0, 35.0);
        let mut v = min;
        while v <= max {
            let back = percent_to_value(value_to_percent(v, min, max, false), min, max);
            assert!((back - v).abs() < 1e-9, "{v} came back as {back}");
            v += 0.7;
        }
    }

    #[test]
    fn value_percent_reversed_and_degenerate() {
        assert!(close(value_to_percent(3.0, 0.0, 10.0, true), 70.0));
        assert_eq!(value_to_percent(50.0, 0.0, 10.0, false), 100.0);
        assert_eq!(value_to_percent(5.0, 5.0, 5.0, false), 0.0);
    }

    #[test]
    fn decimal_scale_finds_the_smallest_power() {
        assert_eq!(decimal_scale(5.0).unwrap(), 1.0);
        assert_eq!(decimal_scale(0.1).unwrap(), 10.0);
        assert_eq!(decimal_scale(0.07).unwrap(), 100.0);
        assert_eq!(decimal_scale(2.125).unwrap(), 1000.0);
    }

    #[test]
    fn repeating_decimal_increment_is_rejected() {
        assert!(matches!(
            decimal_scale(1.0 / 3.0),
            Err(SliderError::InvalidIncrement { .. })
        ));
        assert!(safe_modulo(1.0, 1.0 / 3.0).is_err());
        assert!(safe_modulo(1.0, 0.0).is_err());
    }

    #[test]
    fn safe_modulo_avoids_binary_fraction_noise() {
        // Plain `%` gives 0.09999999999999995 here.
        assert!(close(safe_modulo(0.5, 0.2).unwrap(), 0.1));
        assert!(close(safe_modulo(0.3, 0.1).unwrap(), 0.0));
        assert!(close(safe_modulo(-1.0, 3.0).unwrap(), 2.0));
    }

    #[test]
    fn rounding_snaps_to_the_grid() {
        assert_eq!(round_to_increment(7.3, 0.0, 1.0).unwrap(), 7.0);
        assert_eq!(round_to_increment(7.5, 0.0, 1.0).unwrap(), 8.0);
        assert_eq!(round_to_increment(0.29, 0.0, 0.1).unwrap(), 0.3);
        assert_eq!(round_to_increment(4.2, 0.5, 1.0).unwrap(), 4.5);
        assert_eq!(round_to_increment(-4.1, -5.0, 2.0).unwrap(), -5.0);
    }

    #[test]
    fn zero_increment_disables_snapping() {
        assert_eq!(round_to_increment(7.37, 0.0, 0.0).unwrap(), 7.37);
    }

    #[test]
    fn rounding_is_idempotent() {
        for &(step, min) in &[(1.0, 0.0), (0.1, 0.0), (0.25, -1.0), (3.0, 2.0), (0.05, 0.3)] {
            let mut v = min;
            while v < min + 20.0 {
                let once = round_to_increment(v, min, step).unwrap();
                let twice = round_to_increment(once, min, step).unwrap();
                assert_eq!(once, twice, "step {step} min {min} value {v}");
                v += 0.137;
            }
        }
    }

    #[test]
    fn precision_and_formatting() {
        assert_eq!(precision_round(33.3333, 1), 33.3);
        assert_eq!(format_percent(70.0), "70%");
        assert_eq!(format_percent(12.5), "12.5%");
    }
}
