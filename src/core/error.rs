//! Error type shared by the numeric, props and drag modules.

use thiserror::Error;

/// Everything the slider core can reject.
///
/// Runtime inputs (pointer offsets, controlled values) are clamped and never
/// produce an error; only usage and configuration mistakes end up here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    /// A pointer offset was converted before the track had a measured width.
    #[error("slider track has no measured width; it must be rendered before it can take pointer input")]
    NotMounted,

    /// The increment cannot be scaled to an exact integer within the digit budget.
    #[error("increment {increment} cannot be represented with at most {max_digits} decimal digits")]
    InvalidIncrement { increment: f64, max_digits: u32 },

    #[error("invalid range: min {min} must be finite and strictly below max {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("precision {precision} exceeds the {max} decimal places an f64 can hold")]
    InvalidPrecision { precision: u32, max: u32 },

    #[error("lower start {lower} exceeds upper start {upper}")]
    InvertedBounds { lower: f64, upper: f64 },
}
