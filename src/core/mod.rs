//! Core slider logic – numeric conversions, props, and the drag state machine.
//!
//! Nothing in this module depends on any TUI or rendering crate.

pub mod drag;
pub mod error;
pub mod numeric;
pub mod props;
pub mod slider;
pub mod value;
