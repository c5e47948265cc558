//! UI / rendering layer: the terminal widget and the HTML markup.
//!
//! Both renderers take the *core* slider state and draw it from the same
//! [`geometry::TrackGeometry`].

pub mod geometry;
pub mod layout;
pub mod markup;
pub mod slider_widget;
pub mod theme;
