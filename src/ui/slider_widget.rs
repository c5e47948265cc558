//! Custom Ratatui widget that draws a [`Slider`] as a track with a fill
//! segment and one or two handle glyphs.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, StatefulWidget, Widget},
};

use crate::core::slider::Slider;
use crate::core::value::HandleId;

use super::geometry::TrackGeometry;
use super::theme::Theme;

const TRACK_GLYPH: &str = "─";
const FILL_GLYPH: &str = "━";
const HANDLE_GLYPH: &str = "●";

// ───────────────────────────────────────── state ─────────────

/// Layout measured during the last render.  Until the first render the
/// track has no width and pointer input cannot be mapped.
#[derive(Debug, Default, Clone)]
pub struct SliderWidgetState {
    /// Row and columns occupied by the track.
    pub track: Option<Rect>,
    /// Whole area the widget was drawn in (hit testing).
    pub area: Option<Rect>,
}

impl SliderWidgetState {
    /// Track width in cells, measured from the first to the last cell.
    pub fn measured_width(&self) -> Option<f64> {
        self.track
            .filter(|t| t.width > 1)
            .map(|t| f64::from(t.width - 1))
    }

    /// Track-relative offset of a mouse column (may be negative).
    pub fn pointer_offset(&self, column: u16) -> f64 {
        match self.track {
            Some(track) => f64::from(column) - f64::from(track.x),
            None => 0.0,
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.is_some_and(|a| {
            column >= a.x && column < a.x + a.width && row >= a.y && row < a.y + a.height
        })
    }

    /// Column a percentage lands on.
    pub fn column_for(&self, pct: f64) -> Option<u16> {
        let track = self.track?;
        let span = f64::from(track.width.saturating_sub(1));
        Some(track.x + (pct.clamp(0.0, 100.0) / 100.0 * span).round() as u16)
    }

    /// Handle closest to `column`.  When both sit on the same cell, a click
    /// to the right picks the upper handle and a click to the left the lower.
    pub fn nearest_handle(&self, geom: &TrackGeometry, column: u16) -> Option<HandleId> {
        let distance = |handle: HandleId| {
            geom.handle(handle)
                .and_then(|pct| self.column_for(pct))
                .map(|col| (col, (i32::from(col) - i32::from(column)).abs()))
        };
        match (distance(HandleId::Lower), distance(HandleId::Upper)) {
            (Some((col, dl)), Some((_, du))) => Some(if dl < du {
                HandleId::Lower
            } else if du < dl {
                HandleId::Upper
            } else if column < col {
                HandleId::Lower
            } else {
                HandleId::Upper
            }),
            (Some(_), None) => Some(HandleId::Lower),
            (None, Some(_)) => Some(HandleId::Upper),
            (None, None) => None,
        }
    }
}

// ───────────────────────────────────────── widget ────────────

/// The slider widget itself, created fresh each frame.
pub struct SliderWidget<'a> {
    slider: &'a Slider,
    block: Option<Block<'a>>,
    /// Handle that keyboard input targets, drawn highlighted.
    focused: Option<HandleId>,
}

impl<'a> SliderWidget<'a> {
    pub fn new(slider: &'a Slider) -> Self {
        Self {
            slider,
            block: None,
            focused: None,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn focused(mut self, handle: Option<HandleId>) -> Self {
        self.focused = handle;
        self
    }
}

impl<'a> StatefulWidget for SliderWidget<'a> {
    type State = SliderWidgetState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        } else {
            area
        };
        state.area = Some(inner);

        // label row, track row, scale row; one column of margin each side
        // so a handle at 0% / 100% is not clipped.
        if inner.height < 3 || inner.width < 4 {
            state.track = None;
            return;
        }
        let props = self.slider.props();
        let track = Rect::new(inner.x + 1, inner.y + 1, inner.width - 2, 1);
        state.track = Some(track);

        // ── label + current value ──
        let value_text = self
            .slider
            .resolve()
            .to_value()
            .map(|v| v.to_string())
            .unwrap_or_default();
        let label = props.label.clone().unwrap_or_default();
        buf.set_line(
            inner.x,
            inner.y,
            &Line::from(vec![
                Span::styled(label, Theme::label_style()),
                Span::raw("  "),
                Span::styled(value_text, Theme::value_style()),
            ]),
            inner.width,
        );

        // ── track + fill ──
        let geom = TrackGeometry::from_slider(self.slider);
        let fill_start = state.column_for(geom.fill_left).unwrap_or(track.x);
        let fill_end = state
            .column_for(100.0 - geom.fill_right)
            .unwrap_or(track.x + track.width - 1);
        for x in track.x..track.x + track.width {
            let (glyph, style) = if x >= fill_start && x <= fill_end {
                (FILL_GLYPH, Theme::fill_style(props.disabled))
            } else {
                (TRACK_GLYPH, Theme::track_style())
            };
            buf.set_string(x, track.y, glyph, style);
        }

        // ── handles ──
        let dragging = self.slider.active_handle();
        for handle in [HandleId::Lower, HandleId::Upper] {
            let Some(col) = geom.handle(handle).and_then(|pct| state.column_for(pct)) else {
                continue;
            };
            let highlighted = dragging.or(self.focused) == Some(handle);
            buf.set_string(
                col,
                track.y,
                HANDLE_GLYPH,
                Theme::handle_style(highlighted, props.disabled),
            );
        }

        // ── min / max scale ──
        let (left, right) = if props.reversed {
            (props.max, props.min)
        } else {
            (props.min, props.max)
        };
        let right_text = right.to_string();
        let scale_y = track.y + 1;
        buf.set_string(inner.x, scale_y, left.to_string(), Theme::scale_style());
        let right_x = (inner.x + inner.width).saturating_sub(right_text.len() as u16);
        buf.set_string(right_x, scale_y, right_text, Theme::scale_style());
    }
}
