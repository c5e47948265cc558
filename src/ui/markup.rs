//! HTML markup for a slider: root element with state classes, the inner
//! track / fill / thumb elements with inline percentage positions, and the
//! associated label.

use std::fmt::Write as _;

use crate::core::numeric::format_percent;
use crate::core::props::partition_html_props;
use crate::core::slider::Slider;
use crate::core::value::HandleId;

use super::geometry::TrackGeometry;

/// Thumb width; thumbs are centred on their percentage by half of this.
pub const HANDLE_SIZE: &str = "1em";

// ───────────────────────────────────────── element tree ──────

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// A minimal element tree, enough to describe and serialise the slider.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    /// Attributes in output order.
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing an earlier value under the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let (name, value) = (name.into(), value.into());
        match self.attrs.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        for (name, value) in self.attrs.iter().filter(|(name, _)| is_valid_attr_name(name)) {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        out.push('>');
        for node in &self.children {
            match node {
                Node::Element(el) => el.write_html(out),
                Node::Text(text) => out.push_str(&escape(text)),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// Whether `name` can be written as an attribute name without breaking the
/// surrounding tag.
pub fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|c| {
            !c.is_whitespace() && !c.is_control() && !matches!(c, '"' | '\'' | '>' | '<' | '/' | '=')
        })
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

// ───────────────────────────────────────── slider markup ─────

/// Root class list: `ui [disabled] [fitted] slider [className]`.
pub fn root_classes(slider: &Slider) -> String {
    let props = slider.props();
    let mut classes = vec!["ui"];
    if props.disabled {
        classes.push("disabled");
    }
    // No label means no label padding.
    if props.fitted || props.label.is_none() {
        classes.push("fitted");
    }
    classes.push("slider");
    if let Some(extra) = props.class_name.as_deref() {
        classes.push(extra);
    }
    classes.join(" ")
}

fn thumb(handle: HandleId, pct: f64) -> Element {
    Element::new("div")
        .attr("class", format!("{} thumb", handle.class_name()))
        .attr(
            "style",
            format!(
                "left: calc({} - calc({HANDLE_SIZE} / 2))",
                format_percent(pct)
            ),
        )
}

/// Build the full element tree for the slider's current state.
pub fn render_markup(slider: &Slider) -> Element {
    let props = slider.props();
    let geom = TrackGeometry::from_slider(slider);
    let (input_attrs, rest) = partition_html_props(&props.attrs);

    let mut root = Element::new(props.element.as_str());
    for (name, value) in rest {
        root.set_attr(name, value);
    }
    root.set_attr("class", root_classes(slider));
    if let Some(id) = &props.id {
        root.set_attr("id", id.as_str());
    }
    if let Some(name) = &props.name {
        root.set_attr("name", name.as_str());
    }
    if let Some(tab_index) = props.tab_index {
        root.set_attr("tabindex", tab_index.to_string());
    }
    for (name, value) in input_attrs {
        root.set_attr(name, value);
    }

    let mut inner = Element::new("div")
        .attr("class", "inner")
        .child(Element::new("div").attr("class", "track"))
        .child(
            Element::new("div").attr("class", "track-fill").attr(
                "style",
                format!(
                    "left: {}; right: {}",
                    format_percent(geom.fill_left),
                    format_percent(geom.fill_right)
                ),
            ),
        );
    for handle in [HandleId::Lower, HandleId::Upper] {
        if let Some(pct) = geom.handle(handle) {
            inner = inner.child(thumb(handle, pct));
        }
    }

    // The label is always emitted, even empty; the stylesheet relies on it.
    let mut label = Element::new("label");
    if let Some(id) = &props.id {
        label.set_attr("for", id.as_str());
    }
    if let Some(text) = &props.label {
        label = label.text(text.as_str());
    }

    root.child(inner).child(label)
}
