use serde::{Deserialize, Serialize};

mod rect;
mod text;

pub use rect::RectangleElement;
pub use text::TextElement;

/// The kinds of drawable element a template can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Text,
    Rectangle,
}

impl ElementKind {
    /// Name used in the element list and as the JSON `type` tag
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Rectangle => "rectangle",
        }
    }
}

/// One drawable unit of a template
///
/// Serializes with a `type` tag of `"text"` or `"rectangle"`, matching the
/// template JSON file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Text(TextElement),
    Rectangle(RectangleElement),
}

impl Element {
    /// Create a default-initialized element of the given kind, as produced
    /// by the "+ Text" / "+ Rectangle" toolbar actions
    pub fn new(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Text => Element::Text(TextElement::placeholder()),
            ElementKind::Rectangle => Element::Rectangle(RectangleElement::placeholder()),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Text(_) => ElementKind::Text,
            Element::Rectangle(_) => ElementKind::Rectangle,
        }
    }

    /// The element's anchor point: top-left corner for rectangles, the text
    /// baseline origin for text
    pub fn position(&self) -> (i32, i32) {
        match self {
            Element::Text(t) => (t.x, t.y),
            Element::Rectangle(r) => (r.x, r.y),
        }
    }

    /// Move the anchor point. Used by the drag path, which updates the
    /// working copy on every pointer-move frame.
    pub fn set_position(&mut self, x: i32, y: i32) {
        match self {
            Element::Text(t) => {
                t.x = x;
                t.y = y;
            }
            Element::Rectangle(r) => {
                r.x = x;
                r.y = y;
            }
        }
    }

    pub fn color(&self) -> &str {
        match self {
            Element::Text(t) => &t.color,
            Element::Rectangle(r) => &r.color,
        }
    }

    /// Merge a patch into this element. Only the fields that exist on the
    /// variant are applied; the rest are ignored, so a text element can
    /// never pick up a `width` and a rectangle can never pick up a `value`.
    pub fn apply(&mut self, patch: &ElementPatch) {
        match self {
            Element::Text(t) => {
                if let Some(x) = patch.x {
                    t.x = x;
                }
                if let Some(y) = patch.y {
                    t.y = y;
                }
                if let Some(color) = &patch.color {
                    t.color = color.clone();
                }
                if let Some(value) = &patch.value {
                    t.value = value.clone();
                }
                if let Some(font_size) = patch.font_size {
                    t.font_size = font_size;
                }
            }
            Element::Rectangle(r) => {
                if let Some(x) = patch.x {
                    r.x = x;
                }
                if let Some(y) = patch.y {
                    r.y = y;
                }
                if let Some(width) = patch.width {
                    r.width = width;
                }
                if let Some(height) = patch.height {
                    r.height = height;
                }
                if let Some(color) = &patch.color {
                    r.color = color.clone();
                }
            }
        }
    }
}

/// A partial update for a single element. `None` fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct ElementPatch {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub color: Option<String>,
    pub value: Option<String>,
    pub font_size: Option<i32>,
}
