use serde::{Deserialize, Serialize};

/// An axis-aligned filled box with its top-left corner at `(x, y)`
///
/// Width and height are not clamped; a negative extent yields an empty
/// paint and hit region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectangleElement {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub color: String,
}

impl RectangleElement {
    /// The default box inserted by the "+ Rectangle" action
    pub fn placeholder() -> Self {
        Self {
            x: 80,
            y: 80,
            width: 120,
            height: 60,
            color: "#cccccc".to_owned(),
        }
    }
}
