use serde::{Deserialize, Serialize};

/// A run of text anchored at its baseline origin `(x, y)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    #[serde(default)]
    pub value: String,
    pub x: i32,
    pub y: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub color: String,
    /// Font size in canvas units. Templates saved without one render at 16.
    #[serde(rename = "fontSize", default = "default_font_size")]
    pub font_size: i32,
}

fn default_font_size() -> i32 {
    16
}

impl TextElement {
    /// The placeholder text inserted by the "+ Text" action
    pub fn placeholder() -> Self {
        Self {
            value: "New Text".to_owned(),
            x: 100,
            y: 100,
            color: "#000000".to_owned(),
            font_size: 18,
        }
    }

    /// Height of the text's bounding box, a fixed factor of the font size
    pub fn box_height(&self) -> f32 {
        self.font_size as f32 * 1.2
    }
}
