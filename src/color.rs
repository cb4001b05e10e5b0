//! Hex color strings are the document's color representation; egui wants
//! `Color32`. Conversions live here so the renderer and the inspector agree
//! on fallbacks.

use egui::Color32;

/// Fill used when a rectangle carries no usable color
pub const RECTANGLE_FALLBACK: Color32 = Color32::from_rgb(0xcc, 0xcc, 0xcc);
/// Fill used when a text element carries no usable color
pub const TEXT_FALLBACK: Color32 = Color32::BLACK;

/// Parse a `#rgb`/`#rrggbb`/`#rrggbbaa` string. Invalid input yields `None`
/// so callers can fall back per element kind instead of erroring.
pub fn parse_hex(color: &str) -> Option<Color32> {
    Color32::from_hex(color).ok()
}

/// Format a color the way the document stores it: lowercase `#rrggbb`.
/// Alpha is dropped; template colors are opaque.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_template_colors() {
        assert_eq!(parse_hex("#0A66C2"), Some(Color32::from_rgb(0x0a, 0x66, 0xc2)));
        assert_eq!(parse_hex("#fff"), Some(Color32::WHITE));
        assert_eq!(parse_hex(""), None);
        assert_eq!(parse_hex("blue"), None);
    }

    #[test]
    fn formats_round_trip() {
        let color = Color32::from_rgb(0xe6, 0x7e, 0x22);
        assert_eq!(parse_hex(&to_hex(color)), Some(color));
        assert_eq!(to_hex(color), "#e67e22");
    }
}
