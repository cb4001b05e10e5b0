//! The built-in templates offered by the template switcher.

use crate::element::{Element, RectangleElement, TextElement};
use crate::template::Template;

/// Built-in starting points for a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Hiring,
    Announcement,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Hiring, Preset::Announcement];

    /// Label shown in the template switcher
    pub fn label(&self) -> &'static str {
        match self {
            Preset::Hiring => "Template 001 — Hiring",
            Preset::Announcement => "Template 002 — Announcement",
        }
    }

    /// Build a fresh copy of the preset's template
    pub fn template(&self) -> Template {
        match self {
            Preset::Hiring => hiring(),
            Preset::Announcement => announcement(),
        }
    }
}

fn hiring() -> Template {
    Template {
        template_id: "001".to_owned(),
        category: "Hiring".to_owned(),
        elements: vec![
            Element::Text(TextElement {
                value: "We are Hiring!".to_owned(),
                x: 50,
                y: 60,
                color: "#0A66C2".to_owned(),
                font_size: 28,
            }),
            Element::Text(TextElement {
                value: "Join our team at Pulzr.ai".to_owned(),
                x: 50,
                y: 100,
                color: "#333333".to_owned(),
                font_size: 18,
            }),
            Element::Rectangle(RectangleElement {
                x: 40,
                y: 40,
                width: 360,
                height: 100,
                color: "#E5E5E5".to_owned(),
            }),
        ],
    }
}

fn announcement() -> Template {
    Template {
        template_id: "002".to_owned(),
        category: "Announcement".to_owned(),
        elements: vec![
            Element::Rectangle(RectangleElement {
                x: 20,
                y: 20,
                width: 460,
                height: 180,
                color: "#FFF6E5".to_owned(),
            }),
            Element::Text(TextElement {
                value: "Product Launch".to_owned(),
                x: 40,
                y: 80,
                color: "#E67E22".to_owned(),
                font_size: 30,
            }),
            Element::Text(TextElement {
                value: "Version 2.0 rolling out this week!".to_owned(),
                x: 40,
                y: 130,
                color: "#2C3E50".to_owned(),
                font_size: 18,
            }),
        ],
    }
}
