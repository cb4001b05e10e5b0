use egui::{Pos2, Rect, pos2, vec2};

use crate::element::Element;
use crate::template::Template;

/// Text-measurement capability of the rendering surface.
///
/// The document model never measures text itself; whoever calls into
/// hit-testing injects this. Any `Fn(&str, f32) -> f32` works, so the app
/// passes a closure over egui's font layout and tests pass a stub.
pub trait FontMetrics {
    /// Rendered pixel width of `text` at `font_size` in the active font
    fn text_width(&self, text: &str, font_size: f32) -> f32;
}

impl<F> FontMetrics for F
where
    F: Fn(&str, f32) -> f32,
{
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        self(text, font_size)
    }
}

/// Bounding box of an element in canvas coordinates.
///
/// This is the hit region and also the selection outline, so the two can
/// never disagree. A rectangle's box is its own extent. A text run's box
/// hangs from the baseline: `font_size * 1.2` tall, shifted 4 units down.
pub fn element_bounds(element: &Element, metrics: &impl FontMetrics) -> Rect {
    match element {
        Element::Rectangle(r) => Rect::from_min_size(
            pos2(r.x as f32, r.y as f32),
            vec2(r.width as f32, r.height as f32),
        ),
        Element::Text(t) => {
            let width = metrics.text_width(&t.value, t.font_size as f32);
            let height = t.box_height();
            Rect::from_min_size(
                pos2(t.x as f32, t.y as f32 - height + 4.0),
                vec2(width, height),
            )
        }
    }
}

/// Find the topmost element containing `point`.
///
/// Scans from the last element (topmost in paint order) to the first, so
/// overlapping elements resolve to the highest index. Bounds are inclusive
/// on all four edges; an element with negative extent has an empty region.
pub fn hit_test(template: &Template, point: Pos2, metrics: &impl FontMetrics) -> Option<usize> {
    for (index, element) in template.elements.iter().enumerate().rev() {
        let bounds = element_bounds(element, metrics);
        if point.x >= bounds.min.x
            && point.x <= bounds.max.x
            && point.y >= bounds.min.y
            && point.y <= bounds.max.y
        {
            return Some(index);
        }
    }
    None
}
