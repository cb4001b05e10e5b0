use egui::{Align2, Color32, FontId, Painter, Rect, Shape, Stroke, vec2};

use crate::color;
use crate::element::Element;
use crate::geometry::{FontMetrics, element_bounds};
use crate::template::Template;

/// The canvas is fixed at 640x360 logical units.
pub const CANVAS_WIDTH: f32 = 640.0;
pub const CANVAS_HEIGHT: f32 = 360.0;

const SELECTION_DASH: f32 = 6.0;
const SELECTION_GAP: f32 = 4.0;

/// Draws a template onto a painter.
///
/// Stateless: the same template, selection and metrics always produce the
/// same paint calls, so it is safe to run on every frame.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Clear the canvas to white, paint the elements in array order (last
    /// on top), then outline the selected element's hit region.
    pub fn render(
        &self,
        painter: &Painter,
        canvas: Rect,
        template: &Template,
        selected: Option<usize>,
        metrics: &impl FontMetrics,
    ) {
        painter.rect_filled(canvas, 0.0, Color32::WHITE);

        for element in &template.elements {
            self.paint_element(painter, canvas, element);
        }

        if let Some(element) = selected.and_then(|index| template.elements.get(index)) {
            let bounds = element_bounds(element, metrics).translate(canvas.min.to_vec2());
            self.paint_selection_outline(painter, bounds);
        }
    }

    fn paint_element(&self, painter: &Painter, canvas: Rect, element: &Element) {
        let origin = canvas.min;
        match element {
            Element::Rectangle(r) => {
                let fill = color::parse_hex(&r.color).unwrap_or(color::RECTANGLE_FALLBACK);
                // from_two_pos normalizes a negative extent the way the
                // original canvas surface painted one
                let rect = Rect::from_two_pos(
                    origin + vec2(r.x as f32, r.y as f32),
                    origin + vec2((r.x + r.width) as f32, (r.y + r.height) as f32),
                );
                painter.rect_filled(rect, 0.0, fill);
            }
            Element::Text(t) => {
                let fill = color::parse_hex(&t.color).unwrap_or(color::TEXT_FALLBACK);
                painter.text(
                    origin + vec2(t.x as f32, t.y as f32),
                    Align2::LEFT_BOTTOM,
                    &t.value,
                    FontId::proportional(t.font_size as f32),
                    fill,
                );
            }
        }
    }

    /// Dashed black outline matching the element's hit-test region
    fn paint_selection_outline(&self, painter: &Painter, bounds: Rect) {
        let stroke = Stroke::new(1.0, Color32::BLACK);
        let corners = [
            bounds.left_top(),
            bounds.right_top(),
            bounds.right_bottom(),
            bounds.left_bottom(),
            bounds.left_top(),
        ];
        for edge in corners.windows(2) {
            painter.extend(Shape::dashed_line(edge, stroke, SELECTION_DASH, SELECTION_GAP));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::Preset;
    use egui::pos2;

    // Fonts only exist inside a frame, so painting runs under Context::run
    fn paint_template(template: &Template, selected: Option<usize>) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(CANVAS_WIDTH, CANVAS_HEIGHT));
            let painter = Painter::new(ctx.clone(), egui::LayerId::background(), rect);
            let metrics = |text: &str, size: f32| text.chars().count() as f32 * size * 0.5;

            Renderer::new().render(&painter, rect, template, selected, &metrics);
        });
    }

    #[test]
    fn render_is_safe_without_selection() {
        paint_template(&Preset::Hiring.template(), None);
    }

    #[test]
    fn render_outlines_each_selectable_element() {
        let template = Preset::Announcement.template();
        for index in 0..template.elements.len() {
            paint_template(&template, Some(index));
        }
    }

    #[test]
    fn render_tolerates_stale_selection_index() {
        paint_template(&Preset::Announcement.template(), Some(99));
    }
}
