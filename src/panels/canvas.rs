use egui::{Color32, FontId, Sense, vec2};

use crate::app::TemplateApp;
use crate::input::PointerFrame;
use crate::renderer::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Central canvas: routes the pointer lifecycle into the editor state
/// machine, then renders the document.
pub fn canvas_panel(app: &mut TemplateApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) =
            ui.allocate_painter(vec2(CANVAS_WIDTH, CANVAS_HEIGHT), Sense::click_and_drag());
        let canvas = response.rect;

        // The document model never measures text itself; hand it the
        // surface's font layout.
        let metrics = |text: &str, font_size: f32| {
            ui.fonts(|fonts| {
                fonts
                    .layout_no_wrap(text.to_owned(), FontId::proportional(font_size), Color32::BLACK)
                    .size()
                    .x
            })
        };

        let frame = PointerFrame::from_context(ctx);
        if frame.pressed {
            if let Some(point) = frame.position_in(canvas) {
                app.editor_mut().pointer_down(point, &metrics);
            }
        } else if frame.down && app.editor().state().is_dragging() {
            match frame.position_in(canvas) {
                Some(point) => app.editor_mut().pointer_move(point),
                // Leaving the canvas mid-drag ends the drag like a release
                None => app.editor_mut().pointer_leave(),
            }
        }
        if frame.released {
            app.editor_mut().pointer_up();
        }

        let selected = app.editor().selected_index();
        app.renderer()
            .render(&painter, canvas, app.editor().current(), selected, &metrics);
    });
}
