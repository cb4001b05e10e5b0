use egui::color_picker::{Alpha, color_edit_button_srgba};
use egui::{Color32, DragValue};

use crate::app::TemplateApp;
use crate::color;
use crate::element::{Element, ElementPatch};

/// Right-hand panel: the element list and the property inspector for the
/// selected element. Every discrete change here commits its own undo step.
pub fn inspector_panel(app: &mut TemplateApp, ctx: &egui::Context) {
    egui::SidePanel::right("inspector")
        .resizable(false)
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.heading("Elements");

            element_list(app, ui);
            ui.separator();

            match app.editor().selected_index() {
                Some(index) => inspector_form(app, ui, index),
                None => {
                    ui.label("Select an element to edit its properties.");
                }
            }
        });
}

fn element_list(app: &mut TemplateApp, ui: &mut egui::Ui) {
    let selected = app.editor().selected_index();
    let kinds: Vec<&'static str> = app
        .editor()
        .current()
        .elements
        .iter()
        .map(|element| element.kind().name())
        .collect();

    for (index, kind) in kinds.into_iter().enumerate() {
        let label = format!("#{} — {}", index + 1, kind);
        if ui.selectable_label(selected == Some(index), label).clicked() {
            app.editor_mut().select(index);
        }
    }
}

fn inspector_form(app: &mut TemplateApp, ui: &mut egui::Ui, index: usize) {
    let Some(element) = app.editor().current().elements.get(index).cloned() else {
        return;
    };

    ui.label(egui::RichText::new("Inspector").strong());

    let (x, y) = element.position();
    let mut x = x;
    let mut y = y;
    ui.horizontal(|ui| {
        ui.label("X");
        if ui.add(DragValue::new(&mut x)).changed() {
            app.editor_mut().update_selected(&ElementPatch {
                x: Some(x),
                ..Default::default()
            });
        }
        ui.label("Y");
        if ui.add(DragValue::new(&mut y)).changed() {
            app.editor_mut().update_selected(&ElementPatch {
                y: Some(y),
                ..Default::default()
            });
        }
    });

    match element {
        Element::Rectangle(r) => {
            let mut width = r.width;
            let mut height = r.height;
            ui.horizontal(|ui| {
                ui.label("Width");
                if ui.add(DragValue::new(&mut width)).changed() {
                    app.editor_mut().update_selected(&ElementPatch {
                        width: Some(width),
                        ..Default::default()
                    });
                }
                ui.label("Height");
                if ui.add(DragValue::new(&mut height)).changed() {
                    app.editor_mut().update_selected(&ElementPatch {
                        height: Some(height),
                        ..Default::default()
                    });
                }
            });

            color_row(app, ui, "Fill Color", &r.color, color::RECTANGLE_FALLBACK);
        }
        Element::Text(t) => {
            let mut value = t.value.clone();
            ui.horizontal(|ui| {
                ui.label("Text");
                if ui.text_edit_singleline(&mut value).changed() {
                    app.editor_mut().update_selected(&ElementPatch {
                        value: Some(value.clone()),
                        ..Default::default()
                    });
                }
            });

            let mut font_size = t.font_size;
            ui.horizontal(|ui| {
                ui.label("Font Size");
                if ui.add(DragValue::new(&mut font_size)).changed() {
                    app.editor_mut().update_selected(&ElementPatch {
                        font_size: Some(font_size),
                        ..Default::default()
                    });
                }
            });

            color_row(app, ui, "Color", &t.color, color::TEXT_FALLBACK);
        }
    }

    ui.separator();
    if ui.button("Delete Element").clicked() {
        app.editor_mut().delete_selected();
    }
}

fn color_row(app: &mut TemplateApp, ui: &mut egui::Ui, label: &str, current: &str, fallback: Color32) {
    let mut picked = color::parse_hex(current).unwrap_or(fallback);
    ui.horizontal(|ui| {
        ui.label(label);
        if color_edit_button_srgba(ui, &mut picked, Alpha::Opaque).changed() {
            app.editor_mut().update_selected(&ElementPatch {
                color: Some(color::to_hex(picked)),
                ..Default::default()
            });
        }
    });
}
