use crate::app::TemplateApp;
use crate::element::ElementKind;
use crate::presets::Preset;

#[cfg(not(target_arch = "wasm32"))]
use crate::file_handler;

/// Top toolbar: template switcher, file actions, element insertion and
/// undo/redo.
pub fn toolbar_panel(app: &mut TemplateApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            ui.heading("Template Editor");
            ui.separator();

            let mut preset = app.active_preset();
            egui::ComboBox::from_id_salt("template_switcher")
                .selected_text(preset.label())
                .show_ui(ui, |ui| {
                    for candidate in Preset::ALL {
                        ui.selectable_value(&mut preset, candidate, candidate.label());
                    }
                });
            if preset != app.active_preset() {
                app.switch_preset(preset);
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                if ui.button("Load JSON").clicked() {
                    if let Some((name, contents)) = file_handler::pick_template_file() {
                        app.import_template(&name, &contents);
                    }
                }
                if ui.button("Save JSON").clicked() {
                    file_handler::save_template_file(app.editor().current());
                }
            }

            if ui.button("Export to MP4 (dummy)").clicked() {
                app.open_export_stub();
            }

            ui.separator();

            if ui.button("+ Text").clicked() {
                app.editor_mut().add_element(ElementKind::Text);
            }
            if ui.button("+ Rectangle").clicked() {
                app.editor_mut().add_element(ElementKind::Rectangle);
            }

            ui.separator();

            let can_undo = app.editor().can_undo();
            let can_redo = app.editor().can_redo();
            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                app.editor_mut().undo();
            }
            if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                app.editor_mut().redo();
            }
        });
    });
}
