use egui::{Align2, Key, KeyboardShortcut, Modifiers};

use crate::editor::Editor;
use crate::file_handler::FileHandler;
use crate::panels;
use crate::presets::Preset;
use crate::renderer::Renderer;
use crate::template::Template;

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(
    Modifiers {
        alt: false,
        ctrl: false,
        shift: true,
        mac_cmd: false,
        command: true,
    },
    Key::Z,
);
const REDO_SHORTCUT_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

/// The whole editor application: one document session plus the UI shell
/// around it.
pub struct TemplateApp {
    editor: Editor,
    renderer: Renderer,
    file_handler: FileHandler,
    active_preset: Preset,
    // Blocking notification for a failed import; the document is untouched
    import_error: Option<String>,
    show_export_stub: bool,
}

impl Default for TemplateApp {
    fn default() -> Self {
        let preset = Preset::Hiring;
        Self {
            editor: Editor::new(preset.template()),
            renderer: Renderer::new(),
            file_handler: FileHandler::new(),
            active_preset: preset,
            import_error: None,
            show_export_stub: false,
        }
    }
}

impl TemplateApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn active_preset(&self) -> Preset {
        self.active_preset
    }

    /// Replace the document with a built-in preset and restart its history
    pub fn switch_preset(&mut self, preset: Preset) {
        self.active_preset = preset;
        self.editor.load(preset.template());
    }

    /// Parse external JSON and load it, or surface a blocking notification
    /// leaving the current document untouched
    pub fn import_template(&mut self, source: &str, contents: &str) {
        match Template::from_json(contents) {
            Ok(template) => {
                log::info!("Loaded template from {}", source);
                self.editor.load(template);
            }
            Err(err) => {
                log::warn!("Import failed for {}: {}", source, err);
                self.import_error = Some(err.to_string());
            }
        }
    }

    pub fn open_export_stub(&mut self) {
        self.show_export_stub = true;
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Let focused widgets (e.g. the inspector text field) keep their
        // own editing keys
        if ctx.wants_keyboard_input() {
            return;
        }

        if ctx.input_mut(|i| i.consume_shortcut(&REDO_SHORTCUT) || i.consume_shortcut(&REDO_SHORTCUT_ALT)) {
            self.editor.redo();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&UNDO_SHORTCUT)) {
            self.editor.undo();
        }
        if ctx.input(|i| i.key_pressed(Key::Delete) || i.key_pressed(Key::Backspace)) {
            self.editor.delete_selected();
        }
    }

    fn show_modals(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.import_error.clone() {
            egui::Window::new("Import failed")
                .collapsible(false)
                .resizable(false)
                .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(message);
                    if ui.button("OK").clicked() {
                        self.import_error = None;
                    }
                });
        }

        if self.show_export_stub {
            egui::Window::new("Export to MP4")
                .collapsible(false)
                .resizable(false)
                .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(
                        "Export to MP4 queued! (Dummy) — a real pipeline would \
                         render frames and encode a video here.",
                    );
                    if ui.button("OK").clicked() {
                        self.show_export_stub = false;
                    }
                });
        }
    }
}

impl eframe::App for TemplateApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        panels::toolbar_panel(self, ctx);
        panels::inspector_panel(self, ctx);
        panels::canvas_panel(self, ctx);

        self.show_modals(ctx);

        if self.file_handler.check_for_dropped_files(ctx) {
            if let Some((name, contents)) = self.file_handler.take_dropped_json() {
                self.import_template(&name, &contents);
            }
        }
        self.file_handler.preview_files_being_dropped(ctx);
    }
}
