use eframe::egui;

use crate::template::Template;
use crate::util::time;

/// Tracks files dropped onto the window and turns `.json` drops into
/// template import attempts. Explicit load/save dialogs live here too on
/// native builds.
pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self {
            dropped_files: Vec::new(),
        }
    }

    /// Pick up any newly dropped files from the UI context.
    /// Returns true if new files arrived this frame.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        let mut new_dropped_files = false;

        ctx.input(|i| {
            if !i.raw.dropped_files.is_empty() {
                self.dropped_files = i.raw.dropped_files.clone();
                new_dropped_files = true;
            }
        });

        new_dropped_files
    }

    /// Take the contents of the first dropped JSON file, if any, clearing
    /// the queue. Non-JSON drops are logged and skipped.
    pub fn take_dropped_json(&mut self) -> Option<(String, String)> {
        let files = std::mem::take(&mut self.dropped_files);
        for file in &files {
            let file_name = if let Some(path) = &file.path {
                path.display().to_string()
            } else if !file.name.is_empty() {
                file.name.clone()
            } else {
                "unknown".to_owned()
            };

            if !Self::is_json_file(file) {
                log::warn!("Dropped file is not a JSON template: {}", file_name);
                continue;
            }

            if let Some(contents) = Self::read_file(file, &file_name) {
                return Some((file_name, contents));
            }
        }
        None
    }

    /// Check if a file looks like JSON based on MIME type or extension
    fn is_json_file(file: &egui::DroppedFile) -> bool {
        if !file.mime.is_empty() {
            file.mime == "application/json" || file.mime.ends_with("+json")
        } else if let Some(path) = &file.path {
            path.extension()
                .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("json"))
                .unwrap_or(false)
        } else {
            file.name.to_lowercase().ends_with(".json")
        }
    }

    fn read_file(file: &egui::DroppedFile, file_name: &str) -> Option<String> {
        if let Some(bytes) = &file.bytes {
            log::info!("Reading dropped template from memory: {} ({} bytes)", file_name, bytes.len());
            match std::str::from_utf8(bytes) {
                Ok(text) => Some(text.to_owned()),
                Err(err) => {
                    log::error!("Dropped file is not UTF-8: {}: {}", file_name, err);
                    None
                }
            }
        } else if let Some(path) = &file.path {
            // For native platforms, we can load the file from the path
            #[cfg(not(target_arch = "wasm32"))]
            {
                log::info!("Reading dropped template from path: {}", path.display());
                match std::fs::read_to_string(path) {
                    Ok(text) => Some(text),
                    Err(err) => {
                        log::error!("Failed to read dropped file: {}: {}", path.display(), err);
                        None
                    }
                }
            }

            // For WASM, we can't read from the filesystem
            #[cfg(target_arch = "wasm32")]
            {
                log::warn!("File path access not supported on WASM: {}", file_name);
                None
            }
        } else {
            log::warn!("Dropped file has no accessible data: {}", file_name);
            None
        }
    }

    /// Preview files being dragged over the application
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, Id, LayerId, Order};

        if !ctx.input(|i| i.raw.hovered_files.is_empty()) {
            let text = ctx.input(|i| {
                let mut text = "Drop to load template:\n".to_owned();
                for file in &i.raw.hovered_files {
                    if let Some(path) = &file.path {
                        text += &format!("\n{}", path.display());
                    } else {
                        text += "\n(Path not available)";
                    }
                }
                text
            });

            let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));

            let screen_rect = ctx.screen_rect();
            painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
            painter.text(
                screen_rect.center(),
                Align2::CENTER_CENTER,
                text,
                egui::TextStyle::Heading.resolve(&ctx.style()),
                Color32::WHITE,
            );
        }
    }
}

impl Default for FileHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// File name offered for an export: `template_<id>.json`, or a timestamped
/// name when the template has no id
pub fn export_file_name(template: &Template) -> String {
    if template.template_id.is_empty() {
        format!("template_{}.json", time::timestamp_millis())
    } else {
        format!("template_{}.json", template.template_id)
    }
}

/// Open a native file picker and read the chosen JSON file.
/// Returns `(file name, contents)` like the dropped-file path does.
#[cfg(not(target_arch = "wasm32"))]
pub fn pick_template_file() -> Option<(String, String)> {
    let path = rfd::FileDialog::new()
        .add_filter("JSON template", &["json"])
        .pick_file()?;
    let name = path.display().to_string();
    match std::fs::read_to_string(&path) {
        Ok(contents) => Some((name, contents)),
        Err(err) => {
            log::error!("Failed to read template file: {}: {}", name, err);
            None
        }
    }
}

/// Open a native save dialog pre-filled with the export name and write the
/// template as pretty JSON. Returns the path written to.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_template_file(template: &Template) -> Option<String> {
    let path = rfd::FileDialog::new()
        .add_filter("JSON template", &["json"])
        .set_file_name(export_file_name(template))
        .save_file()?;
    let name = path.display().to_string();

    let json = match template.to_json_pretty() {
        Ok(json) => json,
        Err(err) => {
            log::error!("Failed to serialize template: {}", err);
            return None;
        }
    };

    match std::fs::write(&path, json) {
        Ok(()) => {
            log::info!("Saved template to {}", name);
            Some(name)
        }
        Err(err) => {
            log::error!("Failed to write template file: {}: {}", name, err);
            None
        }
    }
}
