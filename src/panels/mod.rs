mod canvas;
mod inspector;
mod toolbar;

pub use canvas::canvas_panel;
pub use inspector::inspector_panel;
pub use toolbar::toolbar_panel;
