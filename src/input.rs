use egui::{Pos2, Rect};

/// One frame's worth of primary-pointer state, read out of egui in a single
/// pass so the canvas logic never touches the input lock mid-update.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerFrame {
    /// Latest pointer position in screen coordinates, if known
    pub position: Option<Pos2>,
    /// Primary button went down this frame
    pub pressed: bool,
    /// Primary button is currently held
    pub down: bool,
    /// Primary button was released this frame
    pub released: bool,
}

impl PointerFrame {
    pub fn from_context(ctx: &egui::Context) -> Self {
        ctx.input(|i| Self {
            position: i.pointer.latest_pos(),
            pressed: i.pointer.primary_pressed(),
            down: i.pointer.primary_down(),
            released: i.pointer.primary_released(),
        })
    }

    /// Pointer position translated into `canvas`-local coordinates, or
    /// `None` when the pointer is unknown or outside the canvas
    pub fn position_in(&self, canvas: Rect) -> Option<Pos2> {
        let pos = self.position?;
        if canvas.contains(pos) {
            Some((pos - canvas.min).to_pos2())
        } else {
            None
        }
    }
}
