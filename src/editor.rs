use egui::Pos2;

use crate::element::{ElementKind, ElementPatch};
use crate::geometry::{FontMetrics, hit_test};
use crate::history::SnapshotHistory;
use crate::state::EditorState;
use crate::template::{Template, TemplateError};

/// One editing session: the live document, its snapshot history and the
/// canvas interaction state.
///
/// Every completed user action replaces `current` with a new `Template`
/// value and commits a snapshot. The single exception is the drag path:
/// pointer-move frames mutate `current` in place as a working copy and the
/// snapshot is committed once on release, so the undo log never fills with
/// one entry per pixel.
pub struct Editor {
    current: Template,
    history: SnapshotHistory<Template>,
    state: EditorState,
}

impl Editor {
    pub fn new(template: Template) -> Self {
        let history = SnapshotHistory::new(template.clone());
        Self {
            current: template,
            history,
            state: EditorState::Idle,
        }
    }

    pub fn current(&self) -> &Template {
        &self.current
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected_index()
    }

    pub fn history(&self) -> &SnapshotHistory<Template> {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Replace the document wholesale (file load). Restarts the history at
    /// the new document and drops the selection.
    pub fn load(&mut self, template: Template) {
        self.history.reset(template.clone());
        self.current = template;
        self.state = EditorState::Idle;
    }

    /// Select an element directly, e.g. from the element list. Ignored if
    /// the index is stale.
    pub fn select(&mut self, index: usize) {
        if index < self.current.elements.len() {
            self.state = EditorState::Selected { index };
        } else {
            log::error!(
                "select({index}) ignored: template has {} elements",
                self.current.elements.len()
            );
        }
    }

    /// Pointer pressed at `point` (canvas coordinates). A hit selects the
    /// topmost element under the pointer and starts a drag; a miss clears
    /// the selection.
    pub fn pointer_down(&mut self, point: Pos2, metrics: &impl FontMetrics) {
        match hit_test(&self.current, point, metrics) {
            Some(index) => {
                let (x, y) = self.current.elements[index].position();
                let offset = point - egui::pos2(x as f32, y as f32);
                self.state = EditorState::Dragging { index, offset };
            }
            None => self.state = EditorState::Idle,
        }
    }

    /// Pointer moved to `point`. Only meaningful mid-drag: repositions the
    /// dragged element on the working copy, rounded to whole canvas units.
    /// Does not commit.
    pub fn pointer_move(&mut self, point: Pos2) {
        if let EditorState::Dragging { index, offset } = self.state {
            let x = (point.x - offset.x).round() as i32;
            let y = (point.y - offset.y).round() as i32;
            if let Some(element) = self.current.elements.get_mut(index) {
                element.set_position(x, y);
            }
        }
    }

    /// Pointer released. Ends a drag by committing the dragged position as
    /// one snapshot.
    pub fn pointer_up(&mut self) {
        if let EditorState::Dragging { index, .. } = self.state {
            self.commit();
            self.state = EditorState::Selected { index };
        }
    }

    /// Pointer left the canvas, which ends a drag the same way a release
    /// does.
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    /// Append a default element of `kind`; its index is the previous
    /// element count. One undo step.
    pub fn add_element(&mut self, kind: ElementKind) {
        self.current = self.current.add_element(kind);
        self.commit();
    }

    /// Apply an inspector edit to the selected element. Every discrete
    /// property change is its own undo step. No-op without a selection.
    pub fn update_selected(&mut self, patch: &ElementPatch) {
        let Some(index) = self.state.selected_index() else {
            return;
        };
        match self.current.update_element(index, patch) {
            Ok(next) => {
                self.current = next;
                self.commit();
            }
            Err(err) => self.report_defect("update", err),
        }
    }

    /// Delete the selected element and drop the selection. No-op without a
    /// selection.
    pub fn delete_selected(&mut self) {
        let Some(index) = self.state.selected_index() else {
            return;
        };
        match self.current.remove_element(index) {
            Ok(next) => {
                self.current = next;
                self.state = EditorState::Idle;
                self.commit();
            }
            Err(err) => self.report_defect("delete", err),
        }
    }

    /// Step the document back one committed snapshot. Ignored mid-drag and
    /// at the bottom of the history.
    pub fn undo(&mut self) {
        if self.state.is_dragging() {
            return;
        }
        if let Some(restored) = self.history.undo() {
            self.current = restored;
            self.drop_stale_selection();
        }
    }

    /// Step the document forward one undone snapshot. Ignored mid-drag and
    /// when nothing has been undone.
    pub fn redo(&mut self) {
        if self.state.is_dragging() {
            return;
        }
        if let Some(restored) = self.history.redo() {
            self.current = restored;
            self.drop_stale_selection();
        }
    }

    fn commit(&mut self) {
        self.history.commit(self.current.clone());
    }

    /// The restored document may have fewer elements than the selection
    /// points at; an index that no longer resolves is dropped rather than
    /// silently renamed to a different element.
    fn drop_stale_selection(&mut self) {
        if let Some(index) = self.state.selected_index() {
            if index >= self.current.elements.len() {
                self.state = EditorState::Idle;
            }
        }
    }

    fn report_defect(&self, action: &str, err: TemplateError) {
        debug_assert!(false, "{action} on stale selection: {err}");
        log::error!("{action} on stale selection: {err}");
    }
}
