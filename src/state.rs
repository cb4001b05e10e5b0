use egui::Vec2;

/// The interaction states of the canvas.
///
/// Transitions are driven by the pointer lifecycle:
///
/// ```text
///              press on element              press on empty canvas
///   Idle ──────────────────────► Dragging ◄────────────────────── Selected
///    ▲                              │ release / leave                 │
///    │ press on empty canvas        ▼                                 │
///    └────────────────────────── Selected ◄───────────────────────────┘
///                                               press on element
/// ```
///
/// Deleting the selected element returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorState {
    /// Nothing selected
    Idle,
    /// An element is selected and shows its outline
    Selected { index: usize },
    /// The selected element follows the pointer. `offset` is the vector
    /// from the element's anchor to the press point, so the element does
    /// not jump to the cursor on the first move.
    Dragging { index: usize, offset: Vec2 },
}

impl EditorState {
    /// Index of the element the state refers to, if any
    pub fn selected_index(&self) -> Option<usize> {
        match self {
            EditorState::Idle => None,
            EditorState::Selected { index } | EditorState::Dragging { index, .. } => Some(*index),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, EditorState::Dragging { .. })
    }
}
