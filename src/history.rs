/// Linear undo/redo log of full document snapshots
///
/// The past stack is never empty; its last entry is always the committed
/// version of the document after the most recent completed mutation.
/// Snapshots are owned deep copies, so later edits to the live document can
/// never corrupt an entry.
#[derive(Debug, Clone)]
pub struct SnapshotHistory<T: Clone> {
    /// Committed snapshots, oldest first. The last entry mirrors the
    /// current document.
    past: Vec<T>,
    /// Undone snapshots available for redo, most recently undone last
    future: Vec<T>,
}

impl<T: Clone> SnapshotHistory<T> {
    /// Start a history whose only entry is the initial document
    pub fn new(initial: T) -> Self {
        Self {
            past: vec![initial],
            future: Vec::new(),
        }
    }

    /// Append a snapshot of a completed mutation and discard any redo
    /// entries. Called once per committed user action, never per
    /// intermediate drag frame.
    pub fn commit(&mut self, snapshot: T) {
        self.past.push(snapshot);
        self.future.clear();
    }

    /// Step back one snapshot, returning a copy of the document to restore.
    /// No-op at the bottom of the history.
    pub fn undo(&mut self) -> Option<T> {
        if self.past.len() <= 1 {
            return None;
        }
        let undone = self.past.pop()?;
        self.future.push(undone);
        self.past.last().cloned()
    }

    /// Step forward one snapshot, returning a copy of the document to
    /// restore. No-op when nothing has been undone.
    pub fn redo(&mut self) -> Option<T> {
        let restored = self.future.pop()?;
        self.past.push(restored.clone());
        Some(restored)
    }

    /// Drop everything and restart from a new initial document. Used when a
    /// load or template switch replaces the document wholesale.
    pub fn reset(&mut self, initial: T) {
        self.past.clear();
        self.past.push(initial);
        self.future.clear();
    }

    pub fn can_undo(&self) -> bool {
        self.past.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of committed snapshots, including the initial one
    pub fn depth(&self) -> usize {
        self.past.len()
    }
}

#[cfg(test)]
mod tests {
    use super::SnapshotHistory;

    #[test]
    fn undo_redo_flow() {
        let mut history = SnapshotHistory::new(vec![1]);
        history.commit(vec![1, 2]);
        history.commit(vec![1, 2, 3]);

        assert_eq!(history.undo(), Some(vec![1, 2]));
        assert_eq!(history.undo(), Some(vec![1]));
        assert_eq!(history.undo(), None);

        assert_eq!(history.redo(), Some(vec![1, 2]));
        assert_eq!(history.redo(), Some(vec![1, 2, 3]));
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn commit_discards_redo() {
        let mut history = SnapshotHistory::new(1);
        history.commit(2);
        assert_eq!(history.undo(), Some(1));
        assert!(history.can_redo());

        history.commit(9);
        assert!(!history.can_redo());
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn reset_restarts_the_log() {
        let mut history = SnapshotHistory::new(1);
        history.commit(2);
        history.undo();

        history.reset(7);
        assert_eq!(history.depth(), 1);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
