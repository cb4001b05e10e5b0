use template_editor::editor::Editor;
use template_editor::element::ElementKind;
use template_editor::presets::Preset;
use template_editor::template::Template;

fn editor_with_commits(commits: usize) -> Editor {
    let mut editor = Editor::new(Preset::Hiring.template());
    for _ in 0..commits {
        editor.add_element(ElementKind::Rectangle);
    }
    editor
}

#[test]
fn undo_then_redo_restores_the_same_document_for_any_depth() {
    let commits = 4;
    for k in 1..=commits {
        let mut editor = editor_with_commits(commits);
        let reference: Template = editor.current().clone();

        for _ in 0..k {
            editor.undo();
        }
        assert_ne!(editor.current(), &reference);
        for _ in 0..k {
            editor.redo();
        }
        assert_eq!(editor.current(), &reference, "round trip broke at k={k}");
    }
}

#[test]
fn undo_is_a_noop_at_the_bottom_of_history() {
    let mut editor = Editor::new(Preset::Hiring.template());
    let before = editor.current().clone();

    assert!(!editor.can_undo());
    editor.undo();
    assert_eq!(editor.current(), &before);
    assert_eq!(editor.history().depth(), 1);
}

#[test]
fn redo_is_a_noop_with_nothing_undone() {
    let mut editor = editor_with_commits(2);
    let before = editor.current().clone();

    assert!(!editor.can_redo());
    editor.redo();
    assert_eq!(editor.current(), &before);
}

#[test]
fn committing_after_undo_discards_the_redo_branch() {
    let mut editor = editor_with_commits(1);
    editor.undo();
    assert!(editor.can_redo());

    // A fresh commit forks the timeline; the undone branch is gone
    editor.add_element(ElementKind::Text);
    assert!(!editor.can_redo());

    let before = editor.current().clone();
    editor.redo();
    assert_eq!(editor.current(), &before);
}

#[test]
fn each_committed_action_is_one_undo_step() {
    let mut editor = Editor::new(Preset::Announcement.template());
    let initial = editor.current().clone();

    editor.add_element(ElementKind::Text);
    editor.add_element(ElementKind::Rectangle);
    assert_eq!(editor.history().depth(), 3);

    editor.undo();
    assert_eq!(editor.current().elements.len(), initial.elements.len() + 1);
    editor.undo();
    assert_eq!(editor.current(), &initial);
}

#[test]
fn load_restarts_history() {
    let mut editor = editor_with_commits(3);
    editor.undo();
    assert!(editor.can_undo() && editor.can_redo());

    editor.load(Preset::Announcement.template());
    assert_eq!(editor.current(), &Preset::Announcement.template());
    assert_eq!(editor.history().depth(), 1);
    assert!(!editor.can_undo());
    assert!(!editor.can_redo());
    assert_eq!(editor.selected_index(), None);
}

#[test]
fn history_snapshots_are_independent_copies() {
    let mut editor = editor_with_commits(1);
    let snapshot = editor.current().clone();

    // Mutate the live document through another committed action, then undo:
    // the restored snapshot must be bit-for-bit what was committed.
    editor.add_element(ElementKind::Text);
    editor.undo();
    assert_eq!(editor.current(), &snapshot);
}
