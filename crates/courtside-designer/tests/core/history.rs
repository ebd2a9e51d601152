use courtside_designer::{DesignerState, ElementPatch, History};

#[test]
fn test_history_tracks_element_snapshots() {
    let mut state = DesignerState::new();
    let mut history = History::new(state.elements.clone());

    let id = state.add_image("logo.png");
    history.push(state.elements.clone());
    state
        .update_element(id, &ElementPatch::position(10.0, 10.0))
        .unwrap();
    history.push(state.elements.clone());

    assert_eq!(history.undo_depth(), 2);
    let previous = history.undo().cloned().unwrap();
    assert_eq!(previous[0].x, 35.0);

    let first = history.undo().cloned().unwrap();
    assert!(first.is_empty());
    assert!(!history.can_undo());

    assert_eq!(history.redo().map(|s| s.len()), Some(1));
    assert_eq!(history.redo_depth(), 1);
}

#[test]
fn test_reset_clears_both_directions() {
    let mut history = History::with_capacity(Vec::<u32>::new(), Some(10));
    history.push(vec![1]);
    history.push(vec![1, 2]);
    history.undo();
    history.reset(Vec::new());
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.capacity(), Some(10));
    assert!(history.current().is_empty());
}

#[test]
fn test_zero_capacity_keeps_one_step() {
    let mut history = History::with_capacity(0u8, Some(0));
    history.push(1);
    history.push(2);
    assert_eq!(history.capacity(), Some(1));
    assert_eq!(history.undo(), Some(&1));
    assert_eq!(history.undo(), None);
}
