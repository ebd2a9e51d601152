use std::sync::Arc;

use courtside_core::{
    DesignerEvent, ElementEvent, EventBus, EventCategory, HistoryEvent, SelectionEvent,
};
use courtside_designer::{
    parse_placement, CanvasBounds, DesignEditor, DesignerState, ElementPatch, LayerMove,
    Product, ResizeHandle, ScreenPoint, StatePatch,
};
use serde_json::json;

fn editor_with_two_layers() -> (DesignEditor, u64, u64) {
    let mut editor = DesignEditor::default();
    let logo = editor.add_image("/uploads/logo.png");
    let text = editor.add_text("MVP");
    (editor, logo, text)
}

#[test]
fn test_undo_n_restores_n_steps_back() {
    let (mut editor, logo, text) = editor_with_two_layers();
    let mut snapshots = vec![editor.state().elements.clone()];

    editor
        .update_element(logo, &ElementPatch::position(10.0, 10.0))
        .unwrap();
    snapshots.push(editor.state().elements.clone());
    editor.move_layer(logo, LayerMove::ToFront).unwrap();
    snapshots.push(editor.state().elements.clone());
    editor.remove_element(text).unwrap();
    snapshots.push(editor.state().elements.clone());

    for n in 1..snapshots.len() {
        assert!(editor.undo());
        assert_eq!(editor.state().elements, snapshots[snapshots.len() - 1 - n]);
    }
    for n in (0..snapshots.len() - 1).rev() {
        assert!(editor.redo());
        assert_eq!(editor.state().elements, snapshots[snapshots.len() - 1 - n]);
    }
    assert!(!editor.can_redo());
}

#[test]
fn test_redo_branch_dropped_after_new_edit() {
    let (mut editor, logo, _) = editor_with_two_layers();
    editor.undo();
    assert!(editor.can_redo());
    editor.toggle_lock(logo).unwrap();
    assert!(!editor.can_redo());
}

#[test]
fn test_undo_all_the_way_to_empty() {
    let (mut editor, _, _) = editor_with_two_layers();
    assert!(editor.undo());
    assert!(editor.undo());
    assert!(!editor.undo());
    assert!(editor.state().elements.is_empty());
    assert_eq!(editor.state().selected_element_id, None);
}

#[test]
fn test_gesture_commits_once() {
    let (mut editor, logo, _) = editor_with_two_layers();
    let bounds = CanvasBounds::from_size(500.0, 500.0);
    let before = editor.state().elements.clone();

    assert!(editor.begin_drag(logo, ScreenPoint::new(0.0, 0.0)));
    assert_eq!(editor.state().selected_element_id, Some(logo));
    for step in 1..=10 {
        let offset = f64::from(step) * 5.0;
        editor.pointer_move(ScreenPoint::new(offset, offset), Some(&bounds));
    }
    let outcome = editor.pointer_up().unwrap();
    assert!(outcome.changed);

    assert!(editor.undo());
    assert_eq!(editor.state().elements, before);
}

#[test]
fn test_click_without_move_does_not_commit() {
    let (mut editor, logo, _) = editor_with_two_layers();
    editor.begin_resize(logo, ResizeHandle::BottomRight, ScreenPoint::new(5.0, 5.0));
    let outcome = editor.pointer_up().unwrap();
    assert!(!outcome.changed);

    // Only the two adds are in the history.
    assert!(editor.undo());
    assert!(editor.undo());
    assert!(!editor.undo());
}

#[test]
fn test_locked_layer_rejects_gestures() {
    let (mut editor, logo, text) = editor_with_two_layers();
    editor.toggle_lock(logo).unwrap();
    assert!(!editor.begin_drag(logo, ScreenPoint::new(0.0, 0.0)));
    assert_eq!(editor.state().selected_element_id, Some(text));
    assert!(editor.pointer_up().is_none());
}

#[test]
fn test_apply_placement_skips_locked() {
    let (mut editor, logo, text) = editor_with_two_layers();
    editor.toggle_lock(text).unwrap();

    let response = json!({
        "elements": [
            {"id": logo, "x": 40, "y": 20, "width": 20, "height": 20},
            {"id": text, "x": 0, "y": 0, "width": 10, "height": 10},
            {"id": 999, "x": 0, "y": 0, "width": 10, "height": 10}
        ]
    });
    let changed = editor.apply_placement(&parse_placement(&response));
    assert_eq!(changed, 1);

    let logo_el = editor.state().element(logo).unwrap();
    assert_eq!((logo_el.x, logo_el.y, logo_el.width), (40.0, 20.0, 20.0));
    let text_el = editor.state().element(text).unwrap();
    assert_eq!((text_el.x, text_el.y), (35.0, 30.0));

    assert!(editor.undo());
    assert_eq!(editor.state().element(logo).unwrap().x, 35.0);
}

#[test]
fn test_apply_color_scheme() {
    let mut editor = DesignEditor::default();
    assert_eq!(editor.apply_color_scheme(&[]).unwrap(), None);
    let applied = editor
        .apply_color_scheme(&["#552583".to_string(), "#fdb927".to_string()])
        .unwrap();
    assert_eq!(applied.as_deref(), Some("#552583"));
    assert_eq!(editor.state().effective_color(), "#552583");
}

#[test]
fn test_history_capacity() {
    let mut editor = DesignEditor::with_history_capacity(DesignerState::new(), Some(2));
    for i in 0..5 {
        editor.add_text(format!("T{}", i));
    }
    assert!(editor.undo());
    assert!(editor.undo());
    assert!(!editor.undo());
    assert_eq!(editor.state().element_count(), 3);
}

#[test]
fn test_events_are_published() {
    let bus = Arc::new(EventBus::with_journal(64));
    let mut editor = DesignEditor::default().with_events(Arc::clone(&bus));

    let id = editor.add_image("logo.png");
    editor.undo();

    let events = bus.journal();
    assert!(events.contains(&DesignerEvent::Element(ElementEvent::Added { id })));
    assert!(events.contains(&DesignerEvent::History(HistoryEvent::Committed { depth: 1 })));
    assert!(events.contains(&DesignerEvent::History(HistoryEvent::Undone)));
}

#[test]
fn test_history_listener() {
    let bus = Arc::new(EventBus::new());
    let seen = Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let counter = Arc::clone(&seen);
    bus.listen_to(&[EventCategory::History], move |_| {
        counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    });

    let mut editor = DesignEditor::default().with_events(bus);
    editor.add_text("A");
    editor.add_text("B");
    editor.undo();
    assert_eq!(seen.load(std::sync::atomic::Ordering::SeqCst), 3);
}

#[test]
fn test_load_resets_history() {
    let (mut editor, _, _) = editor_with_two_layers();
    let mut other = DesignerState::with_product(Product::new("shorts", "Shorts", 29.0));
    other.add_text("AWAY");
    editor.load(other);
    assert!(!editor.can_undo());
    assert_eq!(editor.state().element_count(), 1);
}

#[test]
fn test_reset() {
    let (mut editor, _, _) = editor_with_two_layers();
    editor.reset();
    assert!(editor.state().elements.is_empty());
    assert!(!editor.can_undo());
    assert!(!editor.can_redo());
}

#[test]
fn test_select_at() {
    let (mut editor, logo, text) = editor_with_two_layers();
    // Text (30x10 at 35,30) sits on top of the logo (30x30 at 35,30).
    assert_eq!(editor.select_at(50.0, 32.0), Some(text));
    assert_eq!(editor.select_at(50.0, 55.0), Some(logo));
    assert_eq!(editor.select_at(1.0, 1.0), None);
    assert_eq!(editor.state().selected_element_id, None);
}

#[test]
fn test_layer_change_during_drag_aborts_it() {
    let (mut editor, logo, _) = editor_with_two_layers();
    let bounds = CanvasBounds::from_size(500.0, 500.0);

    assert!(editor.begin_drag(logo, ScreenPoint::new(0.0, 0.0)));
    editor.pointer_move(ScreenPoint::new(50.0, 0.0), Some(&bounds));
    assert_eq!(editor.state().element(logo).unwrap().x, 45.0);

    let added = editor.add_text("T");
    assert!(!editor.controller().is_active());
    assert_eq!(editor.state().element(logo).unwrap().x, 35.0);

    assert!(!editor.pointer_move(ScreenPoint::new(100.0, 0.0), Some(&bounds)));
    assert!(editor.pointer_up().is_none());

    assert!(editor.undo());
    assert!(editor.state().element(added).is_none());
    assert_eq!(editor.state().element(logo).unwrap().x, 35.0);
}

#[test]
fn test_toggle_during_resize_restores_size() {
    let (mut editor, logo, text) = editor_with_two_layers();
    let bounds = CanvasBounds::from_size(500.0, 500.0);

    assert!(editor.begin_resize(logo, ResizeHandle::TopLeft, ScreenPoint::new(0.0, 0.0)));
    editor.pointer_move(ScreenPoint::new(-50.0, -50.0), Some(&bounds));
    assert_eq!(editor.state().element(logo).unwrap().width, 40.0);

    editor.toggle_lock(text).unwrap();
    let logo_el = editor.state().element(logo).unwrap();
    assert_eq!((logo_el.x, logo_el.y), (35.0, 30.0));
    assert_eq!((logo_el.width, logo_el.height), (30.0, 30.0));

    assert!(editor.undo());
    assert!(!editor.state().element(text).unwrap().locked);
    assert_eq!(editor.state().element(logo).unwrap().width, 30.0);
}

#[test]
fn test_select_at_publishes_only_changes() {
    let (editor, logo, text) = editor_with_two_layers();
    let bus = Arc::new(EventBus::with_journal(16));
    let mut editor = editor.with_events(Arc::clone(&bus));

    assert_eq!(editor.select_at(50.0, 32.0), Some(text));
    assert_eq!(editor.select_at(50.0, 55.0), Some(logo));
    assert_eq!(editor.select_at(50.0, 55.0), Some(logo));

    assert_eq!(
        bus.journal(),
        vec![DesignerEvent::Selection(SelectionEvent::Changed { id: Some(logo) })]
    );
}

#[test]
fn test_update_checks_selection() {
    let (mut editor, logo, text) = editor_with_two_layers();
    let missing = StatePatch {
        selected_element_id: Some(Some(logo + text + 10)),
        ..Default::default()
    };
    assert!(editor.update(missing).is_err());
    assert_eq!(editor.state().selected_element_id, Some(text));

    editor
        .update(StatePatch {
            selected_element_id: Some(Some(logo)),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(editor.state().selected_element_id, Some(logo));
}
