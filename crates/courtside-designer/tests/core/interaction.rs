use courtside_designer::{
    CanvasBounds, DesignerState, ElementId, PointerController, ResizeHandle, ScreenPoint,
};
use proptest::prelude::*;

fn setup() -> (DesignerState, ElementId) {
    let mut state = DesignerState::new();
    let id = state.add_text("BALLER");
    (state, id)
}

fn handle_strategy() -> impl Strategy<Value = ResizeHandle> {
    prop_oneof![
        Just(ResizeHandle::TopLeft),
        Just(ResizeHandle::TopRight),
        Just(ResizeHandle::BottomLeft),
        Just(ResizeHandle::BottomRight),
    ]
}

proptest! {
    #[test]
    fn drag_keeps_position_in_range(
        start in (-2000.0f64..2000.0, -2000.0f64..2000.0),
        moves in prop::collection::vec((-5000.0f64..5000.0, -5000.0f64..5000.0), 1..20),
        size in (1.0f64..2000.0, 1.0f64..2000.0),
    ) {
        let (mut state, id) = setup();
        let bounds = CanvasBounds::from_size(size.0, size.1);
        let mut ctl = PointerController::new();
        prop_assert!(ctl.begin_drag(&state, id, ScreenPoint::new(start.0, start.1)));

        for (x, y) in moves {
            ctl.pointer_move(&mut state, ScreenPoint::new(x, y), Some(&bounds));
            let el = state.element(id).unwrap();
            prop_assert!((0.0..=100.0).contains(&el.x));
            prop_assert!((0.0..=100.0).contains(&el.y));
        }
        ctl.pointer_up();
    }

    #[test]
    fn resize_keeps_geometry_in_range(
        handle in handle_strategy(),
        moves in prop::collection::vec((-3000.0f64..3000.0, -3000.0f64..3000.0), 1..20),
    ) {
        let (mut state, id) = setup();
        let bounds = CanvasBounds::from_size(480.0, 640.0);
        let mut ctl = PointerController::new();
        prop_assert!(ctl.begin_resize(&state, id, handle, ScreenPoint::new(240.0, 320.0)));

        for (x, y) in moves {
            ctl.pointer_move(&mut state, ScreenPoint::new(x, y), Some(&bounds));
            let el = state.element(id).unwrap();
            for value in [el.x, el.y, el.width, el.height] {
                prop_assert!((0.0..=100.0).contains(&value));
            }
        }
    }

    #[test]
    fn locked_element_ignores_pointer(
        moves in prop::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), 1..10),
    ) {
        let (mut state, id) = setup();
        state.toggle_lock(id).unwrap();
        let before = state.element(id).cloned();
        let bounds = CanvasBounds::from_size(500.0, 500.0);
        let mut ctl = PointerController::new();

        prop_assert!(!ctl.begin_drag(&state, id, ScreenPoint::new(0.0, 0.0)));
        prop_assert!(!ctl.begin_resize(&state, id, ResizeHandle::BottomRight, ScreenPoint::new(0.0, 0.0)));
        prop_assert!(!ctl.begin_rotate(&state, id, ScreenPoint::new(0.0, 0.0), Some(&bounds)));
        for (x, y) in moves {
            prop_assert!(!ctl.pointer_move(&mut state, ScreenPoint::new(x, y), Some(&bounds)));
        }
        prop_assert_eq!(state.element(id).cloned(), before);
    }

    #[test]
    fn rotation_stays_wrapped(
        moves in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 1..20),
    ) {
        let (mut state, id) = setup();
        let bounds = CanvasBounds::from_size(300.0, 300.0);
        let mut ctl = PointerController::new();
        prop_assert!(ctl.begin_rotate(&state, id, ScreenPoint::new(300.0, 0.0), Some(&bounds)));
        for (x, y) in moves {
            ctl.pointer_move(&mut state, ScreenPoint::new(x, y), Some(&bounds));
            let rotation = state.element(id).unwrap().rotation;
            prop_assert!((-180.0..=180.0).contains(&rotation));
        }
    }
}

#[test]
fn test_drag_example_on_500px_canvas() {
    let (mut state, id) = setup();
    let bounds = CanvasBounds::from_size(500.0, 500.0);
    let mut ctl = PointerController::new();

    ctl.begin_drag(&state, id, ScreenPoint::new(200.0, 200.0));
    ctl.pointer_move(&mut state, ScreenPoint::new(250.0, 220.0), Some(&bounds));

    let el = state.element(id).unwrap();
    assert_eq!((el.x, el.y), (45.0, 34.0));
}

#[test]
fn test_smaller_canvas_moves_further() {
    let (mut large_state, id) = setup();
    let (mut small_state, _) = setup();
    let mut ctl = PointerController::new();

    ctl.begin_drag(&large_state, id, ScreenPoint::new(0.0, 0.0));
    ctl.pointer_move(
        &mut large_state,
        ScreenPoint::new(20.0, 0.0),
        Some(&CanvasBounds::from_size(800.0, 800.0)),
    );
    ctl.pointer_up();

    ctl.begin_drag(&small_state, id, ScreenPoint::new(0.0, 0.0));
    ctl.pointer_move(
        &mut small_state,
        ScreenPoint::new(20.0, 0.0),
        Some(&CanvasBounds::from_size(400.0, 400.0)),
    );
    ctl.pointer_up();

    let large_dx = large_state.element(id).unwrap().x - 35.0;
    let small_dx = small_state.element(id).unwrap().x - 35.0;
    assert!(small_dx > large_dx);
    assert!((small_dx - 2.0 * large_dx).abs() < 1e-9);
}

#[test]
fn test_element_removed_mid_gesture() {
    let (mut state, id) = setup();
    let bounds = CanvasBounds::from_size(500.0, 500.0);
    let mut ctl = PointerController::new();
    ctl.begin_drag(&state, id, ScreenPoint::new(0.0, 0.0));
    state.remove_element(id).unwrap();
    assert!(!ctl.pointer_move(&mut state, ScreenPoint::new(10.0, 10.0), Some(&bounds)));
    let outcome = ctl.pointer_up().unwrap();
    assert!(!outcome.changed);
}

#[test]
fn test_unknown_element_never_arms() {
    let (state, _) = setup();
    let mut ctl = PointerController::new();
    assert!(!ctl.begin_drag(&state, 404, ScreenPoint::new(0.0, 0.0)));
    assert!(!ctl.is_active());
}
