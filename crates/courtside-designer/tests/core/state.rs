use courtside_core::DesignError;
use courtside_designer::{
    DesignerState, ElementPatch, LayerMove, Product, ProductView, StatePatch,
};

fn jersey() -> Product {
    Product::new("jersey-01", "Home Jersey", 49.99)
        .with_color("Royal", "#1d4ed8")
        .with_color("Black", "#000000")
        .with_sizes(["S", "M", "L", "XL"])
        .with_mockup(ProductView::Front, "/mockups/jersey-front.png")
}

#[test]
fn test_new_state_defaults() {
    let state = DesignerState::new();
    assert!(state.product.is_none());
    assert!(state.elements.is_empty());
    assert_eq!(state.selected_element_id, None);
    assert_eq!(state.zoom, 100);
    assert!(state.show_guides);
    assert_eq!(state.design_name, "Untitled Design");
    assert_eq!(state.view, ProductView::Front);
}

#[test]
fn test_add_elements_selects_newest() {
    let mut state = DesignerState::new();
    let a = state.add_image("/uploads/logo.png");
    let b = state.add_text("CHAMPS");
    assert_ne!(a, b);
    assert_eq!(state.selected_element_id, Some(b));
    assert_eq!(state.index_of(a), Some(0));
    assert_eq!(state.index_of(b), Some(1));
}

#[test]
fn test_update_element_merges_only_target() {
    let mut state = DesignerState::new();
    let a = state.add_image("a.png");
    let b = state.add_image("b.png");
    let before_b = state.element(b).cloned();

    state
        .update_element(a, &ElementPatch::position(10.0, 20.0))
        .unwrap();

    let el = state.element(a).unwrap();
    assert_eq!((el.x, el.y), (10.0, 20.0));
    assert_eq!((el.width, el.height), (30.0, 30.0));
    assert_eq!(state.element(b).cloned(), before_b);
}

#[test]
fn test_update_element_clamps_values() {
    let mut state = DesignerState::new();
    let id = state.add_text("HOOPS");
    let patch = ElementPatch {
        x: Some(140.0),
        y: Some(-12.0),
        opacity: Some(250.0),
        rotation: Some(270.0),
        ..Default::default()
    };
    state.update_element(id, &patch).unwrap();
    let el = state.element(id).unwrap();
    assert_eq!(el.x, 100.0);
    assert_eq!(el.y, 0.0);
    assert_eq!(el.opacity, 100.0);
    assert_eq!(el.rotation, -90.0);
}

#[test]
fn test_update_missing_element_is_an_error() {
    let mut state = DesignerState::new();
    state.add_image("a.png");
    let before = state.clone();
    assert_eq!(
        state.update_element(999, &ElementPatch::position(1.0, 1.0)),
        Err(DesignError::ElementNotFound { id: 999 })
    );
    assert_eq!(state, before);
}

#[test]
fn test_update_rejects_non_finite() {
    let mut state = DesignerState::new();
    let id = state.add_image("a.png");
    let result = state.update_element(id, &ElementPatch::position(f64::NAN, 10.0));
    assert!(matches!(result, Err(DesignError::InvalidValue { .. })));
    assert_eq!(state.element(id).unwrap().x, 35.0);
}

#[test]
fn test_remove_clears_selection() {
    let mut state = DesignerState::new();
    let a = state.add_image("a.png");
    let b = state.add_image("b.png");
    state.remove_element(b).unwrap();
    assert_eq!(state.selected_element_id, None);

    state.select(Some(a)).unwrap();
    assert!(state.remove_element(b).is_err());
    assert_eq!(state.selected_element_id, Some(a));
}

#[test]
fn test_duplicate_offsets_and_selects() {
    let mut state = DesignerState::new();
    let id = state.add_image("a.png");
    state.toggle_lock(id).unwrap();
    let copy = state.duplicate_element(id).unwrap();

    let el = state.element(copy).unwrap();
    assert_eq!((el.x, el.y), (40.0, 35.0));
    assert!(!el.locked);
    assert_eq!(state.selected_element_id, Some(copy));
    assert_eq!(state.index_of(copy), Some(1));
}

#[test]
fn test_duplicate_clamps_at_edge() {
    let mut state = DesignerState::new();
    let id = state.add_image("a.png");
    state
        .update_element(id, &ElementPatch::position(98.0, 97.0))
        .unwrap();
    let copy = state.duplicate_element(id).unwrap();
    let el = state.element(copy).unwrap();
    assert_eq!((el.x, el.y), (100.0, 100.0));
}

#[test]
fn test_layer_moves() {
    let mut state = DesignerState::new();
    let a = state.add_image("a.png");
    let b = state.add_image("b.png");
    let c = state.add_image("c.png");

    assert!(state.move_layer(a, LayerMove::ToFront).unwrap());
    assert_eq!(ids(&state), vec![b, c, a]);

    assert!(state.move_layer(a, LayerMove::Backward).unwrap());
    assert_eq!(ids(&state), vec![b, a, c]);

    assert!(state.move_layer(c, LayerMove::ToBack).unwrap());
    assert_eq!(ids(&state), vec![c, b, a]);

    assert!(!state.move_layer(a, LayerMove::Forward).unwrap());
    assert!(!state.move_layer(c, LayerMove::Backward).unwrap());
    assert!(state.move_layer(42, LayerMove::Forward).is_err());
}

fn ids(state: &DesignerState) -> Vec<u64> {
    state.elements.iter().map(|e| e.id).collect()
}

#[test]
fn test_hit_test_prefers_topmost_visible() {
    let mut state = DesignerState::new();
    let bottom = state.add_image("a.png");
    let top = state.add_image("b.png");
    assert_eq!(state.element_at(50.0, 45.0), Some(top));

    state.toggle_visibility(top).unwrap();
    assert_eq!(state.element_at(50.0, 45.0), Some(bottom));
    assert_eq!(state.element_at(2.0, 2.0), None);
}

#[test]
fn test_select_unknown_id() {
    let mut state = DesignerState::new();
    assert!(state.select(Some(7)).is_err());
    assert!(state.select(None).is_ok());
}

#[test]
fn test_set_product_resets_color_and_sizes() {
    let mut state = DesignerState::new();
    state.set_custom_color(Some("#123456".into())).unwrap();
    state.toggle_size("M");
    state.toggle_size("XXS");

    state.set_product(jersey());
    assert_eq!(state.color, "#1d4ed8");
    assert_eq!(state.color_name, "Royal");
    assert_eq!(state.custom_color, None);
    assert_eq!(state.selected_sizes, vec!["M".to_string()]);

    state.select_color("black").unwrap();
    assert_eq!(state.effective_color(), "#000000");
    assert!(state.select_color("Teal").is_err());
}

#[test]
fn test_update_patch_is_shallow() {
    let mut state = DesignerState::with_product(jersey());
    let id = state.add_text("A");
    state.update(StatePatch {
        view: Some(ProductView::Back),
        zoom: Some(500),
        selected_element_id: Some(None),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(state.view, ProductView::Back);
    assert_eq!(state.zoom, 200);
    assert_eq!(state.selected_element_id, None);
    assert!(state.element(id).is_some());
    assert!(state.product.is_some());

    state
        .update(StatePatch {
            product: Some(None),
            ..Default::default()
        })
        .unwrap();
    assert!(state.product.is_none());
}

#[test]
fn test_update_rejects_unknown_selection() {
    let mut state = DesignerState::with_product(jersey());
    let id = state.add_text("A");

    let result = state.update(StatePatch {
        selected_element_id: Some(Some(id + 40)),
        design_name: Some("Ghost".into()),
        ..Default::default()
    });
    assert!(matches!(result, Err(DesignError::ElementNotFound { .. })));
    assert_eq!(state.selected_element_id, Some(id));
    assert_eq!(state.design_name, "Untitled Design");
}

#[test]
fn test_reset() {
    let mut state = DesignerState::with_product(jersey());
    state.add_text("A");
    state.zoom_in();
    state.reset();
    assert_eq!(state, DesignerState::new());
}

#[test]
fn test_ids_stay_unique_after_restore() {
    let mut state = DesignerState::new();
    let a = state.add_image("a.png");
    let b = state.add_image("b.png");
    let snapshot = state.elements.clone();
    state.clear_elements();
    state.restore_elements(snapshot);
    let c = state.add_image("c.png");
    assert!(c > a && c > b);
}
