use courtside_designer::{
    layer_panel, DesignerState, ElementPatch, LayerContent, PrintArea, Product, ProductView,
    RenderItem, RenderPlan, TextAlign,
};

fn jersey_state() -> DesignerState {
    DesignerState::with_product(
        Product::new("jersey-01", "Home Jersey", 49.99)
            .with_color("Gold", "#fdb927")
            .with_mockup(ProductView::Front, "/mockups/jersey-front.png")
            .with_printable_area(PrintArea {
                x: 30.0,
                y: 25.0,
                width: 40.0,
                height: 50.0,
            }),
    )
}

#[test]
fn test_plan_order() {
    let mut state = jersey_state();
    let logo = state.add_image("/uploads/logo.png");
    let text = state.add_text("23");

    let plan = RenderPlan::build(&state, 500.0, 600.0);
    assert!(matches!(&plan.items[0], RenderItem::Mockup { src } if src == "/mockups/jersey-front.png"));
    match &plan.items[1] {
        RenderItem::Tint { color, mask_src } => {
            assert_eq!(color, "#fdb927");
            assert_eq!(mask_src.as_deref(), Some("/mockups/jersey-front.png"));
        }
        other => panic!("expected tint, got {:?}", other),
    }
    match &plan.items[2] {
        RenderItem::PrintGuide { rect } => {
            assert_eq!((rect.x, rect.y), (150.0, 150.0));
            assert_eq!((rect.width, rect.height), (200.0, 300.0));
        }
        other => panic!("expected guide, got {:?}", other),
    }
    assert_eq!(plan.layer_ids(), vec![logo, text]);
}

#[test]
fn test_hidden_layers_and_guides_are_skipped() {
    let mut state = jersey_state();
    let logo = state.add_image("/uploads/logo.png");
    let text = state.add_text("23");
    state.toggle_visibility(logo).unwrap();
    state.toggle_guides();

    let plan = RenderPlan::build(&state, 500.0, 500.0);
    assert_eq!(plan.layer_ids(), vec![text]);
    assert!(!plan
        .items
        .iter()
        .any(|item| matches!(item, RenderItem::PrintGuide { .. })));
}

#[test]
fn test_layer_geometry_in_pixels() {
    let mut state = DesignerState::new();
    let id = state.add_image("logo.png");
    state
        .update_element(
            id,
            &ElementPatch {
                rotation: Some(45.0),
                opacity: Some(50.0),
                ..Default::default()
            },
        )
        .unwrap();

    let plan = RenderPlan::build(&state, 200.0, 400.0);
    let layer = plan
        .items
        .iter()
        .find(|item| matches!(item, RenderItem::Layer { .. }))
        .unwrap();
    match layer {
        RenderItem::Layer {
            rect,
            rotation,
            opacity,
            content,
            ..
        } => {
            assert_eq!((rect.x, rect.y), (70.0, 120.0));
            assert_eq!((rect.width, rect.height), (60.0, 120.0));
            assert_eq!(*rotation, 45.0);
            assert_eq!(*opacity, 0.5);
            assert!(matches!(content, LayerContent::Image { src } if src == "logo.png"));
        }
        _ => unreachable!(),
    }
}

#[test]
fn test_no_product_still_tints() {
    let state = DesignerState::new();
    let plan = RenderPlan::build(&state, 100.0, 100.0);
    assert!(matches!(
        &plan.items[0],
        RenderItem::Tint { color, mask_src: None } if color == "#ffffff"
    ));
}

#[test]
fn test_svg_output() {
    let mut state = jersey_state();
    let id = state.add_text("Tom & Jerry <3");
    state
        .update_element(
            id,
            &ElementPatch {
                text_align: Some(TextAlign::Left),
                ..Default::default()
            },
        )
        .unwrap();

    let svg = RenderPlan::build(&state, 500.0, 500.0).to_svg();
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"500\" height=\"500\""));
    assert!(svg.contains("mask-type:alpha"));
    assert!(svg.contains("mix-blend-mode:multiply"));
    assert!(svg.contains("mask=\"url(#garment-mask)\""));
    assert!(svg.contains("stroke-dasharray"));
    assert!(svg.contains("Tom &amp; Jerry &lt;3"));
    assert!(svg.contains("text-anchor=\"start\""));
    assert!(svg.contains(&format!("id=\"layer-{}\"", id)));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn test_layer_panel_does_not_change_render_order() {
    let mut state = jersey_state();
    let a = state.add_image("a.png");
    let b = state.add_image("b.png");
    let c = state.add_text("C");

    let before = RenderPlan::build(&state, 300.0, 300.0).layer_ids();
    let panel: Vec<u64> = layer_panel(&state).iter().map(|l| l.id).collect();
    let after = RenderPlan::build(&state, 300.0, 300.0).layer_ids();

    assert_eq!(panel, vec![c, b, a]);
    assert_eq!(before, vec![a, b, c]);
    assert_eq!(before, after);
}
