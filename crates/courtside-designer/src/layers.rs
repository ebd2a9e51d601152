//! Layers panel view.
//!
//! The panel lists the topmost layer first, i.e. the element array reversed.
//! Building it never touches the canonical order used for rendering.

use crate::designer_state::DesignerState;
use crate::model::{ElementId, ElementType};
use serde::Serialize;

/// One row of the layers panel
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerEntry {
    pub id: ElementId,
    pub label: String,
    pub kind: ElementType,
    pub locked: bool,
    pub visible: bool,
    pub selected: bool,
    /// Position in the render order (0 = bottom)
    pub z_index: usize,
}

/// Rows of the layers panel, topmost first.
pub fn layer_panel(state: &DesignerState) -> Vec<LayerEntry> {
    state
        .elements
        .iter()
        .enumerate()
        .rev()
        .map(|(z_index, element)| LayerEntry {
            id: element.id,
            label: element.label(),
            kind: element.element_type(),
            locked: element.locked,
            visible: element.visible,
            selected: state.selected_element_id == Some(element.id),
            z_index,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_is_reversed_without_touching_order() {
        let mut state = DesignerState::new();
        let a = state.add_image("a.png");
        let b = state.add_text("B");
        let before = state.elements.clone();

        let panel = layer_panel(&state);
        assert_eq!(panel.iter().map(|l| l.id).collect::<Vec<_>>(), vec![b, a]);
        assert_eq!(panel[0].z_index, 1);
        assert!(panel[0].selected);
        assert!(!panel[1].selected);
        assert_eq!(state.elements, before);
    }
}
