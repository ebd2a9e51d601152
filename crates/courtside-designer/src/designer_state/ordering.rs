//! Z-order moves. The canonical order is the element array: later entries
//! are drawn on top.

use super::DesignerState;
use crate::model::ElementId;
use courtside_core::DesignError;
use serde::{Deserialize, Serialize};

/// Direction of a layer move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayerMove {
    /// One step towards the top
    Forward,
    /// One step towards the bottom
    Backward,
    ToFront,
    ToBack,
}

impl DesignerState {
    /// Moves an element in the z-order.
    ///
    /// Returns `Ok(false)` when the element is already at the requested end.
    pub fn move_layer(&mut self, id: ElementId, direction: LayerMove) -> Result<bool, DesignError> {
        let index = self.index_of(id).ok_or(DesignError::ElementNotFound { id })?;
        let last = self.elements.len() - 1;

        let target = match direction {
            LayerMove::Forward => (index + 1).min(last),
            LayerMove::Backward => index.saturating_sub(1),
            LayerMove::ToFront => last,
            LayerMove::ToBack => 0,
        };
        if target == index {
            return Ok(false);
        }

        let element = self.elements.remove(index);
        self.elements.insert(target, element);
        tracing::debug!("Moved element {} from layer {} to {}", id, index, target);
        Ok(true)
    }
}
