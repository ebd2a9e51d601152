//! Layer operations: add, update, remove, duplicate, select, hit-test.

use super::DesignerState;
use crate::model::{DesignElement, ElementId, ElementPatch};
use courtside_core::DesignError;

impl DesignerState {
    /// Mints the next element id.
    ///
    /// Ids stay unique even when the state was loaded from a file written
    /// before the counter existed.
    pub fn generate_id(&mut self) -> ElementId {
        let max_existing = self.elements.iter().map(|e| e.id).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_existing) + 1;
        self.next_id
    }

    /// Appends an element on top of the stack and selects it.
    pub fn add_element(&mut self, element: DesignElement) -> ElementId {
        let id = element.id;
        self.elements.push(element);
        self.selected_element_id = Some(id);
        tracing::debug!("Added element {}", id);
        id
    }

    /// Adds an image layer at the default placement.
    pub fn add_image(&mut self, src: impl Into<String>) -> ElementId {
        let id = self.generate_id();
        self.add_element(DesignElement::image(id, src))
    }

    /// Adds a text layer at the default placement.
    pub fn add_text(&mut self, text: impl Into<String>) -> ElementId {
        let id = self.generate_id();
        self.add_element(DesignElement::text(id, text))
    }

    pub fn element(&self, id: ElementId) -> Option<&DesignElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut DesignElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Canonical render index of an element.
    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    /// Merges a patch into the element with this id.
    ///
    /// Other elements are left untouched. An unknown id is an error rather
    /// than a silent no-op.
    pub fn update_element(&mut self, id: ElementId, patch: &ElementPatch) -> Result<(), DesignError> {
        let element = self
            .element_mut(id)
            .ok_or(DesignError::ElementNotFound { id })?;
        element.apply_patch(patch)
    }

    /// Removes an element, clearing the selection if it pointed at it.
    pub fn remove_element(&mut self, id: ElementId) -> Result<DesignElement, DesignError> {
        let index = self.index_of(id).ok_or(DesignError::ElementNotFound { id })?;
        let removed = self.elements.remove(index);
        if self.selected_element_id == Some(id) {
            self.selected_element_id = None;
        }
        tracing::debug!("Removed element {}", id);
        Ok(removed)
    }

    /// Copies an element, places the copy on top and selects it.
    pub fn duplicate_element(&mut self, id: ElementId) -> Result<ElementId, DesignError> {
        let source = self
            .element(id)
            .cloned()
            .ok_or(DesignError::ElementNotFound { id })?;
        let new_id = self.generate_id();
        Ok(self.add_element(source.duplicate(new_id)))
    }

    /// Flips the lock flag; returns the new value.
    pub fn toggle_lock(&mut self, id: ElementId) -> Result<bool, DesignError> {
        let element = self
            .element_mut(id)
            .ok_or(DesignError::ElementNotFound { id })?;
        element.locked = !element.locked;
        Ok(element.locked)
    }

    /// Flips the visibility flag; returns the new value.
    pub fn toggle_visibility(&mut self, id: ElementId) -> Result<bool, DesignError> {
        let element = self
            .element_mut(id)
            .ok_or(DesignError::ElementNotFound { id })?;
        element.visible = !element.visible;
        Ok(element.visible)
    }

    /// Selects an element, or clears the selection with `None`.
    pub fn select(&mut self, id: Option<ElementId>) -> Result<(), DesignError> {
        if let Some(id) = id {
            if self.element(id).is_none() {
                return Err(DesignError::ElementNotFound { id });
            }
        }
        self.selected_element_id = id;
        Ok(())
    }

    pub fn selected_element(&self) -> Option<&DesignElement> {
        self.selected_element_id.and_then(|id| self.element(id))
    }

    /// Topmost visible element containing the percentage point.
    pub fn element_at(&self, x: f64, y: f64) -> Option<ElementId> {
        self.elements
            .iter()
            .rev()
            .find(|e| e.visible && e.contains(x, y))
            .map(|e| e.id)
    }

    /// Replaces the layer list, e.g. from a history snapshot.
    ///
    /// A selection pointing at an element that no longer exists is cleared.
    pub fn restore_elements(&mut self, elements: Vec<DesignElement>) {
        self.elements = elements;
        if let Some(id) = self.selected_element_id {
            if self.element(id).is_none() {
                self.selected_element_id = None;
            }
        }
    }

    /// Clamps every element back inside its invariants, clears a dangling
    /// selection and re-clamps the zoom. Used after loading a design file.
    pub fn normalize(&mut self) -> Result<(), DesignError> {
        for element in &mut self.elements {
            let id = element.id;
            if let Err(e) = element.normalize() {
                tracing::warn!("Element {} cannot be loaded: {}", id, e);
                return Err(e);
            }
        }
        let elements = std::mem::take(&mut self.elements);
        self.restore_elements(elements);
        self.set_zoom(self.zoom);
        Ok(())
    }

    /// Removes every layer.
    pub fn clear_elements(&mut self) {
        self.elements.clear();
        self.selected_element_id = None;
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }
}
