//! Design editor.
//!
//! `DesignEditor` ties one session state to its pointer controller and its
//! undo/redo history. Every committed layer change goes through here and
//! pushes one snapshot; intermediate gesture frames do not. A layer change
//! made while a gesture is still armed aborts that gesture, returning its
//! element to where it was at pointer-down. When an event
//! bus is attached, the editor publishes element, selection and history
//! events on it.

use std::sync::Arc;

use courtside_core::{
    DesignError, DesignerEvent, ElementEvent, EventBus, HistoryEvent, SelectionEvent,
};

use crate::designer_state::{DesignerState, LayerMove, StatePatch, ZoomLimits};
use crate::history::History;
use crate::interaction::{CanvasBounds, GestureOutcome, PointerController, ResizeHandle, ScreenPoint};
use crate::layers::{layer_panel, LayerEntry};
use crate::model::{DesignElement, ElementId, ElementPatch};
use crate::payload::{AiDesignRequest, PlacementSuggestion, SaveDesignRequest};
use crate::render::RenderPlan;

/// Editing session: state, gestures and history
pub struct DesignEditor {
    state: DesignerState,
    controller: PointerController,
    history: History<Vec<DesignElement>>,
    events: Option<Arc<EventBus>>,
}

impl DesignEditor {
    /// Creates an editor over `state` with unbounded history.
    pub fn new(state: DesignerState) -> Self {
        Self::with_history_capacity(state, None)
    }

    /// Creates an editor keeping at most `capacity` undo steps.
    pub fn with_history_capacity(state: DesignerState, capacity: Option<usize>) -> Self {
        let history = History::with_capacity(state.elements.clone(), capacity);
        Self {
            state,
            controller: PointerController::new(),
            history,
            events: None,
        }
    }

    /// Attaches an event bus.
    pub fn with_events(mut self, events: Arc<EventBus>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn state(&self) -> &DesignerState {
        &self.state
    }

    /// Direct access for product, color, size, zoom and guide controls.
    ///
    /// Layer changes made through this reference are not recorded in the
    /// history.
    pub fn state_mut(&mut self) -> &mut DesignerState {
        &mut self.state
    }

    pub fn controller(&self) -> &PointerController {
        &self.controller
    }

    /// Shallow-merges a patch into the session state.
    ///
    /// A selection naming an unknown element rejects the whole patch.
    pub fn update(&mut self, patch: StatePatch) -> Result<(), DesignError> {
        let previous = self.state.selected_element_id;
        self.state.update(patch)?;
        if self.state.selected_element_id != previous {
            self.emit_selection();
        }
        Ok(())
    }

    pub fn set_zoom_limits(&mut self, limits: ZoomLimits) {
        self.state.set_zoom_limits(limits);
    }

    fn emit(&self, event: DesignerEvent) {
        if let Some(bus) = &self.events {
            bus.publish(event);
        }
    }

    /// Called before every committing mutation so an unfinished gesture
    /// never ends up in a snapshot.
    fn abort_gesture(&mut self) {
        self.controller.abort(&mut self.state);
    }

    fn commit(&mut self) {
        self.history.push(self.state.elements.clone());
        tracing::debug!("History commit (depth {})", self.history.undo_depth());
        self.emit(DesignerEvent::History(HistoryEvent::Committed {
            depth: self.history.undo_depth(),
        }));
    }

    fn emit_selection(&self) {
        self.emit(DesignerEvent::Selection(SelectionEvent::Changed {
            id: self.state.selected_element_id,
        }));
    }

    // Layer operations

    pub fn add_image(&mut self, src: impl Into<String>) -> ElementId {
        self.abort_gesture();
        let id = self.state.add_image(src);
        self.after_add(id);
        id
    }

    pub fn add_text(&mut self, text: impl Into<String>) -> ElementId {
        self.abort_gesture();
        let id = self.state.add_text(text);
        self.after_add(id);
        id
    }

    fn after_add(&mut self, id: ElementId) {
        self.commit();
        self.emit(DesignerEvent::Element(ElementEvent::Added { id }));
        self.emit_selection();
    }

    /// Merges a patch into one element. An empty patch commits nothing.
    pub fn update_element(&mut self, id: ElementId, patch: &ElementPatch) -> Result<(), DesignError> {
        self.abort_gesture();
        if let Err(e) = self.state.update_element(id, patch) {
            tracing::warn!("Rejected update of element {}: {}", id, e);
            return Err(e);
        }
        if !patch.is_empty() {
            self.commit();
            self.emit(DesignerEvent::Element(ElementEvent::Updated { id }));
        }
        Ok(())
    }

    pub fn remove_element(&mut self, id: ElementId) -> Result<DesignElement, DesignError> {
        self.abort_gesture();
        let had_selection = self.state.selected_element_id == Some(id);
        let removed = self.state.remove_element(id)?;
        self.commit();
        self.emit(DesignerEvent::Element(ElementEvent::Removed { id }));
        if had_selection {
            self.emit_selection();
        }
        Ok(removed)
    }

    pub fn duplicate_element(&mut self, id: ElementId) -> Result<ElementId, DesignError> {
        self.abort_gesture();
        let new_id = self.state.duplicate_element(id)?;
        self.after_add(new_id);
        Ok(new_id)
    }

    /// Moves an element in the z-order. Returns false when it was already
    /// at the requested end.
    pub fn move_layer(&mut self, id: ElementId, direction: LayerMove) -> Result<bool, DesignError> {
        self.abort_gesture();
        let moved = self.state.move_layer(id, direction)?;
        if moved {
            self.commit();
            self.emit(DesignerEvent::Element(ElementEvent::Reordered));
        }
        Ok(moved)
    }

    pub fn toggle_lock(&mut self, id: ElementId) -> Result<bool, DesignError> {
        self.abort_gesture();
        let locked = self.state.toggle_lock(id)?;
        self.commit();
        self.emit(DesignerEvent::Element(ElementEvent::Updated { id }));
        Ok(locked)
    }

    pub fn toggle_visibility(&mut self, id: ElementId) -> Result<bool, DesignError> {
        self.abort_gesture();
        let visible = self.state.toggle_visibility(id)?;
        self.commit();
        self.emit(DesignerEvent::Element(ElementEvent::Updated { id }));
        Ok(visible)
    }

    pub fn select(&mut self, id: Option<ElementId>) -> Result<(), DesignError> {
        self.state.select(id)?;
        self.emit_selection();
        Ok(())
    }

    /// Selects the topmost visible element under a percentage point, or
    /// clears the selection when nothing is hit.
    pub fn select_at(&mut self, x: f64, y: f64) -> Option<ElementId> {
        let hit = self.state.element_at(x, y);
        if self.state.selected_element_id != hit {
            self.state.selected_element_id = hit;
            self.emit_selection();
        }
        hit
    }

    // Gestures

    fn select_for_gesture(&mut self, id: ElementId) {
        if self.state.selected_element_id != Some(id) {
            self.state.selected_element_id = Some(id);
            self.emit_selection();
        }
    }

    /// Pointer-down on an element body.
    pub fn begin_drag(&mut self, id: ElementId, pointer: ScreenPoint) -> bool {
        let armed = self.controller.begin_drag(&self.state, id, pointer);
        if armed {
            self.select_for_gesture(id);
        }
        armed
    }

    /// Pointer-down on a resize handle.
    pub fn begin_resize(&mut self, id: ElementId, handle: ResizeHandle, pointer: ScreenPoint) -> bool {
        let armed = self.controller.begin_resize(&self.state, id, handle, pointer);
        if armed {
            self.select_for_gesture(id);
        }
        armed
    }

    /// Pointer-down on the rotate handle.
    pub fn begin_rotate(
        &mut self,
        id: ElementId,
        pointer: ScreenPoint,
        bounds: Option<&CanvasBounds>,
    ) -> bool {
        let armed = self.controller.begin_rotate(&self.state, id, pointer, bounds);
        if armed {
            self.select_for_gesture(id);
        }
        armed
    }

    pub fn pointer_move(&mut self, pointer: ScreenPoint, bounds: Option<&CanvasBounds>) -> bool {
        self.controller.pointer_move(&mut self.state, pointer, bounds)
    }

    /// Ends the gesture, committing one history entry if it changed the
    /// element.
    pub fn pointer_up(&mut self) -> Option<GestureOutcome> {
        let outcome = self.controller.pointer_up()?;
        if outcome.changed {
            self.commit();
            self.emit(DesignerEvent::Element(ElementEvent::Updated {
                id: outcome.element_id,
            }));
        }
        Some(outcome)
    }

    // History

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo().cloned() else {
            return false;
        };
        self.controller.cancel();
        self.state.restore_elements(snapshot);
        tracing::debug!("Undo (depth {})", self.history.undo_depth());
        self.emit(DesignerEvent::History(HistoryEvent::Undone));
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo().cloned() else {
            return false;
        };
        self.controller.cancel();
        self.state.restore_elements(snapshot);
        tracing::debug!("Redo (depth {})", self.history.undo_depth());
        self.emit(DesignerEvent::History(HistoryEvent::Redone));
        true
    }

    // AI responses

    /// Applies proposed geometry to the matching elements.
    ///
    /// An unfinished gesture is aborted first. Unknown and locked elements
    /// are skipped. All changes share one
    /// history entry. Returns how many elements changed.
    pub fn apply_placement(&mut self, placement: &[PlacementSuggestion]) -> usize {
        self.abort_gesture();
        let mut changed = Vec::new();
        for suggestion in placement {
            let Some(element) = self.state.element_mut(suggestion.id) else {
                continue;
            };
            if element.locked {
                continue;
            }
            let before = element.clone();
            element.set_position(suggestion.x, suggestion.y);
            element.set_size(suggestion.width, suggestion.height);
            if let Some(rotation) = suggestion.rotation {
                element.set_rotation(rotation);
            }
            if *element != before {
                changed.push(suggestion.id);
            }
        }

        if !changed.is_empty() {
            self.commit();
            for id in &changed {
                self.emit(DesignerEvent::Element(ElementEvent::Updated { id: *id }));
            }
        }
        tracing::debug!("Applied placement to {} elements", changed.len());
        changed.len()
    }

    /// Uses the first color of a suggested scheme as the garment color.
    pub fn apply_color_scheme(&mut self, colors: &[String]) -> Result<Option<String>, DesignError> {
        let Some(first) = colors.first() else {
            return Ok(None);
        };
        self.state.set_custom_color(Some(first.clone()))?;
        Ok(Some(first.clone()))
    }

    // Session

    /// Starts over with an empty session and history.
    pub fn reset(&mut self) {
        self.controller.cancel();
        self.state.reset();
        self.history.reset(Vec::new());
        self.emit_selection();
    }

    /// Replaces the session, e.g. after loading a design file.
    pub fn load(&mut self, mut state: DesignerState) {
        state.set_zoom_limits(self.state.zoom_limits());
        self.controller.cancel();
        self.history.reset(state.elements.clone());
        self.state = state;
        self.emit_selection();
    }

    pub fn save_request(&self) -> Result<SaveDesignRequest, DesignError> {
        SaveDesignRequest::from_state(&self.state)
    }

    pub fn ai_request(&self) -> AiDesignRequest {
        AiDesignRequest::from_state(&self.state)
    }

    pub fn render(&self, width: f64, height: f64) -> RenderPlan {
        RenderPlan::build(&self.state, width, height)
    }

    pub fn layers(&self) -> Vec<LayerEntry> {
        layer_panel(&self.state)
    }
}

impl std::fmt::Debug for DesignEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesignEditor")
            .field("elements", &self.state.elements.len())
            .field("undo_depth", &self.history.undo_depth())
            .field("redo_depth", &self.history.redo_depth())
            .field("gesture", &self.controller.active().map(|g| g.kind()))
            .field("events", &self.events.is_some())
            .finish()
    }
}

impl Default for DesignEditor {
    fn default() -> Self {
        Self::new(DesignerState::new())
    }
}
