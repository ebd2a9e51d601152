//! Pointer interaction controller.
//!
//! Turns raw pointer events into element position, size and rotation
//! updates. A gesture is armed on pointer-down, applied on every
//! pointer-move and discarded on pointer-up. At most one gesture is active.
//!
//! Pixel deltas are divided by the canvas's current rendered bounding box,
//! so the same pointer travel moves an element by a larger percentage on a
//! smaller canvas. Resulting values are clamped into [0, 100]; rotations are
//! wrapped into [-180, 180].

use crate::designer_state::DesignerState;
use crate::model::{DesignElement, ElementId};
use courtside_core::units::{clamp_percent, normalize_degrees, percent_to_px, px_to_percent};
use serde::{Deserialize, Serialize};

/// Pointer position in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rendered bounding box of the canvas, in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasBounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Bounds of a canvas at the screen origin.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Converts a screen point into canvas percentages.
    ///
    /// Returns `None` while the canvas has no usable size.
    pub fn to_percent(&self, point: ScreenPoint) -> Option<(f64, f64)> {
        let x = px_to_percent(point.x - self.left, self.width)?;
        let y = px_to_percent(point.y - self.top, self.height)?;
        Some((x, y))
    }

    /// Converts canvas percentages into a screen point.
    pub fn to_screen(&self, x: f64, y: f64) -> ScreenPoint {
        ScreenPoint::new(
            self.left + percent_to_px(x, self.width),
            self.top + percent_to_px(y, self.height),
        )
    }
}

/// Corner handle used for resizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResizeHandle {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl ResizeHandle {
    fn moves_left_edge(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }

    fn moves_top_edge(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }
}

/// Kind of gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureKind {
    Drag,
    Resize,
    Rotate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub element_id: ElementId,
    pub start_pointer: ScreenPoint,
    pub start_x: f64,
    pub start_y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResizeState {
    pub element_id: ElementId,
    pub handle: ResizeHandle,
    pub start_pointer: ScreenPoint,
    pub start_x: f64,
    pub start_y: f64,
    pub start_width: f64,
    pub start_height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RotateState {
    pub element_id: ElementId,
    /// Element center in screen pixels at pointer-down
    pub center: ScreenPoint,
    pub start_angle: f64,
    pub start_rotation: f64,
}

/// The one active gesture
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    Drag(DragState),
    Resize(ResizeState),
    Rotate(RotateState),
}

impl Gesture {
    pub fn element_id(&self) -> ElementId {
        match self {
            Gesture::Drag(s) => s.element_id,
            Gesture::Resize(s) => s.element_id,
            Gesture::Rotate(s) => s.element_id,
        }
    }

    pub fn kind(&self) -> GestureKind {
        match self {
            Gesture::Drag(_) => GestureKind::Drag,
            Gesture::Resize(_) => GestureKind::Resize,
            Gesture::Rotate(_) => GestureKind::Rotate,
        }
    }

    /// Puts the geometry captured at pointer-down back on the element.
    fn restore(&self, element: &mut DesignElement) {
        match self {
            Gesture::Drag(drag) => {
                element.x = drag.start_x;
                element.y = drag.start_y;
            }
            Gesture::Resize(resize) => {
                element.x = resize.start_x;
                element.y = resize.start_y;
                element.width = resize.start_width;
                element.height = resize.start_height;
            }
            Gesture::Rotate(rotate) => element.rotation = rotate.start_rotation,
        }
    }
}

/// Result of releasing a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureOutcome {
    pub element_id: ElementId,
    pub kind: GestureKind,
    /// Whether any pointer-move changed the element
    pub changed: bool,
}

/// Tracks the active gesture between pointer-down and pointer-up
#[derive(Debug, Clone, Default)]
pub struct PointerController {
    active: Option<Gesture>,
    changed: bool,
}

fn pointer_angle(center: ScreenPoint, pointer: ScreenPoint) -> f64 {
    (pointer.y - center.y).atan2(pointer.x - center.x).to_degrees()
}

impl PointerController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&Gesture> {
        self.active.as_ref()
    }

    pub fn active_element(&self) -> Option<ElementId> {
        self.active.as_ref().map(Gesture::element_id)
    }

    fn arm(&mut self, gesture: Gesture) -> bool {
        tracing::debug!(
            "Armed {:?} gesture on element {}",
            gesture.kind(),
            gesture.element_id()
        );
        self.active = Some(gesture);
        self.changed = false;
        true
    }

    /// Checks whether a gesture may start on this element.
    fn can_arm(&self, state: &DesignerState, id: ElementId) -> bool {
        if self.active.is_some() {
            return false;
        }
        match state.element(id) {
            Some(element) if element.locked => {
                tracing::debug!("Element {} is locked; gesture ignored", id);
                false
            }
            Some(element) => element.visible,
            None => false,
        }
    }

    /// Arms a drag. Returns false for locked, hidden or unknown elements, or
    /// while another gesture is active.
    pub fn begin_drag(&mut self, state: &DesignerState, id: ElementId, pointer: ScreenPoint) -> bool {
        if !self.can_arm(state, id) {
            return false;
        }
        let Some(element) = state.element(id) else {
            return false;
        };
        self.arm(Gesture::Drag(DragState {
            element_id: id,
            start_pointer: pointer,
            start_x: element.x,
            start_y: element.y,
        }))
    }

    /// Arms a resize from one of the corner handles.
    pub fn begin_resize(
        &mut self,
        state: &DesignerState,
        id: ElementId,
        handle: ResizeHandle,
        pointer: ScreenPoint,
    ) -> bool {
        if !self.can_arm(state, id) {
            return false;
        }
        let Some(element) = state.element(id) else {
            return false;
        };
        self.arm(Gesture::Resize(ResizeState {
            element_id: id,
            handle,
            start_pointer: pointer,
            start_x: element.x,
            start_y: element.y,
            start_width: element.width,
            start_height: element.height,
        }))
    }

    /// Arms a rotation. Needs the canvas bounds to locate the element center
    /// on screen; without them nothing is armed.
    pub fn begin_rotate(
        &mut self,
        state: &DesignerState,
        id: ElementId,
        pointer: ScreenPoint,
        bounds: Option<&CanvasBounds>,
    ) -> bool {
        let Some(bounds) = bounds else {
            return false;
        };
        if !self.can_arm(state, id) {
            return false;
        }
        let Some(element) = state.element(id) else {
            return false;
        };
        let (cx, cy) = element.center();
        let center = bounds.to_screen(cx, cy);
        self.arm(Gesture::Rotate(RotateState {
            element_id: id,
            center,
            start_angle: pointer_angle(center, pointer),
            start_rotation: element.rotation,
        }))
    }

    /// Applies the active gesture for a new pointer position.
    ///
    /// No-op (returns false) when nothing is armed, when the canvas bounds
    /// are unavailable or degenerate, or when the element vanished or got
    /// locked mid-gesture. Returns true if the element changed.
    pub fn pointer_move(
        &mut self,
        state: &mut DesignerState,
        pointer: ScreenPoint,
        bounds: Option<&CanvasBounds>,
    ) -> bool {
        let (Some(gesture), Some(bounds)) = (self.active.as_ref(), bounds) else {
            return false;
        };
        let Some(element) = state.element_mut(gesture.element_id()) else {
            return false;
        };
        if element.locked {
            return false;
        }

        let before = (
            element.x,
            element.y,
            element.width,
            element.height,
            element.rotation,
        );

        match gesture {
            Gesture::Drag(drag) => {
                let (Some(dx), Some(dy)) = (
                    px_to_percent(pointer.x - drag.start_pointer.x, bounds.width),
                    px_to_percent(pointer.y - drag.start_pointer.y, bounds.height),
                ) else {
                    return false;
                };
                element.x = clamp_percent(drag.start_x + dx);
                element.y = clamp_percent(drag.start_y + dy);
            }
            Gesture::Resize(resize) => {
                let (Some(dx), Some(dy)) = (
                    px_to_percent(pointer.x - resize.start_pointer.x, bounds.width),
                    px_to_percent(pointer.y - resize.start_pointer.y, bounds.height),
                ) else {
                    return false;
                };

                if resize.handle.moves_left_edge() {
                    let right = resize.start_x + resize.start_width;
                    let x = clamp_percent(resize.start_x + dx).min(right);
                    element.x = x;
                    element.width = clamp_percent(right - x);
                } else {
                    element.width = clamp_percent(resize.start_width + dx);
                }

                if resize.handle.moves_top_edge() {
                    let bottom = resize.start_y + resize.start_height;
                    let y = clamp_percent(resize.start_y + dy).min(bottom);
                    element.y = y;
                    element.height = clamp_percent(bottom - y);
                } else {
                    element.height = clamp_percent(resize.start_height + dy);
                }
            }
            Gesture::Rotate(rotate) => {
                if bounds.width <= 0.0 || bounds.height <= 0.0 {
                    return false;
                }
                let angle = pointer_angle(rotate.center, pointer);
                element.rotation =
                    normalize_degrees(rotate.start_rotation + angle - rotate.start_angle);
            }
        }

        let after = (
            element.x,
            element.y,
            element.width,
            element.height,
            element.rotation,
        );
        let moved = before != after;
        self.changed |= moved;
        moved
    }

    /// Releases the active gesture. Returns `None` when nothing was armed.
    pub fn pointer_up(&mut self) -> Option<GestureOutcome> {
        let gesture = self.active.take()?;
        let outcome = GestureOutcome {
            element_id: gesture.element_id(),
            kind: gesture.kind(),
            changed: std::mem::take(&mut self.changed),
        };
        tracing::debug!(
            "Released {:?} gesture on element {} (changed: {})",
            outcome.kind,
            outcome.element_id,
            outcome.changed
        );
        Some(outcome)
    }

    /// Drops the active gesture and returns its element to the geometry it
    /// had at pointer-down. Returns true if a gesture was active.
    pub fn abort(&mut self, state: &mut DesignerState) -> bool {
        let Some(gesture) = self.active.take() else {
            return false;
        };
        self.changed = false;
        if let Some(element) = state.element_mut(gesture.element_id()) {
            gesture.restore(element);
        }
        tracing::debug!(
            "Aborted {:?} gesture on element {}",
            gesture.kind(),
            gesture.element_id()
        );
        true
    }

    /// Drops the active gesture without reporting it.
    pub fn cancel(&mut self) {
        self.active = None;
        self.changed = false;
    }
}
