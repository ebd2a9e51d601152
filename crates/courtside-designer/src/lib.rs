//! # Courtside Designer
//!
//! The merchandise design canvas: customers place image and text layers on
//! a product mockup, move, resize and rotate them with the pointer, tint the
//! garment and submit the result.
//!
//! ## Core Components
//!
//! - **Model**: layers (`DesignElement`) and products with their mockups,
//!   colors, sizes and printable area
//! - **State**: one serializable `DesignerState` per session
//! - **Interaction**: the pointer controller turning screen-pixel deltas into
//!   percentage geometry
//! - **History**: snapshot undo/redo
//! - **Render**: display list and SVG output
//! - **Payload**: save and AI request bodies, lenient AI response readers
//! - **Serialization**: design files on disk
//!
//! ## Architecture
//!
//! ```text
//! DesignEditor
//!   ├── DesignerState (layers, product, color, sizes, zoom)
//!   ├── PointerController (drag / resize / rotate)
//!   └── History (layer snapshots)
//!
//! RenderPlan (mockup, tint, guide, layers) -> SVG
//! ```
//!
//! All geometry is stored in percent of the canvas, so a design renders the
//! same at any canvas size.
//!
//! ## Usage
//!
//! ```rust
//! use courtside_designer::{CanvasBounds, DesignEditor, ScreenPoint};
//!
//! let mut editor = DesignEditor::default();
//! let id = editor.add_text("MVP");
//!
//! let bounds = CanvasBounds::from_size(500.0, 500.0);
//! editor.begin_drag(id, ScreenPoint::new(0.0, 0.0));
//! editor.pointer_move(ScreenPoint::new(50.0, 20.0), Some(&bounds));
//! editor.pointer_up();
//!
//! let element = editor.state().element(id).unwrap();
//! assert_eq!((element.x, element.y), (45.0, 34.0));
//! assert!(editor.undo());
//! ```

pub mod designer_state;
pub mod editor;
pub mod history;
pub mod interaction;
pub mod layers;
pub mod model;
pub mod payload;
pub mod render;
pub mod serialization;

pub use designer_state::{DesignerState, LayerMove, StatePatch, ZoomLimits};
pub use editor::DesignEditor;
pub use history::History;
pub use interaction::{
    CanvasBounds, Gesture, GestureKind, GestureOutcome, PointerController, ResizeHandle,
    ScreenPoint,
};
pub use layers::{layer_panel, LayerEntry};
pub use model::{
    is_hex_color, DesignElement, ElementContent, ElementId, ElementPatch, ElementType, PrintArea,
    Product, ProductColor, ProductView, TextAlign, TextStyle,
};
pub use payload::{
    parse_color_scheme, parse_placement, parse_suggestions, AiDesignRequest, PlacementSuggestion,
    SaveDesignRequest,
};
pub use render::{LayerContent, PixelRect, RenderItem, RenderPlan};
pub use serialization::{DesignFile, DesignMetadata};
