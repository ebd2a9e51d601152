//! Designer session state.
//!
//! One `DesignerState` belongs to one editing session. It is a plain
//! serializable value: whoever drives the session owns it and passes it to
//! the pointer controller and the renderer explicitly.
//!
//! This module is split into submodules:
//! - `elements`: adding, updating, removing and selecting layers
//! - `ordering`: z-order moves
//! - `view`: product, color, sizes, zoom and guides

mod elements;
mod ordering;
mod view;

pub use ordering::LayerMove;
pub use view::ZoomLimits;

use crate::model::{DesignElement, ElementId, Product, ProductView};
use courtside_core::DesignError;
use serde::{Deserialize, Serialize};

/// Shallow partial update of the session state.
///
/// Nullable fields use a nested `Option`: `Some(None)` clears the value.
/// Layers are not part of the patch; they change through the element
/// operations so every change is clamped and observable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatePatch {
    pub product: Option<Option<Product>>,
    pub color: Option<String>,
    pub color_name: Option<String>,
    pub custom_color: Option<Option<String>>,
    pub view: Option<ProductView>,
    pub selected_element_id: Option<Option<ElementId>>,
    pub selected_sizes: Option<Vec<String>>,
    pub zoom: Option<u32>,
    pub show_guides: Option<bool>,
    pub design_name: Option<String>,
}

/// State of one design session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignerState {
    pub product: Option<Product>,
    /// Hex of the selected product color
    pub color: String,
    pub color_name: String,
    /// Free-form color chosen with the picker; overrides `color` when set
    pub custom_color: Option<String>,
    pub view: ProductView,
    /// Layers in render order: index 0 is drawn first (bottom)
    pub elements: Vec<DesignElement>,
    pub selected_element_id: Option<ElementId>,
    pub selected_sizes: Vec<String>,
    /// Zoom in percent
    pub zoom: u32,
    pub show_guides: bool,
    pub design_name: String,
    #[serde(default)]
    next_id: ElementId,
    #[serde(skip)]
    zoom_limits: ZoomLimits,
}

pub const DEFAULT_COLOR: &str = "#ffffff";
pub const DEFAULT_COLOR_NAME: &str = "White";
pub const DEFAULT_DESIGN_NAME: &str = "Untitled Design";

impl DesignerState {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self {
            product: None,
            color: DEFAULT_COLOR.to_string(),
            color_name: DEFAULT_COLOR_NAME.to_string(),
            custom_color: None,
            view: ProductView::Front,
            elements: Vec::new(),
            selected_element_id: None,
            selected_sizes: Vec::new(),
            zoom: view::DEFAULT_ZOOM,
            show_guides: true,
            design_name: DEFAULT_DESIGN_NAME.to_string(),
            next_id: 0,
            zoom_limits: ZoomLimits::default(),
        }
    }

    /// Creates an empty session for a product.
    pub fn with_product(product: Product) -> Self {
        let mut state = Self::new();
        state.set_product(product);
        state
    }

    /// Shallow-merges a patch into the state.
    ///
    /// A selection naming an element that does not exist is rejected before
    /// anything is merged.
    pub fn update(&mut self, patch: StatePatch) -> Result<(), DesignError> {
        if let Some(Some(id)) = patch.selected_element_id {
            if self.element(id).is_none() {
                return Err(DesignError::ElementNotFound { id });
            }
        }
        if let Some(product) = patch.product {
            self.product = product;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(color_name) = patch.color_name {
            self.color_name = color_name;
        }
        if let Some(custom) = patch.custom_color {
            self.custom_color = custom;
        }
        if let Some(view) = patch.view {
            self.view = view;
        }
        if let Some(selected) = patch.selected_element_id {
            self.selected_element_id = selected;
        }
        if let Some(sizes) = patch.selected_sizes {
            self.selected_sizes = sizes;
        }
        if let Some(zoom) = patch.zoom {
            self.set_zoom(zoom);
        }
        if let Some(show) = patch.show_guides {
            self.show_guides = show;
        }
        if let Some(name) = patch.design_name {
            self.design_name = name;
        }
        Ok(())
    }

    /// Returns the session to its initial state, keeping the zoom limits.
    pub fn reset(&mut self) {
        let limits = self.zoom_limits;
        *self = Self::new();
        self.zoom_limits = limits;
        self.zoom = limits.clamp(view::DEFAULT_ZOOM);
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
