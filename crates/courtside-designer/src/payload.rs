//! Request bodies for the save and AI endpoints, and lenient readers for
//! the AI responses.
//!
//! The AI endpoints return free-form JSON. The readers pick out the fields
//! they understand and ignore everything else, so a response with an
//! unexpected shape yields nothing instead of an error.

use crate::designer_state::DesignerState;
use crate::model::{DesignElement, ElementId, PrintArea, ProductView};
use courtside_core::DesignError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/designer/save`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDesignRequest {
    pub name: String,
    pub product_id: String,
    pub color: String,
    pub color_name: String,
    pub elements: Vec<DesignElement>,
    pub sizes: Vec<String>,
    pub price: f64,
}

impl SaveDesignRequest {
    /// Builds the save body, rejecting incomplete designs.
    ///
    /// A design needs a name, a product, at least one element and at least
    /// one size. The price is the product's base price.
    pub fn from_state(state: &DesignerState) -> Result<Self, DesignError> {
        let name = state.design_name.trim();
        if name.is_empty() {
            return Err(DesignError::Validation {
                reason: "Please give your design a name".to_string(),
            });
        }
        let product = state.product.as_ref().ok_or(DesignError::ProductNotSet)?;
        if state.elements.is_empty() {
            return Err(DesignError::Validation {
                reason: "Add at least one image or text to your design".to_string(),
            });
        }
        if state.selected_sizes.is_empty() {
            return Err(DesignError::Validation {
                reason: "Select at least one size".to_string(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            product_id: product.id.clone(),
            color: state.effective_color().to_string(),
            color_name: state.effective_color_name().to_string(),
            elements: state.elements.clone(),
            sizes: state.selected_sizes.clone(),
            price: product.base_price,
        })
    }
}

/// Body sent to the AI endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiDesignRequest {
    pub product_id: Option<String>,
    pub view: ProductView,
    pub printable_area: PrintArea,
    pub elements: Vec<DesignElement>,
}

impl AiDesignRequest {
    pub fn from_state(state: &DesignerState) -> Self {
        Self {
            product_id: state.product.as_ref().map(|p| p.id.clone()),
            view: state.view,
            printable_area: state
                .product
                .as_ref()
                .map(|p| p.printable_area)
                .unwrap_or_default(),
            elements: state.elements.clone(),
        }
    }
}

/// New geometry proposed for one element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementSuggestion {
    pub id: ElementId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: Option<f64>,
}

fn number(entry: &Value, key: &str) -> Option<f64> {
    entry.get(key).and_then(Value::as_f64).filter(|v| v.is_finite())
}

fn element_id(entry: &Value) -> Option<ElementId> {
    let id = entry.get("id")?;
    id.as_u64()
        .or_else(|| id.as_str().and_then(|s| s.parse().ok()))
}

/// Reads `elements[{id, x, y, width, height, rotation?}]`.
///
/// Entries missing an id or any of the four geometry numbers are skipped.
pub fn parse_placement(response: &Value) -> Vec<PlacementSuggestion> {
    let Some(entries) = response.get("elements").and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            Some(PlacementSuggestion {
                id: element_id(entry)?,
                x: number(entry, "x")?,
                y: number(entry, "y")?,
                width: number(entry, "width")?,
                height: number(entry, "height")?,
                rotation: number(entry, "rotation"),
            })
        })
        .collect()
}

/// Reads `colors[]`, keeping only valid hex strings.
///
/// Entries may be plain strings or objects with a `hex` field.
pub fn parse_color_scheme(response: &Value) -> Vec<String> {
    let Some(entries) = response.get("colors").and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            entry
                .as_str()
                .or_else(|| entry.get("hex").and_then(Value::as_str))
        })
        .filter(|hex| crate::model::is_hex_color(hex))
        .map(str::to_string)
        .collect()
}

/// Reads `suggestions[]` as strings.
pub fn parse_suggestions(response: &Value) -> Vec<String> {
    response
        .get("suggestions")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
