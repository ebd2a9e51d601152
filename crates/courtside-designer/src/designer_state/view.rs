//! Product, color, size, zoom and guide controls.

use super::DesignerState;
use crate::model::{is_hex_color, Product, ProductView};
use courtside_core::DesignError;

pub const DEFAULT_ZOOM: u32 = 100;

/// Allowed zoom range and step, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomLimits {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: 50,
            max: 200,
            step: 10,
        }
    }
}

impl ZoomLimits {
    pub fn clamp(&self, zoom: u32) -> u32 {
        zoom.clamp(self.min, self.max)
    }
}

impl DesignerState {
    /// Switches product.
    ///
    /// The color resets to the product's first color, the custom color is
    /// cleared and sizes the product does not offer are dropped.
    pub fn set_product(&mut self, product: Product) {
        if let Some(color) = product.default_color() {
            self.color = color.hex.clone();
            self.color_name = color.name.clone();
        }
        self.custom_color = None;
        self.selected_sizes.retain(|size| product.offers_size(size));
        tracing::debug!("Product set to {}", product.id);
        self.product = Some(product);
    }

    /// Selects one of the product's colors by name.
    pub fn select_color(&mut self, name: &str) -> Result<(), DesignError> {
        let product = self.product.as_ref().ok_or(DesignError::ProductNotSet)?;
        let color = product
            .color_named(name)
            .cloned()
            .ok_or_else(|| DesignError::Validation {
                reason: format!("{} is not available in {}", name, product.name),
            })?;
        self.color = color.hex;
        self.color_name = color.name;
        self.custom_color = None;
        Ok(())
    }

    /// Sets or clears the free-form color.
    pub fn set_custom_color(&mut self, hex: Option<String>) -> Result<(), DesignError> {
        if let Some(value) = &hex {
            if !is_hex_color(value) {
                return Err(DesignError::Validation {
                    reason: format!("{} is not a valid hex color", value),
                });
            }
        }
        self.custom_color = hex;
        Ok(())
    }

    /// The color the garment is tinted with.
    pub fn effective_color(&self) -> &str {
        self.custom_color.as_deref().unwrap_or(&self.color)
    }

    /// Display name of the effective color.
    pub fn effective_color_name(&self) -> &str {
        match &self.custom_color {
            Some(hex) => hex,
            None => &self.color_name,
        }
    }

    pub fn set_view(&mut self, view: ProductView) {
        self.view = view;
    }

    /// Adds the size if absent, removes it otherwise. Returns whether the
    /// size is selected afterwards.
    pub fn toggle_size(&mut self, size: &str) -> bool {
        if let Some(pos) = self.selected_sizes.iter().position(|s| s == size) {
            self.selected_sizes.remove(pos);
            false
        } else {
            self.selected_sizes.push(size.to_string());
            true
        }
    }

    pub fn zoom_limits(&self) -> ZoomLimits {
        self.zoom_limits
    }

    /// Replaces the zoom limits and re-clamps the current zoom.
    pub fn set_zoom_limits(&mut self, limits: ZoomLimits) {
        self.zoom_limits = limits;
        self.zoom = limits.clamp(self.zoom);
    }

    pub fn set_zoom(&mut self, zoom: u32) {
        self.zoom = self.zoom_limits.clamp(zoom);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom.saturating_add(self.zoom_limits.step));
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom.saturating_sub(self.zoom_limits.step));
    }

    pub fn reset_zoom(&mut self) {
        self.set_zoom(DEFAULT_ZOOM);
    }

    pub fn toggle_guides(&mut self) {
        self.show_guides = !self.show_guides;
    }
}
