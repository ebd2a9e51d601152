//! Design elements: the images and text placed on a product mockup.
//!
//! Geometry is stored as percentages of the canvas bounding box. Every
//! mutation path goes through the clamping setters so the invariants
//! (0 ≤ x, y, width, height, opacity ≤ 100 and rotation ∈ [-180, 180]) hold
//! regardless of where the values came from.

use courtside_core::units::{clamp_percent, normalize_degrees};
use courtside_core::DesignError;
use serde::{Deserialize, Serialize};

/// Identifier of an element within one design session.
pub type ElementId = u64;

/// Default placement of a freshly added element.
pub const DEFAULT_X: f64 = 35.0;
pub const DEFAULT_Y: f64 = 30.0;
pub const DEFAULT_IMAGE_SIZE: f64 = 30.0;
pub const DEFAULT_TEXT_WIDTH: f64 = 30.0;
pub const DEFAULT_TEXT_HEIGHT: f64 = 10.0;

/// Offset applied to a duplicated element so it does not hide the original.
pub const DUPLICATE_OFFSET: f64 = 5.0;

/// Element type discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Image,
    Text,
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Horizontal alignment of text inside its box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Font settings of a text element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_family: String,
    /// Font size in CSS pixels at 100% zoom
    pub font_size: f64,
    pub font_weight: String,
    pub color: String,
    #[serde(default)]
    pub text_align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 24.0,
            font_weight: "bold".to_string(),
            color: "#000000".to_string(),
            text_align: TextAlign::Center,
        }
    }
}

/// What an element draws
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementContent {
    Image { src: String },
    Text {
        text: String,
        #[serde(flatten)]
        style: TextStyle,
    },
}

/// A positioned image or text layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignElement {
    pub id: ElementId,
    #[serde(flatten)]
    pub content: ElementContent,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub opacity: f64,
    pub locked: bool,
    pub visible: bool,
}

/// Partial update of an element; `None` leaves the field untouched.
///
/// Text-only fields are ignored for image elements and `src` is ignored for
/// text elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
    pub opacity: Option<f64>,
    pub locked: Option<bool>,
    pub visible: Option<bool>,
    pub src: Option<String>,
    pub text: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<String>,
    pub color: Option<String>,
    pub text_align: Option<TextAlign>,
}

impl ElementPatch {
    /// Patch that moves an element.
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    /// Patch that resizes an element.
    pub fn size(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Default::default()
        }
    }

    /// Returns true when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn check_finite(&self) -> Result<(), DesignError> {
        let numeric = [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
            ("rotation", self.rotation),
            ("opacity", self.opacity),
            ("fontSize", self.font_size),
        ];
        for (field, value) in numeric {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(DesignError::InvalidValue {
                        field: field.to_string(),
                        value: v,
                    });
                }
            }
        }
        if let Some(size) = self.font_size {
            if size <= 0.0 {
                return Err(DesignError::InvalidValue {
                    field: "fontSize".to_string(),
                    value: size,
                });
            }
        }
        Ok(())
    }
}

impl DesignElement {
    fn with_content(id: ElementId, content: ElementContent, width: f64, height: f64) -> Self {
        Self {
            id,
            content,
            x: DEFAULT_X,
            y: DEFAULT_Y,
            width,
            height,
            rotation: 0.0,
            opacity: 100.0,
            locked: false,
            visible: true,
        }
    }

    /// Creates an image element at the default placement.
    pub fn image(id: ElementId, src: impl Into<String>) -> Self {
        Self::with_content(
            id,
            ElementContent::Image { src: src.into() },
            DEFAULT_IMAGE_SIZE,
            DEFAULT_IMAGE_SIZE,
        )
    }

    /// Creates a text element at the default placement with the default style.
    pub fn text(id: ElementId, text: impl Into<String>) -> Self {
        Self::with_content(
            id,
            ElementContent::Text {
                text: text.into(),
                style: TextStyle::default(),
            },
            DEFAULT_TEXT_WIDTH,
            DEFAULT_TEXT_HEIGHT,
        )
    }

    pub fn element_type(&self) -> ElementType {
        match self.content {
            ElementContent::Image { .. } => ElementType::Image,
            ElementContent::Text { .. } => ElementType::Text,
        }
    }

    /// Short human-readable name for the layers panel.
    pub fn label(&self) -> String {
        match &self.content {
            ElementContent::Image { src } if src.starts_with("data:") => "Image".to_string(),
            ElementContent::Image { src } => src
                .split('?')
                .next()
                .and_then(|path| path.rsplit('/').next())
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| "Image".to_string()),
            ElementContent::Text { text, .. } => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    "Text".to_string()
                } else if trimmed.chars().count() > 20 {
                    let head: String = trimmed.chars().take(20).collect();
                    format!("{}…", head)
                } else {
                    trimmed.to_string()
                }
            }
        }
    }

    /// Sets the position, clamped into [0, 100].
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = clamp_percent(x);
        self.y = clamp_percent(y);
    }

    /// Sets the size, clamped into [0, 100].
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = clamp_percent(width);
        self.height = clamp_percent(height);
    }

    /// Sets the rotation, wrapped into [-180, 180].
    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = normalize_degrees(rotation);
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = clamp_percent(opacity);
    }

    /// Center of the element in canvas percentages.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns true if the percentage point lies inside the (rotated) box.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        let (cx, cy) = self.center();
        let theta = (-self.rotation).to_radians();
        let (sin, cos) = theta.sin_cos();
        let dx = px - cx;
        let dy = py - cy;
        let lx = dx * cos - dy * sin;
        let ly = dx * sin + dy * cos;
        lx.abs() <= self.width / 2.0 && ly.abs() <= self.height / 2.0
    }

    /// Merges a patch into this element, clamping every value.
    pub fn apply_patch(&mut self, patch: &ElementPatch) -> Result<(), DesignError> {
        patch.check_finite()?;

        if let Some(x) = patch.x {
            self.x = clamp_percent(x);
        }
        if let Some(y) = patch.y {
            self.y = clamp_percent(y);
        }
        if let Some(width) = patch.width {
            self.width = clamp_percent(width);
        }
        if let Some(height) = patch.height {
            self.height = clamp_percent(height);
        }
        if let Some(rotation) = patch.rotation {
            self.set_rotation(rotation);
        }
        if let Some(opacity) = patch.opacity {
            self.set_opacity(opacity);
        }
        if let Some(locked) = patch.locked {
            self.locked = locked;
        }
        if let Some(visible) = patch.visible {
            self.visible = visible;
        }

        match &mut self.content {
            ElementContent::Image { src } => {
                if let Some(new_src) = &patch.src {
                    *src = new_src.clone();
                }
            }
            ElementContent::Text { text, style } => {
                if let Some(new_text) = &patch.text {
                    *text = new_text.clone();
                }
                if let Some(family) = &patch.font_family {
                    style.font_family = family.clone();
                }
                if let Some(size) = patch.font_size {
                    style.font_size = size;
                }
                if let Some(weight) = &patch.font_weight {
                    style.font_weight = weight.clone();
                }
                if let Some(color) = &patch.color {
                    style.color = color.clone();
                }
                if let Some(align) = patch.text_align {
                    style.text_align = align;
                }
            }
        }
        Ok(())
    }

    /// Brings values read from outside (design files) back inside the
    /// invariants. Non-finite numbers and a non-positive font size cannot be
    /// repaired and are rejected.
    pub fn normalize(&mut self) -> Result<(), DesignError> {
        let numeric = [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
            ("rotation", self.rotation),
            ("opacity", self.opacity),
        ];
        if let Some((field, value)) = numeric.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(DesignError::InvalidValue {
                field: field.to_string(),
                value,
            });
        }
        if let ElementContent::Text { style, .. } = &self.content {
            if !style.font_size.is_finite() || style.font_size <= 0.0 {
                return Err(DesignError::InvalidValue {
                    field: "fontSize".to_string(),
                    value: style.font_size,
                });
            }
        }

        self.set_position(self.x, self.y);
        self.set_size(self.width, self.height);
        self.set_rotation(self.rotation);
        self.set_opacity(self.opacity);
        Ok(())
    }

    /// Copy of this element under a new id, offset and unlocked.
    pub fn duplicate(&self, id: ElementId) -> Self {
        let mut copy = self.clone();
        copy.id = id;
        copy.locked = false;
        copy.set_position(self.x + DUPLICATE_OFFSET, self.y + DUPLICATE_OFFSET);
        copy
    }
}
