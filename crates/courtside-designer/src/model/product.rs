//! Products the designer can decorate: mockups, colors, sizes and the
//! printable area.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Side of the garment being edited
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ProductView {
    #[default]
    Front,
    Back,
    Angle,
}

impl ProductView {
    pub const ALL: [ProductView; 3] = [ProductView::Front, ProductView::Back, ProductView::Angle];
}

impl std::fmt::Display for ProductView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Front => write!(f, "front"),
            Self::Back => write!(f, "back"),
            Self::Angle => write!(f, "angle"),
        }
    }
}

impl FromStr for ProductView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "front" => Ok(Self::Front),
            "back" => Ok(Self::Back),
            "angle" => Ok(Self::Angle),
            other => Err(format!("unknown view '{}'", other)),
        }
    }
}

/// A named garment color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductColor {
    pub name: String,
    pub hex: String,
}

impl ProductColor {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }
}

/// Printable region of the mockup, in canvas percentages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrintArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for PrintArea {
    fn default() -> Self {
        Self {
            x: 25.0,
            y: 20.0,
            width: 50.0,
            height: 55.0,
        }
    }
}

impl PrintArea {
    /// Returns true if the percentage box lies fully inside the area.
    pub fn contains_box(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        x >= self.x
            && y >= self.y
            && x + width <= self.x + self.width
            && y + height <= self.y + self.height
    }
}

/// A decoratable product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub base_price: f64,
    #[serde(default)]
    pub colors: Vec<ProductColor>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub mockups: BTreeMap<ProductView, String>,
    #[serde(default)]
    pub printable_area: PrintArea,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, base_price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base_price,
            colors: Vec::new(),
            sizes: Vec::new(),
            mockups: BTreeMap::new(),
            printable_area: PrintArea::default(),
        }
    }

    pub fn with_color(mut self, name: impl Into<String>, hex: impl Into<String>) -> Self {
        self.colors.push(ProductColor::new(name, hex));
        self
    }

    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes.extend(sizes.into_iter().map(Into::into));
        self
    }

    pub fn with_mockup(mut self, view: ProductView, src: impl Into<String>) -> Self {
        self.mockups.insert(view, src.into());
        self
    }

    pub fn with_printable_area(mut self, area: PrintArea) -> Self {
        self.printable_area = area;
        self
    }

    /// Mockup image for a view, if the product has one.
    pub fn mockup(&self, view: ProductView) -> Option<&str> {
        self.mockups.get(&view).map(String::as_str)
    }

    /// First listed color, used when the product is first selected.
    pub fn default_color(&self) -> Option<&ProductColor> {
        self.colors.first()
    }

    pub fn offers_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    pub fn color_named(&self, name: &str) -> Option<&ProductColor> {
        self.colors.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

/// Returns true for `#rgb` and `#rrggbb` hex colors.
pub fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}
