//! Data model of the design canvas: layers and the products they decorate.

pub mod element;
pub mod product;

pub use element::{
    DesignElement, ElementContent, ElementId, ElementPatch, ElementType, TextAlign, TextStyle,
};
pub use product::{is_hex_color, PrintArea, Product, ProductColor, ProductView};
