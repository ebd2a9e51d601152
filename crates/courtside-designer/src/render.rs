//! Render/overlay composition.
//!
//! `RenderPlan` is a display list built from the session state for a canvas
//! of a given pixel size: mockup, color tint, printable-area guide and the
//! visible layers in render order. `to_svg` turns the plan into a
//! standalone SVG document.
//!
//! The tint uses the masking technique: a rectangle filled with the garment
//! color is multiplied over the mockup and masked by the mockup's own alpha,
//! so only the garment pixels pick up the color.

use crate::designer_state::DesignerState;
use crate::model::{ElementContent, ElementId, TextAlign, TextStyle};
use courtside_core::units::percent_to_px;
use std::fmt::Write as _;

const GUIDE_STROKE: &str = "#3b82f6";
const MASK_ID: &str = "garment-mask";

/// Pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    fn from_percent(x: f64, y: f64, width: f64, height: f64, canvas_w: f64, canvas_h: f64) -> Self {
        Self {
            x: percent_to_px(x, canvas_w),
            y: percent_to_px(y, canvas_h),
            width: percent_to_px(width, canvas_w),
            height: percent_to_px(height, canvas_h),
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// What a layer item draws
#[derive(Debug, Clone, PartialEq)]
pub enum LayerContent {
    Image { src: String },
    Text { text: String, style: TextStyle },
}

/// One entry of the display list
#[derive(Debug, Clone, PartialEq)]
pub enum RenderItem {
    /// Base product image for the current view
    Mockup { src: String },
    /// Garment color multiplied over the mockup, masked by `mask_src`
    Tint { color: String, mask_src: Option<String> },
    /// Printable-area outline
    PrintGuide { rect: PixelRect },
    /// A visible design element
    Layer {
        id: ElementId,
        rect: PixelRect,
        rotation: f64,
        /// 0.0 to 1.0
        opacity: f64,
        content: LayerContent,
    },
}

/// Ordered display list for one canvas size
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub width: f64,
    pub height: f64,
    pub items: Vec<RenderItem>,
}

impl RenderPlan {
    /// Builds the display list for a canvas of `width` × `height` pixels.
    pub fn build(state: &DesignerState, width: f64, height: f64) -> Self {
        let mut items = Vec::new();

        let mockup = state
            .product
            .as_ref()
            .and_then(|p| p.mockup(state.view))
            .map(str::to_string);

        if let Some(src) = &mockup {
            items.push(RenderItem::Mockup { src: src.clone() });
        }

        items.push(RenderItem::Tint {
            color: state.effective_color().to_string(),
            mask_src: mockup,
        });

        if state.show_guides {
            let area = state
                .product
                .as_ref()
                .map(|p| p.printable_area)
                .unwrap_or_default();
            items.push(RenderItem::PrintGuide {
                rect: PixelRect::from_percent(area.x, area.y, area.width, area.height, width, height),
            });
        }

        for element in state.elements.iter().filter(|e| e.visible) {
            let content = match &element.content {
                ElementContent::Image { src } => LayerContent::Image { src: src.clone() },
                ElementContent::Text { text, style } => LayerContent::Text {
                    text: text.clone(),
                    style: style.clone(),
                },
            };
            items.push(RenderItem::Layer {
                id: element.id,
                rect: PixelRect::from_percent(
                    element.x,
                    element.y,
                    element.width,
                    element.height,
                    width,
                    height,
                ),
                rotation: element.rotation,
                opacity: element.opacity / 100.0,
                content,
            });
        }

        Self {
            width,
            height,
            items,
        }
    }

    /// Ids of the layers in draw order.
    pub fn layer_ids(&self) -> Vec<ElementId> {
        self.items
            .iter()
            .filter_map(|item| match item {
                RenderItem::Layer { id, .. } => Some(*id),
                _ => None,
            })
            .collect()
    }

    /// Serialises the plan as an SVG document.
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = fmt_num(self.width),
            h = fmt_num(self.height)
        );

        for item in &self.items {
            match item {
                RenderItem::Mockup { src } => {
                    let _ = writeln!(
                        svg,
                        r#"  <image href="{}" x="0" y="0" width="{}" height="{}" preserveAspectRatio="xMidYMid meet"/>"#,
                        escape_xml(src),
                        fmt_num(self.width),
                        fmt_num(self.height)
                    );
                }
                RenderItem::Tint { color, mask_src } => {
                    let mask_attr = match mask_src {
                        Some(src) => {
                            let _ = writeln!(
                                svg,
                                r#"  <defs><mask id="{}" style="mask-type:alpha"><image href="{}" x="0" y="0" width="{}" height="{}" preserveAspectRatio="xMidYMid meet"/></mask></defs>"#,
                                MASK_ID,
                                escape_xml(src),
                                fmt_num(self.width),
                                fmt_num(self.height)
                            );
                            format!(r#" mask="url(#{})""#, MASK_ID)
                        }
                        None => String::new(),
                    };
                    let _ = writeln!(
                        svg,
                        r#"  <rect x="0" y="0" width="{}" height="{}" fill="{}" style="mix-blend-mode:multiply"{}/>"#,
                        fmt_num(self.width),
                        fmt_num(self.height),
                        escape_xml(color),
                        mask_attr
                    );
                }
                RenderItem::PrintGuide { rect } => {
                    let _ = writeln!(
                        svg,
                        r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-width="1" stroke-dasharray="6 4"/>"#,
                        fmt_num(rect.x),
                        fmt_num(rect.y),
                        fmt_num(rect.width),
                        fmt_num(rect.height),
                        GUIDE_STROKE
                    );
                }
                RenderItem::Layer {
                    id,
                    rect,
                    rotation,
                    opacity,
                    content,
                } => {
                    let (cx, cy) = rect.center();
                    let _ = writeln!(
                        svg,
                        r#"  <g id="layer-{}" transform="rotate({} {} {})" opacity="{}">"#,
                        id,
                        fmt_num(*rotation),
                        fmt_num(cx),
                        fmt_num(cy),
                        fmt_num(*opacity)
                    );
                    match content {
                        LayerContent::Image { src } => {
                            let _ = writeln!(
                                svg,
                                r#"    <image href="{}" x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="xMidYMid meet"/>"#,
                                escape_xml(src),
                                fmt_num(rect.x),
                                fmt_num(rect.y),
                                fmt_num(rect.width),
                                fmt_num(rect.height)
                            );
                        }
                        LayerContent::Text { text, style } => {
                            let (x, anchor) = match style.text_align {
                                TextAlign::Left => (rect.x, "start"),
                                TextAlign::Center => (cx, "middle"),
                                TextAlign::Right => (rect.x + rect.width, "end"),
                            };
                            let _ = writeln!(
                                svg,
                                r#"    <text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}" fill="{}" text-anchor="{}" dominant-baseline="middle">{}</text>"#,
                                fmt_num(x),
                                fmt_num(cy),
                                escape_xml(&style.font_family),
                                fmt_num(style.font_size),
                                escape_xml(&style.font_weight),
                                escape_xml(&style.color),
                                anchor,
                                escape_xml(text)
                            );
                        }
                    }
                    svg.push_str("  </g>\n");
                }
            }
        }

        svg.push_str("</svg>\n");
        svg
    }
}

/// Formats a number without trailing zeros.
fn fmt_num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
