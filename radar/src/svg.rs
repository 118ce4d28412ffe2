//! Retained SVG scene and its serializers.
//!
//! [`SvgScene`] records what the renderer drew, element by element, the same
//! way the live `<svg>` does. It serializes two ways: [`SvgScene::to_svg_string`]
//! emits class names only (for a page stylesheet), and
//! [`SvgScene::to_export_svg`] inlines every visual attribute so consumers
//! without the stylesheet (the rasterizer, word processors) see the same
//! chart.

#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

use std::convert::Infallible;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::geometry::Point;
use crate::hit::ControlPoint;
use crate::render::{GridLayer, RadarSurface};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub const CLASS_GRID: &str = "grid-line";
pub const CLASS_AXIS: &str = "axis-line";
pub const CLASS_LABEL: &str = "axis-label";
pub const CLASS_POLYGON: &str = "radar-polygon";
pub const CLASS_POINT: &str = "radar-point";

/// Inline paint attributes applied on export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportStyle {
    pub grid_stroke: String,
    pub grid_stroke_width: f64,
    pub axis_stroke: String,
    pub axis_stroke_width: f64,
    pub label_font_family: String,
    pub label_font_weight: String,
    pub label_font_size: String,
    pub label_fill: String,
    pub polygon_fill: String,
    pub polygon_stroke: String,
    pub polygon_stroke_width: f64,
    pub point_fill: String,
    pub point_stroke: String,
    pub point_stroke_width: f64,
}

impl Default for ExportStyle {
    fn default() -> Self {
        Self {
            grid_stroke: "#e0e0e0".into(),
            grid_stroke_width: 1.0,
            axis_stroke: "#ccc".into(),
            axis_stroke_width: 1.0,
            label_font_family: "Arial, sans-serif".into(),
            label_font_weight: "700".into(),
            label_font_size: "12px".into(),
            label_fill: "#333".into(),
            polygon_fill: "rgba(0, 102, 255, 0.15)".into(),
            polygon_stroke: "#0066ff".into(),
            polygon_stroke_width: 3.0,
            point_fill: "#0066ff".into(),
            point_stroke: "#fff".into(),
            point_stroke_width: 3.0,
        }
    }
}

/// One drawn element.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneElement {
    Ring(Vec<Point>),
    Spoke { from: Point, to: Point },
    Label { text: String, at: Point },
    Polygon(Vec<Point>),
    ControlPoint(ControlPoint),
}

impl SceneElement {
    /// Whether this element belongs to the data layer.
    #[must_use]
    pub fn is_data(&self) -> bool {
        matches!(self, Self::Polygon(_) | Self::ControlPoint(_))
    }
}

/// Headless [`RadarSurface`] that keeps the drawn elements in order.
#[derive(Debug, Clone)]
pub struct SvgScene {
    size: f64,
    elements: Vec<SceneElement>,
}

impl SvgScene {
    /// An empty scene with a `size` x `size` view box.
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self { size, elements: Vec::new() }
    }

    #[must_use]
    pub fn elements(&self) -> &[SceneElement] {
        &self.elements
    }

    /// Vertices of the data polygon, if one is drawn.
    #[must_use]
    pub fn data_polygon(&self) -> Option<&[Point]> {
        self.elements.iter().find_map(|e| match e {
            SceneElement::Polygon(points) => Some(points.as_slice()),
            _ => None,
        })
    }

    #[must_use]
    pub fn control_points(&self) -> Vec<ControlPoint> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                SceneElement::ControlPoint(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    /// Serialize with class names only.
    #[must_use]
    pub fn to_svg_string(&self) -> String {
        self.serialize(None)
    }

    /// Serialize as a self-contained document with every paint attribute
    /// inlined and explicit pixel dimensions.
    #[must_use]
    pub fn to_export_svg(&self, style: &ExportStyle) -> String {
        self.serialize(Some(style))
    }

    fn serialize(&self, style: Option<&ExportStyle>) -> String {
        let size = fmt_num(self.size);
        let mut out = format!(r#"<svg xmlns="{SVG_NS}" viewBox="0 0 {size} {size}""#);
        if style.is_some() {
            out.push_str(&format!(r#" width="{size}" height="{size}""#));
        }
        out.push_str(">\n");
        for element in &self.elements {
            write_element(&mut out, element, style);
        }
        out.push_str("</svg>\n");
        out
    }
}

impl RadarSurface for SvgScene {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.elements.clear();
        Ok(())
    }

    fn clear_data(&mut self) -> Result<(), Self::Error> {
        self.elements.retain(|e| !e.is_data());
        Ok(())
    }

    fn draw_grid(&mut self, grid: &GridLayer) -> Result<(), Self::Error> {
        self.elements
            .extend(grid.rings.iter().cloned().map(SceneElement::Ring));
        self.elements.extend(
            grid.spokes
                .iter()
                .map(|s| SceneElement::Spoke { from: s.from, to: s.to }),
        );
        self.elements.extend(
            grid.labels
                .iter()
                .map(|l| SceneElement::Label { text: l.text.clone(), at: l.at }),
        );
        Ok(())
    }

    fn draw_polygon(&mut self, polygon: &[Point]) -> Result<(), Self::Error> {
        self.elements.push(SceneElement::Polygon(polygon.to_vec()));
        Ok(())
    }

    fn draw_points(&mut self, points: &[ControlPoint]) -> Result<(), Self::Error> {
        self.elements
            .extend(points.iter().copied().map(SceneElement::ControlPoint));
        Ok(())
    }
}

fn write_element(out: &mut String, element: &SceneElement, style: Option<&ExportStyle>) {
    let line = match element {
        SceneElement::Ring(points) => {
            let paint = style.map_or_else(String::new, |s| {
                format!(
                    r#" fill="none" stroke="{}" stroke-width="{}""#,
                    s.grid_stroke,
                    fmt_num(s.grid_stroke_width)
                )
            });
            format!(r#"<polygon points="{}" class="{CLASS_GRID}"{paint}/>"#, format_points(points))
        }
        SceneElement::Spoke { from, to } => {
            let paint = style.map_or_else(String::new, |s| {
                format!(r#" stroke="{}" stroke-width="{}""#, s.axis_stroke, fmt_num(s.axis_stroke_width))
            });
            format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" class="{CLASS_AXIS}"{paint}/>"#,
                fmt_num(from.x),
                fmt_num(from.y),
                fmt_num(to.x),
                fmt_num(to.y)
            )
        }
        SceneElement::Label { text, at } => {
            let paint = style.map_or_else(String::new, |s| {
                format!(
                    r#" font-family="{}" font-weight="{}" font-size="{}" fill="{}""#,
                    escape_xml(&s.label_font_family),
                    s.label_font_weight,
                    s.label_font_size,
                    s.label_fill
                )
            });
            format!(
                r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" class="{CLASS_LABEL}"{paint}>{}</text>"#,
                fmt_num(at.x),
                fmt_num(at.y),
                escape_xml(text)
            )
        }
        SceneElement::Polygon(points) => {
            let paint = style.map_or_else(String::new, |s| {
                format!(
                    r#" fill="{}" stroke="{}" stroke-width="{}""#,
                    s.polygon_fill,
                    s.polygon_stroke,
                    fmt_num(s.polygon_stroke_width)
                )
            });
            format!(r#"<polygon points="{}" class="{CLASS_POLYGON}"{paint}/>"#, format_points(points))
        }
        SceneElement::ControlPoint(p) => {
            let paint = style.map_or_else(String::new, |s| {
                format!(
                    r#" fill="{}" stroke="{}" stroke-width="{}""#,
                    s.point_fill,
                    s.point_stroke,
                    fmt_num(s.point_stroke_width)
                )
            });
            format!(
                r#"<circle cx="{}" cy="{}" r="{}" class="{CLASS_POINT}" data-index="{}"{paint}/>"#,
                fmt_num(p.center.x),
                fmt_num(p.center.y),
                fmt_num(p.radius),
                p.axis
            )
        }
    };
    out.push_str(&line);
    out.push('\n');
}

/// Format a point list as an SVG `points` attribute (`"x,y x,y ..."`).
#[must_use]
pub fn format_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a coordinate with at most three decimals and no trailing zeros.
#[must_use]
pub fn fmt_num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // Adding positive zero turns -0.0 into 0.0 so nothing prints as "-0".
    format!("{}", rounded + 0.0)
}

/// Encode an SVG document as a base64 `data:` URI.
#[must_use]
pub fn svg_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg.as_bytes()))
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
