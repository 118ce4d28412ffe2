//! Rendering: turns the model into layers and pushes them through a surface.
//!
//! The chart is drawn in two layers. The grid layer (rings, spokes, labels)
//! depends only on the axis set and is rebuilt by [`init_radar`] when labels
//! change. The data layer (polygon and control points) depends on the current
//! magnitudes and is redrawn by [`update_radar`] on every drag move.
//!
//! [`RadarSurface`] is the only seam to an actual drawing target. The crate
//! ships two: [`crate::svg::SvgScene`] (headless, retained) and
//! [`crate::dom::DomSurface`] (a live `<svg>` element).

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::geometry::{Point, RadarConfig};
use crate::hit::{ControlPoint, control_points};
use crate::model::RadarModel;

/// A spoke from the center to the outer ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spoke {
    pub from: Point,
    pub to: Point,
}

/// A centered axis label.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    pub at: Point,
}

/// Static background: rings, spokes and labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridLayer {
    /// Ring vertices, innermost first.
    pub rings: Vec<Vec<Point>>,
    pub spokes: Vec<Spoke>,
    pub labels: Vec<AxisLabel>,
}

/// Dynamic foreground: the data polygon and its control points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataLayer {
    pub polygon: Vec<Point>,
    pub points: Vec<ControlPoint>,
}

/// Drawing capability the renderer needs from a target.
pub trait RadarSurface {
    type Error;

    /// Remove everything drawn so far.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Remove only the data polygon and control points.
    fn clear_data(&mut self) -> Result<(), Self::Error>;

    fn draw_grid(&mut self, grid: &GridLayer) -> Result<(), Self::Error>;

    fn draw_polygon(&mut self, polygon: &[Point]) -> Result<(), Self::Error>;

    /// Draw control points. Each must keep its `axis` tag for pointer-down
    /// routing.
    fn draw_points(&mut self, points: &[ControlPoint]) -> Result<(), Self::Error>;
}

/// Build the grid layer for `labels`.
#[must_use]
pub fn build_grid(config: &RadarConfig, labels: &[String]) -> GridLayer {
    let count = labels.len();
    if count == 0 {
        return GridLayer::default();
    }
    let rings = (1..=config.levels)
        .map(|level| config.ring_vertices(level, count))
        .collect();
    let spokes = (0..count)
        .map(|i| Spoke { from: config.center, to: config.point_on_axis(i, count, 1.0) })
        .collect();
    let labels = labels
        .iter()
        .enumerate()
        .map(|(i, text)| AxisLabel { text: text.clone(), at: config.label_anchor(i, count) })
        .collect();
    GridLayer { rings, spokes, labels }
}

/// Build the data layer for `values`.
#[must_use]
pub fn build_data(config: &RadarConfig, values: &[f64]) -> DataLayer {
    let count = values.len();
    let polygon = values
        .iter()
        .enumerate()
        .map(|(i, &magnitude)| config.point_on_axis(i, count, magnitude))
        .collect();
    DataLayer { polygon, points: control_points(config, values) }
}

/// Full rebuild: clear, then draw grid and data layers.
///
/// # Errors
///
/// Propagates the first surface error.
pub fn init_radar<S: RadarSurface>(surface: &mut S, config: &RadarConfig, model: &RadarModel) -> Result<(), S::Error> {
    surface.clear()?;
    surface.draw_grid(&build_grid(config, model.labels()))?;
    update_radar(surface, config, model)
}

/// Partial redraw of the data layer only.
///
/// # Errors
///
/// Propagates the first surface error.
pub fn update_radar<S: RadarSurface>(surface: &mut S, config: &RadarConfig, model: &RadarModel) -> Result<(), S::Error> {
    surface.clear_data()?;
    if model.is_empty() {
        return Ok(());
    }
    let data = build_data(config, model.values());
    surface.draw_polygon(&data.polygon)?;
    surface.draw_points(&data.points)
}
