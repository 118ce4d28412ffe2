#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::geometry::{Point, RadarConfig};

/// A draggable marker at an axis's current data position.
///
/// `axis` is the stable association back to the model; surfaces must carry it
/// through (the DOM adapter writes it as `data-index`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub axis: usize,
    pub center: Point,
    pub radius: f64,
}

impl ControlPoint {
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        self.center.distance(pt) <= self.radius
    }
}

/// Control points for `values`, one per axis in index order.
#[must_use]
pub fn control_points(config: &RadarConfig, values: &[f64]) -> Vec<ControlPoint> {
    let count = values.len();
    values
        .iter()
        .enumerate()
        .map(|(axis, &magnitude)| ControlPoint {
            axis,
            center: config.point_on_axis(axis, count, magnitude),
            radius: config.point_radius,
        })
        .collect()
}

/// Axis of the control point under `logical_pt`, if any.
///
/// Points are drawn in index order, so the last one drawn is on top and wins
/// when markers overlap near the center.
#[must_use]
pub fn hit_test(logical_pt: Point, points: &[ControlPoint]) -> Option<usize> {
    points
        .iter()
        .rev()
        .find(|p| p.contains(logical_pt))
        .map(|p| p.axis)
}

/// Parse an axis tag (the `data-index` attribute) and check it names an axis.
#[must_use]
pub fn parse_axis_tag(raw: &str, count: usize) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(axis) if axis < count => Some(axis),
        _ => None,
    }
}
