//! Coordinate math over a regular N-gon in the chart's logical space.
//!
//! Everything here is pure. Axis `0` points straight up and indices proceed
//! clockwise (screen y grows downward). [`RadarConfig::project_onto_axis`] is
//! the inverse mapping used by drag handling and is the only way a pointer
//! position becomes a stored magnitude.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::consts::{
    CENTER, GRID_LEVELS, LABEL_OFFSET, LOGICAL_SIZE, MAX_MAGNITUDE, MAX_RADIUS, MIN_MAGNITUDE, POINT_RADIUS,
};

/// A point in either screen (client pixel) or logical space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product, treating both points as vectors.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Angle of axis `index` out of `count`, in radians.
///
/// `count` must be non-zero; callers only ask for axes that exist.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn axis_angle(index: usize, count: usize) -> f64 {
    TAU * index as f64 / count as f64 - FRAC_PI_2
}

/// Unit vector pointing along axis `index`.
#[must_use]
pub fn axis_direction(index: usize, count: usize) -> Point {
    let angle = axis_angle(index, count);
    Point::new(angle.cos(), angle.sin())
}

/// Clamp a raw magnitude into the storable range. `NaN` maps to the floor.
#[must_use]
pub fn clamp_magnitude(raw: f64) -> f64 {
    if raw.is_nan() {
        return MIN_MAGNITUDE;
    }
    raw.clamp(MIN_MAGNITUDE, MAX_MAGNITUDE)
}

/// Fixed layout of the chart within its logical coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarConfig {
    /// Width and height of the logical space.
    pub logical_size: f64,
    /// Chart center.
    pub center: Point,
    /// Radius of the outer ring (magnitude `1.0`).
    pub radius: f64,
    /// Number of grid rings.
    pub levels: u32,
    /// Extra distance past `radius` where labels sit.
    pub label_offset: f64,
    /// Control point radius.
    pub point_radius: f64,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            logical_size: LOGICAL_SIZE,
            center: Point::new(CENTER, CENTER),
            radius: MAX_RADIUS,
            levels: GRID_LEVELS,
            label_offset: LABEL_OFFSET,
            point_radius: POINT_RADIUS,
        }
    }
}

impl RadarConfig {
    /// Position at `magnitude` of the outer radius along axis `index`.
    #[must_use]
    pub fn point_on_axis(&self, index: usize, count: usize, magnitude: f64) -> Point {
        self.point_at_radius(index, count, magnitude * self.radius)
    }

    /// Center of the label for axis `index`.
    #[must_use]
    pub fn label_anchor(&self, index: usize, count: usize) -> Point {
        self.point_at_radius(index, count, self.radius + self.label_offset)
    }

    /// Vertices of grid ring `level` (1 = innermost, `levels` = outer ring).
    #[must_use]
    pub fn ring_vertices(&self, level: u32, count: usize) -> Vec<Point> {
        let magnitude = f64::from(level) / f64::from(self.levels.max(1));
        (0..count)
            .map(|i| self.point_on_axis(i, count, magnitude))
            .collect()
    }

    /// Project a logical-space position onto axis `index` and return the
    /// clamped magnitude.
    ///
    /// Uses the scalar projection onto the axis direction rather than the raw
    /// distance from center, so lateral drift keeps the point on its spoke.
    #[must_use]
    pub fn project_onto_axis(&self, index: usize, count: usize, logical: Point) -> f64 {
        let offset = Point::new(logical.x - self.center.x, logical.y - self.center.y);
        let along = offset.dot(axis_direction(index, count));
        clamp_magnitude(along / self.radius)
    }

    fn point_at_radius(&self, index: usize, count: usize, radius: f64) -> Point {
        let dir = axis_direction(index, count);
        Point::new(self.center.x + radius * dir.x, self.center.y + radius * dir.y)
    }
}

/// On-screen bounding box of the rendered chart element, in client pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Convert a client-space pointer position into logical units.
    ///
    /// Returns `None` when the element has no rendered area (collapsed or
    /// detached), since no meaningful scale exists.
    #[must_use]
    pub fn to_logical(&self, client: Point, logical_size: f64) -> Option<Point> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        let scale_x = logical_size / self.width;
        let scale_y = logical_size / self.height;
        Some(Point::new((client.x - self.left) * scale_x, (client.y - self.top) * scale_y))
    }
}
