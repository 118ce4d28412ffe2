//! Shared numeric constants for the radar crate.

// ── Logical surface ─────────────────────────────────────────────

/// Width and height of the logical coordinate space, in logical units.
pub const LOGICAL_SIZE: f64 = 320.0;

/// Chart center on both axes.
pub const CENTER: f64 = 160.0;

/// Radius of the outermost grid ring.
pub const MAX_RADIUS: f64 = 110.0;

// ── Grid ────────────────────────────────────────────────────────

/// Number of concentric grid rings.
pub const GRID_LEVELS: u32 = 4;

/// Distance beyond the outer ring at which axis labels are centered.
pub const LABEL_OFFSET: f64 = 25.0;

// ── Magnitudes ──────────────────────────────────────────────────

/// Lowest storable magnitude; keeps a grabbable point off the exact center.
pub const MIN_MAGNITUDE: f64 = 0.05;

/// Highest storable magnitude (the outer ring).
pub const MAX_MAGNITUDE: f64 = 1.0;

/// Magnitude every axis starts at after a label reset.
pub const DEFAULT_MAGNITUDE: f64 = 0.5;

// ── Hit-testing ─────────────────────────────────────────────────

/// Radius of a control point, in logical units.
pub const POINT_RADIUS: f64 = 10.0;

// ── Export ──────────────────────────────────────────────────────

/// Side length of the exported raster, in pixels.
pub const EXPORT_SIZE_PX: u32 = 320;
