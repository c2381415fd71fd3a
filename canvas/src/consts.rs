//! Shared numeric constants for the canvas crate.

// ── Surface ─────────────────────────────────────────────────────

/// Default drawing surface width in CSS pixels.
pub const SURFACE_WIDTH: f64 = 1000.0;

/// Default drawing surface height in CSS pixels.
pub const SURFACE_HEIGHT: f64 = 800.0;

/// Edge length of one background grid cell.
pub const GRID_SIZE: f64 = 15.0;

/// Largest accepted surface width or height.
pub const MAX_SURFACE_EXTENT: f64 = 8192.0;

/// Largest accepted number of background grid cells per frame.
pub const MAX_GRID_CELLS: f64 = 250_000.0;

// ── Points ──────────────────────────────────────────────────────

/// A pointer-down closer than this (strictly) grabs an existing point.
pub const PROXIMITY_PX: f64 = 20.0;

/// Radius of the filled point marker.
pub const POINT_RADIUS: f64 = 5.0;

/// Offset of a point's label from the point center.
pub const LABEL_OFFSET_X: f64 = 10.0;
pub const LABEL_OFFSET_Y: f64 = -10.0;

// ── Measurement ─────────────────────────────────────────────────

/// Pixels per displayed centimeter.
pub const PX_PER_CM: f64 = 20.0;

/// Vertical nudge of a length label above the segment midpoint.
pub const LENGTH_LABEL_NUDGE_Y: f64 = -5.0;

/// Radius of the arc drawn between two segments at a chain vertex.
pub const ANGLE_ARC_RADIUS: f64 = 30.0;

/// Distance of the total-length label from the right edge of the surface.
pub const TOTAL_LABEL_INSET_X: f64 = 120.0;

/// Baseline of the total-length label.
pub const TOTAL_LABEL_Y: f64 = 20.0;

// ── Colors ──────────────────────────────────────────────────────

pub const GRID_COLOR: &str = "#ddd";
pub const INK_COLOR: &str = "black";
pub const ANGLE_COLOR: &str = "blue";
