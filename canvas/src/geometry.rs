//! Plane geometry used by hit-testing and measurement.
//!
//! Everything here is plain `f64` math on surface coordinates (origin top-left,
//! y grows downward). Angle helpers clamp their cosine into `[-1, 1]` so that
//! collinear or near-collinear configurations produce 0° or 180° instead of
//! `NaN`; they only give up (`None`) when an adjacent side has zero length.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point on the drawing surface, in CSS pixels.
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

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Midpoint of the segment from `self` to `other`.
    #[must_use]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Translate by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Direction from `self` toward `other`, in radians, as `atan2` reports it.
    #[must_use]
    pub fn heading_to(self, other: Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

/// Convert a pixel distance to centimeters.
#[must_use]
pub fn px_to_cm(px: f64, px_per_cm: f64) -> f64 {
    px / px_per_cm
}

/// Angle in degrees opposite side `c` of a triangle with sides `a`, `b`, `c`.
///
/// Uses the law of cosines: `acos((a² + b² − c²) / 2ab)`. Returns `None` when
/// `a` or `b` is zero, since the angle between them is undefined.
#[must_use]
pub fn law_of_cosines_deg(a: f64, b: f64, c: f64) -> Option<f64> {
    let denom = 2.0 * a * b;
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }
    let cos = (a * a + b * b - c * c) / denom;
    Some(clamped_acos_deg(cos))
}

/// Angle in degrees at `vertex` between the arms toward `prev` and `next`.
#[must_use]
pub fn vertex_angle_deg(prev: Point, vertex: Point, next: Point) -> Option<f64> {
    let (ux, uy) = (prev.x - vertex.x, prev.y - vertex.y);
    let (vx, vy) = (next.x - vertex.x, next.y - vertex.y);
    let mags = ux.hypot(uy) * vx.hypot(vy);
    if mags == 0.0 {
        return None;
    }
    Some(clamped_acos_deg((ux * vx + uy * vy) / mags))
}

fn clamped_acos_deg(cos: f64) -> f64 {
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}
