//! Derived measurements: segment lengths, triangle sides and angles.
//!
//! Nothing here is cached. `Measurements::compute` is called on every render
//! from the current point store, so a drag is reflected immediately and there
//! is no stale state to invalidate.

#[cfg(test)]
#[path = "measure_test.rs"]
mod measure_test;

use crate::doc::{Label, PointStore};
use crate::geometry::{Point, law_of_cosines_deg, px_to_cm, vertex_angle_deg};

/// One segment between consecutive points.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub from: Label,
    pub to: Label,
    pub start: Point,
    pub end: Point,
    /// Length in centimeters.
    pub length_cm: f64,
}

impl Segment {
    fn new(from: (&Label, Point), to: (&Label, Point), px_per_cm: f64) -> Self {
        Self {
            from: from.0.clone(),
            to: to.0.clone(),
            start: from.1,
            end: to.1,
            length_cm: px_to_cm(from.1.distance(to.1), px_per_cm),
        }
    }

    #[must_use]
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }
}

/// Sides and interior angles of the triangle formed by exactly three points.
///
/// Vertices are `a`, `b`, `c` in creation order. Side `ab` joins `a` and `b`,
/// and so on. Each angle is measured at its vertex, i.e. opposite the side
/// that does not touch it. `None` angles come from coincident vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
    pub ab_cm: f64,
    pub bc_cm: f64,
    pub ca_cm: f64,
    pub angle_a: Option<f64>,
    pub angle_b: Option<f64>,
    pub angle_c: Option<f64>,
}

impl Triangle {
    fn new(a: Point, b: Point, c: Point, px_per_cm: f64) -> Self {
        let ab_cm = px_to_cm(a.distance(b), px_per_cm);
        let bc_cm = px_to_cm(b.distance(c), px_per_cm);
        let ca_cm = px_to_cm(c.distance(a), px_per_cm);
        Self {
            a,
            b,
            c,
            ab_cm,
            bc_cm,
            ca_cm,
            angle_a: law_of_cosines_deg(ab_cm, ca_cm, bc_cm),
            angle_b: law_of_cosines_deg(ab_cm, bc_cm, ca_cm),
            angle_c: law_of_cosines_deg(bc_cm, ca_cm, ab_cm),
        }
    }

    /// Midpoint of the side joining the third point back to the first.
    #[must_use]
    pub fn ca_midpoint(&self) -> Point {
        self.c.midpoint(self.a)
    }
}

/// Angle between the two segments meeting at an interior chain vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexAngle {
    pub label: Label,
    pub prev: Point,
    pub vertex: Point,
    pub next: Point,
    pub degrees: Option<f64>,
}

/// Everything the renderer annotates, derived from one snapshot of points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurements {
    /// Consecutive segments in creation order.
    pub segments: Vec<Segment>,
    /// Sum of all consecutive segment lengths, in centimeters.
    pub total_cm: f64,
    /// Present only when exactly three points exist.
    pub triangle: Option<Triangle>,
    /// Interior vertex angles for chains of four or more points.
    pub vertex_angles: Vec<VertexAngle>,
    /// First and last point when three or more exist.
    pub closing: Option<(Point, Point)>,
}

impl Measurements {
    /// Derive measurements from `store` at `px_per_cm`.
    #[must_use]
    pub fn compute(store: &PointStore, px_per_cm: f64) -> Self {
        let labelled: Vec<(&Label, Point)> = store.iter().collect();

        let segments: Vec<Segment> = labelled
            .windows(2)
            .map(|pair| Segment::new(pair[0], pair[1], px_per_cm))
            .collect();
        let total_cm: f64 = segments.iter().map(|s| s.length_cm).sum();

        let triangle = match labelled.as_slice() {
            [(_, a), (_, b), (_, c)] => Some(Triangle::new(*a, *b, *c, px_per_cm)),
            _ => None,
        };

        let vertex_angles = if labelled.len() >= 4 {
            labelled
                .windows(3)
                .map(|w| VertexAngle {
                    label: w[1].0.clone(),
                    prev: w[0].1,
                    vertex: w[1].1,
                    next: w[2].1,
                    degrees: vertex_angle_deg(w[0].1, w[1].1, w[2].1),
                })
                .collect()
        } else {
            Vec::new()
        };

        let closing = if labelled.len() >= 3 {
            store.ends().map(|((_, first), (_, last))| (first, last))
        } else {
            None
        };

        Self { segments, total_cm, triangle, vertex_angles, closing }
    }
}

/// Format a length label: two decimals followed by the unit.
#[must_use]
pub fn format_length(cm: f64) -> String {
    format!("{cm:.2} cm")
}

/// Format an angle label: two decimals and a degree sign, or `n/a` when the
/// angle is undefined.
#[must_use]
pub fn format_angle(degrees: Option<f64>) -> String {
    match degrees {
        Some(d) => format!("{d:.2}°"),
        None => "n/a".to_owned(),
    }
}
