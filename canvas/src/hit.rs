#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::{Label, PointStore};
use crate::geometry::Point;

/// Find the point grabbed by a pointer at `at`.
///
/// Points are scanned in creation order and the first one strictly closer
/// than `radius` wins, so overlapping points resolve to the oldest.
#[must_use]
pub fn hit_test(at: Point, store: &PointStore, radius: f64) -> Option<Label> {
    store
        .iter()
        .find(|(_, p)| p.distance(at) < radius)
        .map(|(label, _)| label.clone())
}
