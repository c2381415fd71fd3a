use super::*;

const RADIUS: f64 = 20.0;

fn store_with(points: &[(f64, f64)]) -> PointStore {
    let mut store = PointStore::new();
    for &(x, y) in points {
        store.push(Point::new(x, y));
    }
    store
}

#[test]
fn empty_store_never_hits() {
    let store = PointStore::new();
    assert!(hit_test(Point::new(0.0, 0.0), &store, RADIUS).is_none());
}

#[test]
fn exact_position_hits() {
    let store = store_with(&[(100.0, 100.0)]);
    assert_eq!(hit_test(Point::new(100.0, 100.0), &store, RADIUS), Some(Label::from("A")));
}

#[test]
fn inside_radius_hits() {
    let store = store_with(&[(100.0, 100.0)]);
    assert_eq!(hit_test(Point::new(110.0, 110.0), &store, RADIUS), Some(Label::from("A")));
}

#[test]
fn boundary_is_exclusive() {
    let store = store_with(&[(100.0, 100.0)]);
    // Both probes are exactly 20 px away.
    assert!(hit_test(Point::new(112.0, 116.0), &store, RADIUS).is_none());
    assert!(hit_test(Point::new(120.0, 100.0), &store, RADIUS).is_none());
    assert!(hit_test(Point::new(119.9, 100.0), &store, RADIUS).is_some());
}

#[test]
fn outside_radius_misses() {
    let store = store_with(&[(100.0, 100.0)]);
    assert!(hit_test(Point::new(150.0, 100.0), &store, RADIUS).is_none());
}

#[test]
fn overlapping_points_resolve_to_oldest() {
    let store = store_with(&[(100.0, 100.0), (105.0, 100.0), (110.0, 100.0)]);
    assert_eq!(hit_test(Point::new(108.0, 100.0), &store, RADIUS), Some(Label::from("A")));
}

#[test]
fn nearest_is_not_preferred_over_creation_order() {
    let store = store_with(&[(0.0, 0.0), (15.0, 0.0)]);
    // Closer to B but still within A's radius.
    assert_eq!(hit_test(Point::new(14.0, 0.0), &store, RADIUS), Some(Label::from("A")));
}

#[test]
fn only_the_matching_point_hits() {
    let store = store_with(&[(0.0, 0.0), (300.0, 300.0)]);
    assert_eq!(hit_test(Point::new(305.0, 298.0), &store, RADIUS), Some(Label::from("B")));
}
