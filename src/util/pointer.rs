//! Pointer event to surface coordinate mapping.
//!
//! The canvas is laid out at its intrinsic size, so a pointer event's
//! `offset_x/offset_y` are already surface-local pixels.

use canvas::geometry::Point;

/// Surface-local point from pointer offsets.
pub fn surface_point(offset_x: i32, offset_y: i32) -> Point {
    Point::new(f64::from(offset_x), f64::from(offset_y))
}

/// Surface-local point of a browser pointer event.
#[cfg(feature = "csr")]
pub fn event_point(ev: &leptos::ev::PointerEvent) -> Point {
    surface_point(ev.offset_x(), ev.offset_y())
}

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;
