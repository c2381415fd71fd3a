//! Rendering: turns surface state into an ordered display list, then paints it.
//!
//! [`build_scene`] is pure. It reads the point store, UI flags and config and
//! returns the [`DrawOp`]s for one frame, recomputing every measurement. That
//! keeps the whole pass testable without a browser.
//!
//! [`paint`] is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.
//!
//! Frame layout, bottom to top:
//! 1. clear the surface
//! 2. background grid
//! 3. point markers and their labels
//! 4. consecutive segments (draw mode only) with length labels
//! 5. triangle angle arcs and labels, then the closing side's length
//!    (exactly three points)
//! 6. closing segment (three or more points, draw mode only)
//! 7. chain vertex arcs and the total length readout

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::{PI, TAU};

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::config::SurfaceConfig;
use crate::consts::{
    ANGLE_ARC_RADIUS, ANGLE_COLOR, GRID_COLOR, INK_COLOR, LABEL_OFFSET_X, LABEL_OFFSET_Y, LENGTH_LABEL_NUDGE_Y,
    MAX_GRID_CELLS, TOTAL_LABEL_INSET_X, TOTAL_LABEL_Y,
};
use crate::doc::PointStore;
use crate::geometry::Point;
use crate::input::UiState;
use crate::measure::{Measurements, format_angle, format_length};

/// Offset of an angle label from its vertex, clear of the point label.
const ANGLE_LABEL_OFFSET_X: f64 = 10.0;
const ANGLE_LABEL_OFFSET_Y: f64 = 15.0;

/// One primitive drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Wipe the rectangle from the origin to `(width, height)`.
    Clear { width: f64, height: f64 },
    /// Outline an axis-aligned rectangle.
    StrokeRect { x: f64, y: f64, w: f64, h: f64, color: &'static str },
    /// Filled and outlined circle.
    FillCircle { center: Point, radius: f64, color: &'static str },
    /// Straight stroked segment.
    Line { from: Point, to: Point, color: &'static str },
    /// Stroked circular arc from `start` to `end` radians.
    Arc { center: Point, radius: f64, start: f64, end: f64, anticlockwise: bool, color: &'static str },
    /// Filled text with its baseline origin at `at`.
    Text { text: String, at: Point, color: &'static str },
}

/// Build the display list for the current state.
#[must_use]
pub fn build_scene(store: &PointStore, ui: &UiState, config: &SurfaceConfig) -> Vec<DrawOp> {
    let mut ops = vec![DrawOp::Clear { width: config.width, height: config.height }];

    push_grid(&mut ops, config);

    for (label, p) in store.iter() {
        ops.push(DrawOp::FillCircle { center: p, radius: config.point_radius, color: INK_COLOR });
        ops.push(text(label.to_string(), p.offset(LABEL_OFFSET_X, LABEL_OFFSET_Y), INK_COLOR));
    }

    let m = Measurements::compute(store, config.px_per_cm);

    for seg in &m.segments {
        if ui.draw_mode {
            ops.push(DrawOp::Line { from: seg.start, to: seg.end, color: INK_COLOR });
        }
        ops.push(length_label(seg.length_cm, seg.midpoint()));
    }

    if let Some(t) = &m.triangle {
        for (prev, vertex, next, angle) in
            [(t.c, t.a, t.b, t.angle_a), (t.a, t.b, t.c, t.angle_b), (t.b, t.c, t.a, t.angle_c)]
        {
            ops.push(vertex_arc(prev, vertex, next));
            ops.push(angle_label(angle, vertex));
        }
        ops.push(length_label(t.ca_cm, t.ca_midpoint()));
    }

    if ui.draw_mode {
        if let Some((first, last)) = m.closing {
            ops.push(DrawOp::Line { from: last, to: first, color: INK_COLOR });
        }
    }

    for va in &m.vertex_angles {
        ops.push(vertex_arc(va.prev, va.vertex, va.next));
        ops.push(angle_label(va.degrees, va.vertex));
    }

    ops.push(text(
        format!("Total Length: {}", format_length(m.total_cm)),
        Point::new(config.width - TOTAL_LABEL_INSET_X, TOTAL_LABEL_Y),
        INK_COLOR,
    ));

    ops
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn push_grid(ops: &mut Vec<DrawOp>, config: &SurfaceConfig) {
    // Unvalidated configs can still reach here through `EngineCore::with_config`.
    let cells = config.grid_cells();
    if !cells.is_finite() || cells > MAX_GRID_CELLS {
        log::warn!("skipping grid of {cells} cells");
        return;
    }
    let size = config.grid_size;
    let cols = (config.width / size).ceil() as usize;
    let rows = (config.height / size).ceil() as usize;
    ops.reserve(cols * rows);
    for col in 0..cols {
        for row in 0..rows {
            ops.push(DrawOp::StrokeRect {
                x: col as f64 * size,
                y: row as f64 * size,
                w: size,
                h: size,
                color: GRID_COLOR,
            });
        }
    }
}

/// Arc at `vertex` between its arms towards `prev` and `next`, taking the
/// short way round so it spans the interior angle.
fn vertex_arc(prev: Point, vertex: Point, next: Point) -> DrawOp {
    let start = vertex.heading_to(prev);
    let end = vertex.heading_to(next);
    DrawOp::Arc {
        center: vertex,
        radius: ANGLE_ARC_RADIUS,
        start,
        end,
        anticlockwise: sweep(start, end) < 0.0,
        color: ANGLE_COLOR,
    }
}

/// Signed shortest sweep from `start` to `end`, in `(-π, π]`.
fn sweep(start: f64, end: f64) -> f64 {
    let d = (end - start).rem_euclid(TAU);
    if d > PI { d - TAU } else { d }
}

fn text(text: String, at: Point, color: &'static str) -> DrawOp {
    DrawOp::Text { text, at, color }
}

fn length_label(cm: f64, midpoint: Point) -> DrawOp {
    text(format_length(cm), midpoint.offset(0.0, LENGTH_LABEL_NUDGE_Y), INK_COLOR)
}

fn angle_label(degrees: Option<f64>, vertex: Point) -> DrawOp {
    text(format_angle(degrees), vertex.offset(ANGLE_LABEL_OFFSET_X, ANGLE_LABEL_OFFSET_Y), ANGLE_COLOR)
}

/// Paint a display list onto a 2D context.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn paint(ctx: &CanvasRenderingContext2d, ops: &[DrawOp]) -> Result<(), JsValue> {
    for op in ops {
        match op {
            DrawOp::Clear { width, height } => ctx.clear_rect(0.0, 0.0, *width, *height),
            DrawOp::StrokeRect { x, y, w, h, color } => {
                ctx.set_stroke_style_str(color);
                ctx.stroke_rect(*x, *y, *w, *h);
            }
            DrawOp::FillCircle { center, radius, color } => {
                ctx.begin_path();
                ctx.arc(center.x, center.y, *radius, 0.0, TAU)?;
                ctx.set_fill_style_str(color);
                ctx.fill();
                ctx.set_stroke_style_str(color);
                ctx.stroke();
            }
            DrawOp::Line { from, to, color } => {
                ctx.begin_path();
                ctx.move_to(from.x, from.y);
                ctx.line_to(to.x, to.y);
                ctx.set_stroke_style_str(color);
                ctx.stroke();
            }
            DrawOp::Arc { center, radius, start, end, anticlockwise, color } => {
                ctx.begin_path();
                ctx.arc_with_anticlockwise(center.x, center.y, *radius, *start, *end, *anticlockwise)?;
                ctx.set_stroke_style_str(color);
                ctx.stroke();
            }
            DrawOp::Text { text, at, color } => {
                ctx.set_fill_style_str(color);
                ctx.fill_text(text, at.x, at.y)?;
            }
        }
    }
    Ok(())
}
