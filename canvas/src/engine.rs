use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::SurfaceConfig;
use crate::doc::{Label, PointStore};
use crate::geometry::Point;
use crate::hit::hit_test;
use crate::input::{InputState, UiState};
use crate::render::{self, DrawOp};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// CSS cursor shown while hovering a grabbable point.
const CURSOR_GRAB: &str = "grab";
/// CSS cursor shown everywhere else on the surface.
const CURSOR_DEFAULT: &str = "crosshair";

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    PointCreated { label: Label, point: Point },
    PointMoved { label: Label, point: Point },
    SelectionChanged(Option<Label>),
    DrawModeChanged(bool),
    Cleared,
    SetCursor(String),
    RenderNeeded,
}

/// Core engine state: everything that does not touch the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone, Default)]
pub struct EngineCore {
    pub points: PointStore,
    pub ui: UiState,
    pub input: InputState,
    pub config: SurfaceConfig,
    /// Last cursor reported to the host, to avoid repeating `SetCursor`.
    cursor: Option<&'static str>,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: SurfaceConfig) -> Self {
        Self { config, ..Self::default() }
    }

    // --- Input events ---

    /// Pointer pressed at `pt` (surface-local).
    ///
    /// With draw mode on, grabs the first point within the proximity radius or
    /// creates a new one. With draw mode off, does nothing.
    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        if !self.ui.draw_mode {
            return Vec::new();
        }

        if let Some(label) = hit_test(pt, &self.points, self.config.proximity_px) {
            self.ui.selected = Some(label.clone());
            self.input = InputState::Dragging { label: label.clone() };
            return vec![Action::SelectionChanged(Some(label)), Action::RenderNeeded];
        }

        let label = self.points.push(pt);
        log::debug!("created point {label} at ({:.1}, {:.1})", pt.x, pt.y);
        vec![Action::PointCreated { label, point: pt }, Action::RenderNeeded]
    }

    /// Pointer moved to `pt`. Drags the selected point, or reports a cursor
    /// hint while idle.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        match self.input.clone() {
            InputState::Dragging { label } => {
                if !self.ui.draw_mode || !self.points.set(&label, pt) {
                    return Vec::new();
                }
                vec![Action::PointMoved { label, point: pt }, Action::RenderNeeded]
            }
            InputState::Idle => {
                let hovering =
                    self.ui.draw_mode && hit_test(pt, &self.points, self.config.proximity_px).is_some();
                self.cursor_action(if hovering { CURSOR_GRAB } else { CURSOR_DEFAULT })
                    .into_iter()
                    .collect()
            }
        }
    }

    /// Pointer released anywhere. Always ends the drag and clears selection.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        match self.ui.selected.take() {
            Some(_) => vec![Action::SelectionChanged(None), Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    /// Pointer cancelled by the browser. Ends the drag exactly like a release.
    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        self.on_pointer_up()
    }

    // --- Commands ---

    /// Flip draw mode. Points and selection are untouched.
    pub fn toggle_draw_mode(&mut self) -> Vec<Action> {
        self.set_draw_mode(!self.ui.draw_mode)
    }

    /// Set draw mode explicitly. No-op if unchanged.
    pub fn set_draw_mode(&mut self, enabled: bool) -> Vec<Action> {
        if self.ui.draw_mode == enabled {
            return Vec::new();
        }
        self.ui.draw_mode = enabled;
        log::debug!("draw mode {}", if enabled { "on" } else { "off" });
        vec![Action::DrawModeChanged(enabled), Action::RenderNeeded]
    }

    /// Remove every point and drop any selection, from any state.
    pub fn clear(&mut self) -> Vec<Action> {
        let had_points = !self.points.is_empty();
        self.points.clear();
        self.ui.selected = None;
        self.input = InputState::Idle;
        if had_points {
            log::debug!("cleared surface");
        }
        vec![Action::Cleared, Action::RenderNeeded]
    }

    fn cursor_action(&mut self, cursor: &'static str) -> Option<Action> {
        if self.cursor == Some(cursor) {
            return None;
        }
        self.cursor = Some(cursor);
        Some(Action::SetCursor(cursor.to_owned()))
    }

    // --- Queries ---

    /// The currently selected point, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&Label> {
        self.ui.selected.as_ref()
    }

    /// Whether draw mode is enabled.
    #[must_use]
    pub fn draw_mode(&self) -> bool {
        self.ui.draw_mode
    }

    /// Number of points on the surface.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Look up a point by label.
    #[must_use]
    pub fn point(&self, label: &Label) -> Option<Point> {
        self.points.get(label)
    }

    /// Display list for the current state.
    #[must_use]
    pub fn scene(&self) -> Vec<DrawOp> {
        render::build_scene(&self.points, &self.ui, &self.config)
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element, sizing the
    /// element's backing store to the configured surface.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(canvas: HtmlCanvasElement, config: SurfaceConfig) -> Self {
        canvas.set_width(config.width.round() as u32);
        canvas.set_height(config.height.round() as u32);
        Self { canvas, core: EngineCore::with_config(config) }
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_down(pt)
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(pt)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn on_pointer_cancel(&mut self) -> Vec<Action> {
        self.core.on_pointer_cancel()
    }

    // --- Delegated commands ---

    pub fn toggle_draw_mode(&mut self) -> Vec<Action> {
        self.core.toggle_draw_mode()
    }

    pub fn clear(&mut self) -> Vec<Action> {
        self.core.clear()
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        render::paint(&ctx, &self.core.scene())
    }

    /// Apply a CSS cursor to the canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the style property cannot be set.
    pub fn set_cursor(&self, cursor: &str) -> Result<(), JsValue> {
        self.canvas.style().set_property("cursor", cursor)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> Option<&Label> {
        self.core.selection()
    }

    #[must_use]
    pub fn draw_mode(&self) -> bool {
        self.core.draw_mode()
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.core.point_count()
    }
}
