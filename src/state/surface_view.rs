#[cfg(test)]
#[path = "surface_view_test.rs"]
mod surface_view_test;

use canvas::engine::EngineCore;

/// Snapshot of the drawing surface for the chrome around it.
///
/// Provided as an `RwSignal` context by [`crate::app::App`] and refreshed by
/// the `DrawingSurface` host after every repaint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurfaceViewState {
    pub draw_mode: bool,
    pub point_count: usize,
    /// Label of the point being dragged.
    pub selected: Option<String>,
}

impl Default for SurfaceViewState {
    fn default() -> Self {
        Self { draw_mode: true, point_count: 0, selected: None }
    }
}

impl SurfaceViewState {
    /// Capture the fields the chrome displays from an engine core.
    pub fn from_core(core: &EngineCore) -> Self {
        Self {
            draw_mode: core.draw_mode(),
            point_count: core.point_count(),
            selected: core.selection().map(|label| label.as_str().to_owned()),
        }
    }

    /// Caption for the draw mode toggle.
    pub fn draw_mode_caption(&self) -> &'static str {
        if self.draw_mode { "Draw Mode: On" } else { "Draw Mode: Off" }
    }

    /// One-line summary for the status line.
    pub fn summary(&self) -> String {
        let points = match self.point_count {
            1 => "1 point".to_owned(),
            n => format!("{n} points"),
        };
        match &self.selected {
            Some(label) => format!("{points} | dragging {label}"),
            None => points,
        }
    }
}
