//! Input model: persistent UI flags and the drag state machine.
//!
//! `UiState` holds what survives between gestures (draw mode, the current
//! selection). `InputState` is the gesture being tracked between pointer-down
//! and pointer-up. The machine has only two states: the surface is either idle
//! or a single point is being dragged.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::Label;

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone)]
pub struct UiState {
    /// Gates point creation/movement and the drawing of connecting lines.
    pub draw_mode: bool,
    /// The point currently being dragged, if any.
    pub selected: Option<Label>,
}

impl Default for UiState {
    fn default() -> Self {
        Self { draw_mode: true, selected: None }
    }
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A point grabbed on pointer-down follows the pointer until release.
    Dragging {
        /// Label of the point being dragged.
        label: Label,
    },
}

impl InputState {
    /// The label being dragged, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<&Label> {
        match self {
            Self::Idle => None,
            Self::Dragging { label } => Some(label),
        }
    }
}
