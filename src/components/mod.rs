//! UI components composed by [`crate::app::App`].

pub mod drawing_surface;
pub mod instructions;
pub mod status_line;
