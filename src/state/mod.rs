//! Shared client-side state modules.

pub mod surface_view;
