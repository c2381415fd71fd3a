//! Small helpers shared by components.

pub mod pointer;
pub mod surface_config;
