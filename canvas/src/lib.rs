//! Drawing surface engine for the figure-drawing board.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! whole lifecycle of the surface: translating pointer events into point
//! edits, tracking the single dragged point, deriving lengths and angles, and
//! painting the scene. The host UI is responsible only for wiring DOM events
//! to the engine and repainting when an [`engine::Action`] asks for it.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Point labels and the ordered point store |
//! | [`input`] | UI flags and the drag state machine |
//! | [`hit`] | Proximity hit-testing against points |
//! | [`geometry`] | Points, distances, law-of-cosines angles |
//! | [`measure`] | Segment, triangle and chain measurements |
//! | [`render`] | Display-list building and Canvas2D painting |
//! | [`config`] | Surface dimensions, grid, grab radius and scale |
//! | [`consts`] | Shared numeric constants and colors |

pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod measure;
pub mod render;
