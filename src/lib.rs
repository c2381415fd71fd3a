//! # figures
//!
//! Leptos + WASM frontend for the figure-drawing board: a grid surface where
//! clicks place labelled points, consecutive points are joined by segments,
//! and lengths and triangle angles are shown live.
//!
//! This crate holds the page layout, the instructions panel and the
//! `DrawingSurface` bridge component. All geometry, hit-testing and painting
//! live in the `canvas` crate; the bridge only forwards pointer events to the
//! engine and republishes its state through a Leptos signal.

pub mod app;
pub mod components;
pub mod state;
pub mod util;
