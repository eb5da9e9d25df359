//! Browser build of glyphboard
//!
//! A Leptos shell mounts a canvas, Bevy renders the board into it, and
//! JavaScript can hand in an evaluator at any time through
//! [`evaluator_bridge::register_evaluator`].

pub mod app;
pub mod bevy_wasm;
pub mod evaluator_bridge;
