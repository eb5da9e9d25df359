//! UI styling for glyphboard
//!
//! Colors and text presets shared by the board, the side panels and the
//! promotion modal.

pub mod colors;
pub mod typography;

pub use colors::*;
pub use typography::*;
