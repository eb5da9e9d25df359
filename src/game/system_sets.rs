//! System organization using SystemSets
//!
//! Systems run in this order each frame:
//! 1. **Input** - apply clicks, promotion choices, new-game requests and
//!    evaluator handoffs to the session
//! 2. **Execution** - schedule, run and apply opponent cycles
//!
//! The egui UI runs afterwards in `EguiPrimaryContextPass` and reads the
//! session as left by both sets.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum GameSystems {
    /// Messages from the UI and the evaluator channel
    Input,

    /// Opponent cycle
    Execution,
}
