//! Game systems
//!
//! - [`input`] - board clicks into the selection controller
//! - [`promotion`] - promotion modal choices and dismissals
//! - [`game_init`] - opening cycle and new-game handling
//! - [`opponent`] - evaluator handoff and the opponent cycle
//!
//! ```text
//! ┌─────────────────┐
//! │ Input           │  evaluator handoff, new game, clicks, promotion
//! └────────┬────────┘
//!          ↓
//! ┌─────────────────┐
//! │ Execution       │  schedule → delay → evaluate → apply
//! └────────┬────────┘
//!          ↓
//! ┌─────────────────┐
//! │ egui pass       │  board, panels, modal (see crate::ui)
//! └─────────────────┘
//! ```

pub mod game_init;
pub mod input;
pub mod opponent;
pub mod promotion;

pub use game_init::*;
pub use input::*;
pub use opponent::*;
pub use promotion::*;
