//! Game resources
//!
//! - [`ActiveSession`] - the running [`crate::session::GameSession`]
//! - [`OpponentCycle`] - delay / evaluation state machine for the opponent
//! - [`EvaluatorSlot`] - the optional evaluator
//! - [`EvaluatorHandoff`] - channel through which evaluators arrive
//!
//! All resources are registered in [`crate::game::plugin::GamePlugin`].

pub mod opponent;
pub mod session;

pub use opponent::*;
pub use session::*;
