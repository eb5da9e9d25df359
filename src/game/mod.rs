//! Bevy side of the chess session
//!
//! Wraps [`crate::session::GameSession`] in a resource and drives it from
//! messages, with the opponent's evaluation running as an async task.
//!
//! # Module Organization
//!
//! - `events` - messages written by the UI and by the systems themselves
//! - `resources` - the session, opponent cycle state and evaluator slot
//! - `systems` - message handlers and the opponent cycle
//! - `system_sets` - Input → Execution ordering
//! - `plugin` - [`GamePlugin`], which registers all of the above

pub mod events;
pub mod plugin;
pub mod resources;
pub mod system_sets;
pub mod systems;

pub use plugin::GamePlugin;
