//! Core module - configuration, errors and settings persistence
//!
//! - [`AppConfig`] - user-facing configuration, loaded at startup and saved on change
//! - [`CoreError`] - failures of the settings layer
//! - [`CorePlugin`] - registers the config resource and the save system

pub mod config;
pub mod error;
pub mod plugin;
#[cfg(not(target_arch = "wasm32"))]
pub mod settings_persistence;

pub use config::AppConfig;
pub use error::{CoreError, CoreResult};
pub use plugin::CorePlugin;
