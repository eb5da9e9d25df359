//! Core plugin for glyphboard
//!
//! Makes sure an [`AppConfig`] resource exists and persists it whenever it
//! changes. Add it before [`crate::game::GamePlugin`], which reads the config
//! for the human side and the opponent delay.

use super::config::AppConfig;
use bevy::prelude::*;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        // main.rs inserts the loaded config; tests and the web build start from defaults
        app.init_resource::<AppConfig>();

        #[cfg(not(target_arch = "wasm32"))]
        app.add_systems(Last, super::settings_persistence::save_settings_system);
    }
}
