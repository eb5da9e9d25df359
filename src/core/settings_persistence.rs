//! Settings persistence
//!
//! Saves and loads [`AppConfig`] to/from `settings.json` in the platform
//! configuration directory.
//!
//! # Error Handling
//!
//! - Load failures fall back to default settings
//! - Save failures are logged but don't interrupt gameplay
//!
//! The browser build has no filesystem; there the config is never persisted.

use super::config::AppConfig;
use super::error::{CoreError, CoreResult};
use crate::session::Side;
use bevy::prelude::*;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Path of `settings.json` in the user's configuration directory
///
/// E.g. `~/.config/glyphboard/settings.json` on Linux.
pub fn settings_path() -> CoreResult<PathBuf> {
    ProjectDirs::from("org", "glyphboard", "glyphboard")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILENAME))
        .ok_or(CoreError::NoConfigDir)
}

pub fn read_config(path: &Path) -> CoreResult<AppConfig> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn write_config(path: &Path, config: &AppConfig) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(config)?)?;
    Ok(())
}

/// Load the persisted config, or defaults if there is none or it is unreadable
pub fn load_config() -> AppConfig {
    let path = match settings_path() {
        Ok(path) => path,
        Err(e) => {
            warn!("[SETTINGS] {}. Using defaults.", e);
            return AppConfig::default();
        }
    };

    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return AppConfig::default();
    }

    match read_config(&path) {
        Ok(config) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            config
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            AppConfig::default()
        }
    }
}

/// Merge `side` into the settings file at `path`; false if it was already stored
///
/// The other fields on disk are kept. A missing or unreadable file is
/// replaced by defaults plus `side`.
pub fn store_human_side(path: &Path, side: Side) -> CoreResult<bool> {
    let existing = read_config(path).ok();
    if existing.as_ref().is_some_and(|stored| stored.human_side == side) {
        return Ok(false);
    }
    let mut stored = existing.unwrap_or_default();
    stored.human_side = side;
    write_config(path, &stored)?;
    Ok(true)
}

/// Persist the "Play as" preference whenever a system changes the config
///
/// Only `human_side` goes to disk; the rest of the resource may carry
/// command-line overrides that are not meant to stick.
pub fn save_settings_system(config: Res<AppConfig>) {
    if !config.is_changed() || config.is_added() {
        return;
    }

    let result = settings_path().and_then(|path| {
        let written = store_human_side(&path, config.human_side)?;
        Ok((path, written))
    });
    match result {
        Ok((path, true)) => info!("[SETTINGS] Saved settings to {:?}", path),
        Ok((_, false)) => {}
        Err(e) => error!("[SETTINGS] Failed to save settings: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("glyphboard-{}", uuid::Uuid::new_v4()))
            .join(SETTINGS_FILENAME)
    }

    #[test]
    fn test_write_then_read() {
        let path = scratch_path();
        let config = AppConfig {
            human_side: Side::Black,
            evaluator_url: Some("http://localhost:8080/evaluate".to_string()),
            ..AppConfig::default()
        };
        write_config(&path, &config).unwrap();
        assert_eq!(read_config(&path).unwrap(), config);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_read_invalid_file() {
        let path = scratch_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            read_config(&path),
            Err(CoreError::SettingsSerialization(_))
        ));
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_read_missing_file() {
        assert!(matches!(
            read_config(&scratch_path()),
            Err(CoreError::SettingsIo(_))
        ));
    }

    #[test]
    fn test_store_human_side_keeps_other_fields() {
        let path = scratch_path();
        let config = AppConfig {
            evaluator_url: Some("http://localhost:8080/evaluate".to_string()),
            opponent_delay_ms: 500,
            ..AppConfig::default()
        };
        write_config(&path, &config).unwrap();

        assert!(store_human_side(&path, Side::Black).unwrap());
        let stored = read_config(&path).unwrap();
        assert_eq!(stored.human_side, Side::Black);
        assert_eq!(stored.evaluator_url, config.evaluator_url);
        assert_eq!(stored.opponent_delay_ms, 500);

        assert!(!store_human_side(&path, Side::Black).unwrap());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_store_human_side_creates_file() {
        let path = scratch_path();
        assert!(store_human_side(&path, Side::Black).unwrap());
        assert_eq!(read_config(&path).unwrap().human_side, Side::Black);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
