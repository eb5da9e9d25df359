//! Application configuration
//!
//! [`AppConfig`] is persisted as `settings.json` (see
//! [`super::settings_persistence`]) and exposed to systems as a resource.
//! Unknown or missing fields fall back to their defaults so older settings
//! files keep loading.

use crate::session::Side;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default pause between a human move and the opponent's reply
pub const DEFAULT_OPPONENT_DELAY_MS: u64 = 250;

/// Default log filter handed to Bevy's `LogPlugin`
pub const DEFAULT_LOG_FILTER: &str = "wgpu=error,naga=warn,glyphboard=info";

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Side the human plays; applied at the next new game
    pub human_side: Side,

    /// HTTP evaluation endpoint; `None` plays random opponent moves
    pub evaluator_url: Option<String>,

    /// Milliseconds between a completed human move and the opponent cycle
    pub opponent_delay_ms: u64,

    /// Custom starting position (FEN)
    pub start_fen: Option<String>,

    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            human_side: Side::White,
            evaluator_url: None,
            opponent_delay_ms: DEFAULT_OPPONENT_DELAY_MS,
            start_fen: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.human_side, Side::White);
        assert_eq!(config.opponent_delay(), Duration::from_millis(250));
        assert!(config.evaluator_url.is_none());
        assert!(config.start_fen.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"human_side": "Black"}"#).unwrap();
        assert_eq!(config.human_side, Side::Black);
        assert_eq!(config.opponent_delay_ms, DEFAULT_OPPONENT_DELAY_MS);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }
}
