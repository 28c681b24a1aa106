//! Configuration handling for the TUI

use crate::state::{AppState, SortOption};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Category filter selected on startup, e.g. "Clean Energy"
    pub default_category: Option<String>,
    /// Market sort key: trending, newest, price-high, price-low, most-backed
    pub default_sort: Option<String>,
    /// Show the headline statistics above the market list
    pub show_stats: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("ca", "sred", "sred-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file, defaulting when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Record the board preferences in use so the next session starts there
    pub fn remember(&mut self, state: &AppState) {
        self.default_category = Some(state.market_board.filter().name.to_string());
        self.default_sort = Some(state.market_board.sort.key().to_string());
        self.show_stats = Some(state.show_stats);
    }

    /// Apply startup preferences. Unknown values are logged and skipped.
    pub fn apply(&self, state: &mut AppState) {
        if let Some(category) = &self.default_category {
            if !state.market_board.set_category(category) {
                tracing::warn!(%category, "ignoring unknown default_category");
            }
        }
        if let Some(key) = &self.default_sort {
            match SortOption::from_key(key) {
                Some(sort) => state.market_board.sort = sort,
                None => tracing::warn!(sort = %key, "ignoring unknown default_sort"),
            }
        }
        state.show_stats = self.show_stats.unwrap_or(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_config_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("sred-tui-test-{}", uuid::Uuid::new_v4()))
            .join("config.json")
    }

    #[test]
    fn test_remembered_preferences_survive_a_restart() {
        let mut state = AppState::default();
        TuiConfig::default().apply(&mut state);
        state.market_board.next_filter();
        state.market_board.cycle_sort();
        state.show_stats = false;

        let mut config = TuiConfig::default();
        config.remember(&state);
        let path = temp_config_path();
        config.save_to(&path).unwrap();

        let mut restored = AppState::default();
        TuiConfig::load_from(&path).unwrap().apply(&mut restored);
        assert_eq!(restored.market_board.filter().name, state.market_board.filter().name);
        assert_eq!(restored.market_board.sort, state.market_board.sort);
        assert!(!restored.show_stats);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.default_category.is_none());
        assert!(config.default_sort.is_none());
        assert!(config.show_stats.is_none());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.default_sort.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"default_sort": "newest", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.default_sort, Some("newest".to_string()));
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = TuiConfig::config_path();
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let config = TuiConfig::load_from(&temp_config_path()).unwrap();
        assert!(config.default_category.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_config_path();
        let config = TuiConfig {
            default_category: Some("AgTech".to_string()),
            default_sort: Some("most-backed".to_string()),
            show_stats: Some(false),
        };
        config.save_to(&path).unwrap();

        let loaded = TuiConfig::load_from(&path).unwrap();
        assert_eq!(loaded.default_category, Some("AgTech".to_string()));
        assert_eq!(loaded.default_sort, Some("most-backed".to_string()));
        assert_eq!(loaded.show_stats, Some(false));

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_load_from_invalid_json_errors() {
        let path = temp_config_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();
        assert!(TuiConfig::load_from(&path).is_err());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_apply_sets_board_preferences() {
        let config = TuiConfig {
            default_category: Some("Clean Energy".to_string()),
            default_sort: Some("price-low".to_string()),
            show_stats: Some(false),
        };
        let mut state = AppState::default();
        config.apply(&mut state);
        assert_eq!(state.market_board.filter().name, "Clean Energy");
        assert_eq!(state.market_board.sort, SortOption::PriceLow);
        assert!(!state.show_stats);
    }

    #[test]
    fn test_apply_ignores_unknown_values() {
        let config = TuiConfig {
            default_category: Some("Alchemy".to_string()),
            default_sort: Some("random".to_string()),
            show_stats: None,
        };
        let mut state = AppState::default();
        config.apply(&mut state);
        assert_eq!(state.market_board.filter().name, "All Categories");
        assert_eq!(state.market_board.sort, SortOption::Trending);
        assert!(state.show_stats);
    }
}
