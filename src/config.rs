//! Picker configuration
//!
//! Two tunables the host may override: the suggestion cap and the minimum
//! search-term length. Loaded from a JSON config file when present, with
//! serde-backed per-field defaults so a partial file is fine.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{PickerError, Result};

/// Default maximum number of suggestions shown at once
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Default minimum term length: terms of this many characters or fewer are
/// treated as not yet searchable, so a bare `:` never floods results
pub const DEFAULT_CHAR_THRESHOLD: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Result cap for the fuzzy searcher
    #[serde(default = "default_suggestion_limit", rename = "suggestionLimit")]
    pub suggestion_limit: usize,
    /// Terms with length <= this are not searched
    #[serde(default = "default_char_threshold", rename = "charThreshold")]
    pub char_threshold: usize,
}

fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

fn default_char_threshold() -> usize {
    DEFAULT_CHAR_THRESHOLD
}

impl Default for PickerConfig {
    fn default() -> Self {
        PickerConfig {
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            char_threshold: DEFAULT_CHAR_THRESHOLD,
        }
    }
}

impl PickerConfig {
    /// Path of the user config file (~/.config/emoji-inline/config.json on
    /// Linux, the platform equivalent elsewhere).
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("emoji-inline")
            .join("config.json")
    }

    /// Load the user config, falling back to defaults when the file is
    /// missing or unreadable. Parse errors are logged, not fatal.
    pub fn load() -> PickerConfig {
        let path = Self::config_path();
        if !path.exists() {
            return PickerConfig::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                info!(path = %path.display(), ?config, "Loaded picker config");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Invalid picker config, using defaults");
                PickerConfig::default()
            }
        }
    }

    /// Load and validate a config file from an explicit path.
    pub fn load_from(path: &std::path::Path) -> Result<PickerConfig> {
        let content = std::fs::read_to_string(path).map_err(|source| PickerError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;

        let config: PickerConfig = serde_json::from_str(&content)
            .map_err(|e| PickerError::Config(format!("parse failure: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the picker cannot operate with.
    pub fn validate(&self) -> Result<()> {
        if self.suggestion_limit == 0 {
            return Err(PickerError::Config(
                "suggestionLimit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
