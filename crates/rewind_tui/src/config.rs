//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Configuration for the terminal front end.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// File that receives logs while the interactive game owns the terminal.
    log_file: PathBuf,

    /// Default `tracing` filter; `RUST_LOG` overrides it.
    log_filter: String,

    /// Highlight the cells of a winning line.
    highlight_winning_line: bool,

    /// Number empty cells 1-9 so they can be played with digit keys.
    show_move_hints: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("rewind_tui.log"),
            log_filter: "info".to_string(),
            highlight_winning_line: true,
            show_move_hints: true,
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Rendering switches taken from this config.
    pub fn ui_options(&self) -> UiOptions {
        UiOptions {
            highlight_winning_line: self.highlight_winning_line,
            show_move_hints: self.show_move_hints,
        }
    }
}

/// Rendering switches the app carries into each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    /// Highlight the cells of a winning line.
    pub highlight_winning_line: bool,
    /// Number empty cells 1-9.
    pub show_move_hints: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        TuiConfig::default().ui_options()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
