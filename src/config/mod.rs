//! Configuration management for gogh-css
//!
//! Supports configuration via:
//! 1. Config file (~/.config/gogh-css/config.toml)
//! 2. Environment variables (GOGH_CSS_PROMPT, GOGH_CSS_LOG)
//! 3. CLI arguments (override file/env settings)
//!
//! The field-to-property mapping is fixed and has no settings here.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const PROMPT_ENV: &str = "GOGH_CSS_PROMPT";
pub const LOG_ENV: &str = "GOGH_CSS_LOG";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Invalid log level: {0} (expected one of trace, debug, info, warn, error)")]
    InvalidLogLevel(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Paste prompt settings
    pub prompt: PromptSettings,

    /// Logging settings
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptSettings {
    /// Print the paste prompt before reading stdin
    pub enabled: bool,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level for diagnostics on stderr
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Get default config file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gogh-css")
            .join("config.toml")
    }

    /// Load config from a specific path, falling back to defaults if absent
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };

        Ok(config.with_env_overrides())
    }

    /// Apply environment variable overrides
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(PROMPT_ENV).ok().as_deref(),
            std::env::var(LOG_ENV).ok().as_deref(),
        )
    }

    fn with_overrides(mut self, prompt: Option<&str>, log: Option<&str>) -> Self {
        if let Some(value) = prompt {
            self.prompt.enabled = parse_flag(value);
        }
        if let Some(level) = log {
            self.logging.level = level.to_lowercase();
        }
        self
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Pick the effective log level: CLI flag, then env/file, validated last
    pub fn resolve_log_level(&self, cli_level: Option<&str>) -> Result<String, ConfigError> {
        let level = cli_level.unwrap_or(self.logging.level.as_str()).to_lowercase();
        validate_log_level(&level)?;
        Ok(level)
    }
}

/// Check that a level name is one tracing understands
fn validate_log_level(level: &str) -> Result<(), ConfigError> {
    if LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        Err(ConfigError::InvalidLogLevel(level.to_string()))
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
