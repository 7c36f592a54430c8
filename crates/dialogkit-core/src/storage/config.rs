//! Configuration management
//!
//! Settings stored in `~/.config/dialogkit/config.toml` or an explicit path.
//! Priority: CLI argument > environment variable > config.toml > default

use super::{Result, io_error};
use crate::error::StorageError;
use crate::utils::input::EnvConfigReader;
use crate::utils::logging::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Suggestions shown by the prompt when nothing else is configured
pub const DEFAULT_MAX_SUGGESTED: usize = 3;

/// Application configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Log level name (debug, info, warning, error)
    pub log_level: Option<String>,
    /// File that receives a copy of every log line
    pub log_file: Option<PathBuf>,
    /// How many allowed values the prompt lists on a wrong answer
    pub max_suggested: Option<usize>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content =
            fs::read_to_string(&config_path).map_err(|source| io_error(&config_path, source))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: format!("Failed to parse config file: {}", e),
            })?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| io_error(parent, source))?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigParseError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| io_error(&config_path, source))?;

        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;

        let app_config_dir = home_dir.join(".config").join("dialogkit");
        let config_file = app_config_dir.join("config.toml");

        Ok(config_file)
    }

    /// Effective log level: environment first, then the file, then the default.
    ///
    /// Unparseable names fall back to the next source.
    pub fn get_log_level(&self) -> LogLevel {
        EnvConfigReader::read_log_level()
            .or_else(|| self.log_level.as_deref().and_then(|s| s.parse().ok()))
            .unwrap_or_default()
    }

    /// Log file with fallback to environment variable
    pub fn get_log_file(&self) -> Option<PathBuf> {
        EnvConfigReader::read_log_file().or_else(|| self.log_file.clone())
    }

    pub fn get_max_suggested(&self) -> usize {
        self.max_suggested.unwrap_or(DEFAULT_MAX_SUGGESTED)
    }

    pub fn set_log_level(&mut self, level: LogLevel) {
        self.log_level = Some(level.as_str().to_string());
    }

    pub fn set_log_file(&mut self, path: PathBuf) {
        self.log_file = Some(path);
    }

    pub fn set_max_suggested(&mut self, max_suggested: usize) {
        self.max_suggested = Some(max_suggested);
    }
}
