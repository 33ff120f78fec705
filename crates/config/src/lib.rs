//! Configuration management for gapedit.
//!
//! Loads and saves `config.toml` from the platform config directory,
//! filling in defaults for missing keys.

mod settings;
mod xdg;

pub use settings::{Config, EditorSettings, LineEndingSetting, LoggingSettings};
pub use xdg::{config_dir, default_log_file, log_dir};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default values as constants
pub mod defaults {
    pub const VIEWPORT_LINES: usize = 24;
    pub const VIEWPORT_COLUMNS: usize = 80;
    pub const HISTORY_LIMIT: usize = 1000;
    pub const MIN_LOG_LEVEL: &str = "info";
}

impl Config {
    /// Load configuration from the default config file.
    ///
    /// On first run, creates the file with default values.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from `path`.
    ///
    /// Missing keys are filled with defaults and the normalized file is
    /// written back when it differs from what was read.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let original_content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::validate_content(&original_content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;

        let normalized_content = toml::to_string_pretty(&config)?;
        if original_content != normalized_content {
            config.save_to(path)?;
        }

        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Get path to config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Parse config content.
    pub fn validate_content(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))
    }

    /// Log file from the config, or the platform default.
    pub fn log_file_path(&self) -> Result<PathBuf> {
        match &self.logging.file_path {
            Some(path) => Ok(PathBuf::from(path)),
            None => default_log_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_load_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_missing_keys_filled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[editor]\nhistory_limit = 5\nline_ending = \"crlf\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.editor.history_limit, 5);
        assert_eq!(config.editor.viewport_lines, defaults::VIEWPORT_LINES);
        assert_eq!(config.editor.line_ending, LineEndingSetting::Crlf);
        assert_eq!(config.logging.min_level, "info");

        // Normalized file now carries every key
        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(saved.contains("viewport_columns = 80"));
        assert!(saved.contains("[logging]"));
    }

    #[test]
    fn test_validate_content_rejects_garbage() {
        assert!(Config::validate_content("[editor]\nhistory_limit = \"many\"").is_err());
        assert!(Config::validate_content("").is_ok());
    }

    #[test]
    fn test_line_ending_setting() {
        use gapedit_buffer::LineEnding;
        assert_eq!(LineEndingSetting::Auto.forced(), None);
        assert_eq!(LineEndingSetting::Lf.forced(), Some(LineEnding::LF));
        assert_eq!(LineEndingSetting::Crlf.forced(), Some(LineEnding::CRLF));
    }

    #[test]
    fn test_log_file_path_override() {
        let mut config = Config::default();
        config.logging.file_path = Some("/tmp/custom.log".to_string());
        assert_eq!(config.log_file_path().unwrap(), PathBuf::from("/tmp/custom.log"));
    }
}
