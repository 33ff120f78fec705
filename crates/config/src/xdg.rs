//! Platform directories for gapedit files.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "gapedit";

/// Directory holding `config.toml`.
///
/// `$XDG_CONFIG_HOME/gapedit` or `~/.config/gapedit` on Linux.
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine config directory")
}

/// Directory for the log file.
///
/// Prefers the XDG state directory and falls back to the cache directory on
/// platforms without one (macOS, Windows).
pub fn log_dir() -> Result<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine log directory")
}

/// Log file used when the config does not name one
pub fn default_log_file() -> Result<PathBuf> {
    Ok(log_dir()?.join("gapedit.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_are_app_scoped() {
        assert!(config_dir().unwrap().ends_with(APP_NAME));
        assert!(log_dir().unwrap().ends_with(APP_NAME));
        assert!(default_log_file().unwrap().ends_with("gapedit.log"));
    }
}
