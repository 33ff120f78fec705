//! Configuration structures for gapedit settings.

use gapedit_buffer::LineEnding;
use serde::{Deserialize, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Editor settings
    #[serde(default)]
    pub editor: EditorSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Editor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Initial viewport height in lines, before the terminal size is known
    #[serde(default = "default_viewport_lines")]
    pub viewport_lines: usize,

    /// Initial viewport width in columns
    #[serde(default = "default_viewport_columns")]
    pub viewport_columns: usize,

    /// Maximum number of undo steps kept
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Line break written on save
    #[serde(default)]
    pub line_ending: LineEndingSetting,
}

/// Line ending choice for saved files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEndingSetting {
    /// Keep what the loaded file uses, platform default for new files
    #[default]
    Auto,
    Lf,
    Crlf,
}

impl LineEndingSetting {
    /// Forced line ending, or `None` for auto-detection
    pub fn forced(self) -> Option<LineEnding> {
        match self {
            LineEndingSetting::Auto => None,
            LineEndingSetting::Lf => Some(LineEnding::LF),
            LineEndingSetting::Crlf => Some(LineEnding::CRLF),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,
}

// Default value functions for serde
fn default_viewport_lines() -> usize {
    defaults::VIEWPORT_LINES
}

fn default_viewport_columns() -> usize {
    defaults::VIEWPORT_COLUMNS
}

fn default_history_limit() -> usize {
    defaults::HISTORY_LIMIT
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            viewport_lines: default_viewport_lines(),
            viewport_columns: default_viewport_columns(),
            history_limit: default_history_limit(),
            line_ending: LineEndingSetting::default(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
        }
    }
}
