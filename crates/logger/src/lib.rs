//! Logging infrastructure for gapedit.
//!
//! A small global logger writing timestamped lines to a file. Messages sent
//! before [`init`] are discarded, so library code can log unconditionally.

use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Convert log level to string
    pub fn to_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

#[derive(Debug)]
struct Logger {
    min_level: LogLevel,
    file_path: Option<PathBuf>,
}

impl Logger {
    fn new(file_path: Option<PathBuf>, min_level: LogLevel) -> Self {
        if let Some(path) = &file_path {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }

            // Truncate on startup
            if let Ok(mut file) = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)
            {
                let _ = writeln!(file, "=== gapedit log start ===");
            }
        }

        Self {
            min_level,
            file_path,
        }
    }

    fn add_entry(&mut self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }
        let Some(path) = &self.file_path else {
            return;
        };

        let timestamp = Local::now().format("%H:%M:%S");
        // Recreated if deleted while running
        if let Ok(mut file) = OpenOptions::new().append(true).create(true).open(path) {
            let _ = writeln!(file, "[{}] {}: {}", timestamp, level.to_str(), message);
        }
    }
}

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Initialize the global logger
///
/// Subsequent calls are ignored.
///
/// # Arguments
///
/// * `file_path` - Log file, or `None` to discard every message
/// * `min_level` - Minimum log level to record
pub fn init(file_path: Option<PathBuf>, min_level: LogLevel) {
    LOGGER.get_or_init(|| Mutex::new(Logger::new(file_path, min_level)));
}

fn log(level: LogLevel, message: impl Into<String>) {
    if let Some(logger) = LOGGER.get() {
        if let Ok(mut logger) = logger.lock() {
            logger.add_entry(level, &message.into());
        }
    }
}

/// Log a debug message
pub fn debug(message: impl Into<String>) {
    log(LogLevel::Debug, message);
}

/// Log an informational message
pub fn info(message: impl Into<String>) {
    log(LogLevel::Info, message);
}

/// Log a warning message
pub fn warn(message: impl Into<String>) {
    log(LogLevel::Warn, message);
}

/// Log an error message
pub fn error(message: impl Into<String>) {
    log(LogLevel::Error, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("loud".parse::<LogLevel>().is_err());
        assert!(LogLevel::Debug < LogLevel::Error);
    }

    #[test]
    fn test_logger_filters_and_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("gapedit.log");

        let mut logger = Logger::new(Some(path.clone()), LogLevel::Info);
        logger.add_entry(LogLevel::Debug, "hidden");
        logger.add_entry(LogLevel::Info, "one");
        logger.add_entry(LogLevel::Warn, "two");

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("=== gapedit log start ==="));
        assert!(written.contains("INFO: one"));
        assert!(written.contains("WARN: two"));
        assert!(!written.contains("hidden"));
    }

    #[test]
    fn test_logger_restarts_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gapedit.log");
        fs::write(&path, "old session\n").unwrap();

        let mut logger = Logger::new(Some(path.clone()), LogLevel::Debug);
        logger.add_entry(LogLevel::Debug, "fresh");

        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.contains("old session"));
        assert!(written.contains("DEBUG: fresh"));
    }

    #[test]
    fn test_messages_before_init_are_dropped() {
        // Must not panic without a logger
        debug("ignored");
        warn("ignored");
    }
}
