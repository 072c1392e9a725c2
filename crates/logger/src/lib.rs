//! Logging infrastructure for ved.
//!
//! The editor owns the terminal while it runs, so diagnostics go to a
//! log file instead of stdout/stderr. Messages logged before `init` is
//! called are dropped, which keeps library code free to log without
//! caring whether a binary set the logger up (tests never do).

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
    /// Minimum log level to record
    min_level: LogLevel,
    /// Log file path
    file_path: PathBuf,
}

impl Logger {
    fn new(file_path: PathBuf, min_level: LogLevel) -> Self {
        if let Some(parent) = file_path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        // Start a fresh log per session.
        if let Ok(mut file) = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)
        {
            let _ = writeln!(file, "=== ved log start ===");
        }

        Self {
            min_level,
            file_path,
        }
    }

    fn write(&self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = Local::now().format("%H:%M:%S");

        // Recreate the file if it was deleted under us.
        if let Ok(mut file) = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.file_path)
        {
            let _ = writeln!(file, "[{}] {}: {}", timestamp, level.to_str(), message);
        }
    }
}

/// Global logger instance that persists for the application lifetime.
static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Initialize the global logger.
///
/// Must be called once at application startup; subsequent calls are
/// ignored. The log file is truncated.
pub fn init(file_path: PathBuf, min_level: LogLevel) {
    LOGGER.get_or_init(|| Mutex::new(Logger::new(file_path, min_level)));
}

fn write(level: LogLevel, message: String) {
    if let Some(logger) = LOGGER.get() {
        if let Ok(logger) = logger.lock() {
            logger.write(level, &message);
        }
    }
}

/// Log a debug message
pub fn debug(message: impl Into<String>) {
    write(LogLevel::Debug, message.into());
}

/// Log an informational message
pub fn info(message: impl Into<String>) {
    write(LogLevel::Info, message.into());
}

/// Log a warning message
pub fn warn(message: impl Into<String>) {
    write(LogLevel::Warn, message.into());
}

/// Log an error message
pub fn error(message: impl Into<String>) {
    write(LogLevel::Error, message.into());
}
