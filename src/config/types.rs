//! Configuration types.
//!
//! This module defines the enums and structs shared by the library and the CLI.

use clap::ValueEnum;

use crate::config::constants::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use ttr_status::Config;
///
/// let config = Config {
///     base_url: "http://localhost:8080".to_string(),
///     timeout_seconds: Some(5),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the status API; endpoint paths are appended to its path
    pub base_url: String,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Send `Cache-Control: no-cache` on every request
    pub bypass_cache: bool,

    /// Per-request timeout in seconds (`None` keeps the HTTP client default)
    pub timeout_seconds: Option<u64>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            bypass_cache: true,
            timeout_seconds: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
