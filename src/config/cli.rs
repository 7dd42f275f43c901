//! Command-line options.
//!
//! `Opt` is parsed by `clap` in `main.rs` and converted into the library
//! [`Config`]; the subcommand picks which feed is shown.

use clap::{Parser, Subcommand};

use crate::config::constants::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use crate::config::types::{Config, LogFormat, LogLevel};

/// Command-line options and configuration.
///
/// # Examples
///
/// ```bash
/// # Current invasions
/// ttr_status invasions
///
/// # Field offices as JSON, against a local mirror of the API
/// ttr_status --base-url http://localhost:8080 field-offices --json
///
/// # Static street cog tables for one playground
/// ttr_status streets "Donald's Dreamland"
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "ttr_status",
    about = "Shows live Toontown Rewritten invasions, field offices and street cog tables."
)]
pub struct Opt {
    /// Base URL of the status API
    #[arg(long, env = "TTR_API_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// HTTP User-Agent header value
    #[arg(long, env = "TTR_USER_AGENT", default_value = DEFAULT_USER_AGENT, global = true)]
    pub user_agent: String,

    /// Allow intermediaries to serve cached responses (no `Cache-Control: no-cache`)
    #[arg(long, global = true)]
    pub no_bypass_cache: bool,

    /// Per-request timeout in seconds (defaults to the HTTP client's own behaviour)
    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// What to show.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Refresh and list current cog invasions
    Invasions {
        /// Print the snapshot as JSON instead of a listing
        #[arg(long)]
        json: bool,
    },
    /// Refresh and list current field offices
    FieldOffices {
        /// Print the snapshot as JSON instead of a listing
        #[arg(long)]
        json: bool,
    },
    /// Refresh both feeds and print a combined summary
    Status,
    /// Print the static cog percentage table per street
    Streets {
        /// Only show this neighborhood (case-insensitive)
        neighborhood: Option<String>,
    },
}

impl From<&Opt> for Config {
    fn from(opt: &Opt) -> Self {
        Config {
            base_url: opt.base_url.clone(),
            user_agent: opt.user_agent.clone(),
            bypass_cache: !opt.no_bypass_cache,
            timeout_seconds: opt.timeout_seconds,
            log_level: opt.log_level.clone(),
            log_format: opt.log_format.clone(),
        }
    }
}
