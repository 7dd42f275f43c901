//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (API location, endpoint paths, header values)
//! - The library `Config` struct
//! - CLI option types and parsing

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{Command, Opt};
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
