//! Error handling.
//!
//! This module provides:
//! - Error type definitions for every pipeline stage
//! - Categorization of `reqwest` and `serde_json` errors into those types
//!
//! Errors are layered:
//! - **FetchError**: transport failures (network, HTTP status, timeout)
//! - **DecodeError**: the body was not the JSON we expected
//! - **RefreshError**: what `FeedStore::refresh()` returns, wrapping either

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_json_error, categorize_reqwest_error, categorize_status};
pub use types::{DecodeError, FetchError, InitializationError, RefreshError};
