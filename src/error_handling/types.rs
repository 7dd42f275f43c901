//! Error type definitions.
//!
//! Every error a feed pipeline can produce is `Clone + PartialEq` so the
//! feed store can keep the last failure around and hand a copy back to the
//! caller of `refresh()`.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured base URL cannot be joined with an endpoint path.
    #[error("Invalid API base URL '{url}': {reason}")]
    BaseUrlError {
        /// The offending base URL
        url: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Transport-level failures while talking to a status endpoint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// DNS, connect, TLS or body read failure.
    #[error("Network unreachable: {0}")]
    NetworkUnreachable(String),

    /// The endpoint answered with a non-success status.
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// The HTTP client gave up waiting for a response.
    #[error("Request timed out")]
    Timeout,
}

/// The response body did not have the expected JSON shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Not JSON at all (syntax error or truncated body).
    #[error("Malformed JSON: {0}")]
    MalformedJson(String),

    /// Valid JSON, but a required field is missing or has the wrong type.
    #[error("Schema mismatch at '{0}'")]
    SchemaMismatch(String),
}

/// Failure of a whole refresh; wraps whichever stage failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RefreshError {
    /// Fetch stage failed.
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Decode or normalize stage failed.
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
}
