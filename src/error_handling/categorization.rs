//! Error categorization.
//!
//! Maps `reqwest` and `serde_json` failures onto the feed error taxonomy.

use reqwest::StatusCode;
use serde_json::error::Category;

use super::types::{DecodeError, FetchError};

/// Categorizes a `reqwest::Error` into a `FetchError`.
///
/// Status errors keep their code, timeouts are reported as such, and every
/// other transport failure (connect, DNS, TLS, body) is treated as the
/// network being unreachable.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FetchError {
    if let Some(status) = error.status() {
        return FetchError::HttpStatus(status.as_u16());
    }
    if error.is_timeout() {
        return FetchError::Timeout;
    }
    FetchError::NetworkUnreachable(error.to_string())
}

/// Categorizes a non-success status.
pub fn categorize_status(status: StatusCode) -> FetchError {
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => FetchError::Timeout,
        other => FetchError::HttpStatus(other.as_u16()),
    }
}

/// Categorizes a `serde_json::Error` into a `DecodeError`.
///
/// Syntax errors and premature end of input mean the body was not JSON;
/// data errors mean the JSON was fine but did not match the wire schema.
/// For data errors the offending field name is extracted from serde's
/// message when it names one.
pub fn categorize_json_error(error: &serde_json::Error) -> DecodeError {
    match error.classify() {
        Category::Syntax | Category::Eof | Category::Io => {
            DecodeError::MalformedJson(error.to_string())
        }
        Category::Data => DecodeError::SchemaMismatch(
            field_from_message(&error.to_string()).unwrap_or_else(|| error.to_string()),
        ),
    }
}

/// Pulls the backtick-quoted field out of "missing field `x`" style messages.
fn field_from_message(message: &str) -> Option<String> {
    let rest = message.strip_prefix("missing field `")?;
    let end = rest.find('`')?;
    Some(rest[..end].to_string())
}
