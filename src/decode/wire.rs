//! Wire schema of the status endpoints.
//!
//! Field names follow the JSON exactly; unknown fields are ignored.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error_handling::{categorize_json_error, DecodeError};

/// Body of `GET /api/invasions`.
///
/// `invasions` stays untyped until [`records`](Self::records) is called: a
/// degraded response may carry `null` or half-filled entries next to its
/// `error`, and those must not fail the decode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvasionsPayload {
    /// Set by the API when it could not assemble the invasion list
    #[serde(default)]
    pub error: Option<String>,
    /// Street name -> invasion; may be absent or `null` on a degraded response
    #[serde(default)]
    pub invasions: Value,
    pub last_updated: i64,
}

impl InvasionsPayload {
    /// Number of raw entries in the invasion map, valid or not.
    pub fn entry_count(&self) -> usize {
        self.invasions.as_object().map_or(0, |map| map.len())
    }

    /// Decodes the per-street records. An absent or `null` map is empty.
    ///
    /// # Errors
    ///
    /// `DecodeError::SchemaMismatch` if the map or one of its records has the
    /// wrong shape.
    pub fn records(&self) -> Result<HashMap<String, InvasionRecord>, DecodeError> {
        if self.invasions.is_null() {
            return Ok(HashMap::new());
        }
        HashMap::<String, InvasionRecord>::deserialize(&self.invasions)
            .map_err(|e| categorize_json_error(&e))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvasionRecord {
    pub as_of: i64,
    #[serde(rename = "type")]
    pub cog_type: String,
    pub progress: String,
}

/// Body of `GET /api/fieldoffices`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOfficesPayload {
    /// Zone id (as a string) -> field office
    pub field_offices: HashMap<String, FieldOfficeRecord>,
    pub last_updated: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldOfficeRecord {
    pub department: String,
    pub difficulty: u8,
    pub annexes: u32,
    pub open: bool,
}
