//! Decode stage of the feed pipelines.
//!
//! Turns a raw response body into the typed wire payload of its endpoint.

mod wire;

use serde::de::DeserializeOwned;

use crate::error_handling::{categorize_json_error, DecodeError};

pub use wire::{FieldOfficeRecord, FieldOfficesPayload, InvasionRecord, InvasionsPayload};

/// Parses `bytes` as the JSON payload `P`.
///
/// # Errors
///
/// - `DecodeError::MalformedJson` if the body is not JSON
/// - `DecodeError::SchemaMismatch` if a required field is missing or mistyped
pub fn decode<P: DeserializeOwned>(bytes: &[u8]) -> Result<P, DecodeError> {
    serde_json::from_slice(bytes).map_err(|e| categorize_json_error(&e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_invasions_payload() {
        let body = br#"{
            "error": null,
            "invasions": {
                "Silly Street": {"asOf": 1700000000, "type": "Supervisor", "progress": "40/50"}
            },
            "lastUpdated": 1700000000
        }"#;
        let payload: InvasionsPayload = decode(body).expect("should decode");
        assert_eq!(payload.error, None);
        assert_eq!(payload.last_updated, 1_700_000_000);
        let records = payload.records().expect("records should decode");
        let record = &records["Silly Street"];
        assert_eq!(record.cog_type, "Supervisor");
        assert_eq!(record.progress, "40/50");
    }

    #[test]
    fn test_decode_invasions_with_error_and_no_map() {
        let body = br#"{"error": "Invasion data is temporarily unavailable", "lastUpdated": 1700000123}"#;
        let payload: InvasionsPayload = decode(body).expect("degraded response should decode");
        assert_eq!(
            payload.error.as_deref(),
            Some("Invasion data is temporarily unavailable")
        );
        assert_eq!(payload.entry_count(), 0);
        assert!(payload.records().expect("absent map is empty").is_empty());
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let body = br#"{
            "fieldOffices": {
                "3100": {"department": "s", "difficulty": 0, "annexes": 12, "open": true, "expiring": null}
            },
            "lastUpdated": 1700000000,
            "version": 2
        }"#;
        let payload: FieldOfficesPayload = decode(body).expect("should decode");
        assert_eq!(payload.field_offices["3100"].annexes, 12);
    }

    #[test]
    fn test_decode_malformed_json() {
        let err = decode::<InvasionsPayload>(b"not json").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedJson(_)));
    }

    #[test]
    fn test_decode_missing_last_updated() {
        let err = decode::<FieldOfficesPayload>(br#"{"fieldOffices": {}}"#).unwrap_err();
        assert_eq!(err, DecodeError::SchemaMismatch("lastUpdated".to_string()));
    }

    #[test]
    fn test_decode_missing_field_offices_map() {
        let err = decode::<FieldOfficesPayload>(br#"{"lastUpdated": 1}"#).unwrap_err();
        assert_eq!(err, DecodeError::SchemaMismatch("fieldOffices".to_string()));
    }

    #[test]
    fn test_decode_wrong_type() {
        let body = br#"{"fieldOffices": {"3100": {"department": "s", "difficulty": "hard", "annexes": 1, "open": true}}, "lastUpdated": 1}"#;
        let err = decode::<FieldOfficesPayload>(body).unwrap_err();
        assert!(matches!(err, DecodeError::SchemaMismatch(_)));
    }

    #[test]
    fn test_decode_negative_annexes_is_schema_mismatch() {
        let body = br#"{"fieldOffices": {"3100": {"department": "s", "difficulty": 1, "annexes": -1, "open": true}}, "lastUpdated": 1}"#;
        let err = decode::<FieldOfficesPayload>(body).unwrap_err();
        assert!(matches!(err, DecodeError::SchemaMismatch(_)));
    }
}
