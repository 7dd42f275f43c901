use log::warn;

use super::Feed;
use crate::decode::InvasionsPayload;
use crate::error_handling::DecodeError;
use crate::fetch::Endpoint;
use crate::models::{FeedSnapshot, InvasionStatus, LocationKey};

/// Cog invasions keyed by street name.
#[derive(Debug, Clone, Copy)]
pub struct InvasionFeed;

impl Feed for InvasionFeed {
    type Payload = InvasionsPayload;
    type Item = InvasionStatus;

    const ENDPOINT: Endpoint = Endpoint::Invasions;

    /// A payload carrying an upstream `error` yields no invasions; the error
    /// is kept on the snapshot so it can be surfaced.
    fn normalize(payload: InvasionsPayload) -> Result<FeedSnapshot<InvasionStatus>, DecodeError> {
        let mut snapshot = FeedSnapshot::empty();
        snapshot.last_updated = payload.last_updated;

        if let Some(error) = payload.error.clone() {
            warn!(
                "Invasions feed reported an error, ignoring {} entries: {}",
                payload.entry_count(),
                error
            );
            snapshot.fetch_error = Some(error);
            return Ok(snapshot);
        }

        snapshot.items_by_location = payload
            .records()?
            .into_iter()
            .map(|(street, record)| {
                (
                    LocationKey::from(street),
                    InvasionStatus {
                        as_of: record.as_of,
                        enemy_type: record.cog_type,
                        progress: record.progress,
                    },
                )
            })
            .collect();
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SILLY_STREET: &[u8] = br#"{"invasions":{"Silly Street":{"asOf":1700000000,"type":"Supervisor","progress":"40/50"}},"lastUpdated":1700000000,"error":null}"#;

    #[test]
    fn test_single_invasion() {
        let snapshot = InvasionFeed::parse(SILLY_STREET).expect("should parse");
        assert_eq!(snapshot.len(), 1);
        let invasion = snapshot.get("Silly Street").expect("keyed by street");
        assert_eq!(invasion.enemy_type, "Supervisor");
        assert_eq!(invasion.progress, "40/50");
        assert_eq!(invasion.as_of, 1_700_000_000);
        assert_eq!(snapshot.last_updated, 1_700_000_000);
        assert_eq!(snapshot.fetch_error, None);
    }

    #[test]
    fn test_error_payload_yields_no_items() {
        let body = br#"{"error":"Toontown is closed","invasions":{"Silly Street":{"asOf":1,"type":"Flunky","progress":"1/2"}},"lastUpdated":1700000050}"#;
        let snapshot = InvasionFeed::parse(body).expect("degraded payload still parses");
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.fetch_error.as_deref(), Some("Toontown is closed"));
        assert_eq!(snapshot.last_updated, 1_700_000_050);
    }

    #[test]
    fn test_error_payload_with_null_map() {
        let body = br#"{"error":"districts offline","invasions":null,"lastUpdated":1700000050}"#;
        let snapshot = InvasionFeed::parse(body).expect("null map next to an error is tolerated");
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.fetch_error.as_deref(), Some("districts offline"));
    }

    #[test]
    fn test_error_payload_with_broken_entries() {
        let body = br#"{"error":"districts offline","invasions":{"Silly Street":{}},"lastUpdated":1700000050}"#;
        let snapshot = InvasionFeed::parse(body).expect("entries are ignored when an error is set");
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.fetch_error.as_deref(), Some("districts offline"));
    }

    #[test]
    fn test_null_map_without_error_is_empty() {
        let body = br#"{"error":null,"invasions":null,"lastUpdated":1700000050}"#;
        let snapshot = InvasionFeed::parse(body).expect("should parse");
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.fetch_error, None);
    }

    #[test]
    fn test_wrong_map_type_rejects_payload() {
        let body = br#"{"error":null,"invasions":[],"lastUpdated":1700000050}"#;
        assert!(matches!(
            InvasionFeed::parse(body),
            Err(DecodeError::SchemaMismatch(_))
        ));
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let body = br#"{"invasions":{
            "Loopy Lane":{"asOf":1700000001,"type":"Cold Caller","progress":"100/3000"},
            "Elm Street":{"asOf":1700000002,"type":"Mr. Hollywood","progress":"5/1000"},
            "Polar Place":{"asOf":1700000003,"type":"Bottom Feeder","progress":"2999/3000"}
        },"lastUpdated":1700000010,"error":null}"#;
        let first = InvasionFeed::parse(body).expect("should parse");
        let second = InvasionFeed::parse(body).expect("should parse");
        assert_eq!(first, second);
        let streets: Vec<&str> = first.items_by_location.keys().map(|k| k.as_str()).collect();
        assert_eq!(streets, vec!["Elm Street", "Loopy Lane", "Polar Place"]);
    }

    #[test]
    fn test_missing_record_field_rejects_payload() {
        let body = br#"{"invasions":{"Silly Street":{"asOf":1,"type":"Flunky"}},"lastUpdated":1}"#;
        assert_eq!(
            InvasionFeed::parse(body).unwrap_err(),
            DecodeError::SchemaMismatch("progress".to_string())
        );
    }
}
