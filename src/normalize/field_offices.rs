use std::collections::BTreeMap;

use super::Feed;
use crate::config::MAX_FIELD_OFFICE_DIFFICULTY;
use crate::decode::{FieldOfficeRecord, FieldOfficesPayload};
use crate::error_handling::DecodeError;
use crate::fetch::Endpoint;
use crate::models::{FeedSnapshot, FieldOfficeStatus, LocationKey};
use crate::reference::zone_display_name;

/// Field offices keyed by zone id.
#[derive(Debug, Clone, Copy)]
pub struct FieldOfficeFeed;

impl Feed for FieldOfficeFeed {
    type Payload = FieldOfficesPayload;
    type Item = FieldOfficeStatus;

    const ENDPOINT: Endpoint = Endpoint::FieldOffices;

    fn normalize(
        payload: FieldOfficesPayload,
    ) -> Result<FeedSnapshot<FieldOfficeStatus>, DecodeError> {
        let items_by_location = payload
            .field_offices
            .into_iter()
            .map(|(key, record)| {
                let status = normalize_office(&key, record)?;
                Ok((LocationKey::from(key), status))
            })
            .collect::<Result<BTreeMap<_, _>, DecodeError>>()?;

        Ok(FeedSnapshot {
            items_by_location,
            last_updated: payload.last_updated,
            fetch_error: None,
        })
    }
}

fn normalize_office(key: &str, record: FieldOfficeRecord) -> Result<FieldOfficeStatus, DecodeError> {
    let zone_id: u32 = key
        .trim()
        .parse()
        .map_err(|_| DecodeError::SchemaMismatch(format!("fieldOffices.{}", key)))?;
    if record.difficulty > MAX_FIELD_OFFICE_DIFFICULTY {
        return Err(DecodeError::SchemaMismatch(format!(
            "fieldOffices.{}.difficulty",
            key
        )));
    }

    Ok(FieldOfficeStatus {
        zone_id,
        location_name: zone_display_name(zone_id).to_string(),
        department: record.department,
        difficulty: record.difficulty,
        annexes_remaining: record.annexes,
        is_open: record.open,
    })
}
