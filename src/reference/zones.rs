//! Field office zone id to street name table.
//!
//! Only the zones that are known to host field offices are listed. Other ids
//! (including any Toontown Central, Donald's Dock or Daisy Gardens office
//! zones upstream may add) resolve to [`UNKNOWN_LOCATION`].

use crate::config::UNKNOWN_LOCATION;

const FIELD_OFFICE_ZONES: &[(u32, &str)] = &[
    (3100, "Walrus Way"),
    (3200, "Sleet Street"),
    (3300, "Polar Place"),
    (4100, "Alto Avenue"),
    (4200, "Baritone Boulevard"),
    (4300, "Tenor Terrace"),
    (5100, "Elm Street"),
    (5200, "Maple Street"),
    (5300, "Oak Street"),
    (9100, "Lullaby Lane"),
    (9200, "Pajama Place"),
];

/// Street name for a field office zone, if the zone is in the table.
pub fn street_for_zone(zone_id: u32) -> Option<&'static str> {
    FIELD_OFFICE_ZONES
        .iter()
        .find(|(id, _)| *id == zone_id)
        .map(|(_, name)| *name)
}

/// Street name for a field office zone, or "Unknown Location".
pub fn zone_display_name(zone_id: u32) -> &'static str {
    street_for_zone(zone_id).unwrap_or(UNKNOWN_LOCATION)
}

/// Every mapped zone id, in table order.
pub fn known_zone_ids() -> impl Iterator<Item = u32> {
    FIELD_OFFICE_ZONES.iter().map(|(id, _)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_zones() {
        assert_eq!(zone_display_name(3100), "Walrus Way");
        assert_eq!(zone_display_name(4300), "Tenor Terrace");
        assert_eq!(zone_display_name(9200), "Pajama Place");
    }

    #[test]
    fn test_unknown_zone_falls_back() {
        assert_eq!(zone_display_name(9999), "Unknown Location");
        assert_eq!(zone_display_name(0), "Unknown Location");
        // Donald's Dock zones are deliberately absent
        assert_eq!(street_for_zone(1100), None);
    }

    #[test]
    fn test_zone_ids_are_unique() {
        let mut ids: Vec<u32> = known_zone_ids().collect();
        let len = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), len);
        assert_eq!(len, 11);
    }
}
