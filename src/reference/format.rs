//! Timestamp and label formatting shared by the feed listings.

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::config::UPDATE_TIME_FORMAT;

/// Formats a unix timestamp as `HH:mm` in `tz`.
///
/// Returns `None` for timestamps chrono cannot represent.
pub fn format_update_time_in<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> Option<String>
where
    Tz::Offset: std::fmt::Display,
{
    let utc = DateTime::<Utc>::from_timestamp(timestamp, 0)?;
    Some(utc.with_timezone(tz).format(UPDATE_TIME_FORMAT).to_string())
}

/// Formats a unix timestamp as `HH:mm` in the local time zone.
pub fn format_update_time(timestamp: i64) -> String {
    format_update_time_in(timestamp, &Local).unwrap_or_else(|| "--:--".to_string())
}

/// "N Star" label for a field office difficulty.
pub fn star_label(difficulty: u8) -> String {
    format!("{} Star", difficulty as u16 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_format_update_time_utc() {
        // 2023-11-14 22:13:20 UTC
        assert_eq!(
            format_update_time_in(1_700_000_000, &Utc).as_deref(),
            Some("22:13")
        );
        assert_eq!(format_update_time_in(0, &Utc).as_deref(), Some("00:00"));
    }

    #[test]
    fn test_format_update_time_offset() {
        let pacific = FixedOffset::west_opt(8 * 3600).expect("valid offset");
        assert_eq!(
            format_update_time_in(1_700_000_000, &pacific).as_deref(),
            Some("14:13")
        );
    }

    #[test]
    fn test_format_update_time_out_of_range() {
        assert_eq!(format_update_time_in(i64::MAX, &Utc), None);
        assert_eq!(format_update_time(i64::MAX), "--:--");
    }

    #[test]
    fn test_star_label() {
        assert_eq!(star_label(0), "1 Star");
        assert_eq!(star_label(4), "5 Star");
    }
}
