//! Text listings of feed snapshots.
//!
//! These mirror what the watch screens show: invasions sorted by street, field
//! offices sorted by difficulty, an "Updated HH:mm" footer, and a loading line
//! until the first refresh succeeds.

use std::fmt::Write;

use chrono::TimeZone;

use crate::error_handling::RefreshError;
use crate::models::{FeedSnapshot, FieldOfficeStatus, InvasionStatus};
use crate::reference::{find_street, format_update_time_in, star_label, Neighborhood};
use crate::store::FeedState;

/// What a listing needs to know about its store besides the snapshot.
#[derive(Debug, Clone, Copy)]
pub struct StoreStatus<'a> {
    pub state: FeedState,
    pub last_error: Option<&'a RefreshError>,
}

fn has_data(status: &StoreStatus<'_>) -> bool {
    matches!(status.state, FeedState::Ready | FeedState::Stale)
}

fn push_footer<T, Tz>(out: &mut String, snapshot: &FeedSnapshot<T>, status: &StoreStatus<'_>, tz: &Tz)
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if let Some(error) = &snapshot.fetch_error {
        let _ = writeln!(out, "Server reported: {}", error);
    }
    let updated =
        format_update_time_in(snapshot.last_updated, tz).unwrap_or_else(|| "--:--".to_string());
    let _ = writeln!(out, "Updated {}", updated);
    if let (FeedState::Stale, Some(error)) = (status.state, status.last_error) {
        let _ = writeln!(out, "Last refresh failed ({}), showing previous data", error);
    }
}

/// Invasion listing, one line per street in name order.
pub fn render_invasions<Tz>(
    snapshot: &FeedSnapshot<InvasionStatus>,
    status: StoreStatus<'_>,
    tz: &Tz,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if !has_data(&status) {
        return "Invasions loading\n".to_string();
    }

    let mut out = String::new();
    if snapshot.is_empty() {
        out.push_str("No invasions right now\n");
    }
    for (street, invasion) in &snapshot.items_by_location {
        let place = match find_street(street.as_str()) {
            Some((neighborhood, _)) => format!("{}, {}", street, neighborhood.name),
            None => street.to_string(),
        };
        let _ = writeln!(
            out,
            "{}s in {}: {} defeated (as of {})",
            invasion.enemy_type,
            place,
            invasion.progress,
            format_update_time_in(invasion.as_of, tz).unwrap_or_else(|| "--:--".to_string())
        );
    }
    push_footer(&mut out, snapshot, &status, tz);
    out
}

/// Field office listing, easiest first.
pub fn render_field_offices<Tz>(
    snapshot: &FeedSnapshot<FieldOfficeStatus>,
    status: StoreStatus<'_>,
    tz: &Tz,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if !has_data(&status) {
        return "Field Offices loading\n".to_string();
    }

    let mut offices: Vec<&FieldOfficeStatus> = snapshot.items_by_location.values().collect();
    offices.sort_by_key(|office| (office.difficulty, office.zone_id));

    let mut out = String::new();
    if offices.is_empty() {
        out.push_str("No field offices right now\n");
    }
    for office in offices {
        let _ = writeln!(
            out,
            "{} Field Office in {}: {} annexes left{}",
            star_label(office.difficulty),
            office.location_name,
            office.annexes_remaining,
            if office.is_open { "" } else { " (closed)" }
        );
    }
    push_footer(&mut out, snapshot, &status, tz);
    out
}

/// Cog percentage tables for the given neighborhoods.
pub fn render_streets<'a>(neighborhoods: impl IntoIterator<Item = &'a Neighborhood>) -> String {
    let mut out = String::new();
    for neighborhood in neighborhoods {
        let _ = writeln!(out, "{}", neighborhood.name);
        for street in neighborhood.streets {
            let c = street.cogs;
            let _ = writeln!(
                out,
                "  {:<20} Bossbots {:>2}%  Lawbots {:>2}%  Cashbots {:>2}%  Sellbots {:>2}%",
                street.name, c.bossbot, c.lawbot, c.cashbot, c.sellbot
            );
        }
    }
    out
}
