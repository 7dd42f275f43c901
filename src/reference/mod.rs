//! Static reference data.
//!
//! Hardcoded, read-only tables used next to the live feeds:
//! - Field office zone id to street name
//! - Cog faction percentages per street, grouped by neighborhood
//! - Timestamp and star label formatting

mod format;
mod streets;
mod zones;

pub use format::{format_update_time, format_update_time_in, star_label};
pub use streets::{
    find_neighborhood, find_street, CogFaction, CogPercentages, Neighborhood, Street,
    NEIGHBORHOODS,
};
pub use zones::{known_zone_ids, street_for_zone, zone_display_name};
