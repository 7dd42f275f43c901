//! Configuration constants.
//!
//! Defaults for the upstream API location, endpoint paths and request headers.

/// Base URL of the public Toontown Rewritten API.
pub const DEFAULT_BASE_URL: &str = "https://www.toontownrewritten.com";

/// Path of the invasions feed.
pub const INVASIONS_PATH: &str = "/api/invasions";

/// Path of the field offices feed.
pub const FIELD_OFFICES_PATH: &str = "/api/fieldoffices";

/// Default User-Agent string for HTTP requests.
///
/// The upstream API asks every client to identify itself with a descriptive
/// User-Agent. Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    concat!("ttr_status/", env!("CARGO_PKG_VERSION"), " (TTR Rewatched companion)");

/// Cache directive sent on every request when cache bypass is enabled.
pub const NO_CACHE: &str = "no-cache";

/// Content type requested from the status endpoints.
pub const ACCEPT_JSON: &str = "application/json";

/// Display name used for zone ids that are not in the lookup table.
pub const UNKNOWN_LOCATION: &str = "Unknown Location";

/// Highest difficulty the field office feed reports (a 5 star office).
pub const MAX_FIELD_OFFICE_DIFFICULTY: u8 = 4;

/// Format used for "Updated HH:mm" stamps.
pub const UPDATE_TIME_FORMAT: &str = "%H:%M";
