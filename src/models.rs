//! Normalized records handed to presentation layers.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Identifier of a map zone within a feed.
///
/// Invasions are keyed by street name, field offices by their zone id; both
/// arrive as JSON object keys, so the key is always kept as the wire string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct LocationKey(String);

impl LocationKey {
    pub fn new(key: impl Into<String>) -> Self {
        LocationKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LocationKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LocationKey {
    fn from(key: &str) -> Self {
        LocationKey::new(key)
    }
}

impl From<String> for LocationKey {
    fn from(key: String) -> Self {
        LocationKey(key)
    }
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A cog invasion on one street.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvasionStatus {
    /// Unix timestamp the district reported this invasion at
    pub as_of: i64,
    /// Cog name, e.g. "Supervisor"
    pub enemy_type: String,
    /// "<defeated>/<total>" as reported upstream
    pub progress: String,
}

impl InvasionStatus {
    /// Parses `progress` into `(defeated, total)`.
    ///
    /// Returns `None` when upstream sends something other than two integers
    /// separated by a slash; the raw string is still displayed in that case.
    pub fn progress_counts(&self) -> Option<(u32, u32)> {
        let (defeated, total) = self.progress.split_once('/')?;
        Some((defeated.trim().parse().ok()?, total.trim().parse().ok()?))
    }

    /// Cogs left before the invasion ends, when `progress` is parseable.
    pub fn remaining(&self) -> Option<u32> {
        self.progress_counts()
            .map(|(defeated, total)| total.saturating_sub(defeated))
    }
}

/// A field office in one zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOfficeStatus {
    pub zone_id: u32,
    /// Street name resolved from `zone_id`, or "Unknown Location"
    pub location_name: String,
    pub department: String,
    /// 0..=4
    pub difficulty: u8,
    pub annexes_remaining: u32,
    pub is_open: bool,
}

impl FieldOfficeStatus {
    /// Star rating shown to players (`difficulty + 1`).
    pub fn stars(&self) -> u8 {
        self.difficulty.saturating_add(1)
    }
}

/// The full state of a feed at one point in time.
///
/// Replaced wholesale on every successful refresh; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedSnapshot<T> {
    pub items_by_location: BTreeMap<LocationKey, T>,
    /// Feed-level timestamp reported by the API (0 before the first refresh)
    pub last_updated: i64,
    /// Error the API itself reported alongside a degraded response
    pub fetch_error: Option<String>,
}

impl<T> FeedSnapshot<T> {
    /// The snapshot a store starts with.
    pub fn empty() -> Self {
        FeedSnapshot {
            items_by_location: BTreeMap::new(),
            last_updated: 0,
            fetch_error: None,
        }
    }

    pub fn len(&self) -> usize {
        self.items_by_location.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items_by_location.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.items_by_location.get(key)
    }
}

impl<T> Default for FeedSnapshot<T> {
    fn default() -> Self {
        Self::empty()
    }
}
