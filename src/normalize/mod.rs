//! Normalize stage of the feed pipelines.
//!
//! A [`Feed`] names everything that differs between the two pipelines: the
//! endpoint, its wire payload, the record type consumers see, and the pure
//! function mapping one to the other. `FeedStore` is generic over it.

mod field_offices;
mod invasions;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::decode::decode;
use crate::error_handling::DecodeError;
use crate::fetch::Endpoint;
use crate::models::FeedSnapshot;

pub use field_offices::FieldOfficeFeed;
pub use invasions::InvasionFeed;

/// One polled data source.
pub trait Feed: Send + Sync + 'static {
    /// Wire payload returned by the endpoint.
    type Payload: DeserializeOwned;
    /// Normalized record stored per location.
    type Item: Clone + std::fmt::Debug + PartialEq + Serialize + Send + Sync + 'static;

    /// Endpoint this feed polls.
    const ENDPOINT: Endpoint;

    /// Maps a decoded payload into a snapshot.
    ///
    /// Pure and all-or-nothing: if any entry cannot be normalized the whole
    /// payload is rejected.
    fn normalize(payload: Self::Payload) -> Result<FeedSnapshot<Self::Item>, DecodeError>;

    /// Decodes and normalizes a raw body in one step.
    fn parse(bytes: &[u8]) -> Result<FeedSnapshot<Self::Item>, DecodeError> {
        Self::normalize(decode(bytes)?)
    }
}
