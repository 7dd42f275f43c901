//! Fetch stage of the feed pipelines.
//!
//! Issues plain GET requests against the status API with cache bypass headers
//! and returns the raw body. Decoding happens elsewhere.

mod endpoint;
mod fetcher;
mod request;


pub use endpoint::Endpoint;
pub use fetcher::{HttpFetcher, RawBytes};
