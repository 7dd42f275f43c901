//! ttr_status library: live Toontown Rewritten status feeds
//!
//! This library polls the public invasions and field offices endpoints,
//! decodes their JSON into typed records keyed by location, and keeps the
//! latest snapshot of each feed in a [`FeedStore`] that presentation code can
//! read, refresh on demand, and subscribe to.
//!
//! # Example
//!
//! ```no_run
//! use ttr_status::{Config, InvasionStore};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InvasionStore::from_config(&Config::default())?;
//! store.subscribe(|snapshot| println!("{} invasions", snapshot.len()));
//!
//! store.refresh().await?;
//! for (street, invasion) in &store.current().items_by_location {
//!     println!("{}: {} ({})", street, invasion.enemy_type, invasion.progress);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Refreshing requires a Tokio runtime. Reading snapshots does not.

#![warn(missing_docs)]

#[allow(missing_docs)]
pub mod app;
pub mod config;
pub mod decode;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
#[allow(missing_docs)]
pub mod models;
pub mod normalize;
#[allow(missing_docs)]
pub mod reference;
pub mod store;

// Re-export public API
pub use app::run_command;
pub use config::{Command, Config, LogFormat, LogLevel, Opt};
pub use error_handling::{DecodeError, FetchError, InitializationError, RefreshError};
pub use fetch::{Endpoint, HttpFetcher};
pub use models::{FeedSnapshot, FieldOfficeStatus, InvasionStatus, LocationKey};
pub use normalize::{Feed, FieldOfficeFeed, InvasionFeed};
pub use store::{FeedState, FeedStore, FieldOfficeStore, InvasionStore};
