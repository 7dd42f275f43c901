//! Feed stores.
//!
//! A `FeedStore` owns the latest snapshot of one feed and is the only place
//! that recovers from pipeline failures: a failed refresh leaves the previous
//! snapshot in place and is remembered as the store's last error.

mod state;


use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use crate::config::Config;
use crate::error_handling::{InitializationError, RefreshError};
use crate::fetch::HttpFetcher;
use crate::models::FeedSnapshot;
use crate::normalize::{Feed, FieldOfficeFeed, InvasionFeed};

pub use state::FeedState;
use state::InFlightGuard;

/// Listener invoked with the new snapshot after every successful refresh.
pub type Subscriber<T> = Arc<dyn Fn(&Arc<FeedSnapshot<T>>) + Send + Sync>;

/// Store for the invasions feed.
pub type InvasionStore = FeedStore<InvasionFeed>;

/// Store for the field offices feed.
pub type FieldOfficeStore = FeedStore<FieldOfficeFeed>;

/// Everything that changes together when a refresh completes.
struct Published<T> {
    snapshot: Arc<FeedSnapshot<T>>,
    last_error: Option<RefreshError>,
    last_success: Option<DateTime<Utc>>,
}

/// Holds the latest snapshot of feed `F` and publishes replacements.
///
/// # Thread Safety
///
/// Share it behind an `Arc`. Refreshes may overlap; each one swaps its
/// snapshot in under a short write lock, so the last to finish wins and
/// readers always see a complete snapshot. Swap and notification happen
/// under one publish lock, so subscribers see snapshots in the order they
/// became current.
pub struct FeedStore<F: Feed> {
    fetcher: HttpFetcher,
    published: RwLock<Published<F::Item>>,
    publishing: Mutex<()>,
    subscribers: RwLock<Vec<Subscriber<F::Item>>>,
    in_flight: AtomicUsize,
    _feed: PhantomData<F>,
}

impl<F: Feed> FeedStore<F> {
    /// Creates an uninitialized store using `fetcher`.
    pub fn new(fetcher: HttpFetcher) -> Self {
        FeedStore {
            fetcher,
            published: RwLock::new(Published {
                snapshot: Arc::new(FeedSnapshot::empty()),
                last_error: None,
                last_success: None,
            }),
            publishing: Mutex::new(()),
            subscribers: RwLock::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            _feed: PhantomData,
        }
    }

    /// Creates an uninitialized store with its own HTTP client.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        Ok(Self::new(HttpFetcher::from_config(config)?))
    }

    /// Fetches, decodes and normalizes the feed, then publishes the result.
    ///
    /// On success the snapshot is replaced wholesale, the last error is
    /// cleared and every subscriber is called. On failure nothing visible
    /// changes except `last_error()`.
    ///
    /// Dropping the returned future before it completes is safe; the
    /// snapshot is only touched after the whole pipeline has succeeded.
    ///
    /// # Errors
    ///
    /// Returns whichever stage failed, wrapped in `RefreshError`.
    pub async fn refresh(&self) -> Result<(), RefreshError> {
        let _guard = InFlightGuard::enter(&self.in_flight);
        debug!("Refreshing {} feed", F::ENDPOINT);

        match self.load().await {
            Ok(snapshot) => {
                self.publish(snapshot);
                Ok(())
            }
            Err(e) => {
                self.record_failure(&e);
                Err(e)
            }
        }
    }

    async fn load(&self) -> Result<FeedSnapshot<F::Item>, RefreshError> {
        let body = self.fetcher.fetch(F::ENDPOINT).await?;
        Ok(F::parse(&body)?)
    }

    fn publish(&self, snapshot: FeedSnapshot<F::Item>) {
        let snapshot = Arc::new(snapshot);
        // Held until every subscriber has seen this snapshot
        let _publishing = self
            .publishing
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        {
            let mut published = self.write_published();
            published.snapshot = Arc::clone(&snapshot);
            published.last_error = None;
            published.last_success = Some(Utc::now());
        }
        info!(
            "Refreshed {} feed: {} entries, last updated {}",
            F::ENDPOINT,
            snapshot.len(),
            snapshot.last_updated
        );

        // Call listeners on a copy so a listener may subscribe without deadlocking
        let subscribers: Vec<Subscriber<F::Item>> = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for subscriber in &subscribers {
            subscriber(&snapshot);
        }
    }

    fn record_failure(&self, error: &RefreshError) {
        warn!(
            "Refreshing {} feed failed, keeping previous snapshot: {}",
            F::ENDPOINT,
            error
        );
        self.write_published().last_error = Some(error.clone());
    }

    /// The latest snapshot (the empty one before the first success).
    pub fn current(&self) -> Arc<FeedSnapshot<F::Item>> {
        Arc::clone(&self.read_published().snapshot)
    }

    /// Registers `callback` to run after every successful refresh.
    pub fn subscribe<C>(&self, callback: C)
    where
        C: Fn(&Arc<FeedSnapshot<F::Item>>) + Send + Sync + 'static,
    {
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(callback));
    }

    /// Lifecycle state derived from the last success, last error and in-flight count.
    pub fn state(&self) -> FeedState {
        let published = self.read_published();
        match (&published.last_success, &published.last_error) {
            (None, _) if self.is_refreshing() => FeedState::Loading,
            (None, _) => FeedState::Uninitialized,
            (Some(_), Some(_)) => FeedState::Stale,
            (Some(_), None) => FeedState::Ready,
        }
    }

    /// Error of the most recent refresh, if it failed.
    pub fn last_error(&self) -> Option<RefreshError> {
        self.read_published().last_error.clone()
    }

    /// When the current snapshot was published.
    pub fn last_success(&self) -> Option<DateTime<Utc>> {
        self.read_published().last_success
    }

    /// True while at least one refresh is running.
    pub fn is_refreshing(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// True if no refresh has succeeded within `max_age`.
    pub fn is_stale_after(&self, max_age: Duration) -> bool {
        let Some(last_success) = self.last_success() else {
            return true;
        };
        match chrono::Duration::from_std(max_age) {
            Ok(max_age) => Utc::now() - last_success > max_age,
            // Longer than chrono can represent: never stale
            Err(_) => false,
        }
    }

    fn read_published(&self) -> RwLockReadGuard<'_, Published<F::Item>> {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_published(&self) -> RwLockWriteGuard<'_, Published<F::Item>> {
        self.published
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
