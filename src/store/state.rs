//! Feed store lifecycle state.

use std::sync::atomic::{AtomicUsize, Ordering};

use strum_macros::Display;

/// Where a feed store is in its lifecycle.
///
/// `Uninitialized -> Loading -> Ready | Stale`. Once data has arrived the
/// store only moves between `Ready` and `Stale`; a refresh in progress does
/// not send it back to `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FeedState {
    /// No refresh has succeeded and none is running.
    Uninitialized,
    /// The first refresh is in flight.
    Loading,
    /// The snapshot comes from the most recent refresh.
    Ready,
    /// The most recent refresh failed; the snapshot is from an earlier one.
    Stale,
}

/// Counts refreshes in flight; decrements on drop so a cancelled refresh
/// future still leaves the count balanced.
pub(crate) struct InFlightGuard<'a> {
    counter: &'a AtomicUsize,
}

impl<'a> InFlightGuard<'a> {
    pub(crate) fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        InFlightGuard { counter }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::SeqCst);
    }
}
