//! In-process view cache invalidation adapter.
//!
//! Implements the `ViewCacheInvalidator` port with per-view epoch counters.
//! Rendered-view caching happens at the edge; this adapter only tracks which
//! views have gone stale, and consumers compare epochs to decide whether a
//! cached rendering is still current.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::domain::ports::{StaleView, ViewCacheInvalidator};

/// Epoch-based view cache invalidator.
///
/// Each view carries a monotonically increasing epoch. Invalidation bumps the
/// epoch for the named view; a cached rendering is stale when its recorded
/// epoch no longer matches [`EpochViewCache::epoch`].
#[derive(Debug, Default)]
pub struct EpochViewCache {
    map_epoch: AtomicU64,
    friends_epoch: AtomicU64,
}

impl EpochViewCache {
    /// Create a new invalidator with all epochs at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current epoch for the given view.
    pub fn epoch(&self, view: StaleView) -> u64 {
        self.counter(view).load(Ordering::Acquire)
    }

    fn counter(&self, view: StaleView) -> &AtomicU64 {
        match view {
            StaleView::Map => &self.map_epoch,
            StaleView::Friends => &self.friends_epoch,
        }
    }
}

impl ViewCacheInvalidator for EpochViewCache {
    fn invalidate(&self, view: StaleView) {
        let epoch = self.counter(view).fetch_add(1, Ordering::AcqRel) + 1;
        debug!(path = view.path(), epoch, "view cache invalidated");
    }
}
