//! Port for signalling cached view staleness.
//!
//! A successful ping invalidates cached renders of the map and friends
//! views. The signal is fire-and-forget: failures to record staleness must
//! never fail the operation that raised them, so the port is infallible.

/// Views whose cached renders can go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaleView {
    /// The friend-location map view.
    Map,
    /// The friends list view.
    Friends,
}

impl StaleView {
    /// Path identifier of the cached view.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Map => "/map",
            Self::Friends => "/friends",
        }
    }
}

/// Port for marking cached renders of a view stale.
#[cfg_attr(test, mockall::automock)]
pub trait ViewCacheInvalidator: Send + Sync {
    /// Mark cached renders of `view` stale.
    fn invalidate(&self, view: StaleView);
}

/// Fixture invalidator that drops every signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpViewCacheInvalidator;

impl ViewCacheInvalidator for NoOpViewCacheInvalidator {
    fn invalidate(&self, _view: StaleView) {}
}
