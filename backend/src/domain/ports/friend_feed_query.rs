//! Driving port for the friend feed aggregation.
//!
//! Inbound adapters (HTTP handlers) use this port to fetch the aggregated
//! friend feed without importing outbound persistence concerns. The caller's
//! identity arrives explicitly; only the inbound layer touches the session.

use async_trait::async_trait;

use crate::domain::{Error, FriendWithLastPlace, UserId};

/// Domain use-case port for the friend feed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FriendFeedQuery: Send + Sync {
    /// Return the caller's friends, each merged with their most recent
    /// check-in.
    ///
    /// The result order is unspecified; presentation sorts it. A friend
    /// whose activity lookup fails is returned with `last_place: None`
    /// rather than failing the batch.
    async fn friends_with_last_places(
        &self,
        caller: &UserId,
    ) -> Result<Vec<FriendWithLastPlace>, Error>;
}

/// Fixture feed query used until persistence is wired.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFriendFeedQuery;

#[async_trait]
impl FriendFeedQuery for FixtureFriendFeedQuery {
    async fn friends_with_last_places(
        &self,
        _caller: &UserId,
    ) -> Result<Vec<FriendWithLastPlace>, Error> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_feed_is_empty() {
        let query = FixtureFriendFeedQuery;
        let feed = query
            .friends_with_last_places(&UserId::random())
            .await
            .expect("fixture feed");
        assert!(feed.is_empty());
    }
}
