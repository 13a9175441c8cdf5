//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    FixtureFriendFeedQuery, FixturePingCommand, FriendFeedQuery, PingCommand,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Friend feed aggregation use-case.
    pub friend_feed: Arc<dyn FriendFeedQuery>,
    /// Friend ping use-case.
    pub ping: Arc<dyn PingCommand>,
}

impl HttpState {
    /// Bundle concrete port implementations for the handlers.
    pub fn new(friend_feed: Arc<dyn FriendFeedQuery>, ping: Arc<dyn PingCommand>) -> Self {
        Self { friend_feed, ping }
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self {
            friend_feed: Arc::new(FixtureFriendFeedQuery),
            ping: Arc::new(FixturePingCommand),
        }
    }
}
