//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod activity_repository;
mod friend_feed_query;
mod friendship_repository;
mod ping_command;
mod profile_repository;
mod view_cache;

#[cfg(test)]
pub use activity_repository::MockActivityRepository;
pub use activity_repository::{
    ActivityRepository, ActivityRepositoryError, FixtureActivityRepository,
};
#[cfg(test)]
pub use friend_feed_query::MockFriendFeedQuery;
pub use friend_feed_query::{FixtureFriendFeedQuery, FriendFeedQuery};
#[cfg(test)]
pub use friendship_repository::MockFriendshipRepository;
pub use friendship_repository::{
    FixtureFriendshipRepository, FriendshipRepository, FriendshipRepositoryError,
};
#[cfg(test)]
pub use ping_command::MockPingCommand;
pub use ping_command::{FixturePingCommand, PingCommand, PingReceipt};
#[cfg(test)]
pub use profile_repository::MockProfileRepository;
pub use profile_repository::{
    FixtureProfileRepository, ProfileRepository, ProfileRepositoryError,
};
#[cfg(test)]
pub use view_cache::MockViewCacheInvalidator;
pub use view_cache::{NoOpViewCacheInvalidator, StaleView, ViewCacheInvalidator};
