//! Domain types, services, and ports.
//!
//! Everything here is transport and storage agnostic. Inbound adapters call
//! the driving ports ([`ports::FriendFeedQuery`], [`ports::PingCommand`]);
//! outbound adapters implement the repository and invalidation ports.

pub mod error;
pub mod feed;
pub mod friend_feed_service;
pub mod friendship;
pub mod ping_service;
pub mod place;
pub mod ports;
pub mod profile;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::feed::{FriendWithLastPlace, PartitionedFriends};
pub use self::friend_feed_service::FriendFeedService;
pub use self::friendship::FriendProfile;
pub use self::ping_service::PingService;
pub use self::place::{LastPlace, Place};
pub use self::profile::{Profile, UserId, UserIdValidationError};

/// Convenient result alias for domain operations.
pub type ApiResult<T> = Result<T, Error>;
