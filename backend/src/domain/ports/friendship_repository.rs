//! Port for friendship edge lookups.
//!
//! Friendships are undirected and stored once per unordered pair, so every
//! lookup here matches the subject against both edge orientations. Adapters
//! own that symmetry; callers never see edge direction.

use async_trait::async_trait;

use crate::domain::{FriendProfile, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by friendship repository adapters.
    pub enum FriendshipRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "friendship repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "friendship repository query failed: {message}",
    }
}

/// Port for reading friendship edges.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FriendshipRepository: Send + Sync {
    /// Return every friend of `user_id` with edge metadata and the friend's
    /// profile.
    ///
    /// Matches `user_id` against both endpoints of each edge and resolves
    /// the counterpart profile. The result order is unspecified.
    async fn find_friend_profiles(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<FriendProfile>, FriendshipRepositoryError>;

    /// Check whether an edge exists between `a` and `b`, in either
    /// orientation.
    async fn exists_between(
        &self,
        a: &UserId,
        b: &UserId,
    ) -> Result<bool, FriendshipRepositoryError>;
}

/// Fixture implementation for wiring without a database.
///
/// Reports no friends and no edges; use it where friendship behaviour is not
/// under test.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFriendshipRepository;

#[async_trait]
impl FriendshipRepository for FixtureFriendshipRepository {
    async fn find_friend_profiles(
        &self,
        _user_id: &UserId,
    ) -> Result<Vec<FriendProfile>, FriendshipRepositoryError> {
        Ok(Vec::new())
    }

    async fn exists_between(
        &self,
        _a: &UserId,
        _b: &UserId,
    ) -> Result<bool, FriendshipRepositoryError> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_repository_reports_no_friends() {
        let repo = FixtureFriendshipRepository;
        let user_id = UserId::random();

        let friends = repo
            .find_friend_profiles(&user_id)
            .await
            .expect("fixture lookup should succeed");
        assert!(friends.is_empty());
    }

    #[tokio::test]
    async fn fixture_repository_reports_no_edges() {
        let repo = FixtureFriendshipRepository;
        let exists = repo
            .exists_between(&UserId::random(), &UserId::random())
            .await
            .expect("fixture lookup should succeed");
        assert!(!exists);
    }

    #[test]
    fn error_constructors_format_messages() {
        let error = FriendshipRepositoryError::connection("pool exhausted");
        assert!(error.to_string().contains("pool exhausted"));
    }
}
