//! Port for activity (check-in) lookups.

use async_trait::async_trait;

use crate::domain::{LastPlace, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by activity repository adapters.
    pub enum ActivityRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "activity repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "activity repository query failed: {message}",
    }
}

/// Port for reading a user's most recent check-in.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Return the activity with the greatest `time` for `user_id`, joined
    /// with its place rows, or `None` when the user has never checked in.
    ///
    /// The join cardinality is normalized here: `places` is always a list.
    async fn find_latest_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<LastPlace>, ActivityRepositoryError>;
}

/// Fixture implementation reporting no activity for any user.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureActivityRepository;

#[async_trait]
impl ActivityRepository for FixtureActivityRepository {
    async fn find_latest_for_user(
        &self,
        _user_id: &UserId,
    ) -> Result<Option<LastPlace>, ActivityRepositoryError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixture_repository_reports_no_activity() {
        let repo = FixtureActivityRepository;
        let latest = repo
            .find_latest_for_user(&UserId::random())
            .await
            .expect("fixture lookup should succeed");
        assert!(latest.is_none());
    }
}
