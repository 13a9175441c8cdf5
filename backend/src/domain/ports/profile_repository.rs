//! Port for profile lookups.

use async_trait::async_trait;

use crate::domain::{Profile, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by profile repository adapters.
    pub enum ProfileRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "profile repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "profile repository query failed: {message}",
    }
}

/// Port for reading user profiles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Return the profile linked to `user_id`, or `None` when no row exists.
    ///
    /// The store guarantees at most one profile per identity.
    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Profile>, ProfileRepositoryError>;
}

/// Fixture implementation reporting no profile for any user.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProfileRepository;

#[async_trait]
impl ProfileRepository for FixtureProfileRepository {
    async fn find_by_user_id(
        &self,
        _user_id: &UserId,
    ) -> Result<Option<Profile>, ProfileRepositoryError> {
        Ok(None)
    }
}
