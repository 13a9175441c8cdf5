//! Friend ping service.
//!
//! A linear sequence of checks, terminal on first failure: self check,
//! symmetric friendship check, target profile lookup, caller profile
//! lookup, then emit and invalidate. Every failure maps to a fixed
//! user-facing message; repository detail is logged, never surfaced.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info};

use crate::domain::ports::{
    FriendshipRepository, PingCommand, PingReceipt, ProfileRepository, ProfileRepositoryError,
    StaleView, ViewCacheInvalidator,
};
use crate::domain::{Error, UserId};

/// Ping service implementing the driving port.
#[derive(Clone)]
pub struct PingService<F, P, C> {
    friendship_repo: Arc<F>,
    profile_repo: Arc<P>,
    view_cache: Arc<C>,
}

impl<F, P, C> PingService<F, P, C> {
    /// Create a new service with the given repositories and invalidator.
    pub fn new(friendship_repo: Arc<F>, profile_repo: Arc<P>, view_cache: Arc<C>) -> Self {
        Self {
            friendship_repo,
            profile_repo,
            view_cache,
        }
    }
}

fn map_unexpected(error: &ProfileRepositoryError) -> Error {
    error!(%error, "unexpected failure during ping");
    Error::internal("An unexpected error occurred while sending ping")
}

#[async_trait]
impl<F, P, C> PingCommand for PingService<F, P, C>
where
    F: FriendshipRepository,
    P: ProfileRepository,
    C: ViewCacheInvalidator,
{
    async fn ping_friend(&self, caller: &UserId, target: &UserId) -> Result<PingReceipt, Error> {
        // Self-pings are forbidden by design, before any lookup happens.
        if caller == target {
            return Err(Error::forbidden("You cannot ping yourself"));
        }

        let is_friend = self
            .friendship_repo
            .exists_between(caller, target)
            .await
            .map_err(|err| {
                error!(error = %err, "friendship verification failed");
                Error::service_unavailable("Error verifying friendship")
            })?;
        if !is_friend {
            return Err(Error::forbidden("You can only ping friends"));
        }

        let target_profile = self
            .profile_repo
            .find_by_user_id(target)
            .await
            .map_err(|err| map_unexpected(&err))?
            .ok_or_else(|| Error::not_found("Friend not found"))?;

        let caller_profile = self
            .profile_repo
            .find_by_user_id(caller)
            .await
            .map_err(|err| map_unexpected(&err))?
            .ok_or_else(|| Error::not_found("User profile not found"))?;

        // The notification is log-only for now; persisted delivery is
        // future work. TODO: write a notifications row once the table and
        // retention policy land.
        info!(
            caller = %caller_profile.name,
            target = %target_profile.name,
            target_id = %target,
            at = %Utc::now().to_rfc3339(),
            "friend ping"
        );

        self.view_cache.invalidate(StaleView::Map);
        self.view_cache.invalidate(StaleView::Friends);

        Ok(PingReceipt::for_friend(&target_profile.name))
    }
}
