//! PostgreSQL-backed `FriendshipRepository` implementation using Diesel ORM.
//!
//! Friendship edges are stored once per unordered pair, so every lookup
//! matches the subject against both columns before resolving counterpart
//! profiles.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;
use uuid::Uuid;

use crate::domain::ports::{FriendshipRepository, FriendshipRepositoryError};
use crate::domain::{FriendProfile, UserId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{FriendshipRow, ProfileRow};
use super::pool::DbPool;
use super::schema::{friendships, profiles};

/// Diesel-backed implementation of the `FriendshipRepository` port.
#[derive(Clone)]
pub struct DieselFriendshipRepository {
    pool: DbPool,
}

impl DieselFriendshipRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: super::pool::PoolError) -> FriendshipRepositoryError {
    map_pool_error(error, FriendshipRepositoryError::connection)
}

fn map_diesel(error: diesel::result::Error) -> FriendshipRepositoryError {
    map_diesel_error(
        error,
        FriendshipRepositoryError::query,
        FriendshipRepositoryError::connection,
    )
}

#[async_trait]
impl FriendshipRepository for DieselFriendshipRepository {
    async fn find_friend_profiles(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<FriendProfile>, FriendshipRepositoryError> {
        let subject = *user_id.as_uuid();
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let edges: Vec<FriendshipRow> = friendships::table
            .filter(
                friendships::user1_id
                    .eq(subject)
                    .or(friendships::user2_id.eq(subject)),
            )
            .select(FriendshipRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel)?;

        if edges.is_empty() {
            return Ok(Vec::new());
        }

        let counterpart_ids: Vec<Uuid> = edges
            .iter()
            .map(|edge| edge.counterpart_of(subject))
            .collect();

        let rows: Vec<ProfileRow> = profiles::table
            .filter(profiles::user_id.eq_any(&counterpart_ids))
            .select(ProfileRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel)?;

        let mut by_user_id: HashMap<Uuid, ProfileRow> =
            rows.into_iter().map(|row| (row.user_id, row)).collect();

        let mut friends = Vec::with_capacity(edges.len());
        for edge in edges {
            let counterpart = edge.counterpart_of(subject);
            let Some(row) = by_user_id.remove(&counterpart) else {
                // An edge without a counterpart profile is a data integrity
                // gap, not a reason to fail the whole feed.
                warn!(
                    friendship_id = %edge.friendship_id,
                    counterpart = %counterpart,
                    "friendship edge has no counterpart profile, skipping"
                );
                continue;
            };
            friends.push(FriendProfile {
                friendship_id: edge.friendship_id,
                since: edge.created_at,
                profile: row.into(),
            });
        }

        Ok(friends)
    }

    async fn exists_between(
        &self,
        a: &UserId,
        b: &UserId,
    ) -> Result<bool, FriendshipRepositoryError> {
        let (first, second) = (*a.as_uuid(), *b.as_uuid());
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let edge: Option<Uuid> = friendships::table
            .filter(
                friendships::user1_id
                    .eq(first)
                    .and(friendships::user2_id.eq(second))
                    .or(friendships::user1_id
                        .eq(second)
                        .and(friendships::user2_id.eq(first))),
            )
            .select(friendships::friendship_id)
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel)?;

        Ok(edge.is_some())
    }
}
