//! PostgreSQL-backed `ActivityRepository` implementation using Diesel ORM.
//!
//! Resolves the most recent check-in for a user together with the place it
//! references. Activities reference exactly one place in storage; the port's
//! place list normalises that single row.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{ActivityRepository, ActivityRepositoryError};
use crate::domain::{LastPlace, UserId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ActivityRow, PlaceRow};
use super::pool::DbPool;
use super::schema::{activities, places};

/// Diesel-backed implementation of the `ActivityRepository` port.
#[derive(Clone)]
pub struct DieselActivityRepository {
    pool: DbPool,
}

impl DieselActivityRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: super::pool::PoolError) -> ActivityRepositoryError {
    map_pool_error(error, ActivityRepositoryError::connection)
}

fn map_diesel(error: diesel::result::Error) -> ActivityRepositoryError {
    map_diesel_error(
        error,
        ActivityRepositoryError::query,
        ActivityRepositoryError::connection,
    )
}

#[async_trait]
impl ActivityRepository for DieselActivityRepository {
    async fn find_latest_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<LastPlace>, ActivityRepositoryError> {
        let subject = *user_id.as_uuid();
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let latest: Option<ActivityRow> = activities::table
            .filter(activities::user_id.eq(subject))
            .order(activities::time.desc())
            .select(ActivityRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel)?;

        let Some(activity) = latest else {
            return Ok(None);
        };

        let place: Option<PlaceRow> = places::table
            .find(activity.place_id)
            .select(PlaceRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel)?;

        if place.is_none() {
            warn!(
                activity_id = %activity.activity_id,
                place_id = %activity.place_id,
                "activity references a missing place"
            );
        }

        Ok(Some(LastPlace {
            activity_id: activity.activity_id,
            time: activity.time,
            places: place.into_iter().map(Into::into).collect(),
        }))
    }
}
