//! PostgreSQL-backed `ProfileRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::Profile;
use crate::domain::UserId;
use crate::domain::ports::{ProfileRepository, ProfileRepositoryError};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::ProfileRow;
use super::pool::DbPool;
use super::schema::profiles;

/// Diesel-backed implementation of the `ProfileRepository` port.
#[derive(Clone)]
pub struct DieselProfileRepository {
    pool: DbPool,
}

impl DieselProfileRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: super::pool::PoolError) -> ProfileRepositoryError {
    map_pool_error(error, ProfileRepositoryError::connection)
}

fn map_diesel(error: diesel::result::Error) -> ProfileRepositoryError {
    map_diesel_error(
        error,
        ProfileRepositoryError::query,
        ProfileRepositoryError::connection,
    )
}

#[async_trait]
impl ProfileRepository for DieselProfileRepository {
    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Profile>, ProfileRepositoryError> {
        let subject = *user_id.as_uuid();
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let row: Option<ProfileRow> = profiles::table
            .filter(profiles::user_id.eq(subject))
            .select(ProfileRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel)?;

        Ok(row.map(Into::into))
    }
}
