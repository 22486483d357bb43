//! Postgres-backed [`ProfileStore`].

use async_trait::async_trait;
use folio_core::error::CoreError;
use folio_core::profile::{Profile, ProfileUpdate, PROFILE_ROW_ID};
use folio_core::store::ProfileStore;
use folio_core::types::DbId;

use crate::repositories::ProfileRepo;
use crate::DbPool;

/// [`ProfileStore`] over the singleton `profile` row.
#[derive(Debug, Clone)]
pub struct PgProfileStore {
    pool: DbPool,
}

impl PgProfileStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn db_error(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Profile store query failed");
    CoreError::Internal(format!("Database error: {err}"))
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn load(&self) -> Result<Option<Profile>, CoreError> {
        let row = ProfileRepo::find(&self.pool, PROFILE_ROW_ID)
            .await
            .map_err(db_error)?;
        Ok(row.map(Profile::from))
    }

    async fn current_id(&self) -> Result<Option<DbId>, CoreError> {
        ProfileRepo::find_id(&self.pool, PROFILE_ROW_ID)
            .await
            .map_err(db_error)
    }

    async fn update(&self, id: DbId, update: &ProfileUpdate) -> Result<Profile, CoreError> {
        ProfileRepo::update(&self.pool, id, update)
            .await
            .map_err(db_error)?
            .map(Profile::from)
            .ok_or(CoreError::NotFound {
                entity: "Profile",
                id,
            })
    }
}
