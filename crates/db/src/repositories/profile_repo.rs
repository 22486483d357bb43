//! Repository for the singleton `profile` table.
//!
//! Every query is keyed by id; callers pass
//! [`folio_core::profile::PROFILE_ROW_ID`].

use folio_core::profile::ProfileUpdate;
use folio_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::profile::ProfileRow;

/// Column list for `profile` queries.
const COLUMNS: &str = "\
    id, full_name, roles, about_text, avatar_url, resume_url, \
    name_speed, role_speed, projects, social_links, created_at, updated_at";

/// Provides data access for the profile row.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Read the full row.
    pub async fn find(pool: &PgPool, id: DbId) -> Result<Option<ProfileRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profile WHERE id = $1");
        sqlx::query_as::<_, ProfileRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Confirm the row exists, returning its id.
    pub async fn find_id(pool: &PgPool, id: DbId) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM profile WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace every editable column. Lists are written wholesale.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProfileUpdate,
    ) -> Result<Option<ProfileRow>, sqlx::Error> {
        let query = format!(
            "UPDATE profile SET \
                 full_name = $2, \
                 roles = $3, \
                 about_text = $4, \
                 avatar_url = $5, \
                 resume_url = $6, \
                 name_speed = $7, \
                 role_speed = $8, \
                 projects = $9, \
                 social_links = $10 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProfileRow>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.roles)
            .bind(&input.about_text)
            .bind(&input.avatar_url)
            .bind(&input.resume_url)
            .bind(input.name_speed)
            .bind(input.role_speed)
            .bind(Json(&input.projects))
            .bind(Json(&input.social_links))
            .fetch_optional(pool)
            .await
    }
}
