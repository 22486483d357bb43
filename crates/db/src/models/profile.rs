//! Profile row model.

use folio_core::profile::{Profile, Project, SocialLink};
use folio_core::types::{DbId, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;

/// Full row from the `profile` table.
#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
    pub id: DbId,
    pub full_name: String,
    pub roles: Vec<String>,
    pub about_text: String,
    pub avatar_url: String,
    pub resume_url: Option<String>,
    pub name_speed: i32,
    pub role_speed: i32,
    pub projects: Json<Vec<Project>>,
    pub social_links: Json<Vec<SocialLink>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: row.id,
            full_name: row.full_name,
            roles: row.roles,
            about_text: row.about_text,
            avatar_url: row.avatar_url,
            resume_url: row.resume_url,
            name_speed: row.name_speed,
            role_speed: row.role_speed,
            projects: row.projects.0,
            social_links: row.social_links.0,
            updated_at: Some(row.updated_at),
        }
    }
}
