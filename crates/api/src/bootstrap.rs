//! Startup provisioning of the admin account.

use folio_db::models::user::CreateUser;
use folio_db::repositories::UserRepo;
use folio_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::AdminBootstrap;
use crate::error::{AppError, AppResult};

/// Create the admin user if no user with that email exists yet.
///
/// An existing account is left untouched, including its password.
/// Returns `true` when a user was created.
pub async fn ensure_admin(pool: &DbPool, admin: &AdminBootstrap) -> AppResult<bool> {
    if UserRepo::find_by_email(pool, &admin.email).await?.is_some() {
        tracing::debug!(email = %admin.email, "Admin account already present");
        return Ok(false);
    }

    let password = admin.password.clone();
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {e}")))?
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: admin.email.clone(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, email = %user.email, "Admin account created");
    Ok(true)
}
