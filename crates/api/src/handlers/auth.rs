//! Handlers for the `/auth` resource (login, logout, current user).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_db::models::user::{User, UserResponse};
use folio_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Message shown for every failed sign-in.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login` (also the login page form).
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful sign-in response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Sign-in
// ---------------------------------------------------------------------------

/// Check credentials and issue a session token.
///
/// Unknown email and wrong password produce the same error.
pub async fn sign_in(state: &AppState, input: &LoginRequest) -> AppResult<(User, String)> {
    let invalid = || AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into()));

    let user = UserRepo::find_by_email(&state.pool, input.email.trim())
        .await?
        .ok_or_else(invalid)?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let password = input.password.clone();
    let stored_hash = user.password_hash.clone();
    let password_valid =
        tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
            .await
            .map_err(|e| AppError::InternalError(format!("Password verification task failed: {e}")))?
            .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(user_id = user.id, "Failed sign-in");
        return Err(invalid());
    }

    UserRepo::record_successful_login(&state.pool, user.id).await?;

    let token = generate_token(user.id, &user.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "Signed in");
    Ok((user, token))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let (user, token) = sign_in(&state, &input).await?;
    Ok(Json(AuthResponse {
        access_token: token,
        expires_in: state.config.jwt.expires_in_secs(),
        user: UserResponse::from(&user),
    }))
}

/// POST /api/v1/auth/logout
///
/// Tokens are stateless; the client discards its copy.
pub async fn logout(auth: AuthUser) -> StatusCode {
    tracing::info!(user_id = auth.user_id, "Signed out");
    StatusCode::NO_CONTENT
}

/// GET /api/v1/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Unknown user".into())))?;
    Ok(Json(DataResponse {
        data: UserResponse::from(&user),
    }))
}
