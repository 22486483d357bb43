//! JWT-based authentication extractor for Axum handlers.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use folio_core::error::CoreError;
use folio_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::auth::session::SESSION_COOKIE;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a `Bearer` token in the `Authorization`
/// header or, failing that, from the session cookie.
///
/// JSON handlers take `AuthUser` and reject with 401. HTML pages take
/// `Option<AuthUser>` and redirect to the login page on `None`.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    pub email: String,
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.into()))
}

/// Find the raw token: header first, then cookie.
fn extract_token(parts: &Parts) -> Result<String, AppError> {
    if let Some(header) = parts.headers.get("authorization") {
        let value = header
            .to_str()
            .map_err(|_| unauthorized("Invalid Authorization header"))?;
        return value
            .strip_prefix("Bearer ")
            .map(str::to_string)
            .ok_or_else(|| unauthorized("Invalid Authorization format. Expected: Bearer <token>"));
    }

    CookieJar::from_headers(&parts.headers)
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| unauthorized("Not signed in"))
}

fn authenticate(parts: &Parts, state: &AppState) -> Result<AuthUser, AppError> {
    let token = extract_token(parts)?;
    let claims = validate_token(&token, &state.config.jwt)
        .map_err(|_| unauthorized("Invalid or expired token"))?;

    Ok(AuthUser {
        user_id: claims.sub,
        email: claims.email,
    })
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authenticate(parts, state)
    }
}

impl OptionalFromRequestParts<AppState> for AuthUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        match authenticate(parts, state) {
            Ok(user) => Ok(Some(user)),
            Err(err) => {
                tracing::debug!(error = %err, "No valid session");
                Ok(None)
            }
        }
    }
}
