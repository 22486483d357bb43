pub mod admin;
pub mod auth;
pub mod effects;
pub mod health;
pub mod pages;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Largest request body accepted by the upload forms (avatar + resume).
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Build the `/api/v1` route tree, excluding the effect streams.
///
/// ```text
/// /profile                 GET    public profile
///
/// /auth/login              POST   sign in (public)
/// /auth/logout             POST   sign out (requires auth)
/// /auth/me                 GET    current user (requires auth)
///
/// /admin/profile           PUT    save the profile form (requires auth)
/// /admin/crop              POST   crop preview (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(handlers::profile::get_profile))
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
}

/// Long-lived SSE routes, mounted under `/api/v1/effects` outside the
/// request timeout.
///
/// ```text
/// /name                    GET    name scramble stream
/// /roles                   GET    role rotation stream
/// /decode?text=            GET    one hover-decode pass
/// ```
pub fn effect_routes() -> Router<AppState> {
    effects::router()
}
