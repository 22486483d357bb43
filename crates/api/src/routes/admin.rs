//! Route definitions for `/admin` API endpoints. Every handler requires auth.

use axum::extract::DefaultBodyLimit;
use axum::routing::{post, put};
use axum::Router;

use super::MAX_UPLOAD_BYTES;
use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// PUT  /profile  -> update_profile
/// POST /crop     -> crop_preview
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profile", put(admin::update_profile))
        .route("/crop", post(admin::crop_preview))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}
