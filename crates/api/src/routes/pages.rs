//! Route definitions for the HTML pages.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use super::MAX_UPLOAD_BYTES;
use crate::handlers::pages;
use crate::state::AppState;

/// Page routes, mounted at the root.
///
/// ```text
/// GET  /        -> home
/// GET  /login   -> login_page
/// POST /login   -> login_submit
/// POST /logout  -> logout
/// GET  /admin   -> admin_page (redirects to /login without a session)
/// POST /admin   -> admin_submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/login", get(pages::login_page).post(pages::login_submit))
        .route("/logout", post(pages::logout))
        .route(
            "/admin",
            get(pages::admin_page)
                .post(pages::admin_submit)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
}
