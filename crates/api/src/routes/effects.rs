//! Route definitions for the effect streams.

use axum::routing::get;
use axum::Router;

use crate::handlers::effects;
use crate::state::AppState;

/// Routes mounted at `/api/v1/effects`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/name", get(effects::name_stream))
        .route("/roles", get(effects::roles_stream))
        .route("/decode", get(effects::decode))
}
