use std::sync::Arc;

use folio_core::storage::FileStore;
use folio_core::store::ProfileStore;
use tokio_util::sync::CancellationToken;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (users, health).
    pub pool: folio_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// The singleton profile row.
    pub profiles: Arc<dyn ProfileStore>,
    /// Avatar and resume uploads.
    pub files: Arc<dyn FileStore>,
    /// Cancelled at shutdown; ends every open effect stream.
    pub effects_cancel: CancellationToken,
}
