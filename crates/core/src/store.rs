//! Seam over the profile row storage.
//!
//! The HTTP layer talks to the singleton profile through [`ProfileStore`];
//! `folio_db::PgProfileStore` is the production implementation.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::profile::{Profile, ProfileUpdate};
use crate::types::DbId;

/// Read and update access to the singleton profile row.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Read the full profile. `None` if the row has not been provisioned.
    async fn load(&self) -> Result<Option<Profile>, CoreError>;

    /// Identifier of the existing profile row, if any.
    async fn current_id(&self) -> Result<Option<DbId>, CoreError>;

    /// Replace every editable column of row `id`.
    ///
    /// Fails with [`CoreError::NotFound`] when the row does not exist.
    async fn update(&self, id: DbId, update: &ProfileUpdate) -> Result<Profile, CoreError>;
}
