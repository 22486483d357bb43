//! Domain error type shared by every folio crate.

use crate::profile::PROFILE_ROW_ID;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Bad user input: unsupported file type, crop outside the image, ...
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Storage or encoding failure. The message is logged, never shown.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// The singleton profile row has not been provisioned.
    pub fn profile_missing() -> Self {
        CoreError::NotFound {
            entity: "Profile",
            id: PROFILE_ROW_ID,
        }
    }
}
