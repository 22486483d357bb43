//! Public profile read.

use axum::extract::State;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::profile::Profile;
use folio_core::store::ProfileStore;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Read the profile row, failing if it is missing.
pub async fn load_profile(profiles: &dyn ProfileStore) -> Result<Profile, CoreError> {
    profiles.load().await?.ok_or_else(CoreError::profile_missing)
}

/// Read the profile for display. Any failure yields [`Profile::fallback`].
pub async fn load_display_profile(profiles: &dyn ProfileStore) -> Profile {
    match load_profile(profiles).await {
        Ok(profile) => profile,
        Err(err) => {
            tracing::warn!(error = %err, "Profile unavailable, showing fallback values");
            Profile::fallback()
        }
    }
}

/// GET /api/v1/profile
pub async fn get_profile(State(state): State<AppState>) -> AppResult<Json<DataResponse<Profile>>> {
    let profile = load_profile(state.profiles.as_ref()).await?;
    Ok(Json(DataResponse { data: profile }))
}
