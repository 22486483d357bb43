//! Authenticated JSON endpoints behind `/api/v1/admin`.

use axum::extract::{Multipart, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::crop::OutputFormat;
use folio_core::profile::Profile;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::save::{crop_blocking, save_profile, CropFields, SaveForm};
use crate::state::AppState;

/// PUT /api/v1/admin/profile
///
/// Same multipart form as the admin page; answers with the saved profile.
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Multipart,
) -> AppResult<Json<DataResponse<Profile>>> {
    let form = SaveForm::from_multipart(multipart).await?;
    let profile = save_profile(state.profiles.as_ref(), state.files.as_ref(), &form).await?;
    tracing::info!(user_id = auth.user_id, "Profile updated via API");
    Ok(Json(DataResponse { data: profile }))
}

/// POST /api/v1/admin/crop
///
/// Multipart with an `image` file, `crop_x`, `crop_y`, `crop_width`,
/// `crop_height` and an optional `format` (`jpeg` or `png`). Answers with the
/// encoded crop; nothing is stored.
pub async fn crop_preview(
    _auth: AuthUser,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut image: Option<Vec<u8>> = None;
    let mut crop = CropFields::default();
    let mut format = OutputFormat::Jpeg;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == "image" {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            image = Some(data.to_vec());
            continue;
        }

        let text = field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        if crop.accept(&name, &text)? {
            continue;
        }
        if name == "format" {
            format = match text.trim().to_lowercase().as_str() {
                "png" => OutputFormat::Png,
                "jpeg" | "jpg" | "" => OutputFormat::Jpeg,
                other => {
                    return Err(AppError::BadRequest(format!(
                        "Unsupported crop format '{other}'"
                    )))
                }
            };
        }
    }

    let image =
        image.ok_or_else(|| AppError::BadRequest("Missing required 'image' field".into()))?;
    let rect = crop.finish()?.ok_or_else(|| {
        AppError::BadRequest("Crop area needs crop_x, crop_y, crop_width and crop_height".into())
    })?;

    let cropped = crop_blocking(image, rect, format).await?;

    Ok(([(CONTENT_TYPE, cropped.format.content_type())], cropped.bytes))
}
