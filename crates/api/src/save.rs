//! The admin save operation.
//!
//! A save performs up to two conditional uploads (avatar, optionally cropped
//! first, and resume), then fetches the row id and issues exactly one update
//! that replaces every field with the submitted form state. Without a new
//! file the stored URL is kept.
//!
//! Uploads and the update are not transactional: if the update fails after an
//! upload, the uploaded file stays in storage unreferenced.

use axum::extract::Multipart;
use folio_core::crop::{crop_image, CropRect, CroppedImage, OutputFormat};
use folio_core::error::CoreError;
use folio_core::naming::{file_extension, upload_filename};
use folio_core::profile::{
    parse_list, validate_speed, Profile, ProfileUpdate, Project, SocialLink,
    DEFAULT_NAME_SPEED_MS, DEFAULT_ROLE_SPEED_MS,
};
use folio_core::storage::{FileStore, UploadKind};
use folio_core::store::ProfileStore;

use crate::error::{AppError, AppResult};

// ---------------------------------------------------------------------------
// Form state
// ---------------------------------------------------------------------------

/// A file part of the admin form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// One project row as edited; `tech` is the comma-separated input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub tech: String,
    pub link: String,
}

impl ProjectInput {
    fn is_blank(&self) -> bool {
        self.title.trim().is_empty()
            && self.description.trim().is_empty()
            && self.tech.trim().is_empty()
            && self.link.trim().is_empty()
    }

    fn into_project(self) -> Project {
        Project {
            tech_stack: parse_list(&self.tech),
            title: self.title,
            description: self.description,
            link: self.link,
        }
    }
}

/// Everything the admin form submits.
#[derive(Debug, Clone)]
pub struct SaveForm {
    pub full_name: String,
    /// Comma-separated role list.
    pub roles: String,
    pub about_text: String,
    pub name_speed: i32,
    pub role_speed: i32,
    pub projects: Vec<ProjectInput>,
    pub social_links: Vec<SocialLink>,
    pub avatar: Option<UploadedFile>,
    /// Crop applied to `avatar` before upload.
    pub crop: Option<CropRect>,
    pub resume: Option<UploadedFile>,
}

impl Default for SaveForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            roles: String::new(),
            about_text: String::new(),
            name_speed: DEFAULT_NAME_SPEED_MS,
            role_speed: DEFAULT_ROLE_SPEED_MS,
            projects: Vec::new(),
            social_links: Vec::new(),
            avatar: None,
            crop: None,
            resume: None,
        }
    }
}

fn bad_request(e: impl ToString) -> AppError {
    AppError::BadRequest(e.to_string())
}

fn parse_speed(field: &str, value: &str, default: i32) -> AppResult<i32> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(default);
    }
    let ms = value
        .parse()
        .map_err(|_| AppError::BadRequest(format!("'{field}' must be a whole number of milliseconds")))?;
    validate_speed(field, ms)?;
    Ok(ms)
}

fn parse_coord(field: &str, value: &str) -> AppResult<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("'{field}' must be a non-negative integer")))
}

/// The `crop_x`, `crop_y`, `crop_width` and `crop_height` fields of a
/// multipart form. Blank values count as absent.
#[derive(Debug, Default)]
pub struct CropFields([Option<u32>; 4]);

impl CropFields {
    /// Record `value` if `name` is a crop field; `false` for any other field.
    pub fn accept(&mut self, name: &str, value: &str) -> AppResult<bool> {
        let slot = match name {
            "crop_x" => 0,
            "crop_y" => 1,
            "crop_width" => 2,
            "crop_height" => 3,
            _ => return Ok(false),
        };
        if !value.trim().is_empty() {
            self.0[slot] = Some(parse_coord(name, value)?);
        }
        Ok(true)
    }

    /// The rectangle, if all four fields were given. A partial set is an error.
    pub fn finish(self) -> AppResult<Option<CropRect>> {
        match self.0 {
            [Some(x), Some(y), Some(width), Some(height)] => Ok(Some(CropRect {
                x,
                y,
                width,
                height,
            })),
            [None, None, None, None] => Ok(None),
            _ => Err(AppError::BadRequest(
                "Crop area needs crop_x, crop_y, crop_width and crop_height".into(),
            )),
        }
    }
}

/// Crop and re-encode on the blocking pool.
pub async fn crop_blocking(
    bytes: Vec<u8>,
    rect: CropRect,
    format: OutputFormat,
) -> AppResult<CroppedImage> {
    let cropped = tokio::task::spawn_blocking(move || crop_image(&bytes, rect, format))
        .await
        .map_err(|e| AppError::InternalError(format!("Crop task failed: {e}")))??;
    Ok(cropped)
}

/// Write `value` into slot `index` of a repeated field, growing the list.
fn set_at(rows: &mut Vec<ProjectInput>, index: usize, f: impl FnOnce(&mut ProjectInput)) {
    if rows.len() <= index {
        rows.resize_with(index + 1, ProjectInput::default);
    }
    f(&mut rows[index]);
}

impl SaveForm {
    /// Parse the multipart admin form.
    ///
    /// Project and social rows arrive as repeated fields (`project_title`,
    /// `social_url`, ...) and are paired up by position. Blank rows are
    /// dropped; social platforms and URLs must come in equal numbers. An
    /// empty file part means "no new file".
    pub async fn from_multipart(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = SaveForm::default();
        let mut counters = [0usize; 4];
        let mut platforms: Vec<String> = Vec::new();
        let mut urls: Vec<String> = Vec::new();
        let mut crop = CropFields::default();

        while let Some(field) = multipart.next_field().await.map_err(bad_request)? {
            let name = field.name().unwrap_or("").to_string();
            match name.as_str() {
                "avatar" | "resume" => {
                    let filename = field.file_name().unwrap_or("").to_string();
                    let bytes = field.bytes().await.map_err(bad_request)?;
                    if filename.is_empty() || bytes.is_empty() {
                        continue;
                    }
                    let file = UploadedFile {
                        filename,
                        bytes: bytes.to_vec(),
                    };
                    if name == "avatar" {
                        form.avatar = Some(file);
                    } else {
                        form.resume = Some(file);
                    }
                }
                _ => {
                    let text = field.text().await.map_err(bad_request)?;
                    if !crop.accept(&name, &text)? {
                        form.apply_text(&name, text, &mut counters, &mut platforms, &mut urls)?;
                    }
                }
            }
        }

        form.projects.retain(|p| !p.is_blank());
        if platforms.len() != urls.len() {
            return Err(AppError::BadRequest(format!(
                "Got {} social platforms but {} social URLs",
                platforms.len(),
                urls.len()
            )));
        }
        form.social_links = platforms
            .into_iter()
            .zip(urls)
            .filter(|(_, url)| !url.trim().is_empty())
            .map(|(platform, url)| SocialLink {
                platform: platform.trim().to_string(),
                url: url.trim().to_string(),
            })
            .collect();

        form.crop = crop.finish()?;

        Ok(form)
    }

    fn apply_text(
        &mut self,
        name: &str,
        text: String,
        counters: &mut [usize; 4],
        platforms: &mut Vec<String>,
        urls: &mut Vec<String>,
    ) -> AppResult<()> {
        let mut next = |slot: usize| {
            let index = counters[slot];
            counters[slot] += 1;
            index
        };
        match name {
            "full_name" => self.full_name = text,
            "roles" => self.roles = text,
            "about_text" => self.about_text = text,
            "name_speed" => {
                self.name_speed = parse_speed(name, &text, DEFAULT_NAME_SPEED_MS)?;
            }
            "role_speed" => {
                self.role_speed = parse_speed(name, &text, DEFAULT_ROLE_SPEED_MS)?;
            }
            "project_title" => set_at(&mut self.projects, next(0), |p| p.title = text),
            "project_description" => {
                set_at(&mut self.projects, next(1), |p| p.description = text)
            }
            "project_tech" => set_at(&mut self.projects, next(2), |p| p.tech = text),
            "project_link" => set_at(&mut self.projects, next(3), |p| p.link = text),
            "social_platform" => platforms.push(text),
            "social_url" => urls.push(text),
            _ => {} // ignore unknown fields
        }
        Ok(())
    }

    /// Checks that hold however the form was built: speeds of at least one
    /// millisecond, and no crop area without an avatar to apply it to.
    pub fn validate(&self) -> AppResult<()> {
        validate_speed("name_speed", self.name_speed)?;
        validate_speed("role_speed", self.role_speed)?;
        if self.crop.is_some() && self.avatar.is_none() {
            return Err(AppError::BadRequest(
                "Crop area given without an avatar image".into(),
            ));
        }
        Ok(())
    }

    /// The row update this form produces, given the URLs to store.
    pub fn to_update(&self, avatar_url: String, resume_url: Option<String>) -> ProfileUpdate {
        ProfileUpdate {
            full_name: self.full_name.trim().to_string(),
            roles: parse_list(&self.roles),
            about_text: self.about_text.clone(),
            avatar_url,
            resume_url,
            name_speed: self.name_speed,
            role_speed: self.role_speed,
            projects: self
                .projects
                .iter()
                .cloned()
                .map(ProjectInput::into_project)
                .collect(),
            social_links: self.social_links.clone(),
        }
    }

    /// What the editor shows when a save fails: `stored` overlaid with the
    /// submitted values, keeping the stored file URLs.
    pub fn draft(&self, stored: &Profile) -> Profile {
        stored.with_update(&self.to_update(stored.avatar_url.clone(), stored.resume_url.clone()))
    }
}

// ---------------------------------------------------------------------------
// Save service
// ---------------------------------------------------------------------------

/// A file ready for upload.
struct PendingUpload {
    kind: UploadKind,
    extension: String,
    bytes: Vec<u8>,
}

/// Validate a file part and pick its stored extension.
async fn prepare_upload(
    kind: UploadKind,
    file: &UploadedFile,
    crop: Option<CropRect>,
) -> AppResult<PendingUpload> {
    let extension = file_extension(&file.filename).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "{} file '{}' has no extension",
            kind.prefix(),
            file.filename
        )))
    })?;
    kind.validate_extension(&extension)?;

    match crop {
        Some(rect) => {
            let cropped = crop_blocking(file.bytes.clone(), rect, OutputFormat::Jpeg).await?;
            tracing::debug!(%rect, width = cropped.width, height = cropped.height, "Avatar cropped");
            Ok(PendingUpload {
                kind,
                extension: cropped.format.extension().to_string(),
                bytes: cropped.bytes,
            })
        }
        None => Ok(PendingUpload {
            kind,
            extension,
            bytes: file.bytes.clone(),
        }),
    }
}

async fn upload(files: &dyn FileStore, pending: &PendingUpload) -> AppResult<String> {
    let filename = upload_filename(
        pending.kind.prefix(),
        &pending.extension,
        chrono::Utc::now().timestamp_millis(),
    );
    let bucket = pending.kind.bucket();
    let key = files.upload(bucket, &filename, &pending.bytes).await?;
    Ok(files.public_url(bucket, &key))
}

/// Run a save: crop, upload, then one update of the singleton row.
///
/// The form is validated, every file checked and the avatar cropped before
/// anything is written, so a bad input leaves storage untouched.
pub async fn save_profile(
    profiles: &dyn ProfileStore,
    files: &dyn FileStore,
    form: &SaveForm,
) -> AppResult<Profile> {
    form.validate()?;

    let avatar = match &form.avatar {
        Some(file) => Some(prepare_upload(UploadKind::Avatar, file, form.crop).await?),
        None => None,
    };
    let resume = match &form.resume {
        Some(file) => Some(prepare_upload(UploadKind::Resume, file, None).await?),
        None => None,
    };

    let stored = profiles.load().await?.ok_or_else(CoreError::profile_missing)?;

    let mut uploaded = Vec::new();

    let avatar_url = match &avatar {
        Some(pending) => {
            let url = upload(files, pending).await?;
            uploaded.push(url.clone());
            url
        }
        None => stored.avatar_url.clone(),
    };

    let resume_url = match &resume {
        Some(pending) => match upload(files, pending).await {
            Ok(url) => {
                uploaded.push(url.clone());
                Some(url)
            }
            Err(err) => {
                warn_orphaned(&uploaded);
                return Err(err);
            }
        },
        None => stored.resume_url.clone(),
    };

    let update = form.to_update(avatar_url, resume_url);

    let result = async {
        let id = profiles.current_id().await?.ok_or_else(CoreError::profile_missing)?;
        profiles.update(id, &update).await
    }
    .await;

    match result {
        Ok(profile) => {
            tracing::info!(
                uploads = uploaded.len(),
                projects = profile.projects.len(),
                "Profile saved"
            );
            Ok(profile)
        }
        Err(err) => {
            warn_orphaned(&uploaded);
            Err(err.into())
        }
    }
}

fn warn_orphaned(uploaded: &[String]) {
    if !uploaded.is_empty() {
        tracing::warn!(files = ?uploaded, "Profile not updated; uploaded files are unreferenced");
    }
}
