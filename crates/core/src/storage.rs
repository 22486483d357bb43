//! File storage: upload kinds, extension validation and the [`FileStore`]
//! seam with its local-filesystem implementation.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Bucket holding avatar images.
pub const BUCKET_IMAGES: &str = "images";

/// Bucket holding resume documents.
pub const BUCKET_DOCUMENTS: &str = "documents";

/// URL prefix under which stored files are served.
pub const PUBLIC_STORAGE_PREFIX: &str = "/storage";

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif"];
const DOCUMENT_EXTENSIONS: &[&str] = &["pdf"];

// ---------------------------------------------------------------------------
// Upload kinds
// ---------------------------------------------------------------------------

/// The two kinds of file the admin form can upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Avatar,
    Resume,
}

impl UploadKind {
    /// Filename prefix for [`crate::naming::upload_filename`].
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Avatar => "avatar",
            Self::Resume => "resume",
        }
    }

    pub fn bucket(self) -> &'static str {
        match self {
            Self::Avatar => BUCKET_IMAGES,
            Self::Resume => BUCKET_DOCUMENTS,
        }
    }

    fn allowed_extensions(self) -> &'static [&'static str] {
        match self {
            Self::Avatar => IMAGE_EXTENSIONS,
            Self::Resume => DOCUMENT_EXTENSIONS,
        }
    }

    /// Check that `ext` (lowercase, no dot) is accepted for this kind.
    pub fn validate_extension(self, ext: &str) -> Result<(), CoreError> {
        let allowed = self.allowed_extensions();
        if allowed.contains(&ext) {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "Unsupported {} file type '.{ext}'. Must be one of: {allowed:?}",
                self.prefix()
            )))
        }
    }
}

// ---------------------------------------------------------------------------
// FileStore seam
// ---------------------------------------------------------------------------

/// Object storage used for avatar and resume uploads.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Store `bytes` under `filename` in `bucket`, returning the storage key.
    async fn upload(&self, bucket: &str, filename: &str, bytes: &[u8])
        -> Result<String, CoreError>;

    /// Public URL of a stored object.
    fn public_url(&self, bucket: &str, key: &str) -> String;
}

/// [`FileStore`] writing to `<root>/<bucket>/<key>` on the local filesystem.
///
/// Files are expected to be served at `<public_base_url>/storage/<bucket>/<key>`.
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalFileStore {
    /// `public_base_url` may be empty, producing same-origin relative URLs.
    pub fn new(root: impl Into<PathBuf>, public_base_url: &str) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

/// Reject names that could escape the bucket directory.
fn validate_segment(kind: &str, value: &str) -> Result<(), CoreError> {
    if value.is_empty()
        || value.starts_with('.')
        || value.contains('/')
        || value.contains('\\')
    {
        return Err(CoreError::Validation(format!(
            "Invalid storage {kind} '{value}'"
        )));
    }
    Ok(())
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn upload(
        &self,
        bucket: &str,
        filename: &str,
        bytes: &[u8],
    ) -> Result<String, CoreError> {
        validate_segment("bucket", bucket)?;
        validate_segment("filename", filename)?;

        let dir = self.root.join(bucket);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| CoreError::Internal(format!("Failed to create {dir:?}: {e}")))?;

        let path = dir.join(filename);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| CoreError::Internal(format!("Failed to write {path:?}: {e}")))?;

        tracing::info!(bucket, key = filename, size = bytes.len(), "Stored upload");
        Ok(filename.to_string())
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        format!(
            "{}{PUBLIC_STORAGE_PREFIX}/{bucket}/{key}",
            self.public_base_url
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
