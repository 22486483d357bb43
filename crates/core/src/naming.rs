//! Upload naming convention.
//!
//! Stored files are named `<kind>-<unix_millis>.<ext>` so repeated uploads
//! never collide. Superseded files are left in place.

/// Generate a stored filename from an upload kind, an extension and the
/// upload time in Unix milliseconds.
///
/// The extension is lowercased and stripped of any leading dot.
///
/// # Examples
///
/// ```
/// use folio_core::naming::upload_filename;
///
/// assert_eq!(upload_filename("avatar", "JPG", 1700000000000), "avatar-1700000000000.jpg");
/// assert_eq!(upload_filename("resume", ".pdf", 42), "resume-42.pdf");
/// ```
pub fn upload_filename(kind: &str, extension: &str, timestamp_millis: i64) -> String {
    let ext = extension.trim_start_matches('.').to_lowercase();
    format!("{kind}-{timestamp_millis}.{ext}")
}

/// Extract the lowercased extension from a client-supplied filename.
///
/// Returns `None` when the name has no extension.
pub fn file_extension(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_uses_kind_and_timestamp() {
        assert_eq!(upload_filename("avatar", "png", 1), "avatar-1.png");
    }

    #[test]
    fn filename_normalizes_extension() {
        assert_eq!(upload_filename("avatar", ".JPEG", 7), "avatar-7.jpeg");
    }

    #[test]
    fn extension_from_filename() {
        assert_eq!(file_extension("me.PNG").as_deref(), Some("png"));
        assert_eq!(file_extension("archive.tar.gz").as_deref(), Some("gz"));
    }

    #[test]
    fn extension_missing() {
        assert_eq!(file_extension("README"), None);
        assert_eq!(file_extension(".bashrc"), None);
        assert_eq!(file_extension("trailing."), None);
    }
}
