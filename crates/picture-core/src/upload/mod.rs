//! Upload validation.
//!
//! [`validate_upload`] decides whether a submitted file may be stored and
//! under which name; [`crate::ImageStore::save`] performs the write.

pub mod sanitize;

use crate::error::{CoreError, CoreResult};
use crate::gallery::filter::is_image_file;

pub use sanitize::{sanitize_filename, MAX_FILENAME_LEN};

/// The `file` field of an upload form: the name the client claimed and the bytes it sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub data: Vec<u8>,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: Some(file_name.into()),
            data: data.into(),
        }
    }
}

/// Checks an upload and returns the sanitized name it should be stored under.
///
/// # Errors
///
/// - [`CoreError::MissingFile`] — `upload` is `None`.
/// - [`CoreError::EmptyFileName`] — the file carries no name or an empty one.
/// - [`CoreError::UnsupportedType`] — the claimed name is not an image.
/// - [`CoreError::InvalidName`] — the sanitized name is empty, lost its image
///   extension, or is still longer than [`MAX_FILENAME_LEN`].
pub fn validate_upload(upload: Option<&UploadedFile>) -> CoreResult<String> {
    let upload = upload.ok_or(CoreError::MissingFile)?;
    let claimed = match upload.file_name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(CoreError::EmptyFileName),
    };

    if !is_image_file(claimed) {
        return Err(CoreError::UnsupportedType(claimed.to_string()));
    }

    let safe = sanitize_filename(claimed);
    if safe.is_empty() || safe.len() > MAX_FILENAME_LEN || !is_image_file(&safe) {
        return Err(CoreError::InvalidName(claimed.to_string()));
    }

    Ok(safe)
}
