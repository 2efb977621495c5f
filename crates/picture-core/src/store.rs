//! The storage directory and the operations performed on it.

use std::path::{Component, Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::gallery::entry::ImageEntry;
use crate::gallery::lister::list_images;
use crate::upload::{validate_upload, UploadedFile};

/// A flat directory holding every uploaded image.
///
/// The directory listing is the entire durable state of the application.
/// `ImageStore` holds no locks: concurrent uploads of the same name race and
/// the last write wins.
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the storage directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the storage directory (and parents) if it does not exist yet.
    pub fn ensure_dir(&self) -> CoreResult<()> {
        std::fs::create_dir_all(&self.root)?;
        Ok(())
    }

    /// Lists stored images, newest first. See [`list_images`].
    pub fn list(&self) -> Vec<ImageEntry> {
        list_images(&self.root)
    }

    /// Validates `upload` and writes it into the storage directory.
    ///
    /// An existing file with the same sanitized name is overwritten.
    /// Returns the name the file was stored under.
    ///
    /// # Errors
    ///
    /// - Any error from [`validate_upload`]; nothing is written in that case.
    /// - [`CoreError::InvalidName`] if a directory already has the sanitized name.
    /// - [`CoreError::NotFound`] if the storage directory does not exist.
    /// - [`CoreError::Io`] for any other write failure.
    pub fn save(&self, upload: Option<&UploadedFile>) -> CoreResult<String> {
        let safe_name = validate_upload(upload)?;
        // validate_upload only succeeds when a file is present.
        let data = upload.map(|u| u.data.as_slice()).unwrap_or_default();

        let target = self.root.join(&safe_name);
        if target.is_dir() {
            return Err(CoreError::InvalidName(safe_name));
        }
        std::fs::write(&target, data).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CoreError::NotFound(self.root.clone())
            } else {
                CoreError::Io(e)
            }
        })?;

        tracing::info!("stored {} ({} bytes)", target.display(), data.len());
        Ok(safe_name)
    }

    /// Resolves a stored file by name. See [`resolve_name`].
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        resolve_name(&self.root, name)
    }
}

/// Joins `name` onto `dir` if it is a single plain path component naming an
/// existing regular file.
///
/// Empty names, `.`, `..`, anything containing a separator, and names with
/// NUL bytes return `None`, as do directories and missing files.
pub fn resolve_name(dir: &Path, name: &str) -> Option<PathBuf> {
    if name.is_empty() || name.contains(['/', '\\', '\0']) {
        return None;
    }
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => {}
        _ => return None,
    }

    let path = dir.join(name);
    match std::fs::metadata(&path) {
        Ok(m) if m.is_file() => Some(path),
        _ => None,
    }
}
