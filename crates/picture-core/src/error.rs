//! Error types for `picture-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`.

use std::path::PathBuf;

/// Unified error type for all core operations.
///
/// The first four variants form the "invalid upload" class: they are
/// recoverable and safe to show to the person who submitted the file.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The upload did not contain a file field at all.
    #[error("no file field in upload")]
    MissingFile,

    /// A file field was present but carried no file name.
    #[error("empty file name")]
    EmptyFileName,

    /// The claimed file name does not have a supported image extension.
    #[error("unsupported image type: {0}")]
    UnsupportedType(String),

    /// The file name could not be turned into a safe on-disk name.
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Returns `true` for errors caused by the uploaded input rather than the server.
    pub fn is_invalid_upload(&self) -> bool {
        matches!(
            self,
            CoreError::MissingFile
                | CoreError::EmptyFileName
                | CoreError::UnsupportedType(_)
                | CoreError::InvalidName(_)
        )
    }
}

/// Convenience alias used throughout `picture-core`.
pub type CoreResult<T> = Result<T, CoreError>;
