//! In The Picture core library: HTTP-agnostic photo storage logic.
//!
//! `picture-core` owns everything that touches the storage directory so the
//! web frontend (`picture-web`) only has to translate requests and responses.
//!
//! # Modules
//!
//! - [`gallery`] — Image detection ([`is_image_file`]) and newest-first listing ([`list_images`]).
//! - [`upload`] — Upload validation ([`validate_upload`]) and filename sanitization ([`sanitize_filename`]).
//! - [`store`] — [`ImageStore`], the configured storage directory.
//! - [`error`] — Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod error;
pub mod gallery;
pub mod store;
pub mod upload;

pub use error::{CoreError, CoreResult};
pub use gallery::{is_image_file, list_images, sort_newest_first, ImageEntry, IMAGE_EXTENSIONS};
pub use store::{resolve_name, ImageStore};
pub use upload::{sanitize_filename, validate_upload, UploadedFile, MAX_FILENAME_LEN};
