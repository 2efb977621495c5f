//! Image type detection by file extension.

use std::path::Path;

/// Extensions accepted as images, lowercase and without the leading dot.
pub const IMAGE_EXTENSIONS: &[&str] = &["svg", "png", "jpg", "jpeg", "gif"];

/// Returns `true` if `name` ends in one of [`IMAGE_EXTENSIONS`], ignoring case.
///
/// Names without an extension (including dotfiles such as `.png`) are rejected.
pub fn is_image_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
