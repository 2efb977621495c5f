//! Safe on-disk names for uploaded files.

use unicode_normalization::UnicodeNormalization;

/// Longest file name, in bytes, most filesystems accept.
pub const MAX_FILENAME_LEN: usize = 255;

/// Device names that cannot be used as file stems on Windows.
const WINDOWS_DEVICE_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Turns a client-supplied file name into a flat, ASCII-only name that is
/// safe to join onto the storage directory.
///
/// The result only contains `[A-Za-z0-9_.-]`, never starts or ends with `.`
/// or `_`, and never contains a path separator. Runs of whitespace and path
/// separators collapse into a single `_`. Names longer than
/// [`MAX_FILENAME_LEN`] have their stem shortened and keep the extension.
/// The result may be empty, in which case the caller must reject the upload.
///
/// # Examples
///
/// ```
/// use picture_core::sanitize_filename;
///
/// assert_eq!(sanitize_filename("My cool photo.png"), "My_cool_photo.png");
/// assert_eq!(sanitize_filename("../../etc/passwd"), "etc_passwd");
/// ```
pub fn sanitize_filename(name: &str) -> String {
    // Decompose accents so "ü" keeps its base letter once non-ASCII is dropped.
    let ascii: String = name.nfkd().filter(char::is_ascii).collect();
    let spaced = ascii.replace(['/', '\\'], " ");
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");

    let cleaned: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();
    let trimmed = cleaned.trim_matches(|c| c == '.' || c == '_');

    let safe = if is_windows_device_name(trimmed) {
        format!("_{trimmed}")
    } else {
        trimmed.to_string()
    };
    truncate_stem(safe)
}

/// Shortens the part before the last `.` so the whole name fits in
/// [`MAX_FILENAME_LEN`]. The name is ASCII here, so bytes and chars agree.
fn truncate_stem(name: String) -> String {
    if name.len() <= MAX_FILENAME_LEN {
        return name;
    }
    match name.rsplit_once('.') {
        Some((stem, ext)) if ext.len() + 1 < MAX_FILENAME_LEN => {
            let keep = MAX_FILENAME_LEN - ext.len() - 1;
            let stem = stem[..stem.len().min(keep)].trim_end_matches(['.', '_']);
            format!("{stem}.{ext}")
        }
        // An extension this long is not an image; leave it for the caller to reject.
        _ => name,
    }
}

fn is_windows_device_name(name: &str) -> bool {
    let stem = name.split('.').next().unwrap_or_default();
    WINDOWS_DEVICE_NAMES
        .iter()
        .any(|device| device.eq_ignore_ascii_case(stem))
}
