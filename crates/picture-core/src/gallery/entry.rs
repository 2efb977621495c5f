//! Gallery entry representation.

use std::time::{SystemTime, UNIX_EPOCH};

/// A single image in the gallery: its file name and last-modified time.
///
/// `ImageEntry` is a transient view derived from the file on disk. It is
/// rebuilt on every listing and never stored anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    file_name: String,
    modified: SystemTime,
}

impl ImageEntry {
    pub fn new(file_name: String, modified: SystemTime) -> Self {
        Self {
            file_name,
            modified,
        }
    }

    /// Returns the file name within the storage directory.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the last-modified time.
    pub fn modified(&self) -> SystemTime {
        self.modified
    }

    /// Returns the last-modified time as seconds since the Unix epoch.
    ///
    /// Times before the epoch are reported as negative values.
    pub fn mtime(&self) -> f64 {
        match self.modified.duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_secs_f64(),
            Err(e) => -e.duration().as_secs_f64(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn accessors_return_fields() {
        let t = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let entry = ImageEntry::new("cat.png".to_string(), t);
        assert_eq!(entry.file_name(), "cat.png");
        assert_eq!(entry.modified(), t);
    }

    #[test]
    fn mtime_is_seconds_since_epoch() {
        let t = UNIX_EPOCH + Duration::from_millis(1_500);
        let entry = ImageEntry::new("a.gif".to_string(), t);
        assert!((entry.mtime() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn mtime_before_epoch_is_negative() {
        let t = UNIX_EPOCH - Duration::from_secs(10);
        let entry = ImageEntry::new("old.jpg".to_string(), t);
        assert!((entry.mtime() + 10.0).abs() < f64::EPSILON);
    }
}
