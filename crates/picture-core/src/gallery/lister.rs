//! Storage directory scanning.

use std::path::Path;

use crate::gallery::entry::ImageEntry;
use crate::gallery::filter::is_image_file;

/// Lists the images directly inside `dir`, newest first.
///
/// Only regular files whose names pass [`is_image_file`] are returned.
/// Entries whose metadata cannot be read (deleted mid-scan, permission
/// denied) are skipped. A missing or unreadable directory yields an empty
/// list. Entries with identical modification times are ordered by name.
///
/// # Examples
///
/// ```no_run
/// use picture_core::list_images;
/// use std::path::Path;
///
/// for image in list_images(Path::new("uploads")) {
///     println!("{} ({})", image.file_name(), image.mtime());
/// }
/// ```
pub fn list_images(dir: &Path) -> Vec<ImageEntry> {
    let read_dir = match std::fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) => {
            tracing::debug!("cannot read storage directory {}: {e}", dir.display());
            return Vec::new();
        }
    };

    let mut images: Vec<ImageEntry> = read_dir
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name().into_string().ok()?;
            if !is_image_file(&name) {
                return None;
            }
            let metadata = match std::fs::metadata(entry.path()) {
                Ok(m) => m,
                Err(e) => {
                    tracing::debug!("skipping {name}: {e}");
                    return None;
                }
            };
            if !metadata.is_file() {
                return None;
            }
            let modified = metadata.modified().ok()?;
            Some(ImageEntry::new(name, modified))
        })
        .collect();

    sort_newest_first(&mut images);
    images
}

/// Sorts entries by modification time, newest first, then by name.
pub fn sort_newest_first(images: &mut [ImageEntry]) {
    images.sort_by(|a, b| {
        b.modified()
            .cmp(&a.modified())
            .then_with(|| a.file_name().cmp(b.file_name()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};
    use tempfile::TempDir;

    fn write_with_mtime(dir: &Path, name: &str, secs: u64) {
        let path = dir.join(name);
        fs::write(&path, b"img").unwrap();
        let file = fs::File::options().write(true).open(&path).unwrap();
        file.set_modified(UNIX_EPOCH + Duration::from_secs(secs))
            .unwrap();
    }

    fn names(images: &[ImageEntry]) -> Vec<&str> {
        images.iter().map(|i| i.file_name()).collect()
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(list_images(tmp.path()).is_empty());
    }

    #[test]
    fn nonexistent_directory_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        assert!(list_images(&tmp.path().join("missing")).is_empty());
    }

    #[test]
    fn newest_first() {
        let tmp = TempDir::new().unwrap();
        write_with_mtime(tmp.path(), "a.png", 1_000);
        write_with_mtime(tmp.path(), "b.png", 2_000);

        let images = list_images(tmp.path());
        assert_eq!(names(&images), vec!["b.png", "a.png"]);
    }

    #[test]
    fn orders_many_entries_by_mtime() {
        let tmp = TempDir::new().unwrap();
        write_with_mtime(tmp.path(), "middle.jpg", 2_000);
        write_with_mtime(tmp.path(), "oldest.gif", 1_000);
        write_with_mtime(tmp.path(), "newest.svg", 3_000);

        let images = list_images(tmp.path());
        assert_eq!(names(&images), vec!["newest.svg", "middle.jpg", "oldest.gif"]);
        assert!((images[0].mtime() - 3_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ties_are_ordered_by_name() {
        let tmp = TempDir::new().unwrap();
        write_with_mtime(tmp.path(), "b.png", 5_000);
        write_with_mtime(tmp.path(), "a.png", 5_000);

        let images = list_images(tmp.path());
        assert_eq!(names(&images), vec!["a.png", "b.png"]);
    }

    #[test]
    fn skips_non_images() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("photo.JPG"), b"img").unwrap();
        fs::write(tmp.path().join("notes.txt"), b"text").unwrap();
        fs::write(tmp.path().join("README"), b"text").unwrap();

        let images = list_images(tmp.path());
        assert_eq!(names(&images), vec!["photo.JPG"]);
    }

    #[test]
    fn skips_directories_with_image_names() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("album.png")).unwrap();
        fs::write(tmp.path().join("real.png"), b"img").unwrap();

        let images = list_images(tmp.path());
        assert_eq!(names(&images), vec!["real.png"]);
    }

    #[test]
    fn does_not_descend_into_subdirectories() {
        let tmp = TempDir::new().unwrap();
        let sub = tmp.path().join("nested");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("hidden.png"), b"img").unwrap();

        assert!(list_images(tmp.path()).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn skips_dangling_symlinks() {
        let tmp = TempDir::new().unwrap();
        std::os::unix::fs::symlink(tmp.path().join("gone.png"), tmp.path().join("link.png"))
            .unwrap();
        fs::write(tmp.path().join("ok.png"), b"img").unwrap();

        let images = list_images(tmp.path());
        assert_eq!(names(&images), vec!["ok.png"]);
    }

    #[test]
    fn sort_newest_first_on_plain_entries() {
        let now = SystemTime::now();
        let mut images = vec![
            ImageEntry::new("old.png".into(), now - Duration::from_secs(60)),
            ImageEntry::new("new.png".into(), now),
        ];
        sort_newest_first(&mut images);
        assert_eq!(names(&images), vec!["new.png", "old.png"]);
    }
}
