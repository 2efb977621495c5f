//! Gallery listing.
//!
//! [`filter::is_image_file`] decides which names count as images,
//! [`lister::list_images`] turns the storage directory into a newest-first
//! sequence of [`entry::ImageEntry`] values.

pub mod entry;
pub mod filter;
pub mod lister;

pub use entry::ImageEntry;
pub use filter::{is_image_file, IMAGE_EXTENSIONS};
pub use lister::{list_images, sort_newest_first};
