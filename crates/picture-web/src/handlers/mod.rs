pub mod files;
pub mod gallery;
pub mod upload;
