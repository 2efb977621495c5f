use std::sync::Arc;

use picture_core::ImageStore;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Storage directory, built once from `config.storage.pictures_dir`.
    pub store: Arc<ImageStore>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let store = ImageStore::new(config.storage.pictures_dir.clone());
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }
}
