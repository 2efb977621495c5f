use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_pictures_dir")]
    pub pictures_dir: PathBuf,
    #[serde(default = "default_max_upload_size_mb")]
    pub max_upload_size_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 5001))
}

fn default_pictures_dir() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_max_upload_size_mb() -> usize { 16 }

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            pictures_dir: default_pictures_dir(),
            max_upload_size_mb: default_max_upload_size_mb(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self { static_dir: default_static_dir() }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            storage: StorageConfig::default(),
            assets: AssetsConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn max_upload_bytes(&self) -> usize {
        self.storage.max_upload_size_mb.saturating_mul(1024 * 1024)
    }

    /// Reads `PICTURE_WEB_CONFIG` (a TOML file) if set, then applies
    /// environment overrides on top.
    pub fn load() -> anyhow::Result<Self> {
        let config: ServerConfig = match std::env::var("PICTURE_WEB_CONFIG").map(PathBuf::from) {
            Ok(path) => {
                let contents = std::fs::read_to_string(&path)?;
                toml::from_str(&contents)?
            }
            Err(_) => ServerConfig::default(),
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(
        mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        if let Some(dir) = var("PICTURES_DIR") {
            self.storage.pictures_dir = PathBuf::from(dir);
        }

        if let Some(val) = var("PICTURE_MAX_UPLOAD_SIZE_MB") {
            match val.parse::<usize>() {
                Ok(mb) => self.storage.max_upload_size_mb = mb,
                Err(_) => tracing::warn!("Ignoring invalid PICTURE_MAX_UPLOAD_SIZE_MB: {val}"),
            }
        }

        if let Some(dir) = var("PICTURE_STATIC_DIR") {
            self.assets.static_dir = PathBuf::from(dir);
        }

        if let Some(addr) = var("PICTURE_BIND_ADDR") {
            self.bind_addr = addr.parse()?;
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 5001);
        assert_eq!(config.storage.pictures_dir, PathBuf::from("uploads"));
        assert_eq!(config.assets.static_dir, PathBuf::from("static"));
        assert_eq!(config.max_upload_bytes(), 16 * 1024 * 1024);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config.storage.pictures_dir, PathBuf::from("uploads"));
        assert_eq!(config.storage.max_upload_size_mb, 16);
    }

    #[test]
    fn toml_sections() {
        let config: ServerConfig = toml::from_str(
            r#"
            bind_addr = "127.0.0.1:8080"

            [storage]
            pictures_dir = "/pictures"
            max_upload_size_mb = 4

            [assets]
            static_dir = "/srv/static"
            "#,
        )
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.storage.pictures_dir, PathBuf::from("/pictures"));
        assert_eq!(config.max_upload_bytes(), 4 * 1024 * 1024);
        assert_eq!(config.assets.static_dir, PathBuf::from("/srv/static"));
    }

    #[test]
    fn env_overrides_win() {
        let config = ServerConfig::default()
            .with_overrides(env(&[
                ("PICTURES_DIR", "/pictures"),
                ("PICTURE_STATIC_DIR", "assets"),
                ("PICTURE_MAX_UPLOAD_SIZE_MB", "2"),
                ("PICTURE_BIND_ADDR", "127.0.0.1:9000"),
            ]))
            .unwrap();
        assert_eq!(config.storage.pictures_dir, PathBuf::from("/pictures"));
        assert_eq!(config.assets.static_dir, PathBuf::from("assets"));
        assert_eq!(config.storage.max_upload_size_mb, 2);
        assert_eq!(config.bind_addr.port(), 9000);
    }

    #[test]
    fn invalid_upload_size_is_ignored() {
        let config = ServerConfig::default()
            .with_overrides(env(&[("PICTURE_MAX_UPLOAD_SIZE_MB", "lots")]))
            .unwrap();
        assert_eq!(config.storage.max_upload_size_mb, 16);
    }

    #[test]
    fn invalid_bind_addr_is_an_error() {
        let result = ServerConfig::default().with_overrides(env(&[("PICTURE_BIND_ADDR", "nope")]));
        assert!(result.is_err());
    }
}
