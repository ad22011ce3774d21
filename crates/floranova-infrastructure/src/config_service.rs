//! Configuration service implementation.
//!
//! Loads [`FloraConfig`] from `config.toml`, writing the defaults on first
//! run.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use floranova_core::config::FloraConfig;
use floranova_core::{FloraError, Result};
use tracing::{debug, info};

use crate::paths::FloraPaths;

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<FloraConfig>>>,
}

impl ConfigService {
    /// Creates a service for the platform config file.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(FloraPaths::config_file()?))
    }

    /// Creates a service for an explicit config file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<FloraConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|e| FloraError::internal(format!("config cache poisoned: {e}")))?;
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = Self::load_config(&self.path)?;

        let mut write_lock = self
            .config
            .write()
            .map_err(|e| FloraError::internal(format!("config cache poisoned: {e}")))?;
        *write_lock = Some(loaded.clone());
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    fn load_config(path: &Path) -> Result<FloraConfig> {
        if !path.exists() {
            let default_config = FloraConfig::default();
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, toml::to_string_pretty(&default_config)?)?;
            info!(path = %path.display(), "Created default config");
            return Ok(default_config);
        }

        let content = fs::read_to_string(path)?;
        let config: FloraConfig = toml::from_str(&content)?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let service = ConfigService::with_path(&path);

        let config = service.get_config().unwrap();
        assert_eq!(config, FloraConfig::default());
        assert!(path.exists());

        let written: FloraConfig = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, config);
    }

    #[test]
    fn test_partial_file_and_cache_invalidation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "free_scan_limit = 5\n").unwrap();
        let service = ConfigService::with_path(&path);

        assert_eq!(service.get_config().unwrap().free_scan_limit, 5);

        fs::write(&path, "free_scan_limit = 7\nlog_level = \"debug\"\n").unwrap();
        assert_eq!(service.get_config().unwrap().free_scan_limit, 5);

        service.invalidate_cache();
        let config = service.get_config().unwrap();
        assert_eq!(config.free_scan_limit, 7);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.default_user_name, "Invitado");
    }

    #[test]
    fn test_malformed_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "free_scan_limit = \"three\"").unwrap();

        let err = ConfigService::with_path(&path).get_config().unwrap_err();
        assert!(err.is_serialization());
    }
}
