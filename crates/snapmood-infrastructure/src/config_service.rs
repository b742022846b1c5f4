//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml` in the snapmood config
//! directory and caches it.

use crate::paths::SnapmoodPaths;
use crate::storage::AtomicTomlFile;
use snapmood_core::config::RootConfig;
use snapmood_core::error::Result;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit config file path; `None` resolves the platform default on load.
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a ConfigService reading the platform default config file.
    ///
    /// The file is read lazily on first access.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a ConfigService reading a specific file (for tests and `--config`).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the root configuration, loading from file if not cached.
    ///
    /// A missing file yields the defaults; a malformed file is an error and
    /// nothing is cached.
    pub fn get_config(&self) -> Result<RootConfig> {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = self.load_config()?;

        {
            let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    /// Path of the config file this service reads.
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => SnapmoodPaths::default().config_file(),
        }
    }

    fn load_config(&self) -> Result<RootConfig> {
        let path = self.config_path()?;
        match AtomicTomlFile::<RootConfig>::new(path.clone()).load()? {
            Some(config) => {
                tracing::debug!(path = %path.display(), "Loaded config");
                Ok(config)
            }
            None => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                Ok(RootConfig::default())
            }
        }
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapmood_core::preset::PresetFamily;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        let config = service.get_config().unwrap();
        assert_eq!(config, RootConfig::default());
        assert!(!temp_dir.path().join("config.toml").exists());
    }

    #[test]
    fn test_cache_until_invalidated() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[presets]\ndefault_family = \"neoTokyo\"\n").unwrap();

        let service = ConfigService::with_path(path.clone());
        assert_eq!(
            service.get_config().unwrap().presets.default_family,
            PresetFamily::NeoTokyo
        );

        fs::write(&path, "[presets]\ndefault_family = \"emotionMask\"\n").unwrap();
        assert_eq!(
            service.get_config().unwrap().presets.default_family,
            PresetFamily::NeoTokyo,
            "cached value should be returned"
        );

        service.invalidate_cache();
        assert_eq!(
            service.get_config().unwrap().presets.default_family,
            PresetFamily::EmotionMask
        );
    }

    #[test]
    fn test_clones_share_cache() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[dev]\ntest_accounts_enabled = true\n").unwrap();

        let service = ConfigService::with_path(path.clone());
        let clone = service.clone();
        assert!(service.get_config().unwrap().dev.test_accounts_enabled);

        fs::remove_file(&path).unwrap();
        assert!(clone.get_config().unwrap().dev.test_accounts_enabled);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[presets\n").unwrap();

        let service = ConfigService::with_path(path);
        assert!(service.get_config().unwrap_err().is_serialization());
    }
}
