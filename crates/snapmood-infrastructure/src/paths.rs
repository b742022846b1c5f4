//! Path management for snapmood files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/snapmood/          # Config directory (platform default)
//! ├── config.toml              # Application configuration
//! └── dev_session.toml         # Seeded test-account session (development only)
//! ```
//!
//! Tests pass an explicit base directory instead of the platform default.

use snapmood_core::error::{Result, SnapmoodError};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "snapmood";

/// Resolves snapmood file locations.
#[derive(Debug, Clone)]
pub struct SnapmoodPaths {
    base_dir: Option<PathBuf>,
}

impl SnapmoodPaths {
    /// Creates a path resolver. `Some(dir)` replaces the platform config directory.
    pub fn new(base_dir: Option<&Path>) -> Self {
        Self {
            base_dir: base_dir.map(Path::to_path_buf),
        }
    }

    /// Returns the snapmood configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: The base directory, or `<platform config dir>/snapmood`
    /// - `Err(SnapmoodError::Config)`: No home/config directory could be determined
    pub fn config_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base_dir {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| SnapmoodError::config("Cannot find config directory"))
    }

    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    pub fn dev_session_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("dev_session.toml"))
    }
}

impl Default for SnapmoodPaths {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_dir_override() {
        let paths = SnapmoodPaths::new(Some(Path::new("/tmp/snapmood-test")));
        assert_eq!(
            paths.config_file().unwrap(),
            PathBuf::from("/tmp/snapmood-test/config.toml")
        );
        assert_eq!(
            paths.dev_session_file().unwrap(),
            PathBuf::from("/tmp/snapmood-test/dev_session.toml")
        );
    }
}
