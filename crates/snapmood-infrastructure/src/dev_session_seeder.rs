//! Local session seeding for development test accounts.
//!
//! Writes a [`DevSession`] to `dev_session.toml` so a development build can
//! start already signed in. Refuses to run unless
//! `dev.test_accounts_enabled` is set in the configuration.

use crate::paths::SnapmoodPaths;
use crate::storage::AtomicTomlFile;
use snapmood_core::config::RootConfig;
use snapmood_core::dev_account::{DevSession, TestAccount};
use snapmood_core::error::{Result, SnapmoodError};
use std::path::Path;

pub struct DevSessionSeeder {
    file: AtomicTomlFile<DevSession>,
    enabled: bool,
}

impl DevSessionSeeder {
    /// Creates a seeder at the default location.
    pub fn new(config: &RootConfig) -> Result<Self> {
        Self::with_base_dir(None, config)
    }

    /// Creates a seeder with a custom base directory (for testing).
    pub fn with_base_dir(base_dir: Option<&Path>, config: &RootConfig) -> Result<Self> {
        let path = SnapmoodPaths::new(base_dir).dev_session_file()?;
        Ok(Self {
            file: AtomicTomlFile::new(path),
            enabled: config.dev.test_accounts_enabled,
        })
    }

    /// Seeds a fresh session for the account, replacing any existing one.
    pub fn seed(&self, account: &TestAccount) -> Result<DevSession> {
        self.ensure_enabled()?;

        let session = DevSession::for_account(account);
        self.file.save(&session)?;
        tracing::info!(
            email = %session.email,
            path = %self.file.path().display(),
            "Seeded dev session"
        );
        Ok(session)
    }

    /// Seeds a session for a built-in account looked up by email.
    pub fn seed_email(&self, email: &str) -> Result<DevSession> {
        let account =
            TestAccount::find(email).ok_or_else(|| SnapmoodError::not_found("test_account", email))?;
        self.seed(&account)
    }

    /// Loads the currently seeded session, if any.
    pub fn load(&self) -> Result<Option<DevSession>> {
        self.file.load()
    }

    /// Removes the seeded session. Returns whether one existed.
    pub fn clear(&self) -> Result<bool> {
        let removed = self.file.remove()?;
        if removed {
            tracing::info!("Cleared dev session");
        }
        Ok(removed)
    }

    fn ensure_enabled(&self) -> Result<()> {
        if self.enabled {
            Ok(())
        } else {
            Err(SnapmoodError::config(
                "Test accounts are disabled. Set dev.test_accounts_enabled = true to seed sessions.",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn enabled_config() -> RootConfig {
        let mut config = RootConfig::default();
        config.dev.test_accounts_enabled = true;
        config
    }

    #[test]
    fn test_seed_refused_when_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let seeder =
            DevSessionSeeder::with_base_dir(Some(temp_dir.path()), &RootConfig::default()).unwrap();

        let err = seeder.seed(&TestAccount::builtin()[0]).unwrap_err();
        assert!(err.is_config());
        assert!(seeder.load().unwrap().is_none());
    }

    #[test]
    fn test_seed_load_clear() {
        let temp_dir = TempDir::new().unwrap();
        let seeder = DevSessionSeeder::with_base_dir(Some(temp_dir.path()), &enabled_config()).unwrap();

        let session = seeder.seed_email("tester@snapmood.dev").unwrap();
        assert_eq!(seeder.load().unwrap(), Some(session));

        assert!(seeder.clear().unwrap());
        assert!(seeder.load().unwrap().is_none());
        assert!(!seeder.clear().unwrap());
    }

    #[test]
    fn test_seed_replaces_previous_session() {
        let temp_dir = TempDir::new().unwrap();
        let seeder = DevSessionSeeder::with_base_dir(Some(temp_dir.path()), &enabled_config()).unwrap();

        seeder.seed_email("tester@snapmood.dev").unwrap();
        let second = seeder.seed_email("empty@snapmood.dev").unwrap();

        let loaded = seeder.load().unwrap().unwrap();
        assert_eq!(loaded, second);
        assert_eq!(loaded.credits, 0);
    }

    #[test]
    fn test_unknown_email_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let seeder = DevSessionSeeder::with_base_dir(Some(temp_dir.path()), &enabled_config()).unwrap();

        assert!(seeder.seed_email("ghost@snapmood.dev").unwrap_err().is_not_found());
    }
}
