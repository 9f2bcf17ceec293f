//! Configuration file operations: load, init, reset, render.
//!
//! Every operation reconciles against the file on disk when it runs; nothing
//! is cached between calls. There is no locking and no atomicity guarantee
//! across the create-dirs + encode + write sequence, which is acceptable for
//! a single-user CLI settings file.

use std::fs;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::client::errors::ConfigError;
use crate::client::types::ConfigClient;

impl<T> ConfigClient<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Load the configuration file into a fresh `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file is missing or unreadable
    /// and [`ConfigError::Decode`] when its content does not parse into `T`.
    pub fn load(&self) -> Result<T, ConfigError> {
        let path = self.path();
        debug!(event = "core.config.load_started", path = %path.display());

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::Read {
            path: path.clone(),
            source: e,
        })?;

        let config = toml::from_str(&content).map_err(|e| ConfigError::Decode {
            path: path.clone(),
            source: e,
        })?;

        debug!(event = "core.config.load_completed", path = %path.display());
        Ok(config)
    }

    /// Create the configuration file with the given values if it does not
    /// exist yet.
    ///
    /// A file already on disk is left untouched, so user edits survive
    /// repeated startups.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CreateDir`], [`ConfigError::Encode`] or
    /// [`ConfigError::Write`] depending on which step failed.
    pub fn init(&self, config: &T) -> Result<(), ConfigError> {
        let path = self.path();

        if path.exists() {
            debug!(event = "core.config.init_skipped", path = %path.display());
            return Ok(());
        }

        self.write_config(config)?;
        info!(event = "core.config.init_completed", path = %path.display());
        Ok(())
    }

    /// Unconditionally rewrite the configuration file with the given values.
    ///
    /// Unlike [`init`](Self::init) this replaces whatever is on disk,
    /// discarding prior user customization.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`init`](Self::init).
    pub fn reset(&self, config: &T) -> Result<(), ConfigError> {
        let path = self.path();
        self.write_config(config)?;
        info!(event = "core.config.reset_completed", path = %path.display());
        Ok(())
    }

    /// [`init`](Self::init) with factory-produced defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoFactory`] when the client was built without
    /// a factory, otherwise the [`init`](Self::init) failure modes.
    pub fn init_default(&self) -> Result<(), ConfigError> {
        let config = self.make_default()?;
        self.init(&config)
    }

    /// [`reset`](Self::reset) with factory-produced defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoFactory`] when the client was built without
    /// a factory, otherwise the [`reset`](Self::reset) failure modes.
    pub fn reset_default(&self) -> Result<(), ConfigError> {
        let config = self.make_default()?;
        self.reset(&config)
    }

    /// Load the file and re-encode it as a human-readable TOML string.
    ///
    /// The round trip through `T` means the output reflects what the
    /// application actually parsed, not the raw bytes on disk.
    ///
    /// # Errors
    ///
    /// Propagates the [`load`](Self::load) failure modes plus
    /// [`ConfigError::Encode`] when re-encoding fails.
    pub fn render(&self) -> Result<String, ConfigError> {
        let config = self.load()?;
        toml::to_string_pretty(&config).map_err(|e| ConfigError::Encode { source: e })
    }

    fn make_default(&self) -> Result<T, ConfigError> {
        match &self.factory {
            Some(factory) => Ok(factory()),
            None => Err(ConfigError::NoFactory),
        }
    }

    /// Shared write path for init and reset: create parent directories,
    /// encode, single write call.
    fn write_config(&self, config: &T) -> Result<(), ConfigError> {
        let dir = self.dir();
        fs::create_dir_all(&dir).map_err(|e| ConfigError::CreateDir {
            path: dir,
            source: e,
        })?;

        let content =
            toml::to_string_pretty(config).map_err(|e| ConfigError::Encode { source: e })?;

        let path = self.path();
        fs::write(&path, content).map_err(|e| ConfigError::Write { path, source: e })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestSettings {
        timeout_secs: u64,
        editor: Option<String>,
    }

    fn settings(timeout_secs: u64) -> TestSettings {
        TestSettings {
            timeout_secs,
            editor: None,
        }
    }

    fn client_in(home: &TempDir) -> ConfigClient<TestSettings> {
        ConfigClient::with_home(home.path(), ".myapp")
    }

    #[test]
    fn test_init_creates_missing_file_and_directories() {
        let home = TempDir::new().unwrap();
        let client = client_in(&home);

        client.init(&settings(30)).unwrap();

        assert!(client.path().exists());
        assert_eq!(client.load().unwrap(), settings(30));
    }

    #[test]
    fn test_init_is_idempotent() {
        let home = TempDir::new().unwrap();
        let client = client_in(&home);

        client.init(&settings(30)).unwrap();
        client.init(&settings(60)).unwrap();

        // Second init is a no-op; first content survives
        assert_eq!(client.load().unwrap(), settings(30));
    }

    #[test]
    fn test_reset_overwrites_existing_content() {
        let home = TempDir::new().unwrap();
        let client = client_in(&home);

        client.init(&settings(30)).unwrap();
        client.reset(&settings(60)).unwrap();

        assert_eq!(client.load().unwrap(), settings(60));
    }

    #[test]
    fn test_reset_works_from_absent_state() {
        let home = TempDir::new().unwrap();
        let client = client_in(&home);

        client.reset(&settings(60)).unwrap();

        assert_eq!(client.load().unwrap(), settings(60));
    }

    #[test]
    fn test_round_trip_preserves_values() {
        let home = TempDir::new().unwrap();
        let client = client_in(&home);
        let original = TestSettings {
            timeout_secs: 42,
            editor: Some("vim".to_string()),
        };

        client.reset(&original).unwrap();

        assert_eq!(client.load().unwrap(), original);
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let home = TempDir::new().unwrap();
        let client = client_in(&home);

        let error = client.load().unwrap_err();
        assert!(matches!(error, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_malformed_content_is_decode_error() {
        let home = TempDir::new().unwrap();
        let client = client_in(&home);

        fs::create_dir_all(client.dir()).unwrap();
        fs::write(client.path(), "not [ valid toml").unwrap();

        let error = client.load().unwrap_err();
        assert!(matches!(error, ConfigError::Decode { .. }));
    }

    #[test]
    fn test_load_shape_mismatch_is_decode_error() {
        let home = TempDir::new().unwrap();
        let client = client_in(&home);

        // Valid TOML, wrong shape for TestSettings
        fs::create_dir_all(client.dir()).unwrap();
        fs::write(client.path(), "timeout_secs = \"soon\"\n").unwrap();

        let error = client.load().unwrap_err();
        assert!(matches!(error, ConfigError::Decode { .. }));
    }

    #[test]
    fn test_blocked_parent_is_create_dir_error_and_no_write() {
        let home = TempDir::new().unwrap();
        let client = client_in(&home);

        // A plain file where the config directory should go
        fs::write(home.path().join(".myapp"), "in the way").unwrap();

        let error = client.init(&settings(30)).unwrap_err();
        assert!(matches!(error, ConfigError::CreateDir { .. }));

        // The blocking file is untouched; no config file was written
        let blocker = fs::read_to_string(home.path().join(".myapp")).unwrap();
        assert_eq!(blocker, "in the way");
    }

    #[test]
    fn test_init_default_uses_factory() {
        let home = TempDir::new().unwrap();
        let client = client_in(&home).with_factory(|| settings(30));

        client.init_default().unwrap();

        assert_eq!(client.load().unwrap(), settings(30));
    }

    #[test]
    fn test_init_default_keeps_existing_file() {
        let home = TempDir::new().unwrap();
        let client = client_in(&home).with_factory(|| settings(30));

        client.reset(&settings(99)).unwrap();
        client.init_default().unwrap();

        assert_eq!(client.load().unwrap(), settings(99));
    }

    #[test]
    fn test_reset_default_uses_factory() {
        let home = TempDir::new().unwrap();
        let client = client_in(&home).with_factory(|| settings(30));

        client.reset(&settings(99)).unwrap();
        client.reset_default().unwrap();

        assert_eq!(client.load().unwrap(), settings(30));
    }

    #[test]
    fn test_default_operations_without_factory_fail() {
        let home = TempDir::new().unwrap();
        let client = client_in(&home);

        assert!(matches!(
            client.init_default().unwrap_err(),
            ConfigError::NoFactory
        ));
        assert!(matches!(
            client.reset_default().unwrap_err(),
            ConfigError::NoFactory
        ));
        assert!(!client.path().exists());
    }

    #[test]
    fn test_render_round_trips_file_content() {
        let home = TempDir::new().unwrap();
        let client = client_in(&home);

        client
            .reset(&TestSettings {
                timeout_secs: 30,
                editor: Some("vim".to_string()),
            })
            .unwrap();

        let rendered = client.render().unwrap();
        assert!(rendered.contains("timeout_secs = 30"));
        assert!(rendered.contains("editor = \"vim\""));
    }

    #[test]
    fn test_render_missing_file_is_read_error() {
        let home = TempDir::new().unwrap();
        let client = client_in(&home);

        let error = client.render().unwrap_err();
        assert!(matches!(error, ConfigError::Read { .. }));
    }
}
