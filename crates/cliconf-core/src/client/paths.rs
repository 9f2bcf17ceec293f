//! Path resolution for the configuration file.
//!
//! Pure functions of client state and environment; nothing here touches the
//! filesystem.

use std::path::PathBuf;

use crate::client::types::ConfigClient;

/// Fixed file name inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the home directory through an environment accessor.
///
/// `$HOME` wins when set and non-empty; `%USERPROFILE%` covers Windows.
/// When neither is set the base is empty, which still yields a well-formed
/// (relative) path downstream.
pub(crate) fn resolve_home_with(get: impl Fn(&str) -> Option<String>) -> PathBuf {
    if let Some(home) = get("HOME").filter(|h| !h.is_empty()) {
        return PathBuf::from(home);
    }

    PathBuf::from(get("USERPROFILE").unwrap_or_default())
}

/// Resolve the home directory from the process environment.
pub(crate) fn resolve_home() -> PathBuf {
    resolve_home_with(|var| std::env::var(var).ok())
}

impl<T> ConfigClient<T> {
    /// Directory holding the configuration file: `<home>/<fragment>`.
    pub fn dir(&self) -> PathBuf {
        self.home.join(&self.fragment)
    }

    /// Full path to the configuration file: `<home>/<fragment>/config.toml`.
    pub fn path(&self) -> PathBuf {
        self.dir().join(CONFIG_FILE_NAME)
    }
}
