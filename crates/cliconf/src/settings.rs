//! Settings persisted for the cliconf binary itself.
//!
//! This is the payload the configuration client manages for us; the client
//! never looks inside it.

use serde::{Deserialize, Serialize};

/// Subdirectory under the home directory holding our config file.
pub const CONFIG_FRAGMENT: &str = ".cliconf";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Editor command used by 'open' instead of the platform default
    #[serde(default)]
    pub editor: Option<String>,

    /// Timeout for operations the host application runs, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Used by the serde `#[serde(default = "...")]` attribute.
fn default_timeout_secs() -> u64 {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            editor: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}
