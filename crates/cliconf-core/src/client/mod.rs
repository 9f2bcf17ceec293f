//! # Configuration Client
//!
//! Manages a single configuration file under the user's home directory:
//! `<home>/<fragment>/config.toml`. The client is generic over the settings
//! type, which it treats as an opaque serde payload; it never inspects
//! individual fields.
//!
//! The home directory is resolved once at construction (`$HOME`, falling
//! back to `%USERPROFILE%` on Windows) and can be injected explicitly for
//! deterministic tests. The client holds no state beyond the resolved home,
//! the path fragment and an optional default-factory; file existence and
//! contents are reconciled on every operation, never cached.
//!
//! # Usage Example
//!
//! ```rust,no_run
//! use cliconf_core::client::ConfigClient;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Default)]
//! struct Settings {
//!     timeout_secs: u64,
//! }
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ConfigClient::new(".myapp").with_factory(Settings::default);
//!     client.init_default()?; // first run creates ~/.myapp/config.toml
//!     let _settings: Settings = client.load()?;
//!     Ok(())
//! }
//! ```

pub mod errors;
mod operations;
mod paths;
mod types;

// Public API exports
pub use errors::ConfigError;
pub use paths::CONFIG_FILE_NAME;
pub use types::ConfigClient;
