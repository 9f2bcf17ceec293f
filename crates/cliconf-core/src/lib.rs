//! cliconf-core: configuration file management for command line applications
//!
//! This library owns a single configuration file under the user's home
//! directory: it resolves the file location, materializes defaults on first
//! run, loads the file into a typed structure and rewrites it on demand.
//! It is used by the `cliconf` CLI and by host applications that embed the
//! client directly.
//!
//! # Main Entry Points
//!
//! - [`client`] - Locate, initialize, load and reset the configuration file
//! - [`launcher`] - Open the configuration file with the platform handler
//! - [`logging`] - Logging initialization shared with the CLI

pub mod client;
pub mod errors;
pub mod events;
pub mod launcher;
pub mod logging;

// Re-export commonly used types at crate root for convenience
pub use client::{CONFIG_FILE_NAME, ConfigClient, ConfigError};
pub use errors::{CliconfError, CliconfResult};
pub use launcher::LauncherError;

// Re-export logging initialization
pub use logging::init_logging;
