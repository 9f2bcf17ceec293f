use std::path::PathBuf;

use crate::errors::CliconfError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode config file '{path}': {source}")]
    Decode {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to create config directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode config content: {source}")]
    Encode { source: toml::ser::Error },

    #[error("Failed to write config file '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No default-factory attached: construct the client with 'with_factory'")]
    NoFactory,
}

impl CliconfError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Read { .. } => "CONFIG_READ_FAILED",
            ConfigError::Decode { .. } => "CONFIG_DECODE_FAILED",
            ConfigError::CreateDir { .. } => "CONFIG_DIR_CREATE_FAILED",
            ConfigError::Encode { .. } => "CONFIG_ENCODE_FAILED",
            ConfigError::Write { .. } => "CONFIG_WRITE_FAILED",
            ConfigError::NoFactory => "CONFIG_NO_FACTORY",
        }
    }

    fn is_user_error(&self) -> bool {
        // A hand-edited file that no longer parses is the user's to fix;
        // everything else is environmental or a programming error.
        matches!(self, ConfigError::Decode { .. })
    }
}
