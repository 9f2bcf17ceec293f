use crate::errors::CliconfError;

#[derive(Debug, thiserror::Error)]
pub enum LauncherError {
    #[error("Failed to launch '{program}': {source}")]
    SpawnFailed {
        program: String,
        source: std::io::Error,
    },
}

impl CliconfError for LauncherError {
    fn error_code(&self) -> &'static str {
        match self {
            LauncherError::SpawnFailed { .. } => "LAUNCHER_SPAWN_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_failed_display() {
        let error = LauncherError::SpawnFailed {
            program: "xdg-open".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(error.to_string().starts_with("Failed to launch 'xdg-open'"));
        assert_eq!(error.error_code(), "LAUNCHER_SPAWN_FAILED");
        assert!(!error.is_user_error());
    }
}
