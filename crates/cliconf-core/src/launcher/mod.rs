//! Opens the configuration file with the platform default application.
//!
//! The opener is spawned detached; we do not wait for it or inspect its
//! exit status. Spawn failures are propagated so the CLI can exit non-zero
//! instead of silently doing nothing.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

pub mod errors;

pub use errors::LauncherError;

/// Program and arguments used to open a file with the platform handler.
#[cfg(target_os = "macos")]
fn launch_command_for(path: &Path) -> (&'static str, Vec<OsString>) {
    ("open", vec![path.as_os_str().to_os_string()])
}

/// Program and arguments used to open a file with the platform handler.
///
/// The empty string is `start`'s window-title argument; without it a quoted
/// path would be swallowed as the title.
#[cfg(target_os = "windows")]
fn launch_command_for(path: &Path) -> (&'static str, Vec<OsString>) {
    (
        "cmd",
        vec![
            OsString::from("/C"),
            OsString::from("start"),
            OsString::from(""),
            path.as_os_str().to_os_string(),
        ],
    )
}

/// Program and arguments used to open a file with the platform handler.
#[cfg(all(unix, not(target_os = "macos")))]
fn launch_command_for(path: &Path) -> (&'static str, Vec<OsString>) {
    ("xdg-open", vec![path.as_os_str().to_os_string()])
}

/// Open `path` with the platform default application.
///
/// # Errors
///
/// Returns [`LauncherError::SpawnFailed`] when the opener process cannot be
/// started (e.g. the opener binary is not installed).
pub fn launch(path: &Path) -> Result<(), LauncherError> {
    let (program, args) = launch_command_for(path);

    debug!(
        event = "core.launcher.spawn_started",
        program = program,
        path = %path.display()
    );

    Command::new(program)
        .args(&args)
        .spawn()
        .map_err(|e| LauncherError::SpawnFailed {
            program: program.to_string(),
            source: e,
        })?;

    info!(
        event = "core.launcher.spawn_completed",
        program = program,
        path = %path.display()
    );

    Ok(())
}
