use clap::ArgMatches;
use tracing::{error, info, warn};

use cliconf_core::client::ConfigClient;
use cliconf_core::errors::CliconfError;
use cliconf_core::{events, launcher};

use crate::settings::{CONFIG_FRAGMENT, Settings};

/// Build the client managing ~/.cliconf/config.toml with factory defaults.
fn settings_client() -> ConfigClient<Settings> {
    ConfigClient::new(CONFIG_FRAGMENT).with_factory(Settings::default)
}

/// Materialize the settings file with defaults on first run.
///
/// Failure is a warning, not a hard error: the command that follows performs
/// its own filesystem access and surfaces its own error if the problem
/// persists.
fn ensure_settings_file(client: &ConfigClient<Settings>) {
    if let Err(e) = client.init_default() {
        eprintln!(
            "Warning: Could not initialize settings file: {}.\n\
             Tip: Check permissions on {}.",
            e,
            client.dir().display()
        );
        warn!(
            event = "cli.config.init_failed",
            error = %e,
            code = e.error_code(),
            "Settings file initialization failed"
        );
    }
}

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("show", sub_matches)) => handle_show_command(sub_matches),
        Some(("open", _)) => handle_open_command(),
        Some(("reset", _)) => handle_reset_command(),
        Some(("path", _)) => handle_path_command(),
        _ => Err("Unknown command. Use --help to see available commands.".into()),
    }
}

fn handle_show_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json = matches.get_flag("json");

    info!(event = "cli.show_started", json = json);

    let client = settings_client();
    ensure_settings_file(&client);

    if json {
        let settings = match client.load() {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("❌ Failed to read settings file: {}", e);
                error!(event = "cli.show_failed", error = %e, code = e.error_code());
                events::log_app_error(&e);
                return Err(e.into());
            }
        };
        println!("{}", serde_json::to_string_pretty(&settings)?);
    } else {
        match client.render() {
            Ok(content) => print!("{}", content),
            Err(e) => {
                eprintln!("❌ Failed to read settings file: {}", e);
                error!(event = "cli.show_failed", error = %e, code = e.error_code());
                events::log_app_error(&e);
                return Err(e.into());
            }
        }
    }

    info!(event = "cli.show_completed", json = json);
    Ok(())
}

fn handle_open_command() -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.open_started");

    let client = settings_client();
    ensure_settings_file(&client);
    let path = client.path();

    // A configured editor takes precedence over the platform handler. An
    // unreadable settings file falls back to the platform handler so 'open'
    // stays usable for fixing exactly that file.
    let editor = match client.load() {
        Ok(settings) => settings.editor,
        Err(e) => {
            warn!(event = "cli.open_settings_unreadable", error = %e);
            None
        }
    };

    let result = match editor {
        Some(editor) => {
            info!(event = "cli.open_editor_selected", editor = editor);
            std::process::Command::new(&editor)
                .arg(&path)
                .spawn()
                .map(|_| ())
                .map_err(|e| {
                    Box::<dyn std::error::Error>::from(format!(
                        "Failed to launch editor '{}': {}",
                        editor, e
                    ))
                })
        }
        None => launcher::launch(&path).map_err(Into::into),
    };

    match result {
        Ok(()) => {
            println!("Opened {}", path.display());
            info!(event = "cli.open_completed", path = %path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to open settings file: {}", e);
            error!(event = "cli.open_failed", error = %e);
            return Err(e);
        }
    }
}

fn handle_reset_command() -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.reset_started");

    let client = settings_client();

    match client.reset_default() {
        Ok(()) => {
            println!("✅ Settings reset to defaults: {}", client.path().display());
            info!(event = "cli.reset_completed", path = %client.path().display());
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to reset settings file: {}", e);
            error!(event = "cli.reset_failed", error = %e, code = e.error_code());
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_path_command() -> Result<(), Box<dyn std::error::Error>> {
    let client = settings_client();
    println!("{}", client.path().display());
    Ok(())
}
