use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("cliconf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage the cliconf settings file under your home directory")
        .long_about(
            "cliconf keeps its settings in ~/.cliconf/config.toml. The file is created \
            with default values on first use; 'show' prints it, 'open' hands it to your \
            platform's default application, and 'reset' rewrites it with defaults.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("show")
                .about("Print the settings file content")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("open").about("Open the settings file in the platform default application"),
        )
        .subcommand(
            Command::new("reset")
                .about("Rewrite the settings file with default values, discarding any edits"),
        )
        .subcommand(Command::new("path").about("Print the resolved settings file path"))
}
