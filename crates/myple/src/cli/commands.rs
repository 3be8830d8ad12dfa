//! The `myple` command tree.

use clap::{Arg, ArgAction, Command};

pub const PACKAGE: &str = "myple";
pub const VERSION: &str = "0.1.0";
pub const SHORT: &str = "Work seamlessly with Myple from the command-line";

/// Where `myple docs` points the browser.
pub const DOCS_URL: &str = "https://docs.myple.io";

/// Name of the help subcommand.
pub const HELP_COMMAND: &str = "help";

/// Subcommand names and their one-line descriptions, in registration order.
pub const SUBCOMMANDS: [(&str, &str); 7] = [
    ("init", "Creates a new project in the current directory"),
    ("deploy", "Deploys the current project"),
    ("logs", "Shows the logs of the current project"),
    ("docs", "Opens the documentation in your browser"),
    ("login", "Logs into your account or creates a new one"),
    ("logout", "Logs out of your account"),
    ("whoami", "Shows the username of the currently logged in user"),
];

/// Builds the root command.
///
/// clap's own help flag and help subcommand are turned off; `-h/--help` is a
/// plain global switch and `help [command]` an ordinary subcommand, both
/// answered by the usage template.
pub fn root() -> Command {
    let mut cmd = Command::new(PACKAGE)
        .about(SHORT)
        .version(VERSION)
        .disable_help_flag(true)
        .disable_help_subcommand(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Debug mode")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("help")
                .short('h')
                .long("help")
                .help("Output usage information")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("version for myple")
                .action(ArgAction::Version),
        );

    for (name, about) in SUBCOMMANDS {
        cmd = cmd.subcommand(Command::new(name).about(about));
    }

    cmd.subcommand(
        Command::new(HELP_COMMAND)
            .about("Help about any command")
            .arg(
                Arg::new("command")
                    .value_name("command")
                    .num_args(0..)
                    .action(ArgAction::Append),
            ),
    )
}
