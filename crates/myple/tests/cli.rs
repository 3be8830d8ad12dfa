use myple::cli::commands::DOCS_URL;
use myple::cli::App;
use myple::{CommandError, MockOpener};
use myple_log::MockEnv;
use serial_test::serial;

const ROOT_HELP: &str = "\
Usage:
  myple [command]

Available Commands:
  init        Creates a new project in the current directory
  deploy      Deploys the current project
  logs        Shows the logs of the current project
  docs        Opens the documentation in your browser
  login       Logs into your account or creates a new one
  logout      Logs out of your account
  whoami      Shows the username of the currently logged in user
  help        Help about any command

Flags:
  -d, --debug     Debug mode
  -h, --help      Output usage information
  -v, --version   version for myple

Use \"myple [command] --help\" for more information about a command.
";

const WHOAMI_HELP: &str = "\
Usage:
  myple whoami [flags]

Global Flags:
  -d, --debug   Debug mode
  -h, --help    Output usage information
";

fn run(app: &App, args: &[&str]) -> (anyhow::Result<()>, String, MockOpener) {
    let opener = MockOpener::new();
    let mut out = Vec::new();
    let result = app.run_from(args.iter().copied(), MockEnv::new(), &opener, &mut out);
    (result, String::from_utf8(out).unwrap(), opener)
}

fn strip_ansi(s: &str) -> String {
    console::strip_ansi_codes(s).into_owned()
}

#[test]
#[serial]
fn test_bare_invocation_prints_root_help() {
    let (result, out, _) = run(&App::with_style(false), &["myple"]);
    result.unwrap();
    assert_eq!(out, ROOT_HELP);
}

#[test]
#[serial]
fn test_help_flag_and_help_command_agree() {
    let app = App::with_style(false);
    let (_, flag, _) = run(&app, &["myple", "whoami", "--help"]);
    let (_, short, _) = run(&app, &["myple", "whoami", "-h"]);
    let (_, command, _) = run(&app, &["myple", "help", "whoami"]);

    assert_eq!(flag, WHOAMI_HELP);
    assert_eq!(short, WHOAMI_HELP);
    assert_eq!(command, WHOAMI_HELP);
}

#[test]
#[serial]
fn test_help_command_usage() {
    let (result, out, _) = run(&App::with_style(false), &["myple", "help", "help"]);
    result.unwrap();
    assert!(out.starts_with("Usage:\n  myple help [flags] [command]\n"), "{out}");
}

#[test]
#[serial]
fn test_unknown_help_topic_falls_back_to_root() {
    let (result, out, _) = run(&App::with_style(false), &["myple", "help", "deploi"]);
    result.unwrap();
    assert_eq!(out, format!("Unknown help topic \"deploi\"\n{ROOT_HELP}"));
}

#[test]
#[serial]
fn test_styled_root_help() {
    let (result, out, _) = run(&App::with_style(true), &["myple", "--help"]);
    result.unwrap();

    assert!(out.contains("\x1b[36minit\x1b[0m"));
    assert!(out.contains("\x1b[32mmyple\x1b[0m"));

    let plain = strip_ansi(&out);
    for word in [
        "init", "deploy", "logs", "docs", "login", "logout", "whoami", "--debug", "--help",
        "--version", " Usage ", " Commands ", " Flags ",
    ] {
        assert!(plain.contains(word), "missing {word:?} in:\n{plain}");
    }
}

#[test]
#[serial]
fn test_styled_commands_stay_aligned() {
    let (_, out, _) = run(&App::with_style(true), &["myple"]);
    let plain = strip_ansi(&out);

    let columns: Vec<usize> = plain
        .lines()
        .filter(|line| line.contains("Deploys") || line.contains("Logs out") || line.contains("Help about"))
        .map(|line| line.find(char::is_uppercase).unwrap())
        .collect();
    assert_eq!(columns.len(), 3);
    assert!(columns.iter().all(|c| *c == columns[0]), "{plain}");
}

#[test]
#[serial]
fn test_stub_commands_run_silently() {
    let app = App::with_style(false);
    for name in ["init", "deploy", "logs", "login", "logout", "whoami"] {
        let (result, out, opener) = run(&app, &["myple", name]);
        result.unwrap();
        assert!(out.is_empty());
        assert!(opener.opened().is_empty());
    }
}

#[test]
#[serial]
fn test_debug_flag_accepted_anywhere() {
    let app = App::with_style(false);
    run(&app, &["myple", "-d", "deploy"]).0.unwrap();
    run(&app, &["myple", "deploy", "--debug"]).0.unwrap();
}

#[test]
#[serial]
fn test_docs_opens_documentation() {
    let (result, _, opener) = run(&App::with_style(false), &["myple", "docs"]);
    result.unwrap();
    assert_eq!(opener.opened(), vec![DOCS_URL]);
}

#[test]
#[serial]
fn test_docs_failure_is_an_error() {
    let app = App::with_style(false);
    let opener = MockOpener::failing();
    let mut out = Vec::new();
    let err = app
        .run_from(["myple", "docs"], MockEnv::new(), &opener, &mut out)
        .unwrap_err();

    assert!(format!("{err:#}").starts_with("failed to run docs: failed to open"));
    assert!(matches!(
        err.downcast_ref::<CommandError>(),
        Some(CommandError::OpenFailed { .. })
    ));
}

#[test]
#[serial]
fn test_parse_errors_are_clap_errors() {
    let (result, _, _) = run(&App::with_style(false), &["myple", "frobnicate"]);
    let err = result.unwrap_err();
    let clap_err = err.downcast_ref::<clap::Error>().unwrap();
    assert_eq!(clap_err.kind(), clap::error::ErrorKind::InvalidSubcommand);
}

#[test]
#[serial]
fn test_version_is_a_clap_display() {
    let (result, _, _) = run(&App::with_style(false), &["myple", "-v"]);
    let err = result.unwrap_err();
    let clap_err = err.downcast_ref::<clap::Error>().unwrap();
    assert_eq!(clap_err.kind(), clap::error::ErrorKind::DisplayVersion);
}

struct BrokenPipe;

impl std::io::Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
        Err(std::io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
#[serial]
fn test_help_write_failure_is_io_error() {
    let app = App::with_style(false);
    let opener = MockOpener::new();
    for args in [&["myple"][..], &["myple", "help", "deploi"][..]] {
        let err = app
            .run_from(args.iter().copied(), MockEnv::new(), &opener, &mut BrokenPipe)
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CommandError>(),
            Some(CommandError::Io(e)) if e.kind() == std::io::ErrorKind::BrokenPipe
        ));
    }
}
