//! Resolving parsed arguments into a help request or a handler call.

use clap::ArgMatches;

use super::commands::HELP_COMMAND;

/// What a parsed command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Show usage for the command at this path. An empty path is the root.
    Help(Vec<String>),
    /// `help <topic>...`, where the topic may not name a command.
    HelpTopic(Vec<String>),
    /// Run the handler for this command path.
    Run(Vec<String>),
}

/// Extracts the subcommand chain from matches, stopping at `help`.
pub fn extract_command_path(matches: &ArgMatches) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = matches;

    while let Some((name, sub)) = current.subcommand() {
        if name == HELP_COMMAND {
            break;
        }
        path.push(name.to_string());
        current = sub;
    }

    path
}

/// Gets the matches of the most deeply nested subcommand, stopping at `help`.
pub fn get_deepest_matches(matches: &ArgMatches) -> &ArgMatches {
    let mut current = matches;

    while let Some((name, sub)) = current.subcommand() {
        if name == HELP_COMMAND {
            break;
        }
        current = sub;
    }

    current
}

/// Decides what to do with parsed arguments.
///
/// `help [topic]`, `--help` anywhere, and a bare invocation all become help
/// requests. Everything else runs the handler for the command path.
pub fn resolve(matches: &ArgMatches) -> Invocation {
    let path = extract_command_path(matches);
    let deepest = get_deepest_matches(matches);

    if let Some((HELP_COMMAND, help)) = deepest.subcommand() {
        let topic: Vec<String> = help
            .get_many::<String>("command")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();
        return if topic.is_empty() {
            Invocation::Help(path)
        } else {
            Invocation::HelpTopic(topic)
        };
    }

    if deepest.get_flag("help") || path.is_empty() {
        return Invocation::Help(path);
    }

    Invocation::Run(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::root;

    fn resolve_args(args: &[&str]) -> Invocation {
        let matches = root().try_get_matches_from(args).unwrap();
        resolve(&matches)
    }

    fn path(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extract_command_path() {
        let matches = root().try_get_matches_from(["myple", "deploy"]).unwrap();
        assert_eq!(extract_command_path(&matches), path(&["deploy"]));
    }

    #[test]
    fn test_extract_command_path_stops_at_help() {
        let matches = root()
            .try_get_matches_from(["myple", "help", "deploy"])
            .unwrap();
        assert!(extract_command_path(&matches).is_empty());
    }

    #[test]
    fn test_bare_invocation_is_root_help() {
        assert_eq!(resolve_args(&["myple"]), Invocation::Help(vec![]));
        assert_eq!(resolve_args(&["myple", "-d"]), Invocation::Help(vec![]));
    }

    #[test]
    fn test_help_flag() {
        assert_eq!(resolve_args(&["myple", "--help"]), Invocation::Help(vec![]));
        assert_eq!(
            resolve_args(&["myple", "logs", "-h"]),
            Invocation::Help(path(&["logs"]))
        );
    }

    #[test]
    fn test_help_subcommand() {
        assert_eq!(resolve_args(&["myple", "help"]), Invocation::Help(vec![]));
        assert_eq!(
            resolve_args(&["myple", "help", "login"]),
            Invocation::HelpTopic(path(&["login"]))
        );
        assert_eq!(
            resolve_args(&["myple", "help", "nope"]),
            Invocation::HelpTopic(path(&["nope"]))
        );
    }

    #[test]
    fn test_run() {
        assert_eq!(
            resolve_args(&["myple", "whoami"]),
            Invocation::Run(path(&["whoami"]))
        );
        assert_eq!(
            resolve_args(&["myple", "-d", "init"]),
            Invocation::Run(path(&["init"]))
        );
    }
}
