//! ArgMatches → CliAction conversion.
//!
//! Translates clap's parsed arguments into the action the session runs.
//! REPL meta-commands (`quit`, `help`) are recognized before clap sees the
//! line; any other line that is not a subcommand is treated as a query.

use clap::ArgMatches;

/// The result of parsing user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Run a query, optionally recording it in recent searches.
    Search { query: String, record: bool },
    /// Autocomplete a partial query.
    Suggest { partial: String, limit: Option<usize> },
    /// List recent searches.
    History,
    /// Forget recent searches.
    ClearHistory,
}

/// REPL meta-commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaCommand {
    Help,
    Quit,
}

/// Subcommand names understood by the REPL command tree.
const SUBCOMMANDS: &[&str] = &["search", "suggest", "history"];

/// Check for REPL meta-commands before delegating to clap.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    match line.trim() {
        "quit" | "exit" | ":q" => Some(MetaCommand::Quit),
        "help" | "?" => Some(MetaCommand::Help),
        _ => None,
    }
}

/// Check whether a REPL line starts with a known subcommand.
///
/// Lines that don't are searched as-is.
pub fn is_subcommand_line(line: &str) -> bool {
    line.split_whitespace()
        .next()
        .map_or(false, |first| SUBCOMMANDS.contains(&first))
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "search" => Ok(CliAction::Search {
            query: joined(sub_matches, "query"),
            record: !sub_matches.get_flag("no-history"),
        }),
        "suggest" => Ok(CliAction::Suggest {
            partial: joined(sub_matches, "partial"),
            limit: sub_matches.get_one::<usize>("limit").copied(),
        }),
        "history" => match sub_matches.subcommand_name() {
            Some("clear") => Ok(CliAction::ClearHistory),
            Some(other) => Err(format!("Unknown history command: {}", other)),
            None => Ok(CliAction::History),
        },
        other => Err(format!("Unknown command: {}", other)),
    }
}

/// Join a multi-value positional back into one string.
fn joined(matches: &ArgMatches, id: &str) -> String {
    matches
        .get_many::<String>(id)
        .map(|words| words.map(String::as_str).collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}
