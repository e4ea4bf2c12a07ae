//! Clap command tree definition.
//!
//! Builds the full `clap::Command` tree used by both shell mode (directly)
//! and REPL/pipe mode (via `try_get_matches_from`).

use clap::{Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("woundsearch")
        .about("Search a wound-care content corpus")
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Config file (default: <data-dir>/woundsearch.toml)")
                .global(true),
        )
        .arg(
            Arg::new("corpus")
                .long("corpus")
                .value_name("PATH")
                .help("JSON corpus file (default: bundled corpus)")
                .global(true),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .value_name("PATH")
                .help("Directory for history and config (default: .woundsearch)")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .conflicts_with("raw")
                .global(true),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Raw output mode (one value per line)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Debug logging to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(build_search())
        .subcommand(build_suggest())
        .subcommand(build_history())
}

/// Build a command tree for REPL and pipe mode (no global flags).
pub fn build_repl_cmd() -> Command {
    Command::new("repl")
        .multicall(true)
        .subcommand_required(true)
        .subcommand(build_search())
        .subcommand(build_suggest())
        .subcommand(build_history())
}

// =========================================================================
// Search
// =========================================================================

fn build_search() -> Command {
    Command::new("search")
        .about("Search the corpus and print grouped results")
        .arg(
            Arg::new("query")
                .required(true)
                .num_args(1..)
                .value_name("QUERY")
                .help("Free-text query"),
        )
        .arg(
            Arg::new("no-history")
                .long("no-history")
                .help("Do not record the query in recent searches")
                .action(ArgAction::SetTrue),
        )
}

// =========================================================================
// Suggest
// =========================================================================

fn build_suggest() -> Command {
    Command::new("suggest")
        .about("Autocomplete a partial query")
        .arg(
            Arg::new("partial")
                .required(true)
                .num_args(1..)
                .value_name("PARTIAL")
                .help("Partial query"),
        )
        .arg(
            Arg::new("limit")
                .long("limit")
                .short('n')
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .help("Maximum suggestions (default: from config)"),
        )
}

// =========================================================================
// History
// =========================================================================

fn build_history() -> Command {
    Command::new("history")
        .about("List recent searches")
        .subcommand(Command::new("clear").about("Forget all recent searches"))
}
