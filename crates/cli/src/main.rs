//! woundsearch CLI: search a wound-care content corpus from the terminal.
//!
//! Three modes:
//! - **Shell mode**: `woundsearch [flags] COMMAND` runs one command and exits
//! - **REPL mode**: `woundsearch [flags]` prompts for queries (if stdin is a TTY)
//! - **Pipe mode**: `echo "burns" | woundsearch` runs line by line from stdin

mod commands;
mod format;
mod parse;
mod repl;
mod state;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use tracing::debug;
use tracing_subscriber::EnvFilter;
use woundsearch_core::Result;
use woundsearch_history::{FileBackend, RecentSearches};
use woundsearch_search::{ContentIndex, SearchConfig, SearchEngine, CONFIG_FILE_NAME};

use commands::build_cli;
use format::{format_error, format_message_error, format_output, OutputMode};
use parse::matches_to_action;
use state::SessionState;

/// Data directory used when `--data-dir` is not given.
const DEFAULT_DATA_DIR: &str = ".woundsearch";

/// Interactive line history, kept in the data directory.
const REPL_HISTORY_FILE: &str = "repl_history";

fn main() {
    let cli = build_cli();
    let matches = cli.get_matches();

    init_tracing(matches.get_flag("verbose"));

    // Determine output mode
    let output_mode = if matches.get_flag("json") {
        OutputMode::Json
    } else if matches.get_flag("raw") {
        OutputMode::Raw
    } else {
        OutputMode::Human
    };

    let mut state = match open_session(&matches) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{}", format_error(&e, output_mode));
            process::exit(1);
        }
    };

    // Dispatch mode
    let exit_code = if matches.subcommand().is_some() {
        run_shell_mode(&matches, &mut state, output_mode)
    } else if std::io::stdin().is_terminal() {
        let history_path = data_dir(&matches).join(REPL_HISTORY_FILE);
        repl::run_repl(&mut state, output_mode, Some(&history_path))
    } else {
        repl::run_pipe(&mut state, output_mode)
    };
    process::exit(exit_code);
}

/// Log to stderr; `RUST_LOG` applies unless `--verbose` forces debug.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn data_dir(matches: &clap::ArgMatches) -> PathBuf {
    matches
        .get_one::<String>("data-dir")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

fn open_session(matches: &clap::ArgMatches) -> Result<SessionState> {
    let data_dir = data_dir(matches);
    let backend = FileBackend::new(&data_dir)?;

    let config = load_config(matches.get_one::<String>("config").map(Path::new), &data_dir)?;

    let index = match matches.get_one::<String>("corpus") {
        Some(path) => ContentIndex::from_json_file(Path::new(path))?,
        None => ContentIndex::builtin()?,
    };

    debug!(
        target: "woundsearch::cli",
        data_dir = %data_dir.display(),
        items = index.len(),
        "Session opened"
    );

    let history =
        RecentSearches::load_with_limits(backend, config.history_capacity, config.min_query_len);
    let engine = SearchEngine::new(Arc::new(index)).try_with_config(config)?;
    Ok(SessionState::new(engine, history))
}

/// Load an explicit config file, or the data directory's one (created with
/// defaults on first run).
fn load_config(explicit: Option<&Path>, data_dir: &Path) -> Result<SearchConfig> {
    match explicit {
        Some(path) => SearchConfig::from_file(path),
        None => {
            let path = data_dir.join(CONFIG_FILE_NAME);
            SearchConfig::write_default_if_missing(&path)?;
            SearchConfig::from_file(&path)
        }
    }
}

fn run_shell_mode(matches: &clap::ArgMatches, state: &mut SessionState, mode: OutputMode) -> i32 {
    match matches_to_action(matches) {
        Ok(action) => {
            let formatted = format_output(&state.execute(action), mode);
            if !formatted.is_empty() {
                println!("{}", formatted);
            }
            0
        }
        Err(e) => {
            eprintln!("{}", format_message_error(&e, mode));
            1
        }
    }
}
