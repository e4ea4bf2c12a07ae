//! REPL loop with rustyline.
//!
//! Interactive mode: prompt, meta-commands, line history, TAB completion.
//! Pipe mode: read lines from stdin, execute each, no prompt.
//!
//! A line starting with `search`, `suggest` or `history` is split with shlex
//! (quotes respected) and parsed with the REPL command tree. Anything else is
//! searched as typed.

use std::io::{self, BufRead, Write};
use std::path::Path;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};
use woundsearch_search::SearchEngine;

use crate::commands::build_repl_cmd;
use crate::format::{format_message_error, format_output, OutputMode};
use crate::parse::{check_meta_command, is_subcommand_line, matches_to_action, CliAction, MetaCommand};
use crate::state::SessionState;

/// What running one line led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineOutcome {
    Done,
    Failed,
    Quit,
}

/// Run the interactive REPL.
///
/// Line history is loaded from and saved to `history_path` when given.
pub fn run_repl(state: &mut SessionState, mode: OutputMode, history_path: Option<&Path>) -> i32 {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();

    let mut rl: Editor<WoundHelper, _> = match Editor::with_config(config) {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("(error) Failed to start line editor: {}", e);
            return 1;
        }
    };
    rl.set_helper(Some(WoundHelper::new(state.engine().clone())));

    if let Some(path) = history_path {
        let _ = rl.load_history(path);
    }

    let stdout = io::stdout();
    let mut exit_code = 0;

    loop {
        let prompt = state.prompt();
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);

                if run_line(state, mode, trimmed, &mut stdout.lock()) == LineOutcome::Quit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C: drop the line, show a new prompt
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("(error) {}", err);
                exit_code = 1;
                break;
            }
        }
    }

    if let Some(path) = history_path {
        let _ = rl.save_history(path);
    }

    exit_code
}

/// Run in pipe mode: read lines from stdin, execute each.
pub fn run_pipe(state: &mut SessionState, mode: OutputMode) -> i32 {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_lines(state, mode, stdin.lock(), &mut stdout.lock())
}

/// Execute every line of `input`, writing formatted output to `out`.
///
/// Blank lines and `#` comments are skipped. Returns the exit code: 1 if any
/// line failed to parse, else 0.
pub fn run_lines<R: BufRead, W: Write>(
    state: &mut SessionState,
    mode: OutputMode,
    input: R,
    out: &mut W,
) -> i32 {
    let mut exit_code = 0;

    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match run_line(state, mode, trimmed, out) {
            LineOutcome::Done => {}
            LineOutcome::Failed => exit_code = 1,
            LineOutcome::Quit => break,
        }
    }

    exit_code
}

fn run_line<W: Write>(
    state: &mut SessionState,
    mode: OutputMode,
    line: &str,
    out: &mut W,
) -> LineOutcome {
    if let Some(meta) = check_meta_command(line) {
        match meta {
            MetaCommand::Quit => return LineOutcome::Quit,
            MetaCommand::Help => print_help(out),
        }
        return LineOutcome::Done;
    }

    let action = match parse_line(line) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("{}", format_message_error(&e, mode));
            return LineOutcome::Failed;
        }
    };

    let formatted = format_output(&state.execute(action), mode);
    if !formatted.is_empty() {
        let _ = writeln!(out, "{}", formatted);
    }
    LineOutcome::Done
}

fn parse_line(line: &str) -> Result<CliAction, String> {
    if !is_subcommand_line(line) {
        return Ok(CliAction::Search {
            query: line.to_string(),
            record: true,
        });
    }

    let tokens = shlex::split(line).ok_or_else(|| format!("Invalid quoting: {}", line))?;
    let matches = build_repl_cmd()
        .try_get_matches_from(tokens)
        .map_err(|e| e.to_string())?;
    matches_to_action(&matches)
}

fn print_help<W: Write>(out: &mut W) {
    let _ = writeln!(
        out,
        "Type a query to search, or:\n  \
         search <query> [--no-history]\n  \
         suggest <partial> [--limit N]\n  \
         history\n  \
         history clear\n  \
         help\n  \
         quit / exit\n\
         Press TAB to complete commands and titles."
    );
}

// =========================================================================
// TAB Completion
// =========================================================================

/// Words completed at the start of a line.
const TOP_LEVEL_COMMANDS: &[&str] = &["search", "suggest", "history", "help", "quit", "exit"];

/// Known subcommands for each top-level command.
fn subcommands_for(cmd: &str) -> &'static [&'static str] {
    match cmd {
        "history" => &["clear"],
        _ => &[],
    }
}

/// Completion candidates for the text left of the cursor.
///
/// Returns the byte offset the candidates replace from, and the candidates.
/// The first word completes to a command or, as a bare query, to a
/// suggestion; the argument of `search`/`suggest` completes to suggestions.
fn complete_line(engine: &SearchEngine, line: &str) -> (usize, Vec<Pair>) {
    let lead = line.len() - line.trim_start().len();
    let rest = &line[lead..];

    let Some(split) = rest.find(char::is_whitespace) else {
        let mut candidates: Vec<Pair> = TOP_LEVEL_COMMANDS
            .iter()
            .filter(|cmd| !rest.is_empty() && cmd.starts_with(rest))
            .map(|cmd| pair(cmd.to_string(), cmd.to_string()))
            .collect();
        for word in engine.suggest(rest) {
            if !candidates.iter().any(|c| c.replacement == word) {
                candidates.push(pair(word.clone(), word));
            }
        }
        return (lead, candidates);
    };

    let command = &rest[..split];
    let args = rest[split..].trim_start();
    let args_start = line.len() - args.len();

    match command {
        "search" | "suggest" => {
            // the line goes through shlex, so multi-word titles are quoted
            let candidates = engine
                .suggest(args)
                .into_iter()
                .map(|word| {
                    let quoted = shlex::try_quote(&word)
                        .map(|q| q.into_owned())
                        .unwrap_or_else(|_| word.clone());
                    pair(word, quoted)
                })
                .collect();
            (args_start, candidates)
        }
        _ if !subcommands_for(command).is_empty() => {
            if args.contains(char::is_whitespace) {
                return (line.len(), Vec::new());
            }
            let candidates = subcommands_for(command)
                .iter()
                .filter(|s| s.starts_with(args))
                .map(|s| pair(s.to_string(), s.to_string()))
                .collect();
            (args_start, candidates)
        }
        // bare multi-word query, searched as typed
        _ => {
            let candidates = engine
                .suggest(rest)
                .into_iter()
                .map(|word| pair(word.clone(), word))
                .collect();
            (lead, candidates)
        }
    }
}

fn pair(display: String, replacement: String) -> Pair {
    Pair {
        display,
        replacement,
    }
}

struct WoundHelper {
    engine: SearchEngine,
}

impl WoundHelper {
    fn new(engine: SearchEngine) -> Self {
        Self { engine }
    }
}

impl Helper for WoundHelper {}
impl Validator for WoundHelper {}
impl Highlighter for WoundHelper {}
impl Hinter for WoundHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Completer for WoundHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(complete_line(&self.engine, &line[..pos]))
    }
}
