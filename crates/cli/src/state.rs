//! Session wrapper around the engine and recent-search history.
//!
//! One session serves every command of a shell invocation or a REPL run.

use woundsearch_core::SearchResponse;
use woundsearch_history::RecentSearches;
use woundsearch_search::SearchEngine;

use crate::parse::CliAction;

/// What a command produced, ready for formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Grouped search results.
    Search(SearchResponse),
    /// Autocomplete candidates.
    Suggestions(Vec<String>),
    /// Recent searches, most recent first.
    History(Vec<String>),
    /// History was cleared.
    Cleared,
}

/// Holds the engine and history for the lifetime of the process.
pub struct SessionState {
    engine: SearchEngine,
    history: RecentSearches,
}

impl SessionState {
    /// Create a session.
    pub fn new(engine: SearchEngine, history: RecentSearches) -> Self {
        Self { engine, history }
    }

    /// Run an action.
    pub fn execute(&mut self, action: CliAction) -> Output {
        match action {
            CliAction::Search { query, record } => {
                let response = self.engine.search(&query);
                if record {
                    self.history.record(&query);
                }
                Output::Search(response)
            }
            CliAction::Suggest { partial, limit } => {
                let limit = limit.unwrap_or(self.engine.config().suggestion_limit);
                Output::Suggestions(self.engine.suggest_with_limit(&partial, limit))
            }
            CliAction::History => Output::History(self.history.entries().to_vec()),
            CliAction::ClearHistory => {
                self.history.clear();
                Output::Cleared
            }
        }
    }

    /// The session's engine.
    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    /// REPL prompt.
    pub fn prompt(&self) -> String {
        match self.history.most_recent() {
            Some(last) => format!("woundsearch [{}]> ", last),
            None => "woundsearch> ".to_string(),
        }
    }
}
