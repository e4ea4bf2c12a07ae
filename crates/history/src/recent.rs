//! Recent searches
//!
//! A most-recent-first list of committed queries. Entries are trimmed, at
//! least the minimum query length long (two characters unless configured),
//! and unique (exact, case-sensitive). The list is capped; recording past the
//! cap evicts the oldest entry.
//!
//! The whole list is persisted as a JSON array of strings under
//! [`RECENT_SEARCHES_KEY`] after every change.

use crate::backend::HistoryBackend;
use tracing::{info, warn};
use woundsearch_core::{MAX_RECENT_SEARCHES, MIN_QUERY_LEN};

/// Record key for the persisted list
pub const RECENT_SEARCHES_KEY: &str = "woundsearch.recent-searches";

/// Capped, deduplicated, most-recent-first query history
pub struct RecentSearches {
    entries: Vec<String>,
    capacity: usize,
    min_len: usize,
    backend: Box<dyn HistoryBackend>,
}

impl std::fmt::Debug for RecentSearches {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecentSearches")
            .field("entries", &self.entries)
            .field("capacity", &self.capacity)
            .field("min_len", &self.min_len)
            .field("backend", &self.backend.name())
            .finish()
    }
}

impl RecentSearches {
    /// Load history from `backend` with the default capacity
    pub fn load(backend: impl HistoryBackend + 'static) -> Self {
        Self::load_with_capacity(backend, MAX_RECENT_SEARCHES)
    }

    /// Load history from `backend`, keeping at most `capacity` entries
    pub fn load_with_capacity(backend: impl HistoryBackend + 'static, capacity: usize) -> Self {
        Self::load_with_limits(backend, capacity, MIN_QUERY_LEN)
    }

    /// Load history from `backend`, keeping at most `capacity` entries of at
    /// least `min_len` characters
    ///
    /// `min_len` should match the search engine's minimum query length, so
    /// queries too short to search are never remembered. It is raised to 1
    /// if given as 0.
    ///
    /// Never fails. A missing record gives an empty list; an unreadable or
    /// corrupt record is logged and discarded.
    pub fn load_with_limits(
        backend: impl HistoryBackend + 'static,
        capacity: usize,
        min_len: usize,
    ) -> Self {
        let min_len = min_len.max(1);
        let entries = match backend.read(RECENT_SEARCHES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(list) => sanitize(list, capacity, min_len),
                Err(e) => {
                    warn!(
                        target: "woundsearch::history",
                        backend = backend.name(),
                        error = %e,
                        "Corrupt recent searches discarded"
                    );
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(
                    target: "woundsearch::history",
                    backend = backend.name(),
                    error = %e,
                    "Failed to read recent searches"
                );
                Vec::new()
            }
        };

        RecentSearches {
            entries,
            capacity,
            min_len,
            backend: Box::new(backend),
        }
    }

    /// Record a committed query
    ///
    /// Ignored if the trimmed query is shorter than the minimum length. Otherwise
    /// any equal entry is removed, the query goes to the front, the list is
    /// truncated to capacity and persisted.
    pub fn record(&mut self, query: &str) {
        let query = query.trim();
        if query.chars().count() < self.min_len {
            return;
        }

        self.entries.retain(|e| e != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(self.capacity);
        self.persist();
    }

    /// Forget every entry and remove the persisted record
    pub fn clear(&mut self) {
        let dropped = self.entries.len();
        self.entries.clear();
        if let Err(e) = self.backend.remove(RECENT_SEARCHES_KEY) {
            warn!(
                target: "woundsearch::history",
                backend = self.backend.name(),
                error = %e,
                "Failed to remove recent searches"
            );
        }
        info!(target: "woundsearch::history", dropped, "Recent searches cleared");
    }

    /// Entries, most recent first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Most recent entry
    pub fn most_recent(&self) -> Option<&str> {
        self.entries.first().map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if history is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Minimum entry length in characters
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.entries)
            .map_err(std::io::Error::from)
            .and_then(|json| self.backend.write(RECENT_SEARCHES_KEY, &json));
        if let Err(e) = result {
            warn!(
                target: "woundsearch::history",
                backend = self.backend.name(),
                error = %e,
                "Failed to persist recent searches"
            );
        }
    }
}

/// Apply the entry invariants to a list read from storage
fn sanitize(list: Vec<String>, capacity: usize, min_len: usize) -> Vec<String> {
    let mut entries: Vec<String> = Vec::with_capacity(list.len().min(capacity));
    for raw in list {
        let entry = raw.trim();
        if entry.chars().count() < min_len || entries.iter().any(|e| e == entry) {
            continue;
        }
        entries.push(entry.to_string());
        if entries.len() == capacity {
            break;
        }
    }
    entries
}

// ============================================================================
// Tests
// ============================================================================
