//! Shared test utilities for the integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;
use woundsearch::{
    Category, ContentIndex, FileBackend, RecentSearches, SearchConfig, SearchEngine,
    SearchResult, SearchableItem, SearchResponse,
};

/// Engine over the bundled corpus with default config.
pub fn builtin_engine() -> SearchEngine {
    SearchEngine::new(Arc::new(
        ContentIndex::builtin().expect("Failed to load bundled corpus"),
    ))
}

/// Engine over the bundled corpus with a custom config.
pub fn engine_with(config: SearchConfig) -> SearchEngine {
    builtin_engine().with_config(config)
}

/// A fresh history session over `dir`, as a new process would open it.
pub fn file_history(dir: &Path) -> RecentSearches {
    RecentSearches::load(FileBackend::new(dir).expect("Failed to open data dir"))
}

/// Minimal item for synthetic corpora.
pub fn item(id: &str, title: &str, category: Category) -> SearchableItem {
    SearchableItem::new(id, title, format!("About {}", title), category, format!("/{}", id))
}

/// All results in display order (wounds first, glossary last).
pub fn flat(response: &SearchResponse) -> Vec<&SearchResult> {
    response
        .groups
        .iter()
        .flat_map(|(_, results)| results.iter())
        .collect()
}

/// Ids of all results in display order.
pub fn ids(response: &SearchResponse) -> Vec<String> {
    flat(response).into_iter().map(|r| r.item.id.clone()).collect()
}
