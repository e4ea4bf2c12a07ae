//! woundsearch - client-side search for a static wound-care content corpus
//!
//! Free-text queries are normalized, scored against every corpus item with
//! field weights, grouped by category and returned with excerpts and
//! highlight spans. Autocomplete suggestions and a capped recent-search
//! history complete the interface.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use woundsearch::{ContentIndex, MemoryBackend, RecentSearches, SearchEngine};
//!
//! let engine = SearchEngine::new(Arc::new(ContentIndex::builtin()?));
//! let mut history = RecentSearches::load(MemoryBackend::new());
//!
//! let response = engine.search("pressure injuries");
//! history.record(&response.query);
//!
//! assert_eq!(response.groups.wounds[0].item.id, "pressure-injuries");
//! assert_eq!(history.most_recent(), Some("pressure injuries"));
//! # Ok::<(), woundsearch::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `woundsearch-core`: data model, limits and errors
//! - `woundsearch-search`: index, normalizer, scorer, grouper, suggestions
//! - `woundsearch-history`: recent searches and their storage backends

pub use woundsearch_core::*;
pub use woundsearch_history::{
    FileBackend, HistoryBackend, MemoryBackend, RecentSearches, RECENT_SEARCHES_KEY,
};
pub use woundsearch_search::{
    ContentIndex, FieldWeightScorer, IndexedItem, ItemScore, ScoreWeights, Scorer, SearchConfig,
    SearchEngine, CONFIG_FILE_NAME,
};

/// Lower-level pipeline pieces
pub mod pipeline {
    pub use woundsearch_search::{
        build_excerpt, find_spans, fold_case, group, is_searchable, normalize, suggest,
        suggest_with_min_len, tokenize, tokenize_unique, ExcerptWindow, FoldedText,
    };
}
