//! Search pipeline for woundsearch
//!
//! This crate provides:
//! - Tokenizer: query normalization and case folding
//! - ContentIndex: the immutable, validated corpus with precomputed forms
//! - Scorer trait with the FieldWeightScorer default implementation
//! - Excerpt and highlight-span extraction
//! - Grouping of ranked results by category
//! - Autocomplete suggestions
//! - SearchEngine, which orchestrates all of the above
//! - SearchConfig, loaded from `woundsearch.toml`
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use woundsearch_search::{ContentIndex, SearchEngine};
//!
//! let index = Arc::new(ContentIndex::builtin().unwrap());
//! let engine = SearchEngine::new(index);
//! let response = engine.search("pressure injuries");
//! assert!(!response.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod engine;
pub mod excerpt;
pub mod grouper;
pub mod highlight;
pub mod index;
pub mod scorer;
pub mod suggest;
pub mod tokenizer;

// Re-export commonly used types
pub use config::{SearchConfig, CONFIG_FILE_NAME};
pub use engine::SearchEngine;
pub use excerpt::{build_excerpt, ExcerptWindow};
pub use grouper::group;
pub use highlight::find_spans;
pub use index::{ContentIndex, IndexedItem};
pub use scorer::{FieldWeightScorer, ItemScore, ScoreWeights, Scorer};
pub use suggest::{suggest, suggest_with_min_len};
pub use tokenizer::{fold_case, is_searchable, normalize, tokenize, tokenize_unique, FoldedText};
