//! Core types for woundsearch
//!
//! This crate defines the foundational types used throughout the system:
//! - Category: The four fixed content categories
//! - SearchableItem: One immutable entry of the content corpus
//! - SearchResult: A scored item with matched terms, excerpt and spans
//! - GroupedSearchResults: Results partitioned by category
//! - SearchResponse / SearchStats: The output contract of a search
//! - MatchSpan: Byte ranges for safe highlighting
//! - Error: Error type hierarchy
//! - Limits: Crate-wide defaults (query length, history cap, excerpt window)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;
pub mod search_types;
pub mod types;

pub use error::{Error, Result};
pub use limits::{
    DEFAULT_EXCERPT_AFTER, DEFAULT_EXCERPT_BEFORE, DEFAULT_SUGGESTION_LIMIT, ELLIPSIS,
    MAX_RECENT_SEARCHES, MIN_QUERY_LEN,
};
pub use search_types::{
    GroupedSearchResults, MatchSpan, SearchResponse, SearchResult, SearchStats,
};
pub use types::{Category, SearchableItem};
