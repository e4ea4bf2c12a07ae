//! Recent-search history for woundsearch
//!
//! This crate provides:
//! - RecentSearches: a capped, deduplicated, most-recent-first query list
//! - HistoryBackend trait for keyed record storage
//! - MemoryBackend and FileBackend implementations
//!
//! Persistence never fails across the public interface: backend errors are
//! logged and the in-memory list stays authoritative for the session.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod recent;

pub use backend::{FileBackend, HistoryBackend, MemoryBackend};
pub use recent::{RecentSearches, RECENT_SEARCHES_KEY};
