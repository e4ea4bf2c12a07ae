//! Crate-wide defaults
//!
//! These are the values the engine and the history store use when no
//! configuration overrides them.

/// Minimum number of characters (after trimming) a query needs before it is
/// scored, suggested on, or recorded in history.
pub const MIN_QUERY_LEN: usize = 2;

/// Default number of autocomplete suggestions returned.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Maximum number of entries kept in the recent-search history.
pub const MAX_RECENT_SEARCHES: usize = 10;

/// Characters of content kept before the first match in an excerpt.
pub const DEFAULT_EXCERPT_BEFORE: usize = 50;

/// Characters of content kept after the first match in an excerpt.
pub const DEFAULT_EXCERPT_AFTER: usize = 100;

/// Marker added to an excerpt that was cut at either end.
pub const ELLIPSIS: &str = "...";
