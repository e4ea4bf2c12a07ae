//! Search output types
//!
//! This module defines the output contract handed to the presentation layer:
//! - MatchSpan: Byte range of a matched term inside a display string
//! - SearchResult: A scored item with matched terms and excerpt
//! - GroupedSearchResults: Results partitioned by category
//! - SearchStats: Execution statistics for debugging/monitoring
//! - SearchResponse: Everything a single query produces
//!
//! No type here carries markup. Highlighting is expressed as spans so the
//! renderer can escape text before wrapping matched ranges.

use crate::types::{Category, SearchableItem};
use serde::{Deserialize, Serialize};

// ============================================================================
// MatchSpan
// ============================================================================

/// Half-open byte range `[start, end)` into a display string
///
/// # Invariant
///
/// Both offsets fall on UTF-8 char boundaries of the string the span was
/// computed for, and `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchSpan {
    /// Inclusive start offset in bytes
    pub start: usize,
    /// Exclusive end offset in bytes
    pub end: usize,
}

impl MatchSpan {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        MatchSpan { start, end }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span covers nothing
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Slice the span out of the string it was computed for
    ///
    /// Returns `None` if the span does not fit `text`.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..self.end)
    }
}

// ============================================================================
// SearchResult
// ============================================================================

/// A corpus item that scored above zero for a query
///
/// Created fresh per query, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The matched item
    #[serde(flatten)]
    pub item: SearchableItem,

    /// Relevance score (higher = more relevant)
    pub score: u32,

    /// Distinct query terms that contributed to the score, in match order
    pub matched_terms: Vec<String>,

    /// Preview text: a content window around the first match, or the
    /// description
    pub excerpt: String,

    /// Matched-term ranges inside `item.title`
    #[serde(default)]
    pub title_spans: Vec<MatchSpan>,

    /// Matched-term ranges inside `excerpt`
    #[serde(default)]
    pub excerpt_spans: Vec<MatchSpan>,
}

impl SearchResult {
    /// Create a result without highlight spans
    pub fn new(item: SearchableItem, score: u32, matched_terms: Vec<String>, excerpt: String) -> Self {
        SearchResult {
            item,
            score,
            matched_terms,
            excerpt,
            title_spans: vec![],
            excerpt_spans: vec![],
        }
    }

    /// Builder: set highlight spans
    pub fn with_spans(mut self, title_spans: Vec<MatchSpan>, excerpt_spans: Vec<MatchSpan>) -> Self {
        self.title_spans = title_spans;
        self.excerpt_spans = excerpt_spans;
        self
    }

    /// Category of the underlying item
    pub fn category(&self) -> Category {
        self.item.category
    }
}

// ============================================================================
// GroupedSearchResults
// ============================================================================

/// Results partitioned by category
///
/// # Invariant
///
/// The concatenation of the four groups is a permutation of the full result
/// set, partitioned purely by `category`. Each group keeps the relative order
/// in which results were pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedSearchResults {
    /// Results with `Category::Wound`
    pub wounds: Vec<SearchResult>,
    /// Results with `Category::Treatment`
    pub treatments: Vec<SearchResult>,
    /// Results with `Category::Resource`
    pub resources: Vec<SearchResult>,
    /// Results with `Category::Glossary`
    pub glossary: Vec<SearchResult>,
}

impl GroupedSearchResults {
    /// Create empty groups
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result to the group of its category
    pub fn push(&mut self, result: SearchResult) {
        self.group_mut(result.category()).push(result);
    }

    /// Results of one category
    pub fn get(&self, category: Category) -> &[SearchResult] {
        match category {
            Category::Wound => &self.wounds,
            Category::Treatment => &self.treatments,
            Category::Resource => &self.resources,
            Category::Glossary => &self.glossary,
        }
    }

    fn group_mut(&mut self, category: Category) -> &mut Vec<SearchResult> {
        match category {
            Category::Wound => &mut self.wounds,
            Category::Treatment => &mut self.treatments,
            Category::Resource => &mut self.resources,
            Category::Glossary => &mut self.glossary,
        }
    }

    /// Groups in display order, including empty ones
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[SearchResult])> + '_ {
        Category::all().iter().map(move |c| (*c, self.get(*c)))
    }

    /// Total number of results across all groups
    pub fn len(&self) -> usize {
        self.wounds.len() + self.treatments.len() + self.resources.len() + self.glossary.len()
    }

    /// Check if every group is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Concatenate the groups in display order
    pub fn into_flat(self) -> Vec<SearchResult> {
        let mut all = self.wounds;
        all.extend(self.treatments);
        all.extend(self.resources);
        all.extend(self.glossary);
        all
    }
}

// ============================================================================
// SearchStats
// ============================================================================

/// Execution statistics for a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Time spent in search (microseconds)
    pub elapsed_micros: u64,

    /// Corpus items scored (0 when the query was rejected before scoring)
    pub candidates_considered: usize,
}

impl SearchStats {
    /// Create new SearchStats
    pub fn new(elapsed_micros: u64, candidates: usize) -> Self {
        SearchStats {
            elapsed_micros,
            candidates_considered: candidates,
        }
    }
}

// ============================================================================
// SearchResponse
// ============================================================================

/// Everything a single query produces
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The query as entered, trimmed
    pub query: String,

    /// Normalized, de-duplicated terms the query was scored with
    pub terms: Vec<String>,

    /// Results grouped by category
    pub groups: GroupedSearchResults,

    /// Total number of results (sum of all group sizes)
    pub total: usize,

    /// Execution statistics
    pub stats: SearchStats,
}

impl SearchResponse {
    /// Create an empty response for a query that produced nothing
    pub fn empty(query: impl Into<String>) -> Self {
        SearchResponse {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Check if response has no results
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: &str, category: Category, score: u32) -> SearchResult {
        let item = SearchableItem::new(id, id, "", category, format!("/{}", id));
        SearchResult::new(item, score, vec![], String::new())
    }

    #[test]
    fn test_match_span_slice() {
        let span = MatchSpan::new(0, 5);
        assert_eq!(span.len(), 5);
        assert_eq!(span.slice("burns and scalds"), Some("burns"));
        assert_eq!(MatchSpan::new(10, 40).slice("short"), None);
    }

    #[test]
    fn test_grouped_push_routes_by_category() {
        let mut groups = GroupedSearchResults::new();
        groups.push(result("a", Category::Treatment, 50));
        groups.push(result("b", Category::Wound, 40));
        groups.push(result("c", Category::Treatment, 30));

        assert_eq!(groups.len(), 3);
        assert_eq!(groups.wounds.len(), 1);
        assert_eq!(groups.treatments.len(), 2);
        assert_eq!(groups.treatments[0].item.id, "a");
        assert_eq!(groups.treatments[1].item.id, "c");
        assert!(groups.resources.is_empty());
    }

    #[test]
    fn test_grouped_iter_display_order() {
        let groups = GroupedSearchResults::new();
        let order: Vec<Category> = groups.iter().map(|(c, _)| c).collect();
        assert_eq!(order, Category::ALL.to_vec());
        assert!(groups.is_empty());
    }

    #[test]
    fn test_grouped_into_flat() {
        let mut groups = GroupedSearchResults::new();
        groups.push(result("g", Category::Glossary, 5));
        groups.push(result("w", Category::Wound, 1));
        let flat: Vec<String> = groups.into_flat().into_iter().map(|r| r.item.id).collect();
        assert_eq!(flat, vec!["w", "g"]);
    }

    #[test]
    fn test_empty_response() {
        let response = SearchResponse::empty("a");
        assert!(response.is_empty());
        assert_eq!(response.query, "a");
        assert!(response.terms.is_empty());
        assert_eq!(response.stats, SearchStats::default());
    }

    proptest::proptest! {
        #[test]
        fn prop_push_partitions_by_category(cats in proptest::collection::vec(0usize..4, 0..40)) {
            let mut groups = GroupedSearchResults::new();
            for (i, c) in cats.iter().enumerate() {
                groups.push(result(&i.to_string(), Category::ALL[*c], 1));
            }
            proptest::prop_assert_eq!(groups.len(), cats.len());
            for (category, members) in groups.iter() {
                proptest::prop_assert!(members.iter().all(|r| r.category() == category));
            }
        }
    }

    #[test]
    fn test_search_result_serializes_flat() {
        let r = result("burns", Category::Wound, 100);
        let value = serde_json::to_value(&r).unwrap();
        assert_eq!(value["id"], "burns");
        assert_eq!(value["category"], "wound");
        assert_eq!(value["score"], 100);
    }
}
