//! Autocomplete suggestions
//!
//! Candidates come from the same content index as search results:
//! 1. every title (original case) whose lowercased form contains the
//!    normalized query, in corpus order
//! 2. every keyword whose lowercased form contains the normalized query,
//!    in corpus order, then keyword order
//!
//! Duplicates are dropped keeping the first occurrence, and the first
//! `limit` candidates are returned. The order is therefore stable for a
//! given corpus.

use crate::index::ContentIndex;
use crate::tokenizer::{is_searchable, normalize};
use std::collections::HashSet;
use woundsearch_core::MIN_QUERY_LEN;

/// Suggestions for a partial query, using the default minimum length
pub fn suggest(index: &ContentIndex, partial: &str, limit: usize) -> Vec<String> {
    suggest_with_min_len(index, partial, limit, MIN_QUERY_LEN)
}

/// Suggestions for a partial query
///
/// Returns nothing when the trimmed input has fewer than `min_len`
/// characters, when it normalizes to nothing, or when `limit` is 0.
pub fn suggest_with_min_len(
    index: &ContentIndex,
    partial: &str,
    limit: usize,
    min_len: usize,
) -> Vec<String> {
    if limit == 0 || !is_searchable(partial, min_len) {
        return vec![];
    }
    let normalized = normalize(partial);
    if normalized.is_empty() {
        return vec![];
    }
    let needle = normalized.as_str();

    let titles = index
        .items()
        .iter()
        .filter(move |i| i.title_folded().contains(needle))
        .map(|i| i.item().title.as_str());

    let keywords = index.items().iter().flat_map(move |i| {
        i.keywords_folded()
            .iter()
            .zip(i.item().keywords.iter())
            .filter(move |(folded, _)| folded.contains(needle))
            .map(|(_, original)| original.as_str())
    });

    let mut seen = HashSet::new();
    titles
        .chain(keywords)
        .filter(|candidate| seen.insert(*candidate))
        .take(limit)
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use woundsearch_core::{Category, SearchableItem, DEFAULT_SUGGESTION_LIMIT};

    fn fixture() -> ContentIndex {
        ContentIndex::new(vec![
            SearchableItem::new("vlu", "Venous Leg Ulcers", "d", Category::Wound, "/vlu")
                .with_keywords(["leg ulcer", "venous insufficiency"]),
            SearchableItem::new("dfu", "Diabetic Foot Ulcers", "d", Category::Wound, "/dfu")
                .with_keywords(["foot ulcer", "leg ulcer"]),
            SearchableItem::new("ct", "Compression Therapy", "d", Category::Treatment, "/ct")
                .with_keywords(["Venous Return"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_short_input_yields_nothing() {
        let index = fixture();
        assert!(suggest(&index, "", 5).is_empty());
        assert!(suggest(&index, " v ", 5).is_empty());
    }

    #[test]
    fn test_punctuation_only_yields_nothing() {
        assert!(suggest(&fixture(), "!!", 5).is_empty());
    }

    #[test]
    fn test_zero_limit_yields_nothing() {
        assert!(suggest(&fixture(), "ulcer", 0).is_empty());
    }

    #[test]
    fn test_titles_before_keywords_first_discovered_order() {
        let got = suggest(&fixture(), "ulcer", 10);
        assert_eq!(
            got,
            vec![
                "Venous Leg Ulcers",
                "Diabetic Foot Ulcers",
                "leg ulcer",
                "foot ulcer",
            ]
        );
    }

    #[test]
    fn test_keyword_original_case_kept() {
        let got = suggest(&fixture(), "VENOUS r", 10);
        assert_eq!(got, vec!["Venous Return"]);
    }

    #[test]
    fn test_limit_applies_after_dedup() {
        let got = suggest(&fixture(), "ulcer", 3);
        assert_eq!(got, vec!["Venous Leg Ulcers", "Diabetic Foot Ulcers", "leg ulcer"]);
    }

    #[test]
    fn test_default_limit() {
        let index = ContentIndex::builtin().unwrap();
        let got = suggest(&index, "tissue", DEFAULT_SUGGESTION_LIMIT);
        assert!(got.len() <= DEFAULT_SUGGESTION_LIMIT);
        assert_eq!(got.first().map(String::as_str), Some("Granulation Tissue"));
    }

    #[test]
    fn test_custom_min_len() {
        let index = fixture();
        assert!(suggest_with_min_len(&index, "leg", 5, 4).is_empty());
        assert!(!suggest_with_min_len(&index, "leg", 5, 3).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let index = fixture();
        let first = suggest(&index, "ve", 5);
        for _ in 0..5 {
            assert_eq!(suggest(&index, "ve", 5), first);
        }
    }
}
