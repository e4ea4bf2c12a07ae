//! Result grouping
//!
//! Partitions a ranked result list into the four fixed categories.
//! Each group keeps the relative order of the input, so a score-descending
//! list yields score-descending groups. Nothing is dropped or duplicated.

use woundsearch_core::{GroupedSearchResults, SearchResult};

/// Partition ranked results by category
pub fn group(results: Vec<SearchResult>) -> GroupedSearchResults {
    results
        .into_iter()
        .fold(GroupedSearchResults::new(), |mut groups, result| {
            groups.push(result);
            groups
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use woundsearch_core::{Category, SearchableItem};

    fn make_result(id: &str, category: Category, score: u32) -> SearchResult {
        let item = SearchableItem::new(id, id, "", category, format!("/{}", id));
        SearchResult::new(item, score, vec![], String::new())
    }

    #[test]
    fn test_group_empty() {
        let groups = group(vec![]);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_group_preserves_order_within_category() {
        let ranked = vec![
            make_result("w1", Category::Wound, 90),
            make_result("t1", Category::Treatment, 80),
            make_result("w2", Category::Wound, 70),
            make_result("g1", Category::Glossary, 60),
            make_result("w3", Category::Wound, 50),
        ];
        let groups = group(ranked);

        let wound_ids: Vec<&str> = groups.wounds.iter().map(|r| r.item.id.as_str()).collect();
        assert_eq!(wound_ids, vec!["w1", "w2", "w3"]);
        assert_eq!(groups.treatments.len(), 1);
        assert_eq!(groups.glossary.len(), 1);
        assert!(groups.resources.is_empty());
        assert_eq!(groups.len(), 5);
    }

    proptest! {
        #[test]
        fn prop_group_is_a_partition(
            entries in proptest::collection::vec((0usize..4, 0u32..500), 0..50)
        ) {
            let mut ranked: Vec<SearchResult> = entries
                .iter()
                .enumerate()
                .map(|(i, (c, s))| make_result(&format!("r{}", i), Category::ALL[*c], *s))
                .collect();
            ranked.sort_by(|a, b| b.score.cmp(&a.score));
            let total = ranked.len();
            let mut input_ids: Vec<String> = ranked.iter().map(|r| r.item.id.clone()).collect();

            let groups = group(ranked);
            prop_assert_eq!(groups.len(), total);

            for (category, members) in groups.iter() {
                prop_assert!(members.iter().all(|r| r.category() == category));
                prop_assert!(members.windows(2).all(|p| p[0].score >= p[1].score));
            }

            let mut output_ids: Vec<String> =
                groups.into_flat().into_iter().map(|r| r.item.id).collect();
            input_ids.sort();
            output_ids.sort();
            prop_assert_eq!(input_ids, output_ids);
        }
    }
}
