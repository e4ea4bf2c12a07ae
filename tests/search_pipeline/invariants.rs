//! Properties that hold for every query over the bundled corpus.

use crate::common::{builtin_engine, flat, ids};
use proptest::prelude::*;
use std::collections::HashSet;
use woundsearch::pipeline::normalize;
use woundsearch::{Category, SearchEngine};

const VOCAB: &[&str] = &[
    "pressure", "injuries", "ulcer", "leg", "foot", "burn", "skin", "tissue", "wound",
    "dressing", "compression", "infection", "exudate", "slough", "healing", "nutrition",
    "zinc", "saline", "xyz", "care", "bandage", "pain",
];

fn word() -> impl Strategy<Value = &'static str> {
    prop::sample::select(VOCAB)
}

fn engine() -> &'static SearchEngine {
    use std::sync::OnceLock;
    static ENGINE: OnceLock<SearchEngine> = OnceLock::new();
    ENGINE.get_or_init(builtin_engine)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_response_is_well_formed(query in "[a-zA-Z ,.!-]{0,24}") {
        let response = engine().search(&query);

        let sum: usize = response.groups.iter().map(|(_, r)| r.len()).sum();
        prop_assert_eq!(response.total, sum);

        for (category, results) in response.groups.iter() {
            prop_assert!(results.windows(2).all(|p| p[0].score >= p[1].score));
            for r in results {
                prop_assert_eq!(r.category(), category);
                prop_assert!(r.score > 0);
                for span in r.title_spans.iter().chain(r.excerpt_spans.iter()) {
                    prop_assert!(span.start < span.end);
                }
                for pair in r.excerpt_spans.windows(2) {
                    prop_assert!(pair[0].end < pair[1].start);
                }
                prop_assert!(r.title_spans.iter().all(|s| s.slice(&r.item.title).is_some()));
                prop_assert!(r.excerpt_spans.iter().all(|s| s.slice(&r.excerpt).is_some()));
            }
        }
    }

    #[test]
    fn prop_short_queries_never_match(c in "[a-z]?", pad in " {0,3}") {
        let query = format!("{}{}{}", pad, c, pad);
        prop_assert!(engine().search(&query).is_empty());
        prop_assert!(engine().suggest(&query).is_empty());
    }

    #[test]
    fn prop_case_and_punctuation_insensitive(a in word(), b in word()) {
        let plain = engine().search(&format!("{} {}", a, b));
        let noisy = engine().search(&format!("  {}, {}!", a.to_uppercase(), b));
        prop_assert_eq!(plain.terms, noisy.terms);
        prop_assert_eq!(plain.groups, noisy.groups);
    }

    #[test]
    fn prop_extra_term_never_lowers_score(a in word(), b in word()) {
        let one = engine().search(a);
        let two = engine().search(&format!("{} {}", a, b));
        let scores: std::collections::HashMap<String, u32> =
            flat(&two).into_iter().map(|r| (r.item.id.clone(), r.score)).collect();

        for r in flat(&one) {
            let again = scores.get(&r.item.id);
            prop_assert!(again.is_some(), "{} dropped after adding {}", r.item.id, b);
            prop_assert!(*again.unwrap() >= r.score);
        }
    }

    #[test]
    fn prop_matched_terms_are_query_terms(a in word(), b in word(), c in word()) {
        let response = engine().search(&format!("{} {} {}", a, b, c));
        let terms: HashSet<&String> = response.terms.iter().collect();
        prop_assert_eq!(terms.len(), response.terms.len());
        for r in flat(&response) {
            prop_assert!(!r.matched_terms.is_empty());
            prop_assert!(r.matched_terms.iter().all(|t| terms.contains(t)));
        }
    }

    #[test]
    fn prop_suggestions_contain_partial(partial in "[a-z]{2,5}", limit in 0usize..8) {
        let got = engine().suggest_with_limit(&partial, limit);
        prop_assert!(got.len() <= limit);

        let unique: HashSet<&String> = got.iter().collect();
        prop_assert_eq!(unique.len(), got.len());

        let needle = normalize(&partial);
        for s in &got {
            prop_assert!(s.to_lowercase().contains(&needle), "{} !~ {}", s, needle);
        }
    }
}

#[test]
fn test_every_item_is_reachable_by_its_title() {
    let engine = engine();
    for item in engine.index().iter() {
        let response = engine.search(&item.title);
        let top_score = flat(&response).iter().map(|r| r.score).max();
        let own = flat(&response)
            .into_iter()
            .find(|r| r.item.id == item.id)
            .map(|r| r.score);
        assert_eq!(own, top_score, "{} is not a top hit for its own title", item.id);
    }
}

#[test]
fn test_category_groups_in_display_order() {
    let response = engine().search("wound");
    let categories: Vec<Category> = response.groups.iter().map(|(c, _)| c).collect();
    assert_eq!(categories, Category::ALL.to_vec());
    assert_eq!(ids(&response).len(), response.total);
}
