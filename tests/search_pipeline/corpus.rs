//! Custom corpora and configs loaded from disk.

use crate::common::{engine_with, ids, item};
use std::sync::Arc;
use woundsearch::{
    Category, ContentIndex, Error, ScoreWeights, SearchConfig, SearchEngine, CONFIG_FILE_NAME,
};

fn write_corpus(dir: &std::path::Path, items: &[woundsearch::SearchableItem]) -> std::path::PathBuf {
    let path = dir.join("corpus.json");
    std::fs::write(&path, serde_json::to_string_pretty(items).unwrap()).unwrap();
    path
}

#[test]
fn test_corpus_file_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let items = vec![
        item("hydrogel", "Hydrogel Dressings", Category::Treatment)
            .with_keywords(["hydrogel", "moist healing"])
            .with_content("Hydrogels donate moisture to dry wound beds."),
        item("maceration", "Maceration", Category::Glossary),
    ];
    let path = write_corpus(tmp.path(), &items);

    let index = ContentIndex::from_json_file(&path).unwrap();
    assert_eq!(index.len(), 2);
    assert_eq!(index.get("hydrogel"), Some(&items[0]));

    let engine = SearchEngine::new(Arc::new(index));
    let response = engine.search("hydrogel");
    assert_eq!(ids(&response), vec!["hydrogel"]);
    // title partial, keyword exact, description, content
    assert_eq!(response.groups.treatments[0].score, 50 + 30 + 15 + 5);
}

#[test]
fn test_corpus_without_optional_fields() {
    let json = r#"[
        {"id": "a", "title": "Alpha", "description": "First", "category": "resource", "url": "/a"}
    ]"#;
    let index = ContentIndex::from_json_str(json).unwrap();
    let only = index.get("a").unwrap();
    assert!(only.keywords.is_empty());
    assert!(only.content.is_none());
}

#[test]
fn test_corpus_rejects_duplicates_and_unknown_categories() {
    let tmp = tempfile::tempdir().unwrap();
    let dup = write_corpus(
        tmp.path(),
        &[
            item("x", "One", Category::Wound),
            item("x", "Two", Category::Glossary),
        ],
    );
    assert!(matches!(
        ContentIndex::from_json_file(&dup),
        Err(Error::DuplicateItem { ref id }) if id == "x"
    ));

    let bad = r#"[{"id":"a","title":"A","description":"d","category":"blog","url":"/a"}]"#;
    assert!(matches!(
        ContentIndex::from_json_str(bad),
        Err(Error::Serialization(_))
    ));
}

#[test]
fn test_config_file_drives_engine() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join(CONFIG_FILE_NAME);
    std::fs::write(
        &path,
        "min_query_len = 3\nsuggestion_limit = 2\nexcerpt_before = 0\n\n[weights]\ntitle_exact = 1000\n",
    )
    .unwrap();

    let config = SearchConfig::from_file(&path).unwrap();
    let engine = engine_with(config);

    assert!(engine.search("leg").total > 0);
    assert!(engine.search("le").is_empty());
    assert_eq!(engine.suggest("ulcer").len(), 2);

    let burns = &engine.search("burns").groups.wounds[0];
    assert_eq!(burns.item.id, "burns");
    assert!(burns.score >= 1000);

    // match sits mid-content, so a zero-width lead still gets the ellipsis
    let hit = &engine.search("wheelchair").groups.wounds[0];
    assert!(hit.excerpt.starts_with("...wheelchair"));
}

#[test]
fn test_invalid_weights_rejected() {
    let weights = ScoreWeights {
        keyword_partial: 60,
        ..ScoreWeights::default()
    };
    let err = weights.validate().unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains("keyword_exact"));
}
