//! Search and history across simulated process restarts.

use crate::common::{builtin_engine, file_history};
use woundsearch::{MemoryBackend, RecentSearches, MAX_RECENT_SEARCHES, RECENT_SEARCHES_KEY};

#[test]
fn test_committed_searches_survive_restart() {
    let tmp = tempfile::tempdir().unwrap();
    let engine = builtin_engine();

    {
        let mut history = file_history(tmp.path());
        for query in ["pressure injuries", "  burns ", "p", "xyznotfound"] {
            let response = engine.search(query);
            history.record(&response.query);
        }
    }

    let history = file_history(tmp.path());
    assert_eq!(
        history.entries(),
        &["xyznotfound", "burns", "pressure injuries"]
    );
}

#[test]
fn test_history_cap_across_restarts() {
    let tmp = tempfile::tempdir().unwrap();
    for i in 0..(MAX_RECENT_SEARCHES + 5) {
        let mut history = file_history(tmp.path());
        history.record(&format!("query number {}", i));
    }

    let history = file_history(tmp.path());
    assert_eq!(history.len(), MAX_RECENT_SEARCHES);
    assert_eq!(history.most_recent(), Some("query number 14"));
    assert_eq!(
        history.entries().last().map(String::as_str),
        Some("query number 5")
    );
}

#[test]
fn test_repeat_search_moves_to_front() {
    let tmp = tempfile::tempdir().unwrap();
    let mut history = file_history(tmp.path());
    for q in ["burns", "slough", "eschar", "burns"] {
        history.record(q);
    }
    drop(history);

    assert_eq!(
        file_history(tmp.path()).entries(),
        &["burns", "eschar", "slough"]
    );
}

#[test]
fn test_clear_then_restart_is_empty() {
    let tmp = tempfile::tempdir().unwrap();
    let mut history = file_history(tmp.path());
    history.record("burns");
    history.clear();
    drop(history);

    assert!(file_history(tmp.path()).is_empty());
}

#[test]
fn test_memory_backend_shares_state_with_handle() {
    let backend = MemoryBackend::with_record(RECENT_SEARCHES_KEY, r#"["old query", 7]"#);
    let mut history = RecentSearches::load(backend.clone());
    assert!(history.is_empty());

    history.record("new query");
    let reloaded = RecentSearches::load(backend);
    assert_eq!(reloaded.entries(), &["new query"]);
}
