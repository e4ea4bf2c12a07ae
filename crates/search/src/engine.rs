//! Search orchestrator
//!
//! This module provides:
//! - SearchEngine, which runs the whole query pipeline over an injected index
//! - Suggestion lookup with the configured limit
//!
//! # Pipeline
//!
//! ```text
//! raw query
//!      │
//!      ▼
//! ┌──────────────────────────────────────────┐
//! │               SearchEngine               │
//! │  length check ─► tokenize_unique         │
//! │                        │                 │
//! │        ┌───────────────┴──────────┐      │
//! │        │  Scorer (every item)     │      │
//! │        └───────────────┬──────────┘      │
//! │      drop score 0, stable sort desc      │
//! │      excerpt + highlight spans           │
//! │                        │                 │
//! │                   ┌────┴────┐            │
//! │                   │ Grouper │            │
//! │                   └────┬────┘            │
//! └────────────────────────┼─────────────────┘
//!                          ▼
//!                   SearchResponse
//! ```
//!
//! SearchEngine is STATELESS between queries. It holds only the shared
//! index, the scorer and the config; every search is a pure function of the
//! query.

use crate::config::SearchConfig;
use crate::excerpt::build_excerpt;
use crate::grouper::group;
use crate::highlight::find_spans;
use crate::index::ContentIndex;
use crate::scorer::{FieldWeightScorer, Scorer};
use crate::suggest::suggest_with_min_len;
use crate::tokenizer::{is_searchable, tokenize_unique};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;
use woundsearch_core::{Result, SearchResponse, SearchResult, SearchStats};

// ============================================================================
// SearchEngine
// ============================================================================

/// Query pipeline over a shared, read-only content index
#[derive(Clone)]
pub struct SearchEngine {
    index: Arc<ContentIndex>,
    scorer: Arc<dyn Scorer>,
    config: SearchConfig,
}

impl SearchEngine {
    /// Create an engine with the default config and scorer
    pub fn new(index: Arc<ContentIndex>) -> Self {
        let config = SearchConfig::default();
        SearchEngine {
            index,
            scorer: Arc::new(FieldWeightScorer::new(config.weights)),
            config,
        }
    }

    /// Builder: set a validated config
    ///
    /// Also resets the scorer to a [`FieldWeightScorer`] using the config's
    /// weights.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](woundsearch_core::Error::Config) if the config fails
    /// [`SearchConfig::validate`]; the engine is dropped.
    pub fn try_with_config(self, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(self.with_config(config))
    }

    /// Builder: set config without validating it
    ///
    /// Also resets the scorer to a [`FieldWeightScorer`] using the config's
    /// weights. Use [`SearchEngine::try_with_config`] for untrusted configs.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.scorer = Arc::new(FieldWeightScorer::new(config.weights));
        self.config = config;
        self
    }

    /// Builder: set custom scorer
    pub fn with_scorer(mut self, scorer: Arc<dyn Scorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// The shared index
    pub fn index(&self) -> &Arc<ContentIndex> {
        &self.index
    }

    /// The active config
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Run a query
    ///
    /// Queries shorter than `min_query_len` characters after trimming, or
    /// that normalize to no terms, return an empty response without scoring.
    pub fn search(&self, query: &str) -> SearchResponse {
        let start = Instant::now();
        let trimmed = query.trim();

        if !is_searchable(trimmed, self.config.min_query_len) {
            debug!(target: "woundsearch::search", query = trimmed, "Query too short, skipped");
            return SearchResponse::empty(trimmed);
        }

        let terms = tokenize_unique(trimmed);
        if terms.is_empty() {
            debug!(target: "woundsearch::search", query = trimmed, "Query has no terms, skipped");
            return SearchResponse::empty(trimmed);
        }

        let ranked = self.rank(&terms);
        let groups = group(ranked);
        let total = groups.len();
        let stats = SearchStats::new(start.elapsed().as_micros() as u64, self.index.len());

        debug!(
            target: "woundsearch::search",
            query = trimmed,
            terms = terms.len(),
            candidates = stats.candidates_considered,
            results = total,
            scorer = self.scorer.name(),
            duration_us = stats.elapsed_micros,
            "Search completed"
        );

        SearchResponse {
            query: trimmed.to_string(),
            terms,
            groups,
            total,
            stats,
        }
    }

    /// Score every item against `terms` and return matches best-first
    ///
    /// Items scoring 0 are dropped. The sort is stable, so equal scores keep
    /// corpus order.
    pub fn rank(&self, terms: &[String]) -> Vec<SearchResult> {
        let window = self.config.excerpt_window();

        let mut results: Vec<SearchResult> = self
            .index
            .items()
            .iter()
            .filter_map(|indexed| {
                let scored = self.scorer.score(indexed, terms);
                if !scored.is_match() {
                    return None;
                }
                let excerpt = build_excerpt(indexed, terms, window);
                let title_spans = find_spans(&indexed.item().title, &scored.matched_terms);
                let excerpt_spans = find_spans(&excerpt, &scored.matched_terms);
                Some(
                    SearchResult::new(
                        indexed.item().clone(),
                        scored.score,
                        scored.matched_terms,
                        excerpt,
                    )
                    .with_spans(title_spans, excerpt_spans),
                )
            })
            .collect();

        results.sort_by(|a, b| b.score.cmp(&a.score));
        results
    }

    // ========================================================================
    // Suggestions
    // ========================================================================

    /// Autocomplete candidates using the configured limit
    pub fn suggest(&self, partial: &str) -> Vec<String> {
        self.suggest_with_limit(partial, self.config.suggestion_limit)
    }

    /// Autocomplete candidates with an explicit limit
    pub fn suggest_with_limit(&self, partial: &str, limit: usize) -> Vec<String> {
        suggest_with_min_len(&self.index, partial, limit, self.config.min_query_len)
    }
}

// ============================================================================
// Tests
// ============================================================================
