//! Scoring infrastructure
//!
//! This module provides:
//! - Scorer trait for pluggable scoring algorithms
//! - ScoreWeights, the per-field contributions of the default scorer
//! - ItemScore, the score and matched terms for one item
//! - FieldWeightScorer default implementation
//!
//! Scores are plain integers. Only their ordering matters; the default
//! weights are tuning values, not an invariant.

use crate::index::IndexedItem;
use serde::{Deserialize, Serialize};
use woundsearch_core::{Error, Result};

// ============================================================================
// ScoreWeights
// ============================================================================

/// Per-field score contributions
///
/// # Default Values
///
/// | Field | Weight |
/// |-------|--------|
/// | title_exact | 100 |
/// | title_partial | 50 |
/// | keyword_exact | 30 |
/// | keyword_partial | 20 |
/// | description | 15 |
/// | content | 5 |
/// | multi_term_bonus | 10 per matched term |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Term equals the normalized title
    pub title_exact: u32,
    /// Term is a substring of the title
    pub title_partial: u32,
    /// Term equals a normalized keyword
    pub keyword_exact: u32,
    /// Term is a substring of a keyword
    pub keyword_partial: u32,
    /// Term is a substring of the description
    pub description: u32,
    /// Term is a substring of the full content
    pub content: u32,
    /// Multiplied by the matched-term count when more than one term matched
    pub multi_term_bonus: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            title_exact: 100,
            title_partial: 50,
            keyword_exact: 30,
            keyword_partial: 20,
            description: 15,
            content: 5,
            multi_term_bonus: 10,
        }
    }
}

impl ScoreWeights {
    /// Check that field weights keep their ranking order
    ///
    /// Requires `title_exact > title_partial > keyword_exact >
    /// keyword_partial > description > content > 0`. The multi-term bonus
    /// may be any value, including 0.
    pub fn validate(&self) -> Result<()> {
        let chain = [
            ("title_exact", self.title_exact),
            ("title_partial", self.title_partial),
            ("keyword_exact", self.keyword_exact),
            ("keyword_partial", self.keyword_partial),
            ("description", self.description),
            ("content", self.content),
        ];
        for pair in chain.windows(2) {
            let (hi_name, hi) = pair[0];
            let (lo_name, lo) = pair[1];
            if hi <= lo {
                return Err(Error::config(format!(
                    "weight {} ({}) must be greater than {} ({})",
                    hi_name, hi, lo_name, lo
                )));
            }
        }
        if self.content == 0 {
            return Err(Error::config("weight content must be greater than 0"));
        }
        Ok(())
    }
}

// ============================================================================
// ItemScore
// ============================================================================

/// Score of one item for one query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemScore {
    /// Accumulated score (0 = no match)
    pub score: u32,
    /// Distinct terms that contributed, in the order they first matched
    pub matched_terms: Vec<String>,
}

impl ItemScore {
    /// Check if the item matched at all
    pub fn is_match(&self) -> bool {
        self.score > 0
    }

    fn credit(&mut self, term: &str, points: u32) {
        self.score = self.score.saturating_add(points);
        if !self.matched_terms.iter().any(|t| t == term) {
            self.matched_terms.push(term.to_string());
        }
    }
}

// ============================================================================
// Scorer Trait
// ============================================================================

/// Pluggable scoring interface
///
/// Scorers take an indexed item and the query terms and return a relevance
/// score. Higher scores indicate more relevant items.
///
/// # Thread Safety
///
/// Scorers must be Send + Sync so an engine can be shared across threads.
pub trait Scorer: Send + Sync {
    /// Score an item against normalized query terms
    ///
    /// Must be a pure function of its inputs.
    fn score(&self, item: &IndexedItem, terms: &[String]) -> ItemScore;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// FieldWeightScorer
// ============================================================================

/// Field-weighted substring scorer
///
/// For each term, contributions accumulate across fields:
///
/// ```text
/// title:       exact  -> title_exact      else substring -> title_partial
/// keywords:    exact  -> keyword_exact    else substring -> keyword_partial
/// description: substring -> description
/// content:     substring -> content
/// ```
///
/// After all terms, if `n > 1` distinct terms matched, `multi_term_bonus * n`
/// is added.
#[derive(Debug, Clone, Default)]
pub struct FieldWeightScorer {
    weights: ScoreWeights,
}

impl FieldWeightScorer {
    /// Create a scorer with custom weights
    pub fn new(weights: ScoreWeights) -> Self {
        FieldWeightScorer { weights }
    }

    /// Weights in use
    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }
}

impl Scorer for FieldWeightScorer {
    fn score(&self, item: &IndexedItem, terms: &[String]) -> ItemScore {
        let w = &self.weights;
        let mut result = ItemScore::default();

        for term in terms.iter().filter(|t| !t.is_empty()) {
            let term = term.as_str();

            if item.title_normalized() == term {
                result.credit(term, w.title_exact);
            } else if item.title_folded().contains(term) {
                result.credit(term, w.title_partial);
            }

            if item.keywords_normalized().iter().any(|k| k == term) {
                result.credit(term, w.keyword_exact);
            } else if item.keywords_folded().iter().any(|k| k.contains(term)) {
                result.credit(term, w.keyword_partial);
            }

            if item.description_folded().contains(term) {
                result.credit(term, w.description);
            }

            if item.content_folded().map_or(false, |c| c.contains(term)) {
                result.credit(term, w.content);
            }
        }

        let matched = result.matched_terms.len();
        if matched > 1 {
            let bonus = w.multi_term_bonus.saturating_mul(matched as u32);
            result.score = result.score.saturating_add(bonus);
        }

        result
    }

    fn name(&self) -> &str {
        "field-weight"
    }
}

// ============================================================================
// Tests
// ============================================================================
