//! Search configuration via `woundsearch.toml`
//!
//! Every field has a default, so an empty file (or no file) gives the stock
//! behaviour. Scoring weights may be recalibrated as long as they keep their
//! ranking order.

use crate::excerpt::ExcerptWindow;
use crate::scorer::ScoreWeights;
use serde::{Deserialize, Serialize};
use std::path::Path;
use woundsearch_core::{
    Error, Result, DEFAULT_EXCERPT_AFTER, DEFAULT_EXCERPT_BEFORE, DEFAULT_SUGGESTION_LIMIT,
    MAX_RECENT_SEARCHES, MIN_QUERY_LEN,
};

/// Config file name placed in the data directory.
pub const CONFIG_FILE_NAME: &str = "woundsearch.toml";

/// Search configuration loaded from `woundsearch.toml`.
///
/// # Example
///
/// ```toml
/// min_query_len = 2
/// suggestion_limit = 5
///
/// [weights]
/// title_exact = 120
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Minimum trimmed query length (chars) before searching or suggesting.
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    /// Number of suggestions returned by default.
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
    /// Characters of content kept before the first match in an excerpt.
    #[serde(default = "default_excerpt_before")]
    pub excerpt_before: usize,
    /// Characters of content kept after the first match in an excerpt.
    #[serde(default = "default_excerpt_after")]
    pub excerpt_after: usize,
    /// Maximum number of recent searches remembered.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    /// Per-field scoring weights.
    #[serde(default)]
    pub weights: ScoreWeights,
}

fn default_min_query_len() -> usize {
    MIN_QUERY_LEN
}

fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

fn default_excerpt_before() -> usize {
    DEFAULT_EXCERPT_BEFORE
}

fn default_excerpt_after() -> usize {
    DEFAULT_EXCERPT_AFTER
}

fn default_history_capacity() -> usize {
    MAX_RECENT_SEARCHES
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: default_min_query_len(),
            suggestion_limit: default_suggestion_limit(),
            excerpt_before: default_excerpt_before(),
            excerpt_after: default_excerpt_after(),
            history_capacity: default_history_capacity(),
            weights: ScoreWeights::default(),
        }
    }
}

impl SearchConfig {
    /// Excerpt window described by this config
    pub fn excerpt_window(&self) -> ExcerptWindow {
        ExcerptWindow::new(self.excerpt_before, self.excerpt_after)
    }

    /// Check the config for values the engine cannot honour
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a count is zero or the weights are out of
    /// ranking order.
    pub fn validate(&self) -> Result<()> {
        if self.min_query_len == 0 {
            return Err(Error::config("min_query_len must be at least 1"));
        }
        if self.suggestion_limit == 0 {
            return Err(Error::config("suggestion_limit must be at least 1"));
        }
        if self.history_capacity == 0 {
            return Err(Error::config("history_capacity must be at least 1"));
        }
        self.weights.validate()
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# woundsearch configuration
#
# Queries (and autocomplete input) shorter than this many characters,
# after trimming, return nothing.
min_query_len = 2

# Number of autocomplete suggestions.
suggestion_limit = 5

# Excerpt window around the first content match, in characters.
excerpt_before = 50
excerpt_after = 100

# Number of recent searches remembered.
history_capacity = 10

# Scoring weights. Any values are accepted as long as
# title_exact > title_partial > keyword_exact > keyword_partial
#   > description > content > 0
[weights]
title_exact = 100
title_partial = 50
keyword_exact = 30
keyword_partial = 20
description = 15
content = 5
multi_term_bonus = 10
"#
    }

    /// Read, parse and validate config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: SearchConfig = toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
