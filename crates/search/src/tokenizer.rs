//! Query normalization
//!
//! This module turns raw query text into the canonical form every other
//! component compares against:
//! - Lowercase (char-wise, no locale rules)
//! - Every character that is neither alphanumeric nor whitespace becomes a space
//! - Whitespace runs collapse to a single space, ends trimmed
//!
//! It also provides [`FoldedText`], a lowercased copy of a string that keeps
//! a map back to byte offsets in the original, so matches found in lowercase
//! can be reported against the text the user actually sees.

use std::collections::HashSet;

/// Lowercase text char by char
///
/// Unlike `str::to_lowercase` this applies no context-sensitive rules, so the
/// result lines up with [`FoldedText`].
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Normalize a query or field into canonical form
///
/// # Example
///
/// ```
/// use woundsearch_search::tokenizer::normalize;
///
/// assert_eq!(normalize("Wound-Care!!  Tips"), "wound care tips");
/// assert_eq!(normalize("   "), "");
/// ```
pub fn normalize(text: &str) -> String {
    let spaced: String = text
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize and split into terms
///
/// # Example
///
/// ```
/// use woundsearch_search::tokenizer::tokenize;
///
/// let tokens = tokenize("Skin tears: first aid");
/// assert_eq!(tokens, vec!["skin", "tears", "first", "aid"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Tokenize and deduplicate for query processing
///
/// # Example
///
/// ```
/// use woundsearch_search::tokenizer::tokenize_unique;
///
/// let tokens = tokenize_unique("burn Burn BURN care");
/// assert_eq!(tokens, vec!["burn", "care"]);
/// ```
pub fn tokenize_unique(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    tokenize(text)
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

/// Check whether input is long enough to search on
///
/// Counts characters of the trimmed input, not bytes.
pub fn is_searchable(text: &str, min_len: usize) -> bool {
    text.trim().chars().count() >= min_len
}

// ============================================================================
// FoldedText
// ============================================================================

/// Lowercased text with a byte-offset map back to the original
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldedText {
    folded: String,
    /// `origin[i]` is the original byte offset of the char that produced
    /// folded byte `i`; one trailing entry holds the original length.
    origin: Vec<usize>,
}

impl FoldedText {
    /// Fold `text`, recording where each folded byte came from
    pub fn new(text: &str) -> Self {
        let mut folded = String::with_capacity(text.len());
        let mut origin = Vec::with_capacity(text.len() + 1);
        for (pos, ch) in text.char_indices() {
            for lower in ch.to_lowercase() {
                folded.push(lower);
                origin.resize(folded.len(), pos);
            }
        }
        origin.push(text.len());
        FoldedText { folded, origin }
    }

    /// The lowercased text
    pub fn as_str(&self) -> &str {
        &self.folded
    }

    /// Check if the folded text contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.folded.contains(needle)
    }

    /// Original byte offset of the first occurrence of `needle`
    pub fn find(&self, needle: &str) -> Option<usize> {
        self.folded.find(needle).map(|pos| self.origin[pos])
    }

    /// Original byte ranges of every non-overlapping occurrence of `needle`
    ///
    /// Ranges that would collapse to nothing in the original (a match that
    /// ends inside the lowercase expansion of a single char) are skipped.
    pub fn match_ranges(&self, needle: &str) -> Vec<(usize, usize)> {
        if needle.is_empty() {
            return vec![];
        }
        self.folded
            .match_indices(needle)
            .map(|(pos, m)| (self.origin[pos], self.origin[pos + m.len()]))
            .filter(|(start, end)| start < end)
            .collect()
    }
}
