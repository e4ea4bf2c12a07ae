//! Result excerpts
//!
//! An excerpt is a window of an item's content around the first query-term
//! match. When the item has no content, or no term occurs in it, the
//! description is used instead.

use crate::index::IndexedItem;
use woundsearch_core::{DEFAULT_EXCERPT_AFTER, DEFAULT_EXCERPT_BEFORE, ELLIPSIS};

/// Size of the content window around a match, in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExcerptWindow {
    /// Characters kept before the match position
    pub before: usize,
    /// Characters kept after the match position
    pub after: usize,
}

impl Default for ExcerptWindow {
    fn default() -> Self {
        ExcerptWindow {
            before: DEFAULT_EXCERPT_BEFORE,
            after: DEFAULT_EXCERPT_AFTER,
        }
    }
}

impl ExcerptWindow {
    /// Create a window
    pub fn new(before: usize, after: usize) -> Self {
        ExcerptWindow { before, after }
    }
}

/// Build the excerpt for an item
///
/// Terms are tried in query order; the first one found in the content picks
/// the anchor (its first occurrence). The window runs from `before` chars
/// ahead of the anchor to `after` chars past it, clamped to the content, and
/// gets `"..."` on each side that was cut.
pub fn build_excerpt(item: &IndexedItem, terms: &[String], window: ExcerptWindow) -> String {
    let content = match (item.item().content.as_deref(), item.content_folded()) {
        (Some(content), Some(folded)) => terms
            .iter()
            .filter(|t| !t.is_empty())
            .find_map(|t| folded.find(t))
            .map(|anchor| (content, anchor)),
        _ => None,
    };

    match content {
        Some((content, anchor)) => window_around(content, anchor, window),
        None => item.item().description.clone(),
    }
}

/// Cut a char window around byte offset `anchor`
fn window_around(content: &str, anchor: usize, window: ExcerptWindow) -> String {
    let anchor_char = content[..anchor].chars().count();
    let total_chars = content.chars().count();

    let start_char = anchor_char.saturating_sub(window.before);
    let end_char = anchor_char.saturating_add(window.after).min(total_chars);

    let start = byte_offset(content, start_char);
    let end = byte_offset(content, end_char);

    let mut excerpt = String::with_capacity(end - start + 2 * ELLIPSIS.len());
    if start_char > 0 {
        excerpt.push_str(ELLIPSIS);
    }
    excerpt.push_str(&content[start..end]);
    if end_char < total_chars {
        excerpt.push_str(ELLIPSIS);
    }
    excerpt
}

/// Byte offset of the `n`th char, or the string length past the end
fn byte_offset(text: &str, n: usize) -> usize {
    text.char_indices().nth(n).map_or(text.len(), |(pos, _)| pos)
}
