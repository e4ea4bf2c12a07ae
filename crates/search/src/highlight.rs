//! Match spans for highlighting
//!
//! Highlighting is returned as byte ranges, never as markup. The renderer is
//! expected to escape the text and wrap the ranges itself, so corpus text or
//! query text containing markup cannot leak into the page.

use crate::tokenizer::FoldedText;
use woundsearch_core::MatchSpan;

/// Find every case-insensitive occurrence of `terms` in `text`
///
/// Returned spans are sorted, lie on char boundaries of `text`, and never
/// overlap: spans that overlap or touch are merged.
///
/// # Example
///
/// ```
/// use woundsearch_search::highlight::find_spans;
///
/// let spans = find_spans("Venous Leg Ulcers", &["leg".to_string()]);
/// assert_eq!(spans.len(), 1);
/// assert_eq!(spans[0].slice("Venous Leg Ulcers"), Some("Leg"));
/// ```
pub fn find_spans(text: &str, terms: &[String]) -> Vec<MatchSpan> {
    if text.is_empty() || terms.is_empty() {
        return vec![];
    }

    let folded = FoldedText::new(text);
    let mut ranges: Vec<(usize, usize)> = terms
        .iter()
        .flat_map(|term| folded.match_ranges(term))
        .collect();
    ranges.sort_unstable();

    let mut spans: Vec<MatchSpan> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match spans.last_mut() {
            Some(last) if start <= last.end => last.end = last.end.max(end),
            _ => spans.push(MatchSpan::new(start, end)),
        }
    }
    spans
}
