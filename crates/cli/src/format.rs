//! Output → human/json/raw string formatting.
//!
//! Three modes:
//! - **Human** (default): grouped results with `[highlighted]` matches
//! - **JSON** (`--json`): `serde_json::to_string_pretty`
//! - **Raw** (`--raw`): one value per line (urls, suggestions, queries)

use woundsearch_core::{Error, MatchSpan, SearchResponse, SearchResult};

use crate::state::Output;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Raw,
}

/// Format a successful output.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(output),
        OutputMode::Raw => format_raw(output),
        OutputMode::Human => format_human(output),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    format_message_error(&err.to_string(), mode)
}

/// Format an error message that did not come from the library.
pub fn format_message_error(msg: &str, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::json!({ "error": msg }).to_string(),
        OutputMode::Raw => msg.to_string(),
        OutputMode::Human => format!("(error) {}", msg),
    }
}

// =========================================================================
// JSON mode
// =========================================================================

fn format_json(output: &Output) -> String {
    let value = match output {
        Output::Search(response) => serde_json::to_value(response),
        Output::Suggestions(items) => Ok(serde_json::json!({ "suggestions": items })),
        Output::History(entries) => Ok(serde_json::json!({ "recent_searches": entries })),
        Output::Cleared => Ok(serde_json::json!({ "cleared": true })),
    };
    value
        .and_then(|v| serde_json::to_string_pretty(&v))
        .unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }).to_string())
}

// =========================================================================
// Raw mode
// =========================================================================

fn format_raw(output: &Output) -> String {
    match output {
        Output::Search(response) => response
            .groups
            .iter()
            .flat_map(|(_, results)| results.iter())
            .map(|r| r.item.url.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
        Output::Suggestions(items) | Output::History(items) => items.join("\n"),
        Output::Cleared => String::new(),
    }
}

// =========================================================================
// Human mode
// =========================================================================

fn format_human(output: &Output) -> String {
    match output {
        Output::Search(response) => format_search_human(response),
        Output::Suggestions(items) if items.is_empty() => "(no suggestions)".to_string(),
        Output::History(items) if items.is_empty() => "(no recent searches)".to_string(),
        Output::Suggestions(items) | Output::History(items) => items
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}) \"{}\"", i + 1, s))
            .collect::<Vec<_>>()
            .join("\n"),
        Output::Cleared => "OK".to_string(),
    }
}

fn format_search_human(response: &SearchResponse) -> String {
    if response.terms.is_empty() {
        return "(query too short)".to_string();
    }
    if response.is_empty() {
        return format!("No results for \"{}\"", response.query);
    }

    let mut lines = vec![format!(
        "{} result{} for \"{}\"",
        response.total,
        if response.total == 1 { "" } else { "s" },
        response.query
    )];
    for (category, results) in response.groups.iter() {
        if results.is_empty() {
            continue;
        }
        lines.push(String::new());
        lines.push(format!("{} ({})", category.name(), results.len()));
        for (i, result) in results.iter().enumerate() {
            lines.extend(format_result_human(i + 1, result));
        }
    }
    lines.join("\n")
}

fn format_result_human(rank: usize, result: &SearchResult) -> [String; 3] {
    [
        format!(
            "  {}. {}  (score {})",
            rank,
            highlight(&result.item.title, &result.title_spans),
            result.score
        ),
        format!("     {}", result.item.url),
        format!("     {}", highlight(&result.excerpt, &result.excerpt_spans)),
    ]
}

/// Wrap each span of `text` in brackets.
///
/// Spans that do not fall on char boundaries are skipped.
pub fn highlight(text: &str, spans: &[MatchSpan]) -> String {
    let mut out = String::with_capacity(text.len() + spans.len() * 2);
    let mut cursor = 0;
    for span in spans {
        if span.start < cursor {
            continue;
        }
        let (Some(before), Some(matched)) = (text.get(cursor..span.start), span.slice(text)) else {
            continue;
        };
        out.push_str(before);
        out.push('[');
        out.push_str(matched);
        out.push(']');
        cursor = span.end;
    }
    out.push_str(text.get(cursor..).unwrap_or_default());
    out
}
