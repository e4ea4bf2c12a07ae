//! In-memory content index
//!
//! The index is the read-only corpus every search scans. It is built once,
//! validated (unique, non-empty ids), and shared behind an `Arc`.
//!
//! There is no inverted index: a corpus of a few dozen items is scanned
//! linearly per query. What the index does precompute is the case-folded and
//! normalized form of every field, so a query never re-folds the corpus.

use crate::tokenizer::{fold_case, normalize, FoldedText};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;
use woundsearch_core::{Error, Result, SearchableItem};

/// Bundled wound-care corpus, embedded at compile time
const BUILTIN_CORPUS: &str = include_str!("../data/corpus.json");

// ============================================================================
// IndexedItem
// ============================================================================

/// A corpus item with its comparison forms precomputed
#[derive(Debug, Clone)]
pub struct IndexedItem {
    item: SearchableItem,
    title_normalized: String,
    title_folded: String,
    keywords_normalized: Vec<String>,
    keywords_folded: Vec<String>,
    description_folded: String,
    content_folded: Option<FoldedText>,
}

impl IndexedItem {
    /// Precompute comparison forms for an item
    pub fn new(item: SearchableItem) -> Self {
        IndexedItem {
            title_normalized: normalize(&item.title),
            title_folded: fold_case(&item.title),
            keywords_normalized: item.keywords.iter().map(|k| normalize(k)).collect(),
            keywords_folded: item.keywords.iter().map(|k| fold_case(k)).collect(),
            description_folded: fold_case(&item.description),
            content_folded: item.content.as_deref().map(FoldedText::new),
            item,
        }
    }

    /// The original item
    pub fn item(&self) -> &SearchableItem {
        &self.item
    }

    /// Title in normalized form (for exact comparison)
    pub fn title_normalized(&self) -> &str {
        &self.title_normalized
    }

    /// Lowercased title (for substring comparison)
    pub fn title_folded(&self) -> &str {
        &self.title_folded
    }

    /// Keywords in normalized form, same order as the item's keywords
    pub fn keywords_normalized(&self) -> &[String] {
        &self.keywords_normalized
    }

    /// Lowercased keywords, same order as the item's keywords
    pub fn keywords_folded(&self) -> &[String] {
        &self.keywords_folded
    }

    /// Lowercased description
    pub fn description_folded(&self) -> &str {
        &self.description_folded
    }

    /// Lowercased content with offsets into the original, if the item has content
    pub fn content_folded(&self) -> Option<&FoldedText> {
        self.content_folded.as_ref()
    }
}

// ============================================================================
// ContentIndex
// ============================================================================

/// Immutable in-memory corpus
///
/// # Thread Safety
///
/// Read-only after construction; share it with `Arc<ContentIndex>`.
///
/// # Ordering
///
/// Items keep the order they were supplied in. That order is the tie-break
/// for equal scores and the discovery order for suggestions.
#[derive(Debug, Clone, Default)]
pub struct ContentIndex {
    items: Vec<IndexedItem>,
    by_id: HashMap<String, usize>,
}

impl ContentIndex {
    /// Build an index from corpus items
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for an item with an empty id and
    /// [`Error::DuplicateItem`] when two items share an id.
    pub fn new(items: Vec<SearchableItem>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            if item.id.trim().is_empty() {
                return Err(Error::invalid_input(format!(
                    "corpus item at position {} has an empty id",
                    pos
                )));
            }
            if by_id.insert(item.id.clone(), pos).is_some() {
                return Err(Error::DuplicateItem {
                    id: item.id.clone(),
                });
            }
        }

        let items: Vec<IndexedItem> = items.into_iter().map(IndexedItem::new).collect();
        info!(target: "woundsearch::index", items = items.len(), "Content index built");
        Ok(ContentIndex { items, by_id })
    }

    /// Build an index from a JSON array of items
    pub fn from_json_str(json: &str) -> Result<Self> {
        let items: Vec<SearchableItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Build an index from a JSON file holding an array of items
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read corpus file '{}': {}", path.display(), e),
            ))
        })?;
        Self::from_json_str(&json)
    }

    /// The bundled wound-care corpus
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CORPUS)
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the corpus is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Indexed items in corpus order
    pub fn items(&self) -> &[IndexedItem] {
        &self.items
    }

    /// Original items in corpus order
    pub fn iter(&self) -> impl Iterator<Item = &SearchableItem> + '_ {
        self.items.iter().map(IndexedItem::item)
    }

    /// Look up an item by id
    pub fn get(&self, id: &str) -> Option<&SearchableItem> {
        self.by_id.get(id).map(|&pos| self.items[pos].item())
    }
}
