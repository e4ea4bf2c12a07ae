//! Corpus types
//!
//! This module defines the foundational types:
//! - Category: The four fixed content categories
//! - SearchableItem: One immutable entry of the content corpus

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Category
// ============================================================================

/// The four fixed content categories
///
/// Every corpus item belongs to exactly one category, and search results are
/// grouped by it for display.
///
/// ## Invariant
///
/// This enum MUST have exactly 4 variants. `GroupedSearchResults` has one
/// group per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Articles about a type of wound
    Wound,
    /// Articles about a treatment or care technique
    Treatment,
    /// Reference material, tools and downloads
    Resource,
    /// Glossary definitions
    Glossary,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 4] = [
        Category::Wound,
        Category::Treatment,
        Category::Resource,
        Category::Glossary,
    ];

    /// Get all categories as a slice
    pub fn all() -> &'static [Category] {
        &Self::ALL
    }

    /// Human-readable group heading
    pub const fn name(&self) -> &'static str {
        match self {
            Category::Wound => "Wounds",
            Category::Treatment => "Treatments",
            Category::Resource => "Resources",
            Category::Glossary => "Glossary",
        }
    }

    /// Short identifier (for serialization, URLs, etc.)
    pub const fn id(&self) -> &'static str {
        match self {
            Category::Wound => "wound",
            Category::Treatment => "treatment",
            Category::Resource => "resource",
            Category::Glossary => "glossary",
        }
    }

    /// Parse from short identifier
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "wound" => Some(Category::Wound),
            "treatment" => Some(Category::Treatment),
            "resource" => Some(Category::Resource),
            "glossary" => Some(Category::Glossary),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

// ============================================================================
// SearchableItem
// ============================================================================

/// One entry of the static content corpus
///
/// Items are defined once, loaded into a content index at startup, and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchableItem {
    /// Unique identifier within the corpus
    pub id: String,

    /// Page title, shown as the result heading
    pub title: String,

    /// Short summary; doubles as the excerpt when content does not match
    pub description: String,

    /// Display group
    pub category: Category,

    /// Link to the page
    pub url: String,

    /// Curated search keywords, in authoring order
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Optional full page text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl SearchableItem {
    /// Create an item with no keywords and no content
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        url: impl Into<String>,
    ) -> Self {
        SearchableItem {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category,
            url: url.into(),
            keywords: vec![],
            content: None,
        }
    }

    /// Builder: set keywords
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set full content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_all_in_display_order() {
        assert_eq!(Category::all().len(), 4);
        assert_eq!(Category::ALL[0], Category::Wound);
        assert_eq!(Category::ALL[3], Category::Glossary);
    }

    #[test]
    fn test_category_id_round_trip() {
        for category in Category::all() {
            assert_eq!(Category::from_id(category.id()), Some(*category));
        }
        assert_eq!(Category::from_id("journal"), None);
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&Category::Treatment).unwrap();
        assert_eq!(json, "\"treatment\"");
        let parsed: Category = serde_json::from_str("\"glossary\"").unwrap();
        assert_eq!(parsed, Category::Glossary);
    }

    #[test]
    fn test_item_builder() {
        let item = SearchableItem::new(
            "burns",
            "Burns",
            "Thermal, chemical and electrical burns",
            Category::Wound,
            "/wounds/burns",
        )
        .with_keywords(["burn", "scald"])
        .with_content("A burn is damage to the skin.");

        assert_eq!(item.id, "burns");
        assert_eq!(item.keywords, vec!["burn", "scald"]);
        assert_eq!(item.content.as_deref(), Some("A burn is damage to the skin."));
    }

    #[test]
    fn test_item_deserialize_without_optional_fields() {
        let json = r#"{
            "id": "slough",
            "title": "Slough",
            "description": "Yellow devitalised tissue",
            "category": "glossary",
            "url": "/glossary#slough"
        }"#;
        let item: SearchableItem = serde_json::from_str(json).unwrap();
        assert!(item.keywords.is_empty());
        assert!(item.content.is_none());
    }
}
