//! Fixed site data: categories, content items and their identifiers

use crate::error::{CatalogError, ViewError};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

/// Reserved category id meaning "no filtering applied"
pub const ALL_CATEGORY: &str = "all";

/// Identifier of a content category (for example `design`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Wrap a raw category id
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a content item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the category catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable id referenced by content items
    pub id: CategoryId,
    /// Label shown on the filter tab
    pub label: String,
}

impl Category {
    /// Create a catalog entry
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(id),
            label: label.into(),
        }
    }
}

/// Ordered, immutable list of content categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCatalog {
    all_label: String,
    entries: Vec<Category>,
}

impl CategoryCatalog {
    /// Build a catalog, rejecting duplicate ids and the reserved `all` id
    ///
    /// # Errors
    ///
    /// Returns an error if an id repeats or collides with [`ALL_CATEGORY`].
    pub fn new(all_label: impl Into<String>, entries: Vec<Category>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.id.as_str() == ALL_CATEGORY {
                return Err(CatalogError::ReservedCategory(entry.id.to_string()));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateCategory(entry.id.to_string()));
            }
        }

        Ok(Self {
            all_label: all_label.into(),
            entries,
        })
    }

    /// Label of the sentinel "all" tab
    #[must_use]
    pub fn all_label(&self) -> &str {
        &self.all_label
    }

    /// Catalog entries in display order
    #[must_use]
    pub fn entries(&self) -> &[Category] {
        &self.entries
    }

    /// Look up a category by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Category> {
        self.entries.iter().find(|c| c.id.as_str() == id)
    }

    /// Whether `id` names a catalog entry (the sentinel does not count)
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of concrete categories
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no concrete categories
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Filter tabs in display order, sentinel first
    #[must_use]
    pub fn tabs(&self, active: &ActiveCategory) -> Vec<FilterTab<'_>> {
        let mut tabs = Vec::with_capacity(self.entries.len() + 1);
        tabs.push(FilterTab {
            id: ALL_CATEGORY,
            label: &self.all_label,
            is_active: *active == ActiveCategory::All,
        });
        tabs.extend(self.entries.iter().map(|entry| FilterTab {
            id: entry.id.as_str(),
            label: &entry.label,
            is_active: active.as_str() == entry.id.as_str(),
        }));
        tabs
    }
}

/// A filter tab as the presentation layer renders it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterTab<'a> {
    /// Id to pass back through the filter intent
    pub id: &'a str,
    /// Tab label
    pub label: &'a str,
    /// Whether this tab is the active filter
    pub is_active: bool,
}

/// The active filter: either the sentinel or a concrete catalog entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ActiveCategory {
    /// No restriction
    #[default]
    All,
    /// Restrict to items of this category
    Category(CategoryId),
}

impl ActiveCategory {
    /// Resolve a raw id against the catalog
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::UnknownCategory`] if `raw` is neither the sentinel
    /// nor a catalog id.
    pub fn parse(raw: &str, catalog: &CategoryCatalog) -> Result<Self, ViewError> {
        if raw == ALL_CATEGORY {
            return Ok(Self::All);
        }
        catalog
            .get(raw)
            .map(|entry| Self::Category(entry.id.clone()))
            .ok_or_else(|| ViewError::UnknownCategory(raw.to_string()))
    }

    /// Raw id, `all` for the sentinel
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORY,
            Self::Category(id) => id.as_str(),
        }
    }

    /// Whether `item` passes this filter
    #[must_use]
    pub fn admits(&self, item: &ContentItem) -> bool {
        match self {
            Self::All => true,
            Self::Category(id) => item.category_id == *id,
        }
    }
}

impl Serialize for ActiveCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for ActiveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a content item previews
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Still image preview
    StaticPreview,
    /// Video/animation preview with a play affordance
    MotionPreview,
}

/// A single portfolio entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Unique id
    pub id: ItemId,
    /// Display title
    pub title: String,
    /// Category this item belongs to
    pub category_id: CategoryId,
    /// Preview kind
    pub kind: ContentKind,
    /// Opaque styling token handed back to the presentation layer
    pub visual_variant: String,
}

impl ContentItem {
    /// Create a content item
    #[must_use]
    pub fn new(
        id: u32,
        title: impl Into<String>,
        category_id: impl Into<String>,
        kind: ContentKind,
        visual_variant: impl Into<String>,
    ) -> Self {
        Self {
            id: ItemId(id),
            title: title.into(),
            category_id: CategoryId::new(category_id),
            kind,
            visual_variant: visual_variant.into(),
        }
    }

    /// Check item ids are unique and every item references a known category
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in catalog order.
    pub fn validate_catalog(
        items: &[Self],
        categories: &CategoryCatalog,
    ) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for item in items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateItem(item.id.0));
            }
            if !categories.contains(item.category_id.as_str()) {
                return Err(CatalogError::DanglingCategory {
                    item: item.id.0,
                    category: item.category_id.to_string(),
                });
            }
        }
        Ok(())
    }
}
