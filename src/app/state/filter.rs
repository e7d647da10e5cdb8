//! Portfolio category filter

use crate::catalog::{ActiveCategory, CategoryCatalog, ContentItem, FilterTab};
use crate::error::ViewError;
use serde::Serialize;

/// The active category; starts at the `all` sentinel
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct FilterState {
    /// Either the sentinel or an id present in the catalog
    pub active_category: ActiveCategory,
}

/// Owns the category catalog and the filter state validated against it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    catalog: CategoryCatalog,
    state: FilterState,
}

impl CategoryFilter {
    /// Create a filter with the sentinel active
    #[must_use]
    pub fn new(catalog: CategoryCatalog) -> Self {
        Self {
            catalog,
            state: FilterState::default(),
        }
    }

    /// The catalog this filter validates against
    #[must_use]
    pub const fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    /// Current filter state
    #[must_use]
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    /// Resolve `raw` without touching the state
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::UnknownCategory`] for ids outside the catalog.
    pub fn resolve(&self, raw: &str) -> Result<ActiveCategory, ViewError> {
        ActiveCategory::parse(raw, &self.catalog)
    }

    /// Switch the active category
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::UnknownCategory`] and leaves the state unchanged
    /// if `raw` is neither `all` nor a catalog id.
    pub fn set_active_category(&mut self, raw: &str) -> Result<(), ViewError> {
        self.state.active_category = self.resolve(raw)?;
        Ok(())
    }

    /// Items passing the active filter, in catalog order
    #[must_use]
    pub fn visible_items<'a>(&self, items: &'a [ContentItem]) -> Vec<&'a ContentItem> {
        items
            .iter()
            .filter(|item| self.state.active_category.admits(item))
            .collect()
    }

    /// Tabs for the filter bar
    #[must_use]
    pub fn tabs(&self) -> Vec<FilterTab<'_>> {
        self.catalog.tabs(&self.state.active_category)
    }
}
