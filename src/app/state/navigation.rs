//! Section registry and in-page navigation

use super::MenuState;
use crate::app::viewport::Viewport;
use crate::error::{CatalogError, ViewError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Logical name of a page section (for example `contact`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    /// Wrap a raw section id
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

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A navigable anchor point within the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Logical id used by intents
    pub id: SectionId,
    /// Navigation link label
    pub label: String,
    /// Element id scrolled into view; empty means "same as `id`"
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub anchor: String,
}

impl Section {
    /// Section whose anchor equals its id
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: SectionId::new(id),
            label: label.into(),
            anchor: String::new(),
        }
    }

    /// Element id handed to the viewport
    #[must_use]
    pub fn anchor(&self) -> &str {
        if self.anchor.is_empty() {
            self.id.as_str()
        } else {
            &self.anchor
        }
    }
}

/// Ordered, read-only mapping from section id to target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    /// Build the registry; order is navigation link order
    ///
    /// # Errors
    ///
    /// Returns an error if `sections` is empty or an id repeats.
    pub fn new(sections: Vec<Section>) -> Result<Self, CatalogError> {
        if sections.is_empty() {
            return Err(CatalogError::EmptyRegistry);
        }
        let mut seen = HashSet::new();
        for section in &sections {
            if !seen.insert(section.id.as_str()) {
                return Err(CatalogError::DuplicateSection(section.id.to_string()));
            }
        }
        Ok(Self { sections })
    }

    /// Look up a section
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id.as_str() == id)
    }

    /// All sections in link order
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The first section; the logo links here
    #[must_use]
    pub fn home(&self) -> &Section {
        // Construction rejects an empty registry
        &self.sections[0]
    }
}

/// Resolves section ids and drives the viewport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionNavigator {
    registry: SectionRegistry,
    active: Option<SectionId>,
}

impl SectionNavigator {
    /// Create a navigator with no section visited yet
    #[must_use]
    pub const fn new(registry: SectionRegistry) -> Self {
        Self {
            registry,
            active: None,
        }
    }

    /// The registry this navigator resolves against
    #[must_use]
    pub const fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// Last section successfully navigated to
    #[must_use]
    pub const fn active(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    /// Look up `id` without side effects
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::SectionNotFound`] if `id` is not registered.
    pub fn resolve(&self, id: &str) -> Result<&Section, ViewError> {
        self.registry
            .get(id)
            .ok_or_else(|| ViewError::SectionNotFound(id.to_string()))
    }

    /// Scroll to `id` and collapse the compact menu
    ///
    /// On failure nothing is touched: the viewport is not called and `menu`
    /// keeps its state.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::SectionNotFound`] if `id` is not registered.
    pub fn navigate_to(
        &mut self,
        id: &str,
        menu: &mut MenuState,
        viewport: &mut dyn Viewport,
    ) -> Result<(), ViewError> {
        let section = self.resolve(id)?;
        viewport.scroll_into_view(section.anchor());
        let target = section.id.clone();

        menu.close();
        self.active = Some(target);
        Ok(())
    }
}
