//! Error types for view-state operations

use std::convert::Infallible;
use thiserror::Error;

/// Rejection reasons for dispatched intents.
///
/// Both kinds are local validation failures. A rejected intent leaves the
/// store exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// Navigation referenced a section missing from the registry
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    /// Filter referenced an id that is neither `all` nor a catalog entry
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

impl From<Infallible> for ViewError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Problems found while assembling the fixed site data at startup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two categories share the same id
    #[error("Duplicate category id: {0}")]
    DuplicateCategory(String),

    /// A category tried to use the reserved `all` id
    #[error("Category id is reserved: {0}")]
    ReservedCategory(String),

    /// Two content items share the same id
    #[error("Duplicate content item id: {0}")]
    DuplicateItem(u32),

    /// A content item points at a category the catalog does not contain
    #[error("Content item {item} references unknown category {category}")]
    DanglingCategory {
        /// Offending item id
        item: u32,
        /// Category id it referenced
        category: String,
    },

    /// Two sections share the same id
    #[error("Duplicate section id: {0}")]
    DuplicateSection(String),

    /// The section registry has no entries
    #[error("Section registry is empty")]
    EmptyRegistry,
}
