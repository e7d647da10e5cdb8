//! Site configuration: the fixed data the store is built from

use crate::app::{
    DEFAULT_LAYOUT_BREAKPOINT, EventTranslator, RecordingViewport, Section, SectionRegistry,
    StoreOptions, ViewStateStore, Viewport,
};
use crate::app::state::DEFAULT_SCROLL_THRESHOLD;
use crate::catalog::{Category, CategoryCatalog, ContentItem, ContentKind};
use crate::error::CatalogError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Site configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Scroll offset past which the navbar is elevated
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: f64,

    /// Viewport width at which the wide navigation layout takes over
    #[serde(default = "default_layout_breakpoint")]
    pub layout_breakpoint: u32,

    /// Hide the overlay whenever navigation succeeds
    #[serde(default = "default_true")]
    pub dismiss_overlay_on_navigate: bool,

    /// Label of the "all" filter tab
    #[serde(default = "default_all_label")]
    pub all_label: String,

    /// Page sections in link order
    #[serde(default = "default_sections")]
    pub sections: Vec<Section>,

    /// Portfolio categories in tab order
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,

    /// Portfolio items in display order
    #[serde(default = "default_items")]
    pub items: Vec<ContentItem>,
}

const fn default_scroll_threshold() -> f64 {
    DEFAULT_SCROLL_THRESHOLD
}

const fn default_layout_breakpoint() -> u32 {
    DEFAULT_LAYOUT_BREAKPOINT
}

const fn default_true() -> bool {
    true
}

fn default_all_label() -> String {
    "All".to_string()
}

fn default_sections() -> Vec<Section> {
    vec![
        Section::new("home", "Home"),
        Section::new("about", "About"),
        Section::new("services", "Services"),
        Section::new("portfolio", "Portfolio"),
        Section::new("contact", "Contact"),
    ]
}

fn default_categories() -> Vec<Category> {
    vec![
        Category::new("design", "Design gallery"),
        Category::new("drawing", "Drawing gallery"),
        Category::new("motion", "Motion graphics gallery"),
    ]
}

fn default_items() -> Vec<ContentItem> {
    use ContentKind::{MotionPreview, StaticPreview};
    vec![
        ContentItem::new(1, "Startup visual identity", "design", StaticPreview, "purple-indigo"),
        ContentItem::new(2, "Digital cartoon character", "drawing", StaticPreview, "pink-rose"),
        ContentItem::new(3, "Animated promo spot", "motion", MotionPreview, "violet-fuchsia"),
        ContentItem::new(4, "Social media post set", "design", StaticPreview, "blue-cyan"),
        ContentItem::new(5, "Digital portrait", "drawing", StaticPreview, "emerald-teal"),
        ContentItem::new(6, "Animated logo intro", "motion", MotionPreview, "orange-red"),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scroll_threshold: default_scroll_threshold(),
            layout_breakpoint: default_layout_breakpoint(),
            dismiss_overlay_on_navigate: default_true(),
            all_label: default_all_label(),
            sections: default_sections(),
            categories: default_categories(),
            items: default_items(),
        }
    }
}

/// Validated site data, ready to build a store from
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    /// Section registry
    pub registry: SectionRegistry,
    /// Category catalog
    pub categories: CategoryCatalog,
    /// Content items, owned by the presentation layer
    pub items: Vec<ContentItem>,
    /// Store construction options
    pub options: StoreOptions,
    /// Layout breakpoint for the event translator
    pub layout_breakpoint: u32,
}

impl Site {
    /// Build a store over this site's data
    #[must_use]
    pub fn store_with<V: Viewport>(&self, viewport: V) -> ViewStateStore<V> {
        ViewStateStore::new(
            self.registry.clone(),
            self.categories.clone(),
            self.options,
            viewport,
        )
    }

    /// Build a store that records scroll requests
    #[must_use]
    pub fn store(&self) -> ViewStateStore<RecordingViewport> {
        self.store_with(RecordingViewport::default())
    }

    /// Event translator whose logo click leads to the first section
    #[must_use]
    pub fn translator(&self) -> EventTranslator {
        EventTranslator::new(self.layout_breakpoint, self.registry.home().id.clone())
    }
}

impl Config {
    /// Load configuration from `path`, or defaults when no path is given
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                debug!("No config path given, using built-in site data");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// Validate the fixed data and assemble it
    ///
    /// # Errors
    ///
    /// Returns an error if sections, categories or items are inconsistent
    pub fn build(&self) -> Result<Site, CatalogError> {
        let registry = SectionRegistry::new(self.sections.clone())?;
        let categories = CategoryCatalog::new(self.all_label.clone(), self.categories.clone())?;
        ContentItem::validate_catalog(&self.items, &categories)?;

        Ok(Site {
            registry,
            categories,
            items: self.items.clone(),
            options: StoreOptions {
                scroll_threshold: self.scroll_threshold,
                dismiss_overlay_on_navigate: self.dismiss_overlay_on_navigate,
            },
            layout_breakpoint: self.layout_breakpoint,
        })
    }
}
