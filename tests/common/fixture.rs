//! Site fixtures mirroring the portfolio page's fixed data

use vitrine::ViewStateStore;
use vitrine::catalog::{ContentItem, ContentKind};
use vitrine::config::{Config, Site};
use vitrine::error::CatalogError;

/// Section ids registered by the fixture site, in link order
pub const SECTION_IDS: [&str; 5] = ["home", "about", "services", "portfolio", "contact"];

/// Six items: two per category, interleaved design/drawing/motion
pub fn sample_items() -> Vec<ContentItem> {
    [
        (1, "design", ContentKind::StaticPreview),
        (2, "drawing", ContentKind::StaticPreview),
        (3, "motion", ContentKind::MotionPreview),
        (4, "design", ContentKind::StaticPreview),
        (5, "drawing", ContentKind::StaticPreview),
        (6, "motion", ContentKind::MotionPreview),
    ]
    .into_iter()
    .map(|(id, category, kind)| {
        ContentItem::new(id, format!("Work {id}"), category, kind, "plain")
    })
    .collect()
}

/// Built-in site data with the sample items
pub fn site() -> Result<Site, CatalogError> {
    Config {
        items: sample_items(),
        ..Config::default()
    }
    .build()
}

/// Fresh store over the fixture site
pub fn store() -> Result<ViewStateStore, CatalogError> {
    Ok(site()?.store())
}
