//! View state records
//!
//! Each record lives in its own module with the controller that mutates it.
//! `ViewState` groups them; only the store holds it mutably.

mod filter;
mod menu;
mod modal;
mod navigation;
mod scroll;

pub use filter::{CategoryFilter, FilterState};
pub use menu::MenuState;
pub use modal::ModalState;
pub use navigation::{Section, SectionId, SectionNavigator, SectionRegistry};
pub use scroll::{DEFAULT_SCROLL_THRESHOLD, NavbarStyle, ScrollState, ScrollTracker};

use crate::catalog::CategoryCatalog;

use super::Snapshot;

/// Construction options for the view state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoreOptions {
    /// Offset past which the navbar is elevated
    pub scroll_threshold: f64,
    /// Whether successful navigation also hides the overlay
    pub dismiss_overlay_on_navigate: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            dismiss_overlay_on_navigate: true,
        }
    }
}

/// All mutable view state plus the fixed data it validates against
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Scroll sampling
    pub scroll: ScrollTracker,

    /// Section lookup and last visited section
    pub navigator: SectionNavigator,

    /// Compact menu
    pub menu: MenuState,

    /// Portfolio filter
    pub filter: CategoryFilter,

    /// Overlay slot
    pub modal: ModalState,

    /// Whether navigation hides the overlay
    pub dismiss_overlay_on_navigate: bool,
}

impl ViewState {
    /// Initial state: page top, menu closed, no filter, overlay hidden
    #[must_use]
    pub fn new(registry: SectionRegistry, catalog: CategoryCatalog, options: StoreOptions) -> Self {
        Self {
            scroll: ScrollTracker::with_threshold(options.scroll_threshold),
            navigator: SectionNavigator::new(registry),
            menu: MenuState::default(),
            filter: CategoryFilter::new(catalog),
            modal: ModalState::default(),
            dismiss_overlay_on_navigate: options.dismiss_overlay_on_navigate,
        }
    }

    /// Point-in-time copy of every record
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            scroll: self.scroll.state(),
            menu: self.menu,
            filter: self.filter.state().clone(),
            modal: self.modal,
            active_section: self.navigator.active().cloned(),
        }
    }
}
