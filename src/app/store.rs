//! The view-state store: single owner of all view state
//!
//! The presentation layer reads [`Snapshot`]s and dispatches [`Intent`]s.
//! Nothing else writes to the state, so no locking is involved: each intent
//! runs to completion, then subscribers see the result.

use super::ActionContext;
use super::state::{
    FilterState, MenuState, ModalState, NavbarStyle, ScrollState, Section, SectionId,
    SectionRegistry, StoreOptions, ViewState,
};
use super::viewport::{RecordingViewport, Viewport};
use crate::action::{
    Apply, FilterSetAction, Intent, MenuCloseAction, MenuOpenAction, MenuToggleAction,
    ModalHideAction, ModalShowAction, NavigateAction, ScrollSampledAction,
};
use crate::catalog::{CategoryCatalog, ContentItem, FilterTab};
use crate::error::ViewError;
use serde::Serialize;
use std::convert::Infallible;
use std::fmt;
use tracing::{debug, trace, warn};

/// Immutable, point-in-time copy of every state record
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Snapshot {
    /// Scroll threshold state
    pub scroll: ScrollState,
    /// Compact menu state
    pub menu: MenuState,
    /// Portfolio filter state
    pub filter: FilterState,
    /// Overlay state
    pub modal: ModalState,
    /// Last section navigated to, if any
    pub active_section: Option<SectionId>,
}

impl Snapshot {
    /// Navbar style for the current scroll state
    #[must_use]
    pub const fn navbar_style(&self) -> NavbarStyle {
        self.scroll.navbar_style()
    }
}

/// Handle returned by [`ViewStateStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Snapshot)>;

/// Owns the view state, the viewport and the subscriber list
pub struct ViewStateStore<V = RecordingViewport> {
    state: ViewState,
    snapshot: Snapshot,
    viewport: V,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<V: Viewport> ViewStateStore<V> {
    /// Create a store in its initial state
    #[must_use]
    pub fn new(
        registry: SectionRegistry,
        catalog: CategoryCatalog,
        options: StoreOptions,
        viewport: V,
    ) -> Self {
        let state = ViewState::new(registry, catalog, options);
        let snapshot = state.snapshot();
        Self {
            state,
            snapshot,
            viewport,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The latest snapshot
    #[must_use]
    pub const fn current_snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The viewport this store drives
    #[must_use]
    pub const fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Mutable access to the viewport (for example to clear a recording)
    pub const fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    /// Register a listener; it runs after every intent that changes state
    pub fn subscribe(&mut self, listener: impl FnMut(&Snapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        debug!(subscription = id.0, "Listener subscribed");
        id
    }

    /// Remove a listener; returns `false` if it was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        let removed = self.listeners.len() != before;
        if removed {
            debug!(subscription = id.0, "Listener unsubscribed");
        }
        removed
    }

    /// Number of registered listeners
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Dispatch any intent
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] for unknown sections or categories; the state is
    /// left untouched in that case.
    pub fn dispatch(&mut self, intent: Intent) -> Result<(), ViewError> {
        self.run(intent)
    }

    /// Record a scroll sample
    pub fn scroll_sampled(&mut self, offset: f64) {
        self.run_total(ScrollSampledAction { offset });
    }

    /// Navigate to a section, collapsing the compact menu
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::SectionNotFound`] if `section` is not registered.
    pub fn navigate(&mut self, section: &str) -> Result<(), ViewError> {
        self.run(NavigateAction {
            section: SectionId::new(section),
        })
    }

    /// Open the compact menu
    pub fn menu_open(&mut self) {
        self.run_total(MenuOpenAction);
    }

    /// Close the compact menu
    pub fn menu_close(&mut self) {
        self.run_total(MenuCloseAction);
    }

    /// Toggle the compact menu
    pub fn menu_toggle(&mut self) {
        self.run_total(MenuToggleAction);
    }

    /// Change the active category
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::UnknownCategory`] if `category` is neither `all`
    /// nor a catalog id.
    pub fn filter_set(&mut self, category: &str) -> Result<(), ViewError> {
        self.run(FilterSetAction {
            category: category.to_string(),
        })
    }

    /// Show the overlay
    pub fn modal_show(&mut self) {
        self.run_total(ModalShowAction);
    }

    /// Hide the overlay
    pub fn modal_hide(&mut self) {
        self.run_total(ModalHideAction);
    }

    /// Items that pass the active filter, in catalog order
    #[must_use]
    pub fn visible_items<'a>(&self, items: &'a [ContentItem]) -> Vec<&'a ContentItem> {
        self.state.filter.visible_items(items)
    }

    /// Navigation links in display order
    #[must_use]
    pub fn nav_links(&self) -> &[Section] {
        self.state.navigator.registry().sections()
    }

    /// Filter bar tabs, sentinel first
    #[must_use]
    pub fn filter_tabs(&self) -> Vec<FilterTab<'_>> {
        self.state.filter.tabs()
    }

    /// Category catalog the filter validates against
    #[must_use]
    pub const fn categories(&self) -> &CategoryCatalog {
        self.state.filter.catalog()
    }

    fn run_total<A: Apply<Error = Infallible>>(&mut self, action: A) {
        let Ok(()) = self.run(action);
    }

    fn run<A: Apply>(&mut self, action: A) -> Result<(), A::Error> {
        if action.is_high_frequency() {
            trace!(?action, "Dispatching");
        } else {
            debug!(?action, "Dispatching");
        }

        let result = action.apply(&mut ActionContext::new(&mut self.state, &mut self.viewport));
        if let Err(e) = &result {
            warn!(error = %e, "Intent rejected");
            return result;
        }

        let next = self.state.snapshot();
        if next != self.snapshot {
            self.snapshot = next;
            self.notify();
        }
        result
    }

    fn notify(&mut self) {
        let snapshot = &self.snapshot;
        for (_, listener) in &mut self.listeners {
            listener(snapshot);
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for ViewStateStore<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewStateStore")
            .field("state", &self.state)
            .field("snapshot", &self.snapshot)
            .field("viewport", &self.viewport)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
