//! View-state store and the pieces it coordinates

mod data;
mod event;
pub mod state;
mod store;
mod viewport;

pub use data::ActionContext;
pub use event::{Click, DEFAULT_LAYOUT_BREAKPOINT, Event, EventTranslator, coalesce_scroll};
pub use state::{
    CategoryFilter, FilterState, MenuState, ModalState, NavbarStyle, ScrollState, ScrollTracker,
    Section, SectionId, SectionNavigator, SectionRegistry, StoreOptions, ViewState,
};
pub use store::{Snapshot, SubscriptionId, ViewStateStore};
pub use viewport::{RecordingViewport, Viewport};
