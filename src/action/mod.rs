//! Intents and the typed actions that carry them out

mod filter;
mod menu;
mod modal;
mod navigation;
mod scroll;

pub use filter::FilterSetAction;
pub use menu::{MenuCloseAction, MenuOpenAction, MenuToggleAction};
pub use modal::{ModalHideAction, ModalShowAction};
pub use navigation::NavigateAction;
pub use scroll::ScrollSampledAction;

use crate::app::ActionContext;
use crate::app::state::SectionId;
use crate::error::ViewError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A state change that can be executed against the view state.
///
/// Each impl either succeeds completely or returns an error having changed
/// nothing.
pub trait Apply: fmt::Debug + Sized {
    /// Rejection type; `Infallible` for total actions
    type Error: fmt::Display;

    /// Execute against the view state
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the action is rejected.
    fn apply(self, cx: &mut ActionContext<'_>) -> Result<(), Self::Error>;

    /// Whether this action arrives often enough to log at trace level
    fn is_high_frequency(&self) -> bool {
        false
    }
}

/// The closed set of intents the presentation layer may dispatch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// A new scroll offset was sampled
    ScrollSampled(f64),
    /// Scroll to a section and collapse the compact menu
    Navigate(SectionId),
    /// Open the compact menu
    MenuOpen,
    /// Close the compact menu
    MenuClose,
    /// Flip the compact menu
    MenuToggle,
    /// Change the active portfolio category (`all` clears the filter)
    FilterSet(String),
    /// Show the overlay panel
    ModalShow,
    /// Hide the overlay panel
    ModalHide,
}

impl Intent {
    /// Short snake_case name, matching the serialized tag
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ScrollSampled(_) => "scroll_sampled",
            Self::Navigate(_) => "navigate",
            Self::MenuOpen => "menu_open",
            Self::MenuClose => "menu_close",
            Self::MenuToggle => "menu_toggle",
            Self::FilterSet(_) => "filter_set",
            Self::ModalShow => "modal_show",
            Self::ModalHide => "modal_hide",
        }
    }
}

impl Apply for Intent {
    type Error = ViewError;

    fn apply(self, cx: &mut ActionContext<'_>) -> Result<(), ViewError> {
        match self {
            Self::ScrollSampled(offset) => ScrollSampledAction { offset }.apply(cx)?,
            Self::Navigate(section) => NavigateAction { section }.apply(cx)?,
            Self::MenuOpen => MenuOpenAction.apply(cx)?,
            Self::MenuClose => MenuCloseAction.apply(cx)?,
            Self::MenuToggle => MenuToggleAction.apply(cx)?,
            Self::FilterSet(category) => FilterSetAction { category }.apply(cx)?,
            Self::ModalShow => ModalShowAction.apply(cx)?,
            Self::ModalHide => ModalHideAction.apply(cx)?,
        }
        Ok(())
    }

    fn is_high_frequency(&self) -> bool {
        matches!(self, Self::ScrollSampled(_))
    }
}
