//! Mutable context handed to actions during dispatch.

use super::state::ViewState;
use super::viewport::Viewport;

/// Mutable access to the view state plus the viewport for side effects.
///
/// Only the store constructs one, for the duration of a single dispatch.
pub struct ActionContext<'a> {
    /// The state being mutated
    pub state: &'a mut ViewState,
    /// Layout capability for scroll-into-view requests
    pub viewport: &'a mut dyn Viewport,
}

impl<'a> ActionContext<'a> {
    /// Wrap state and viewport for one dispatch
    #[must_use]
    pub const fn new(state: &'a mut ViewState, viewport: &'a mut dyn Viewport) -> Self {
        Self { state, viewport }
    }
}

impl std::fmt::Debug for ActionContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionContext")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl std::ops::Deref for ActionContext<'_> {
    type Target = ViewState;

    fn deref(&self) -> &Self::Target {
        self.state
    }
}

impl std::ops::DerefMut for ActionContext<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.state
    }
}
