use super::Apply;
use crate::app::ActionContext;
use crate::app::state::SectionId;
use crate::error::ViewError;

/// Scroll to a section.
///
/// Post-condition on success: the compact menu is closed, and the overlay is
/// hidden when the store was built with `dismiss_overlay_on_navigate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigateAction {
    /// Target section
    pub section: SectionId,
}

impl Apply for NavigateAction {
    type Error = ViewError;

    fn apply(self, cx: &mut ActionContext<'_>) -> Result<(), ViewError> {
        let ActionContext { state, viewport } = cx;
        state
            .navigator
            .navigate_to(self.section.as_str(), &mut state.menu, &mut **viewport)?;

        if state.dismiss_overlay_on_navigate {
            state.modal.hide();
        }
        Ok(())
    }
}
