//! Overlay panel actions.

use super::Apply;
use crate::app::ActionContext;
use std::convert::Infallible;

/// Show the assistant overlay. Reachable from every navigation surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModalShowAction;

impl Apply for ModalShowAction {
    type Error = Infallible;

    fn apply(self, cx: &mut ActionContext<'_>) -> Result<(), Infallible> {
        cx.modal.show();
        Ok(())
    }
}

/// Hide the assistant overlay (its own close button, or navigation).
#[derive(Debug, Clone, Copy, Default)]
pub struct ModalHideAction;

impl Apply for ModalHideAction {
    type Error = Infallible;

    fn apply(self, cx: &mut ActionContext<'_>) -> Result<(), Infallible> {
        cx.modal.hide();
        Ok(())
    }
}
