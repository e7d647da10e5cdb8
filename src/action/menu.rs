use super::Apply;
use crate::app::ActionContext;
use std::convert::Infallible;

/// Open the compact menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuOpenAction;

impl Apply for MenuOpenAction {
    type Error = Infallible;

    fn apply(self, cx: &mut ActionContext<'_>) -> Result<(), Infallible> {
        cx.menu.open();
        Ok(())
    }
}

/// Close the compact menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuCloseAction;

impl Apply for MenuCloseAction {
    type Error = Infallible;

    fn apply(self, cx: &mut ActionContext<'_>) -> Result<(), Infallible> {
        cx.menu.close();
        Ok(())
    }
}

/// Flip the compact menu (the hamburger button).
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuToggleAction;

impl Apply for MenuToggleAction {
    type Error = Infallible;

    fn apply(self, cx: &mut ActionContext<'_>) -> Result<(), Infallible> {
        cx.menu.toggle();
        Ok(())
    }
}
