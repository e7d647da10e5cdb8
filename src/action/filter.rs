use super::Apply;
use crate::app::ActionContext;
use crate::error::ViewError;

/// Switch the portfolio filter to another category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSetAction {
    /// Raw category id; `all` clears the filter
    pub category: String,
}

impl Apply for FilterSetAction {
    type Error = ViewError;

    fn apply(self, cx: &mut ActionContext<'_>) -> Result<(), ViewError> {
        cx.filter.set_active_category(&self.category)
    }
}
