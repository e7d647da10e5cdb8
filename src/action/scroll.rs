use super::Apply;
use crate::app::ActionContext;
use std::convert::Infallible;

/// Record a scroll offset sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSampledAction {
    /// Raw vertical offset reported by the viewport
    pub offset: f64,
}

impl Apply for ScrollSampledAction {
    type Error = Infallible;

    fn apply(self, cx: &mut ActionContext<'_>) -> Result<(), Infallible> {
        cx.scroll.sample(self.offset);
        Ok(())
    }

    fn is_high_frequency(&self) -> bool {
        true
    }
}
