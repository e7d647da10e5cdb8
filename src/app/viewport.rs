//! The layout capability the store drives

/// DOM/layout side effects requested by the store
///
/// Implementations own the smooth-scroll animation; the store only asks for
/// it to begin.
pub trait Viewport {
    /// Begin smoothly scrolling the element with id `anchor` into view
    fn scroll_into_view(&mut self, anchor: &str);
}

impl<F: FnMut(&str)> Viewport for F {
    fn scroll_into_view(&mut self, anchor: &str) {
        self(anchor);
    }
}

/// Viewport that remembers every scroll request, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingViewport {
    scrolled: Vec<String>,
}

impl RecordingViewport {
    /// Anchors requested so far
    #[must_use]
    pub fn scrolled_to(&self) -> &[String] {
        &self.scrolled
    }

    /// Forget recorded requests
    pub fn clear(&mut self) {
        self.scrolled.clear();
    }
}

impl Viewport for RecordingViewport {
    fn scroll_into_view(&mut self, anchor: &str) {
        tracing::debug!(anchor, "Scrolling section into view");
        self.scrolled.push(anchor.to_string());
    }
}
