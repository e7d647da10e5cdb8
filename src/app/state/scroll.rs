//! Scroll sampling and the navbar style it drives

use serde::Serialize;

/// Default offset past which the navbar switches to its elevated style
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 50.0;

/// Whether the viewport has scrolled past the threshold
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ScrollState {
    /// `true` once the offset is strictly greater than the threshold
    pub is_past_threshold: bool,
}

impl ScrollState {
    /// Navbar style derived from this state
    #[must_use]
    pub const fn navbar_style(self) -> NavbarStyle {
        if self.is_past_threshold {
            NavbarStyle::Elevated
        } else {
            NavbarStyle::Transparent
        }
    }
}

/// Visual treatment of the fixed navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavbarStyle {
    /// Page top: no background, roomy padding
    Transparent,
    /// Scrolled: solid background with a shadow
    Elevated,
}

/// Turns raw scroll offsets into [`ScrollState`]
///
/// Memoryless: the latest offset alone determines the state. The last result
/// is kept only so callers can tell whether a sample changed anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    threshold: f64,
    state: ScrollState,
}

impl ScrollTracker {
    /// Create a tracker with a custom threshold
    #[must_use]
    pub const fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            state: ScrollState {
                is_past_threshold: false,
            },
        }
    }

    /// The configured threshold
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Last computed state
    #[must_use]
    pub const fn state(&self) -> ScrollState {
        self.state
    }

    /// Pure classification of an offset against the threshold
    ///
    /// Negative offsets (elastic overscroll) and NaN are never past it.
    #[must_use]
    pub fn classify(&self, offset: f64) -> ScrollState {
        ScrollState {
            is_past_threshold: offset >= 0.0 && offset > self.threshold,
        }
    }

    /// Record a new sample and return the resulting state
    pub fn sample(&mut self, offset: f64) -> ScrollState {
        let next = self.classify(offset);
        if next != self.state {
            tracing::trace!(offset, past = next.is_past_threshold, "Scroll threshold crossed");
        }
        self.state = next;
        next
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::with_threshold(DEFAULT_SCROLL_THRESHOLD)
    }
}
