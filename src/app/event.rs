//! Raw input events and their translation into intents
//!
//! The store only ever sees decoded intents. Everything that depends on how
//! the page is laid out (breakpoints, which button was clicked) is resolved
//! here, at the boundary.

use super::state::SectionId;
use crate::action::Intent;
use serde::{Deserialize, Serialize};

/// Default width at which the wide navigation layout takes over
pub const DEFAULT_LAYOUT_BREAKPOINT: u32 = 768;

/// Input events as the rendering layer reports them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    /// Viewport scrolled to this vertical offset
    Scroll(f64),
    /// A clickable element was activated
    Click(Click),
    /// Viewport was resized
    Resize {
        /// New viewport width
        width: u32,
    },
}

/// Clickable elements the core cares about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Click {
    /// The site logo (goes to the first section)
    Logo,
    /// A navigation link or call-to-action targeting a section
    NavLink(SectionId),
    /// The hamburger/close button of the compact menu
    MenuButton,
    /// A portfolio filter tab
    FilterTab(String),
    /// The assistant launcher
    AssistantLauncher,
    /// The assistant panel's own close button
    AssistantClose,
}

/// Maps events to intents, tracking the viewport width between resizes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTranslator {
    breakpoint: u32,
    home: SectionId,
    last_width: Option<u32>,
}

impl EventTranslator {
    /// Create a translator; `home` is where the logo leads
    #[must_use]
    pub const fn new(breakpoint: u32, home: SectionId) -> Self {
        Self {
            breakpoint,
            home,
            last_width: None,
        }
    }

    /// Seed the viewport width observed at startup
    #[must_use]
    pub const fn with_width(mut self, width: u32) -> Self {
        self.last_width = Some(width);
        self
    }

    /// Configured layout breakpoint
    #[must_use]
    pub const fn breakpoint(&self) -> u32 {
        self.breakpoint
    }

    /// Whether `width` uses the wide navigation layout
    #[must_use]
    pub const fn is_wide(&self, width: u32) -> bool {
        width >= self.breakpoint
    }

    /// Intents produced by one event, in dispatch order
    pub fn translate(&mut self, event: &Event) -> Vec<Intent> {
        match event {
            Event::Scroll(offset) => vec![Intent::ScrollSampled(*offset)],
            Event::Click(click) => self.translate_click(click),
            Event::Resize { width } => {
                let was_wide = self.last_width.is_some_and(|w| self.is_wide(w));
                self.last_width = Some(*width);
                if self.is_wide(*width) && !was_wide {
                    tracing::debug!(width, "Viewport crossed into wide layout");
                    vec![Intent::MenuClose]
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn translate_click(&self, click: &Click) -> Vec<Intent> {
        match click {
            Click::Logo => vec![Intent::Navigate(self.home.clone())],
            Click::NavLink(section) => vec![Intent::Navigate(section.clone())],
            Click::MenuButton => vec![Intent::MenuToggle],
            Click::FilterTab(category) => vec![Intent::FilterSet(category.clone())],
            // The launcher lives in the compact menu too; opening the panel folds it away
            Click::AssistantLauncher => vec![Intent::ModalShow, Intent::MenuClose],
            Click::AssistantClose => vec![Intent::ModalHide],
        }
    }
}

/// Collapse each run of consecutive scroll events to its last sample
///
/// Other events pass through untouched and keep their relative order.
#[must_use]
pub fn coalesce_scroll(events: impl IntoIterator<Item = Event>) -> Vec<Event> {
    let mut out: Vec<Event> = Vec::new();
    for event in events {
        let supersedes =
            matches!(event, Event::Scroll(_)) && matches!(out.last(), Some(Event::Scroll(_)));
        if supersedes {
            out.pop();
        }
        out.push(event);
    }
    out
}
