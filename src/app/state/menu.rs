//! Compact (mobile) navigation menu

use serde::Serialize;

/// Open/closed state of the compact navigation surface
///
/// Only explicit menu intents and successful navigation change it. Scroll
/// samples never do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct MenuState {
    /// Whether the dropdown is showing
    pub is_open: bool,
}

impl MenuState {
    /// Open the menu (idempotent)
    pub const fn open(&mut self) {
        self.is_open = true;
    }

    /// Close the menu (idempotent)
    pub const fn close(&mut self) {
        self.is_open = false;
    }

    /// Flip between open and closed
    pub const fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }
}
