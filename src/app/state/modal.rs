//! Single-slot overlay (the creative assistant panel)

use serde::Serialize;

/// Visibility of the one overlay slot
///
/// The overlay never blocks other intents; the presentation layer simply
/// draws it above everything else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ModalState {
    /// Whether the overlay is rendered
    pub is_visible: bool,
}

impl ModalState {
    /// Show the overlay (idempotent)
    pub const fn show(&mut self) {
        self.is_visible = true;
    }

    /// Hide the overlay (idempotent)
    pub const fn hide(&mut self) {
        self.is_visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_show_hide() {
        let mut modal = ModalState::default();
        assert!(!modal.is_visible);
        modal.show();
        modal.show();
        assert!(modal.is_visible);
        modal.hide();
        assert!(!modal.is_visible);
        modal.hide();
        assert!(!modal.is_visible);
    }
}
