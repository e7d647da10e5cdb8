//! Property-based tests for the store invariants
//!
//! Uses proptest to drive the store with arbitrary offsets and intent
//! sequences.

use crate::common::{SECTION_IDS, store};
use proptest::prelude::*;
use vitrine::ViewStateStore;
use vitrine::app::SectionId;
use vitrine::catalog::{ContentItem, ContentKind};
use vitrine::{Intent, ViewError};

// ============================================================================
// Strategy Generators
// ============================================================================

fn section_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(SECTION_IDS.to_vec()).prop_map(str::to_string),
        1 => Just("nonexistent".to_string()),
        1 => "[a-z]{1,8}",
    ]
}

fn category_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["all", "design", "drawing", "motion", "bogus", ""])
        .prop_map(str::to_string)
}

fn intent_strategy() -> impl Strategy<Value = Intent> {
    prop_oneof![
        3 => (-500.0f64..5000.0).prop_map(Intent::ScrollSampled),
        2 => section_strategy().prop_map(|id| Intent::Navigate(SectionId::new(id))),
        1 => Just(Intent::MenuOpen),
        1 => Just(Intent::MenuClose),
        2 => Just(Intent::MenuToggle),
        2 => category_strategy().prop_map(Intent::FilterSet),
        1 => Just(Intent::ModalShow),
        1 => Just(Intent::ModalHide),
    ]
}

fn items_strategy() -> impl Strategy<Value = Vec<ContentItem>> {
    prop::collection::vec(
        prop::sample::select(vec!["design", "drawing", "motion"]),
        0..30,
    )
    .prop_map(|categories| {
        categories
            .into_iter()
            .zip(1u32..)
            .map(|(category, id)| {
                ContentItem::new(
                    id,
                    format!("Work {id}"),
                    category,
                    ContentKind::StaticPreview,
                    "plain",
                )
            })
            .collect()
    })
}

fn fresh_store() -> Result<ViewStateStore, TestCaseError> {
    store().map_err(|e| TestCaseError::fail(e.to_string()))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The navbar state is exactly `offset > 50`, whatever came before
    #[test]
    fn scroll_state_matches_threshold(
        history in prop::collection::vec(-1000.0f64..1000.0, 0..10),
        offset in -1000.0f64..1000.0,
    ) {
        let mut store = fresh_store()?;
        for sample in history {
            store.scroll_sampled(sample);
        }
        store.scroll_sampled(offset);
        prop_assert_eq!(store.current_snapshot().scroll.is_past_threshold, offset > 50.0);
    }

    /// Larger offsets are never "less scrolled"
    #[test]
    fn scroll_state_is_monotonic(a in -1000.0f64..1000.0, b in -1000.0f64..1000.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let mut store = fresh_store()?;
        store.scroll_sampled(low);
        let low_past = store.current_snapshot().scroll.is_past_threshold;
        store.scroll_sampled(high);
        let high_past = store.current_snapshot().scroll.is_past_threshold;
        prop_assert!(!low_past || high_past);
    }

    /// Toggling twice restores the menu from any reachable state
    #[test]
    fn menu_toggle_is_involution(intents in prop::collection::vec(intent_strategy(), 0..20)) {
        let mut store = fresh_store()?;
        for intent in intents {
            let _ = store.dispatch(intent);
        }
        let before = store.current_snapshot().menu;
        store.menu_toggle();
        store.menu_toggle();
        prop_assert_eq!(store.current_snapshot().menu, before);
    }

    /// The sentinel shows every item, in order
    #[test]
    fn all_sentinel_is_identity(items in items_strategy()) {
        let mut store = fresh_store()?;
        store.filter_set("motion").map_err(|e| TestCaseError::fail(e.to_string()))?;
        store.filter_set("all").map_err(|e| TestCaseError::fail(e.to_string()))?;

        let visible: Vec<&ContentItem> = store.visible_items(&items);
        let expected: Vec<&ContentItem> = items.iter().collect();
        prop_assert_eq!(visible, expected);
    }

    /// A concrete category yields exactly its items, in relative order
    #[test]
    fn category_filter_is_ordered_subsequence(
        items in items_strategy(),
        category in prop::sample::select(vec!["design", "drawing", "motion"]),
    ) {
        let mut store = fresh_store()?;
        store.filter_set(category).map_err(|e| TestCaseError::fail(e.to_string()))?;

        let visible: Vec<u32> = store.visible_items(&items).iter().map(|i| i.id.0).collect();
        let expected: Vec<u32> = items
            .iter()
            .filter(|i| i.category_id.as_str() == category)
            .map(|i| i.id.0)
            .collect();
        prop_assert_eq!(visible, expected);
    }

    /// Successful navigation always leaves the menu closed; rejected intents
    /// leave every record untouched
    #[test]
    fn intents_respect_store_invariants(
        intents in prop::collection::vec(intent_strategy(), 0..40),
    ) {
        let mut store = fresh_store()?;
        for intent in intents {
            let before = store.current_snapshot().clone();
            let is_navigation = matches!(intent, Intent::Navigate(_));
            match store.dispatch(intent) {
                Ok(()) => {
                    if is_navigation {
                        prop_assert!(!store.current_snapshot().menu.is_open);
                    }
                }
                Err(ViewError::SectionNotFound(_) | ViewError::UnknownCategory(_)) => {
                    prop_assert_eq!(store.current_snapshot(), &before);
                }
            }

            let active = store.current_snapshot().filter.active_category.as_str().to_string();
            prop_assert!(active == "all" || store.categories().contains(&active));
        }
    }
}
