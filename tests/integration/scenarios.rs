//! End-to-end scenarios against the store

use crate::common::{SECTION_IDS, sample_items, site, store};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::cell::Cell;
use std::rc::Rc;
use vitrine::app::{Click, Event, NavbarStyle, SectionId, coalesce_scroll};
use vitrine::catalog::ActiveCategory;
use vitrine::{Intent, ViewError};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[rstest]
#[case("all", &[1, 2, 3, 4, 5, 6])]
#[case("design", &[1, 4])]
#[case("drawing", &[2, 5])]
#[case("motion", &[3, 6])]
fn test_visible_items_by_category(#[case] category: &str, #[case] expected: &[u32]) -> TestResult {
    let items = sample_items();
    let mut store = store()?;

    store.filter_set(category)?;

    let visible: Vec<u32> = store.visible_items(&items).iter().map(|i| i.id.0).collect();
    assert_eq!(visible, expected);
    Ok(())
}

#[rstest]
#[case("bogus")]
#[case("")]
#[case("ALL")]
#[case("Design")]
fn test_unknown_categories_rejected(#[case] category: &str) -> TestResult {
    let mut store = store()?;
    store.filter_set("motion")?;

    let result = store.filter_set(category);

    assert_eq!(result, Err(ViewError::UnknownCategory(category.to_string())));
    assert_eq!(
        store.current_snapshot().filter.active_category.as_str(),
        "motion"
    );
    Ok(())
}

#[test]
fn test_every_registered_section_navigates() -> TestResult {
    let mut store = store()?;
    for id in SECTION_IDS {
        store.menu_open();
        store.navigate(id)?;
        assert!(!store.current_snapshot().menu.is_open, "menu open after {id}");
        assert_eq!(
            store.current_snapshot().active_section,
            Some(SectionId::new(id))
        );
    }
    assert_eq!(store.viewport().scrolled_to(), SECTION_IDS);
    Ok(())
}

#[test]
fn test_motion_scenario() -> TestResult {
    let items = sample_items();
    let mut store = store()?;

    store.filter_set("motion")?;
    let visible = store.visible_items(&items);

    assert_eq!(visible.len(), 2);
    assert_eq!(visible[0], &items[2]);
    assert_eq!(visible[1], &items[5]);
    Ok(())
}

#[test]
fn test_visible_items_is_stable() -> TestResult {
    let items = sample_items();
    let mut store = store()?;
    store.filter_set("drawing")?;

    let first = store.visible_items(&items);
    let second = store.visible_items(&items);
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_mobile_session() -> TestResult {
    let site = site()?;
    let mut store = site.store();
    let mut translator = site.translator().with_width(390);

    let notifications = Rc::new(Cell::new(0));
    let counter = Rc::clone(&notifications);
    store.subscribe(move |_| counter.set(counter.get() + 1));

    let events = vec![
        Event::Scroll(0.0),
        Event::Scroll(30.0),
        Event::Scroll(140.0),
        Event::Click(Click::MenuButton),
        Event::Click(Click::NavLink(SectionId::new("portfolio"))),
        Event::Click(Click::FilterTab("design".to_string())),
        Event::Click(Click::MenuButton),
        Event::Click(Click::AssistantLauncher),
        Event::Click(Click::AssistantClose),
        Event::Click(Click::Logo),
    ];

    for event in coalesce_scroll(events) {
        for intent in translator.translate(&event) {
            store.dispatch(intent)?;
        }
    }

    let snapshot = store.current_snapshot();
    assert_eq!(snapshot.navbar_style(), NavbarStyle::Elevated);
    assert!(!snapshot.menu.is_open);
    assert!(!snapshot.modal.is_visible);
    assert_eq!(snapshot.active_section, Some(SectionId::new("home")));
    assert_eq!(
        snapshot.filter.active_category,
        ActiveCategory::Category("design".into())
    );
    assert_eq!(store.viewport().scrolled_to(), ["portfolio", "home"]);
    // The launcher yields two intents, each notifying on its own
    assert_eq!(notifications.get(), 9);
    Ok(())
}

#[test]
fn test_resize_to_wide_collapses_menu() -> TestResult {
    let site = site()?;
    let mut store = site.store();
    let mut translator = site.translator().with_width(400);

    store.menu_open();
    for intent in translator.translate(&Event::Resize { width: 1200 }) {
        store.dispatch(intent)?;
    }

    assert!(!store.current_snapshot().menu.is_open);
    Ok(())
}

#[test]
fn test_failed_intent_does_not_interrupt_sequence() -> TestResult {
    let mut store = store()?;
    let outcomes: Vec<bool> = [
        Intent::MenuOpen,
        Intent::Navigate(SectionId::new("gallery")),
        Intent::FilterSet("sculpture".to_string()),
        Intent::ModalShow,
    ]
    .into_iter()
    .map(|intent| store.dispatch(intent).is_ok())
    .collect();

    assert_eq!(outcomes, vec![true, false, false, true]);
    let snapshot = store.current_snapshot();
    assert!(snapshot.menu.is_open);
    assert!(snapshot.modal.is_visible);
    assert_eq!(snapshot.active_section, None);
    Ok(())
}
