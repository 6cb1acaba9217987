//! Integration tests for the scroll revealer

use contact_form_core::memory::MemoryReveal;
use contact_form_core::{Intersection, RevealConfig, RevealHost, ScrollRevealer};

#[test]
fn test_observe_registers_every_target() {
    let mut host = MemoryReveal::new();
    let targets = vec![host.element(), host.element(), host.element()];
    let revealer = ScrollRevealer::new(host, &RevealConfig::default());

    assert_eq!(revealer.observe(&targets), 3);
    assert!(targets.iter().all(|t| revealer.host().is_watched(*t)));
}

#[test]
fn test_first_intersection_reveals_and_unobserves() {
    let mut host = MemoryReveal::new();
    let section = host.element();
    let revealer = ScrollRevealer::new(host, &RevealConfig::default());
    revealer.observe([&section]);

    assert_eq!(revealer.on_intersection([Intersection::new(section, true)]), 1);

    assert!(revealer.is_revealed(&section));
    assert!(!revealer.host().is_watched(section));
    assert_eq!(revealer.host().classes_of(section), vec!["is-visible".to_string()]);
}

#[test]
fn test_second_intersection_changes_nothing() {
    let mut host = MemoryReveal::new();
    let section = host.element();
    let revealer = ScrollRevealer::new(host, &RevealConfig::default());
    revealer.observe([&section]);

    revealer.on_intersection([Intersection::new(section, true)]);
    let revealed = revealer.on_intersection([Intersection::new(section, true)]);

    assert_eq!(revealed, 0);
    assert_eq!(revealer.host().class_changes(), 1);
    assert!(!revealer.host().is_watched(section));
}

#[test]
fn test_target_marked_visible_in_markup_is_unwatched() {
    let mut host = MemoryReveal::new();
    let hero = host.element();
    host.add_class(&hero, "is-visible");
    let revealer = ScrollRevealer::new(host, &RevealConfig::default());
    revealer.observe([&hero]);

    let revealed = revealer.on_intersection([Intersection::new(hero, true)]);

    assert_eq!(revealed, 0);
    assert!(!revealer.host().is_watched(hero));
    assert_eq!(revealer.host().unwatch_calls(), 1);
    // Only the class added while building the page
    assert_eq!(revealer.host().class_changes(), 1);
}

#[test]
fn test_only_intersecting_entries_in_batch_are_revealed() {
    let mut host = MemoryReveal::new();
    let above = host.element();
    let below = host.element();
    let revealer = ScrollRevealer::new(host, &RevealConfig::default());
    revealer.observe([&above, &below]);

    let revealed = revealer.on_intersection(vec![
        Intersection::new(above, true),
        Intersection::new(below, false),
    ]);

    assert_eq!(revealed, 1);
    assert!(revealer.is_revealed(&above));
    assert!(!revealer.is_revealed(&below));
    assert!(revealer.host().is_watched(below));
}
