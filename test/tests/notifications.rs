//! Tests for breakpoint change notifications and dependents that react to them.
//!
//! These tests verify that:
//! - Subscribers hear about breakpoint changes, not width changes
//! - Dependents found through the element tree update from notifications
//! - Dependents outlive their provider without hiding content

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use floem_breakpoints_test::prelude::*;

#[test]
fn test_only_breakpoint_changes_are_published() {
    let mut window = TestWindow::standard();
    let log = window.record();

    for width in [610.0, 640.0, 790.0, 800.0, 999.0, 1000.0, 1000.0, 480.0] {
        window.resize(width);
    }

    assert_eq!(
        log.currents(),
        vec![
            Some("XS".to_string()),
            Some("S".to_string()),
            Some("M".to_string()),
            Some("XS".to_string()),
        ]
    );
    assert_eq!(log.changes()[1], (Some("XS".to_string()), Some("S".to_string())));
}

#[test]
fn test_dependent_updates_from_notification() {
    let mut tree = TestTree::new();
    let window_element = tree.root();
    let panel = tree.child(window_element);
    let sidebar_element = tree.child(panel);

    let mut window = TestWindow::standard();
    tree.set_provider(window_element, window.provider);

    let provider = find_provider(&tree, sidebar_element).unwrap();
    assert_eq!(provider, window.provider);

    let visible = Rc::new(Cell::new(true));
    let sidebar = Rc::new(RefCell::new(BreakpointVisibility::new("L").unwrap()));
    {
        let visible = visible.clone();
        let sidebar = sidebar.clone();
        window
            .host
            .subscribe(provider, move |event| {
                visible.set(event.resolve(&mut *sidebar.borrow_mut()));
            })
            .unwrap();
    }

    window.resize(900.0);
    assert!(!visible.get());
    window.resize(1300.0);
    assert!(visible.get());
    window.resize(1100.0);
    assert!(!visible.get());
}

#[test]
fn test_many_dependents_agree_on_one_resolution() {
    let mut window = TestWindow::standard();
    window.resize(1200.0);

    let mut from_m = BreakpointVisibility::new("M").unwrap();
    let mut only_m = BreakpointVisibility::new("M").unwrap().exclusive(true);
    let mut gap = BreakpointValue::new(TierValues::with_default(4).l(12));

    assert_eq!(window.current(), Some("L"));
    assert!(window.resolve(&mut from_m));
    assert!(!window.resolve(&mut only_m));
    assert_eq!(window.resolve(&mut gap), Some(12));
}

#[test]
fn test_provider_removed_while_dependents_attached() {
    let mut window = TestWindow::standard();
    window.resize(700.0);
    let provider = window.provider;

    let mut wide_only = BreakpointVisibility::new("XL").unwrap();
    let mut label = BreakpointValue::new(TierValues::with_default("short").xl("long"));
    assert!(!window.resolve(&mut wide_only));

    window.host.remove_provider(provider);

    assert!(window.host.resolve(Some(provider), &mut wide_only));
    assert_eq!(window.host.resolve(Some(provider), &mut label), Some("short"));
    assert_eq!(window.host.subscriber_count(provider), 0);
}

#[test]
fn test_providers_are_independent() {
    init_tracing();
    let mut host = BreakpointHost::new();
    let main = host.insert_provider(BreakpointTable::standard());
    let dialog = host.insert_provider(
        BreakpointTable::from_pairs([("Compact", 0.0), ("Regular", 480.0)]).unwrap(),
    );
    let main_log = ChangeLog::attach(&mut host, main);
    let dialog_log = ChangeLog::attach(&mut host, dialog);

    host.set_width(main, 1500.0);
    host.set_width(dialog, 500.0);

    assert_eq!(host.current_breakpoint(main), Some("XL"));
    assert_eq!(host.current_breakpoint(dialog), Some("Regular"));
    assert_eq!(main_log.count(), 1);
    assert_eq!(dialog_log.count(), 1);
}

#[test]
fn test_no_provider_in_tree() {
    let mut tree = TestTree::new();
    let root = tree.root();
    let leaf = tree.child(root);
    assert_eq!(find_provider(&tree, leaf), None);

    let host = BreakpointHost::new();
    let mut element = BreakpointVisibility::new("M").unwrap();
    assert!(host.resolve(find_provider(&tree, leaf), &mut element));
}
