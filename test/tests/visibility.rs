//! Tests for visibility of breakpoint-gated elements as the window resizes.
//!
//! Widths are chosen on and around the thresholds of the standard table
//! (XS=600, S=800, M=1000, L=1200, XL=1400, XXL=1600), since a width equal to
//! a threshold belongs to that threshold's breakpoint.

use floem_breakpoints_test::prelude::*;

fn visible_at(window: &mut TestWindow, element: &mut BreakpointVisibility, width: f64) -> bool {
    window.resize(width);
    window.resolve(element)
}

#[test]
fn test_exclusive_medium_band() {
    let mut window = TestWindow::standard();
    let mut element = BreakpointVisibility::new("M").unwrap().exclusive(true);

    let cases = [
        (600.0, false),
        (800.0, false),
        (999.999, false),
        (1000.0, true),
        (1000.001, true),
        (1199.999, true),
        (1200.0, false),
        (1400.0, false),
        (2000.0, false),
    ];
    for (width, expected) in cases {
        assert_eq!(visible_at(&mut window, &mut element, width), expected, "width {width}");
    }
}

#[test]
fn test_non_exclusive_from_medium_up() {
    let mut window = TestWindow::standard();
    let mut element = BreakpointVisibility::new("M").unwrap();

    assert!(!visible_at(&mut window, &mut element, 999.999));
    assert!(visible_at(&mut window, &mut element, 1000.0));
    assert!(visible_at(&mut window, &mut element, 1600.0));
    assert!(visible_at(&mut window, &mut element, 10000.0));
}

#[test]
fn test_smallest_breakpoint_below_all_thresholds() {
    let mut window = TestWindow::standard();
    let mut element = BreakpointVisibility::new("XS").unwrap().exclusive(true);

    assert!(visible_at(&mut window, &mut element, 320.0));
    assert_eq!(window.current(), Some("XS"));
    assert!(!visible_at(&mut window, &mut element, 800.0));
}

#[test]
fn test_between_small_and_large() {
    let mut window = TestWindow::standard();
    let mut element = BreakpointVisibility::new("S").unwrap().upper_bound("L");

    assert!(!visible_at(&mut window, &mut element, 700.0));
    assert!(visible_at(&mut window, &mut element, 800.0));
    assert!(visible_at(&mut window, &mut element, 1100.0));
    assert_eq!(window.current(), Some("M"));
    assert!(visible_at(&mut window, &mut element, 1399.0));
    assert!(!visible_at(&mut window, &mut element, 1400.0));
    assert!(!visible_at(&mut window, &mut element, 1700.0));
    assert_eq!(window.current(), Some("XXL"));
}

#[test]
fn test_target_equal_to_current_always_visible() {
    let table = BreakpointTable::from_pairs([("Narrow", 0.0), ("Wide", 900.0), ("Huge", 2400.0)])
        .unwrap();
    for (name, _) in &table {
        for exclusive in [false, true] {
            assert!(should_be_visible(Some(&table), Some(name), name, exclusive));
        }
    }
}

#[test]
fn test_unknown_target_stays_visible() {
    let mut window = TestWindow::standard();
    let mut element = BreakpointVisibility::new("Tablet").unwrap();

    assert!(visible_at(&mut window, &mut element, 700.0));
    assert_eq!(
        resolver::try_should_be_visible(
            window.host.table(window.provider),
            window.current(),
            "Tablet",
            false
        ),
        Err(BreakpointError::UnknownBreakpointName("Tablet".to_string()))
    );
}

#[test]
fn test_unresolved_provider_stays_visible() {
    let window = TestWindow::new(BreakpointTable::new());
    let mut element = BreakpointVisibility::new("XL").unwrap();
    assert!(window.resolve(&mut element));
}
