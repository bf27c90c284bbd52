//! Tests for loading breakpoint tables from configuration.

use floem_breakpoints_test::prelude::*;

#[test]
fn test_table_from_json_map() {
    let table: BreakpointTable =
        serde_json::from_str(r#"{ "Wide": 1200, "Phone": 0, "Tablet": 720.5 }"#).unwrap();

    let pairs: Vec<_> = table.iter().collect();
    assert_eq!(pairs, [("Phone", 0.0), ("Tablet", 720.5), ("Wide", 1200.0)]);
}

#[test]
fn test_table_serializes_in_threshold_order() {
    let json = serde_json::to_string(&BreakpointTable::standard()).unwrap();
    assert_eq!(
        json,
        r#"{"XS":600.0,"S":800.0,"M":1000.0,"L":1200.0,"XL":1400.0,"XXL":1600.0}"#
    );

    let back: BreakpointTable = serde_json::from_str(&json).unwrap();
    assert_eq!(back, BreakpointTable::standard());
}

#[test]
fn test_duplicate_name_is_rejected() {
    let err = serde_json::from_str::<BreakpointTable>(r#"{ "M": 1000, "M": 1200 }"#).unwrap_err();
    assert!(err.to_string().contains("breakpoint `M` already exists"), "{err}");
}

#[test]
fn test_non_map_is_rejected() {
    let err = serde_json::from_str::<BreakpointTable>(r#"["XS", 600]"#).unwrap_err();
    assert!(err.to_string().contains("a map of breakpoint names"), "{err}");
}

#[test]
fn test_duplicate_threshold_is_rejected() {
    let err = serde_json::from_str::<BreakpointTable>(r#"{ "A": 100, "B": 100 }"#).unwrap_err();
    assert!(err.to_string().contains("already used by `A`"), "{err}");
}
