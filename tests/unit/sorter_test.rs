//! Tests for the expiration sorter

use serde_json::{Value, json};

use larder::core::services::sort_items_by_expiration;

use super::common::dated_item;

fn ids(items: &[Value]) -> Vec<&str> {
    items
        .iter()
        .map(|i| i.get("id").and_then(Value::as_str).unwrap_or("?"))
        .collect()
}

#[test]
fn sorts_soonest_first() {
    let items = json!([
        dated_item("F001", "2023-12-15"),
        dated_item("F002", "2023-12-10"),
    ]);
    assert_eq!(ids(&sort_items_by_expiration(&items)), ["F002", "F001"]);
}

#[test]
fn lexicographic_order_is_chronological() {
    let items = json!([
        dated_item("F001", "2024-01-02"),
        dated_item("F002", "2023-12-28"),
        dated_item("F003", "2023-02-05"),
    ]);
    assert_eq!(
        ids(&sort_items_by_expiration(&items)),
        ["F003", "F002", "F001"]
    );
}

#[test]
fn equal_dates_retain_input_order() {
    let items = json!([
        dated_item("F001", "2023-12-10"),
        dated_item("F002", "2023-12-10"),
        dated_item("F003", "2023-12-09"),
        dated_item("F004", "2023-12-10"),
    ]);
    assert_eq!(
        ids(&sort_items_by_expiration(&items)),
        ["F003", "F001", "F002", "F004"]
    );
}

#[test]
fn missing_date_sorts_last() {
    let items = json!([
        { "id": "F001", "name": "Apples" },
        dated_item("F002", "2023-12-10"),
    ]);
    assert_eq!(ids(&sort_items_by_expiration(&items)), ["F002", "F001"]);
}

#[test]
fn non_string_date_sorts_last() {
    let items = json!([
        { "id": "F001", "expiration_date": 20231210 },
        dated_item("F002", "2023-12-10"),
    ]);
    assert_eq!(ids(&sort_items_by_expiration(&items)), ["F002", "F001"]);
}

// Non-object entries are kept, keyed by the sentinel maximum date.
#[test]
fn non_object_entries_sort_last() {
    let items = json!(["stray", dated_item("F001", "2023-12-10")]);
    let sorted = sort_items_by_expiration(&items);
    assert_eq!(sorted.len(), 2);
    assert_eq!(sorted[0].get("id").and_then(Value::as_str), Some("F001"));
    assert_eq!(sorted[1], json!("stray"));
}

#[test]
fn empty_input_yields_empty() {
    assert!(sort_items_by_expiration(&json!([])).is_empty());
}

#[test]
fn non_array_yields_empty() {
    for input in [json!(null), json!("inventory"), json!(3.5), json!({})] {
        assert!(
            sort_items_by_expiration(&input).is_empty(),
            "input {input} should yield empty"
        );
    }
}

#[test]
fn input_is_not_mutated() {
    let items = json!([
        dated_item("F001", "2023-12-15"),
        dated_item("F002", "2023-12-10"),
    ]);
    let before = items.clone();
    let _ = sort_items_by_expiration(&items);
    assert_eq!(items, before);
}
