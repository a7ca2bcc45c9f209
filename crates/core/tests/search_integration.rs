//! Integration tests for record search
//!
//! Exercises the store-level search path the Orders and Customers pages use.

mod support;

use support::fixtures::{customer, order};
use veggieworld_core::search::{sort_by_key, OrderFilter, SortDirection};
use veggieworld_core::RecordStore;
use veggieworld_domain::OrderStatus;

// ============================================================================
// Free-text query
// ============================================================================

#[test]
fn test_customer_name_match_is_case_insensitive() {
    let store = RecordStore::new(vec![
        order("ORD-1", "Alice"),
        order("ORD-2", "Bob"),
        order("ORD-3", "alice smith"),
    ])
    .unwrap();

    let ids: Vec<_> = store.search("ALICE").iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["ORD-1", "ORD-3"]);
}

#[test]
fn test_blank_query_returns_everything_in_order() {
    let store = RecordStore::new(vec![order("ORD-1", "Alice"), order("ORD-2", "Bob")]).unwrap();

    for query in ["", "   ", "\t\n"] {
        let ids: Vec<_> = store.search(query).iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD-1", "ORD-2"], "query {query:?}");
    }
}

#[test]
fn test_id_field_is_searchable() {
    let store = RecordStore::new(vec![order("ORD-7829", "Chioma"), order("ORD-7828", "Emeka")])
        .unwrap();

    let ids: Vec<_> = store.search("7828").iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["ORD-7828"]);
}

#[test]
fn test_customer_email_is_searchable() {
    let store = RecordStore::new(vec![
        customer("CUS-001", "Oluwaseun Adeyemi", "seun@restaurant.ng"),
        customer("CUS-002", "Chioma Eze", "chioma.eze@gmail.com"),
    ])
    .unwrap();

    let names: Vec<_> = store.search("GMAIL").iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Chioma Eze"]);
}

#[test]
fn test_regex_characters_match_literally() {
    let store = RecordStore::new(vec![
        customer("CUS-001", "A.B Foods", "ab@foods.ng"),
        customer("CUS-002", "AxB Foods", "axb@foods.ng"),
    ])
    .unwrap();

    let ids: Vec<_> = store.search("a.b").iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["CUS-001"]);
    assert!(store.search("(").is_empty());
}

#[test]
fn test_results_are_subsequence_of_store() {
    let store = RecordStore::new(
        (0..50).map(|i| order(&format!("ORD-{i}"), &format!("Customer {}", i % 7))).collect(),
    )
    .unwrap();

    let matched = store.search("customer 3");
    let mut cursor = store.all().iter();
    for record in matched {
        assert!(cursor.any(|candidate| candidate.id == record.id), "order not preserved");
    }
}

// ============================================================================
// Facets and sorting
// ============================================================================

#[test]
fn test_status_facet_composes_with_query() {
    let mut packed = order("ORD-2", "Alice");
    packed.status = OrderStatus::Packed;
    let store = RecordStore::new(vec![order("ORD-1", "Alice"), packed, order("ORD-3", "Bob")])
        .unwrap();

    let filter = OrderFilter::default().with_status(OrderStatus::Packed);
    let ids: Vec<_> = store.query("alice", &filter).iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["ORD-2"]);
}

#[test]
fn test_sorted_view_leaves_store_untouched() {
    let store = RecordStore::new(vec![
        order("ORD-1", "Chioma"),
        order("ORD-2", "Adebayo"),
        order("ORD-3", "Bola"),
    ])
    .unwrap();

    let sorted = sort_by_key(store.search(""), |o| o.customer.clone(), SortDirection::Ascending);
    let names: Vec<_> = sorted.iter().map(|o| o.customer.as_str()).collect();
    assert_eq!(names, vec!["Adebayo", "Bola", "Chioma"]);
    assert_eq!(store.all()[0].id, "ORD-1");
}
