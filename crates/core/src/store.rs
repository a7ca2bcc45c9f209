//! In-memory record store backing a page
//!
//! A store is filled once when the page loads and is read-only afterwards.
//! Searching and faceting return borrowed views in store order; nothing here
//! mutates or reorders the underlying records.

use std::collections::HashSet;

use tracing::debug;
use veggieworld_domain::{
    ChatbotLog, Customer, DashboardError, Order, Result, SystemLog, TeamMember,
};

use crate::search::{Facet, SearchQuery, Searchable};

/// A record with a collection-unique id
pub trait Record {
    fn id(&self) -> &str;
}

impl Record for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Customer {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for ChatbotLog {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for SystemLog {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for TeamMember {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Reject a collection that repeats an id.
///
/// # Errors
/// Returns `DashboardError::Validation` naming the first duplicated id.
pub fn ensure_unique_ids<T: Record>(records: &[T]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            return Err(DashboardError::validation("id", format!("duplicate id '{}'", record.id())));
        }
    }
    Ok(())
}

/// Load-time-fixed, ordered collection of records
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    records: Vec<T>,
}

impl<T: Record + Searchable> RecordStore<T> {
    /// Create a store, validating id uniqueness.
    ///
    /// # Errors
    /// Returns `DashboardError::Validation` if two records share an id.
    pub fn new(records: Vec<T>) -> Result<Self> {
        ensure_unique_ids(&records)?;
        Ok(Self { records })
    }

    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Records matching the free-text query, in store order.
    pub fn search(&self, query: &str) -> Vec<&T> {
        self.query(query, &crate::search::AnyRecord)
    }

    /// Records matching both the free-text query and the facet filter.
    pub fn query<F: Facet<T>>(&self, query: &str, facet: &F) -> Vec<&T> {
        let text = SearchQuery::new(query);
        let matched: Vec<&T> = self
            .records
            .iter()
            .filter(|record| text.matches(*record) && facet.matches(*record))
            .collect();

        debug!(total = self.records.len(), matched = matched.len(), "records_filtered");
        matched
    }
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

impl<'a, T> IntoIterator for &'a RecordStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use veggieworld_domain::{OrderSource, OrderStatus, PaymentStatus};

    use super::*;
    use crate::search::OrderFilter;

    fn order(id: &str, customer: &str, status: OrderStatus) -> Order {
        Order {
            id: id.into(),
            customer: customer.into(),
            source: OrderSource::WhatsApp,
            amount: "₦5,000".into(),
            date: "today".into(),
            status,
            payment: PaymentStatus::Paid,
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = RecordStore::new(vec![
            order("ORD-1", "Alice", OrderStatus::Packed),
            order("ORD-1", "Bob", OrderStatus::Packed),
        ]);
        assert!(matches!(result, Err(DashboardError::Validation { .. })));
    }

    #[test]
    fn test_get_by_id() {
        let store = RecordStore::new(vec![order("ORD-1", "Alice", OrderStatus::Packed)]).unwrap();
        assert_eq!(store.get("ORD-1").map(|o| o.customer.as_str()), Some("Alice"));
        assert!(store.get("ORD-9").is_none());
    }

    #[test]
    fn test_query_combines_text_and_facet() {
        let store = RecordStore::new(vec![
            order("ORD-1", "Alice", OrderStatus::Packed),
            order("ORD-2", "Alice", OrderStatus::Delivered),
            order("ORD-3", "Bob", OrderStatus::Delivered),
        ])
        .unwrap();

        let delivered = OrderFilter::default().with_status(OrderStatus::Delivered);
        let ids: Vec<_> = store.query("alice", &delivered).iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD-2"]);

        let ids: Vec<_> = store.query("", &delivered).iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD-2", "ORD-3"]);
    }
}
