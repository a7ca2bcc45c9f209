//! Flat tabular view of records
//!
//! The column list is a property of the record type, so an empty record set
//! still has a well-defined header.

use veggieworld_domain::{ChatbotLog, Customer, Order, SystemLog};

/// A homogeneous flat record that can be written as a table row
pub trait Tabular {
    /// Column names in the record's natural field order. These match the
    /// record's serialized keys.
    fn columns() -> &'static [&'static str];

    /// Cell values in [`Tabular::columns`] order.
    fn values(&self) -> Vec<String>;
}

impl Tabular for Order {
    fn columns() -> &'static [&'static str] {
        &["id", "customer", "source", "amount", "date", "status", "payment"]
    }

    fn values(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.customer.clone(),
            self.source.to_string(),
            self.amount.clone(),
            self.date.clone(),
            self.status.to_string(),
            self.payment.to_string(),
        ]
    }
}

impl Tabular for Customer {
    fn columns() -> &'static [&'static str] {
        &["id", "name", "email", "phone", "orders", "totalSpent", "type", "status"]
    }

    fn values(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.orders.to_string(),
            self.total_spent.clone(),
            self.kind.to_string(),
            self.status.to_string(),
        ]
    }
}

impl Tabular for ChatbotLog {
    fn columns() -> &'static [&'static str] {
        &["id", "timestamp", "customer", "phone", "type", "message", "status"]
    }

    fn values(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.timestamp.clone(),
            self.customer.clone(),
            self.phone.clone(),
            self.kind.to_string(),
            self.message.clone(),
            self.status.to_string(),
        ]
    }
}

impl Tabular for SystemLog {
    fn columns() -> &'static [&'static str] {
        &["id", "timestamp", "action", "user", "ip", "details", "level"]
    }

    fn values(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.timestamp.clone(),
            self.action.clone(),
            self.user.clone(),
            self.ip.clone(),
            self.details.clone(),
            self.level.to_string(),
        ]
    }
}
