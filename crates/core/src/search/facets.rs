//! Dropdown facet filters
//!
//! Each page pairs its search box with "Status"/"Payment"/"Source" style
//! dropdowns. A `None` facet is the "All ..." entry.

use serde::{Deserialize, Serialize};
use veggieworld_domain::{
    ChatbotLog, ChatbotLogKind, ChatbotLogStatus, Customer, CustomerStatus, CustomerType,
    LogLevel, Order, OrderSource, OrderStatus, PaymentStatus, SystemLog,
};

/// A structured predicate over one record type
pub trait Facet<T> {
    fn matches(&self, record: &T) -> bool;
}

/// Matches every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyRecord;

impl<T> Facet<T> for AnyRecord {
    fn matches(&self, _record: &T) -> bool {
        true
    }
}

fn admits<V: PartialEq>(wanted: Option<V>, actual: V) -> bool {
    wanted.map_or(true, |wanted| wanted == actual)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub payment: Option<PaymentStatus>,
    pub source: Option<OrderSource>,
}

impl OrderFilter {
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_payment(mut self, payment: PaymentStatus) -> Self {
        self.payment = Some(payment);
        self
    }

    pub fn with_source(mut self, source: OrderSource) -> Self {
        self.source = Some(source);
        self
    }
}

impl Facet<Order> for OrderFilter {
    fn matches(&self, record: &Order) -> bool {
        admits(self.status, record.status)
            && admits(self.payment, record.payment)
            && admits(self.source, record.source)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerFilter {
    pub status: Option<CustomerStatus>,
    pub kind: Option<CustomerType>,
}

impl Facet<Customer> for CustomerFilter {
    fn matches(&self, record: &Customer) -> bool {
        admits(self.status, record.status) && admits(self.kind, record.kind)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatbotLogFilter {
    pub kind: Option<ChatbotLogKind>,
    pub status: Option<ChatbotLogStatus>,
}

impl Facet<ChatbotLog> for ChatbotLogFilter {
    fn matches(&self, record: &ChatbotLog) -> bool {
        admits(self.kind, record.kind) && admits(self.status, record.status)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemLogFilter {
    pub level: Option<LogLevel>,
}

impl Facet<SystemLog> for SystemLogFilter {
    fn matches(&self, record: &SystemLog) -> bool {
        admits(self.level, record.level)
    }
}
