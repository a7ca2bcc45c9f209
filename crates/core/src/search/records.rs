//! Searchable fields for each page's records

use veggieworld_domain::{ChatbotLog, Customer, Order, SystemLog, TeamMember};

use super::query::Searchable;

impl Searchable for Order {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.customer.as_str()]
    }
}

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.name.as_str(), self.email.as_str()]
    }
}

impl Searchable for ChatbotLog {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.customer.as_str(), self.message.as_str()]
    }
}

impl Searchable for SystemLog {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.action.as_str(), self.user.as_str(), self.details.as_str()]
    }
}

impl Searchable for TeamMember {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}
