//! Load-time fixtures for each back-office page
//!
//! The dashboard has no persistence; every page starts from these records.

use serde::de::DeserializeOwned;
use veggieworld_domain::{ChatbotLog, Customer, DashboardError, Order, Result, SystemLog, TeamMember};

const ORDERS: &str = include_str!("../fixtures/orders.json");
const CUSTOMERS: &str = include_str!("../fixtures/customers.json");
const CHATBOT_LOGS: &str = include_str!("../fixtures/chatbot_logs.json");
const SYSTEM_LOGS: &str = include_str!("../fixtures/system_logs.json");
const TEAM: &str = include_str!("../fixtures/team.json");

fn parse<T: DeserializeOwned>(name: &str, raw: &str) -> Result<Vec<T>> {
    serde_json::from_str(raw)
        .map_err(|e| DashboardError::Internal(format!("Invalid {} fixture: {}", name, e)))
}

pub fn orders() -> Result<Vec<Order>> {
    parse("orders", ORDERS)
}

pub fn customers() -> Result<Vec<Customer>> {
    parse("customers", CUSTOMERS)
}

pub fn chatbot_logs() -> Result<Vec<ChatbotLog>> {
    parse("chatbot logs", CHATBOT_LOGS)
}

pub fn system_logs() -> Result<Vec<SystemLog>> {
    parse("system logs", SYSTEM_LOGS)
}

pub fn team_members() -> Result<Vec<TeamMember>> {
    parse("team", TEAM)
}
