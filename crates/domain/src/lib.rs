//! # Veggie World Domain
//!
//! Business domain types and models for the Veggie World back office.
//!
//! This crate contains:
//! - Record types (Order, Customer, ChatbotLog, SystemLog, TeamMember)
//! - Closed status/category enums and their badge lookups
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other Veggie World crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
