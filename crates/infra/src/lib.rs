//! # Veggie World Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - Configuration loading (environment, JSON, TOML)
//! - Tracing subscriber setup
//! - Filesystem download sink and notifier adapters
//! - Seed fixtures and the wired [`DashboardContext`]
//!
//! ## Architecture
//! - Implements traits defined in `veggieworld-core`
//! - Contains all "impure" code (filesystem, environment, global subscriber)

pub mod config;
pub mod context;
pub mod download;
pub mod notify;
pub mod observability;
pub mod seed;

// Re-export commonly used items
pub use context::DashboardContext;
pub use download::FileSystemDownloadSink;
pub use notify::{FanoutNotifier, RecordingNotifier, TracingNotifier};
pub use observability::init_tracing;
