//! # Veggie World Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Record stores and the free-text/facet search engine
//! - Tabular export (CSV, Excel-labelled CSV, JSON)
//! - Team roster mutation rules
//! - Port interfaces for delivery, notification and time
//!
//! ## Architecture Principles
//! - Only depends on `veggieworld-domain`
//! - No filesystem, network or UI code
//! - All external effects via traits

pub mod export;
pub mod ports;
pub mod roster;
pub mod search;
pub mod store;

pub use export::{
    generate_sample_orders, DateRange, ExportRequest, ExportService, SampleOrderRow, Tabular,
    TabularExporter,
};
pub use ports::{Clock, DownloadSink, FixedClock, Notifier, SystemClock};
pub use roster::{RosterService, TeamRoster};
pub use search::{filter_records, SearchQuery, Searchable};
pub use store::{Record, RecordStore};
