//! Tabular export of record sets
//!
//! Records are flattened through [`Tabular`], serialized by
//! [`TabularExporter`] and handed to a download sink by [`ExportService`].

pub mod csv;
pub mod exporter;
pub mod json;
pub mod request;
pub mod sample;
pub mod service;
pub mod tabular;

pub use csv::{escape_field, parse_csv, write_csv, CsvTable};
pub use exporter::TabularExporter;
pub use json::write_json;
pub use request::{DateRange, ExportRequest};
pub use sample::{generate_sample_orders, SampleOrderRow};
pub use service::ExportService;
pub use tabular::Tabular;
