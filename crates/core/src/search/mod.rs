//! Filter/search engine shared by the Orders, Customers and Logs pages

pub mod facets;
pub mod query;
mod records;
pub mod sort;

pub use facets::{AnyRecord, ChatbotLogFilter, CustomerFilter, Facet, OrderFilter, SystemLogFilter};
pub use query::{filter_records, SearchQuery, Searchable};
pub use sort::{sort_by_key, SortDirection};
