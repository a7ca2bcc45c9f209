//! Observability infrastructure
//!
//! Structured logging through `tracing`. Library code only emits events;
//! installing a subscriber is left to the embedding shell via
//! [`init_tracing`].

pub mod logging;

pub use logging::{init_tracing, LOG_FILTER_ENV};
