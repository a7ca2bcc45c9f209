//! Port interfaces for the environment around the core
//!
//! These traits define the boundaries between core business logic and the
//! shell it runs in: where exported files go, how notices reach the
//! operator, and what "today" is.

use chrono::NaiveDate;
use veggieworld_domain::{DeliveryReceipt, ExportPayload, Notice, Result};

/// Hands a finished export to the environment's download mechanism
///
/// Delivery is fire-and-forget from the caller's point of view: there is no
/// retry and no progress reporting.
pub trait DownloadSink: Send + Sync {
    /// Save the payload under its filename.
    ///
    /// # Errors
    /// Returns `DashboardError::Delivery` if the payload could not be saved.
    fn deliver(&self, payload: &ExportPayload) -> Result<DeliveryReceipt>;
}

/// Surfaces toasts and alerts to the operator
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Source of the current calendar date
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
