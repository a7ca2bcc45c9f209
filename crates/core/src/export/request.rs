//! Export dialog options

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use veggieworld_domain::{DashboardError, ExportFormat, OrderStatus, Result};

use super::sample::SampleOrderRow;

/// Date window applied to exported orders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DateRange {
    #[default]
    All,
    Last30,
    Last90,
    /// Inclusive on both ends; an open side is unbounded.
    Custom { start: Option<NaiveDate>, end: Option<NaiveDate> },
}

impl DateRange {
    /// Whether `date` falls inside the window ending at `today`.
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match *self {
            Self::All => true,
            Self::Last30 => date >= today - Duration::days(30),
            Self::Last90 => date >= today - Duration::days(90),
            Self::Custom { start, end } => {
                start.map_or(true, |start| date >= start) && end.map_or(true, |end| date <= end)
            }
        }
    }
}

/// Everything the export dialog submits
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub date_range: DateRange,
    /// `None` exports every status
    pub status: Option<OrderStatus>,
}

impl ExportRequest {
    pub fn new(format: ExportFormat) -> Self {
        Self { format, ..Self::default() }
    }

    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// # Errors
    /// Returns `DashboardError::Validation` if a custom range ends before it
    /// starts.
    pub fn validate(&self) -> Result<()> {
        if let DateRange::Custom { start: Some(start), end: Some(end) } = self.date_range {
            if end < start {
                return Err(DashboardError::validation(
                    "date_range",
                    "End date must not be before start date",
                ));
            }
        }
        Ok(())
    }

    pub fn matches(&self, row: &SampleOrderRow, today: NaiveDate) -> bool {
        self.date_range.contains(row.date, today) && self.status.map_or(true, |s| s == row.status)
    }

    /// Rows the request selects, in input order.
    pub fn apply(&self, rows: Vec<SampleOrderRow>, today: NaiveDate) -> Vec<SampleOrderRow> {
        rows.into_iter().filter(|row| self.matches(row, today)).collect()
    }
}
