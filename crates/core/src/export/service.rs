//! Export workflow: generate, filter, serialize, deliver, notify

use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{error, info, instrument, warn};
use veggieworld_domain::constants::DEFAULT_SAMPLE_ROWS;
use veggieworld_domain::{
    DashboardError, DeliveryReceipt, ExportFormat, ExportPayload, Notice, Result,
};

use super::exporter::TabularExporter;
use super::request::ExportRequest;
use super::sample::generate_sample_orders;
use super::tabular::Tabular;
use crate::ports::{Clock, DownloadSink, Notifier};

/// Export service
///
/// Every call ends in exactly one notice: a success toast, a destructive
/// "Export Failed" toast, or a blocking alert for unsupported formats.
pub struct ExportService {
    sink: Arc<dyn DownloadSink>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    exporter: TabularExporter,
    rng: Mutex<StdRng>,
    sample_rows: usize,
}

impl ExportService {
    pub fn new(
        sink: Arc<dyn DownloadSink>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            sink,
            notifier,
            clock,
            exporter: TabularExporter::default(),
            rng: Mutex::new(StdRng::from_entropy()),
            sample_rows: DEFAULT_SAMPLE_ROWS,
        }
    }

    /// Number of generated rows per orders export
    pub fn with_sample_rows(mut self, rows: usize) -> Self {
        self.sample_rows = rows;
        self
    }

    /// Seed sample generation for reproducible exports.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Run the orders export the dialog submits.
    ///
    /// # Errors
    /// - `DashboardError::UnsupportedFormat` for PDF. Nothing is generated or
    ///   delivered.
    /// - `DashboardError::Validation` for an inverted custom date range.
    /// - `DashboardError::Export` / `DashboardError::Delivery` when
    ///   serialization or the download sink fails.
    #[instrument(skip(self), fields(format = %request.format))]
    pub fn export_orders(&self, request: &ExportRequest) -> Result<DeliveryReceipt> {
        let outcome = self.prepare_orders(request).and_then(|payload| self.deliver(&payload));
        self.finish(outcome, "Orders", request.format)
    }

    /// Export an arbitrary record set, e.g. a filtered page view.
    ///
    /// # Errors
    /// Same as [`ExportService::export_orders`], minus request validation.
    #[instrument(skip(self, records), fields(rows = records.len()))]
    pub fn export_records<T: Tabular + Serialize>(
        &self,
        records: &[T],
        format: ExportFormat,
    ) -> Result<DeliveryReceipt> {
        let outcome = self
            .exporter
            .export(records, format, self.clock.today())
            .and_then(|payload| self.deliver(&payload));
        self.finish(outcome, "Records", format)
    }

    fn prepare_orders(&self, request: &ExportRequest) -> Result<ExportPayload> {
        request.validate()?;
        if !request.format.is_supported() {
            return Err(DashboardError::UnsupportedFormat(request.format.to_string()));
        }

        let today = self.clock.today();
        let generated = {
            let mut rng = self.rng.lock();
            generate_sample_orders(self.sample_rows, today, &mut *rng)
        };
        let rows = request.apply(generated, today);
        self.exporter.export(&rows, request.format, today)
    }

    fn deliver(&self, payload: &ExportPayload) -> Result<DeliveryReceipt> {
        self.sink.deliver(payload)
    }

    fn finish(
        &self,
        outcome: Result<DeliveryReceipt>,
        subject: &str,
        format: ExportFormat,
    ) -> Result<DeliveryReceipt> {
        match outcome {
            Ok(receipt) => {
                info!(
                    format = %format,
                    filename = %receipt.filename,
                    bytes = receipt.bytes_written,
                    "export_completed"
                );
                self.notifier.notify(Notice::success(
                    "Export Successful",
                    format!("{subject} exported in {} format.", format.as_str().to_uppercase()),
                ));
                Ok(receipt)
            }
            Err(err) => {
                if err.is_user_facing() {
                    warn!(format = %format, error = %err, "export_rejected");
                } else {
                    error!(format = %format, error = %err, "export_failed");
                }
                self.notifier.notify(Notice::from(&err));
                Err(err)
            }
        }
    }
}
