//! In-memory port fakes

use chrono::NaiveDate;
use parking_lot::Mutex;
use veggieworld_core::ports::{DownloadSink, Notifier};
use veggieworld_domain::{
    DashboardError, DeliveryReceipt, ExportPayload, Notice, Result as DomainResult,
};

/// Download sink that keeps every delivered payload.
#[derive(Default)]
pub struct RecordingSink {
    payloads: Mutex<Vec<ExportPayload>>,
    failure: Option<String>,
}

impl RecordingSink {
    /// Sink that refuses every payload with `DashboardError::Delivery`.
    pub fn failing(reason: &str) -> Self {
        Self { payloads: Mutex::new(Vec::new()), failure: Some(reason.to_string()) }
    }

    pub fn payloads(&self) -> Vec<ExportPayload> {
        self.payloads.lock().clone()
    }

    /// Text of the single delivered payload.
    pub fn only_text(&self) -> String {
        let payloads = self.payloads.lock();
        assert_eq!(payloads.len(), 1, "expected exactly one delivery");
        payloads[0].as_text().expect("utf-8 payload").to_string()
    }
}

impl DownloadSink for RecordingSink {
    fn deliver(&self, payload: &ExportPayload) -> DomainResult<DeliveryReceipt> {
        if let Some(reason) = &self.failure {
            return Err(DashboardError::Delivery(reason.clone()));
        }
        self.payloads.lock().push(payload.clone());
        Ok(DeliveryReceipt {
            filename: payload.filename.clone(),
            location: None,
            bytes_written: payload.len(),
        })
    }
}

/// Notifier that keeps every notice.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.lock().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}

pub fn export_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 4).expect("valid date")
}
