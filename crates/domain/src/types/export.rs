//! Export formats and payloads

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::{MIME_CSV, MIME_EXCEL, MIME_JSON};

/// File format offered by the export dialog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    /// CSV content served with an Excel MIME type and `.xls` extension
    Excel,
    Json,
    /// Offered in the dialog but never produced
    Pdf,
}

crate::impl_record_enum_conversions!(ExportFormat {
    Csv => "csv",
    Excel => "excel",
    Json => "json",
    Pdf => "pdf",
});

impl ExportFormat {
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Pdf)
    }

    /// File extension, `None` for unsupported formats.
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            Self::Csv => Some("csv"),
            Self::Excel => Some("xls"),
            Self::Json => Some("json"),
            Self::Pdf => None,
        }
    }

    /// MIME type, `None` for unsupported formats.
    pub fn mime_type(&self) -> Option<&'static str> {
        match self {
            Self::Csv => Some(MIME_CSV),
            Self::Excel => Some(MIME_EXCEL),
            Self::Json => Some(MIME_JSON),
            Self::Pdf => None,
        }
    }
}

/// Serialized export ready to hand to a download sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub filename: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportPayload {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Payload content as UTF-8 text. Every supported format is text.
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }
}

/// Where a delivered payload ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub filename: String,
    pub location: Option<PathBuf>,
    pub bytes_written: usize,
}
