//! Record set to downloadable payload

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};
use veggieworld_domain::constants::{EXPORT_DATE_FORMAT, EXPORT_FILENAME_PREFIX};
use veggieworld_domain::{DashboardError, ExportFormat, ExportPayload, Result};

use super::csv::write_csv;
use super::json::write_json;
use super::tabular::Tabular;

/// Serializes record sets into export payloads
#[derive(Debug, Clone)]
pub struct TabularExporter {
    prefix: String,
}

impl Default for TabularExporter {
    fn default() -> Self {
        Self::new(EXPORT_FILENAME_PREFIX)
    }
}

impl TabularExporter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    /// `<prefix>-<YYYY-MM-DD>.<ext>` for a supported format.
    ///
    /// # Errors
    /// Returns `DashboardError::UnsupportedFormat` for formats without an
    /// extension.
    pub fn filename(&self, format: ExportFormat, date: NaiveDate) -> Result<String> {
        let extension = format
            .extension()
            .ok_or_else(|| DashboardError::UnsupportedFormat(format.to_string()))?;
        Ok(format!("{}-{}.{}", self.prefix, date.format(EXPORT_DATE_FORMAT), extension))
    }

    /// Serialize `records` in `format`.
    ///
    /// Excel output is CSV content labelled with the Excel MIME type.
    ///
    /// # Errors
    /// - `DashboardError::UnsupportedFormat` for PDF; no payload is built.
    /// - `DashboardError::Export` if JSON serialization fails.
    pub fn export<T: Tabular + Serialize>(
        &self,
        records: &[T],
        format: ExportFormat,
        date: NaiveDate,
    ) -> Result<ExportPayload> {
        let mime_type = match format.mime_type() {
            Some(mime) => mime,
            None => {
                warn!(format = %format, "export_format_unsupported");
                return Err(DashboardError::UnsupportedFormat(format.to_string()));
            }
        };

        let body = match format {
            ExportFormat::Csv | ExportFormat::Excel => write_csv(records),
            ExportFormat::Json => write_json(records)?,
            ExportFormat::Pdf => {
                return Err(DashboardError::UnsupportedFormat(format.to_string()));
            }
        };

        let filename = self.filename(format, date)?;
        debug!(format = %format, rows = records.len(), bytes = body.len(), %filename, "export_serialized");

        Ok(ExportPayload { filename, mime_type, bytes: body.into_bytes() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        id: &'static str,
        products: &'static str,
    }

    impl Tabular for Row {
        fn columns() -> &'static [&'static str] {
            &["id", "products"]
        }

        fn values(&self) -> Vec<String> {
            vec![self.id.to_string(), self.products.to_string()]
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_filename_uses_padded_date() {
        let exporter = TabularExporter::default();
        assert_eq!(
            exporter.filename(ExportFormat::Csv, date()).unwrap(),
            "orders-export-2024-03-09.csv"
        );
        assert_eq!(
            exporter.filename(ExportFormat::Excel, date()).unwrap(),
            "orders-export-2024-03-09.xls"
        );
    }

    #[test]
    fn test_excel_is_csv_content() {
        let exporter = TabularExporter::default();
        let rows = [Row { id: "ORD-1000", products: "Spinach, Carrots" }];

        let csv = exporter.export(&rows, ExportFormat::Csv, date()).unwrap();
        let excel = exporter.export(&rows, ExportFormat::Excel, date()).unwrap();

        assert_eq!(csv.bytes, excel.bytes);
        assert_eq!(csv.mime_type, "text/csv");
        assert_eq!(excel.mime_type, "application/vnd.ms-excel");
    }

    #[test]
    fn test_pdf_is_unsupported() {
        let exporter = TabularExporter::default();
        let rows = [Row { id: "ORD-1000", products: "Lettuce" }];

        let err = exporter.export(&rows, ExportFormat::Pdf, date()).unwrap_err();
        assert_eq!(err, DashboardError::UnsupportedFormat("pdf".into()));
        assert!(exporter.filename(ExportFormat::Pdf, date()).is_err());
    }

    #[test]
    fn test_custom_prefix() {
        let exporter = TabularExporter::new("customers-export");
        let payload = exporter.export::<Row>(&[], ExportFormat::Json, date()).unwrap();
        assert_eq!(payload.filename, "customers-export-2024-03-09.json");
        assert_eq!(payload.as_text(), Some("[]"));
    }
}
