//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EXPORT_DIR, DEFAULT_SAMPLE_ROWS, PRIMARY_ADMIN_ID};
use crate::errors::{DashboardError, Result};
use crate::types::ExportFormat;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub export: ExportConfig,
    pub roster: RosterConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Check values that deserialize fine but cannot drive the dashboard.
    ///
    /// # Errors
    /// Returns `DashboardError::Config` if the default export format has no
    /// writer.
    pub fn validate(&self) -> Result<()> {
        if !self.export.default_format.is_supported() {
            return Err(DashboardError::Config(format!(
                "Export format '{}' cannot be the default",
                self.export.default_format
            )));
        }
        Ok(())
    }
}

/// Export configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory the download sink writes files into
    pub output_dir: String,
    /// Number of sample rows generated per export
    pub sample_rows: usize,
    pub default_format: ExportFormat,
}

/// Team roster configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Id of the member that can never be deleted
    pub primary_admin_id: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_EXPORT_DIR.to_string(),
            sample_rows: DEFAULT_SAMPLE_ROWS,
            default_format: ExportFormat::Csv,
        }
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self { primary_admin_id: PRIMARY_ADMIN_ID.to_string() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}
