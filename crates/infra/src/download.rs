//! Filesystem download sink
//!
//! Stands in for the browser download: each payload becomes a file named by
//! its export filename inside the configured directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use veggieworld_core::ports::DownloadSink;
use veggieworld_domain::{DashboardError, DeliveryReceipt, ExportConfig, ExportPayload, Result};

/// Writes payloads into a directory, creating it on first use
#[derive(Debug, Clone)]
pub struct FileSystemDownloadSink {
    dir: PathBuf,
}

impl FileSystemDownloadSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(&config.output_dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn target_path(&self, filename: &str) -> Result<PathBuf> {
        let plain = !filename.is_empty()
            && filename != "."
            && filename != ".."
            && !filename.contains(['/', '\\']);
        if !plain {
            warn!(filename, "download_filename_rejected");
            return Err(DashboardError::Delivery(format!("Refusing to write '{}'", filename)));
        }
        Ok(self.dir.join(filename))
    }
}

impl DownloadSink for FileSystemDownloadSink {
    fn deliver(&self, payload: &ExportPayload) -> Result<DeliveryReceipt> {
        let path = self.target_path(&payload.filename)?;

        fs::create_dir_all(&self.dir).map_err(|e| {
            DashboardError::Delivery(format!(
                "Failed to create export directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;
        fs::write(&path, &payload.bytes).map_err(|e| {
            DashboardError::Delivery(format!("Failed to write {}: {}", path.display(), e))
        })?;

        info!(path = %path.display(), bytes = payload.len(), mime = payload.mime_type, "export_written");

        Ok(DeliveryReceipt {
            filename: payload.filename.clone(),
            location: Some(path),
            bytes_written: payload.len(),
        })
    }
}
