//! User-visible notices (toasts and alerts)

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::errors::DashboardError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum NoticeVariant {
    #[default]
    Default,
    /// Transient error toast
    Destructive,
    /// Modal alert the user must dismiss
    Blocking,
}

/// A message surfaced to the operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), variant: NoticeVariant::Default }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }

    pub fn blocking(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), variant: NoticeVariant::Blocking }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self.variant, NoticeVariant::Default)
    }
}

impl From<&DashboardError> for Notice {
    fn from(err: &DashboardError) -> Self {
        match err {
            DashboardError::UnsupportedFormat(_) => Self::blocking(
                "Export Unavailable",
                "PDF generation requires server-side processing. This is a demo only.",
            ),
            DashboardError::Validation { message, .. } => Self::error("Error", message.clone()),
            DashboardError::ProtectedMember(_) => {
                Self::error("Error", "The primary administrator cannot be removed")
            }
            DashboardError::NotFound(what) => Self::error("Error", format!("{what} was not found")),
            DashboardError::Export(_) | DashboardError::Delivery(_) => Self::error(
                "Export Failed",
                "There was an error exporting your orders. Please try again.",
            ),
            DashboardError::Config(_) | DashboardError::Internal(_) => {
                Self::error("Error", "Something went wrong. Please try again.")
            }
        }
    }
}
