//! Error types used throughout the application

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the back office
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum DashboardError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Protected team member cannot be removed: {0}")]
    ProtectedMember(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Delivery error: {0}")]
    Delivery(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DashboardError {
    /// Build a field-level validation error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// How serious the failure is. Nothing here is fatal to the process.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound(_) => ErrorSeverity::Info,
            Self::UnsupportedFormat(_) | Self::Validation { .. } | Self::ProtectedMember(_) => {
                ErrorSeverity::Warning
            }
            Self::Export(_) | Self::Delivery(_) | Self::Config(_) | Self::Internal(_) => {
                ErrorSeverity::Error
            }
        }
    }

    /// Whether the error was caused by the user's input rather than a fault.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedFormat(_)
                | Self::Validation { .. }
                | Self::ProtectedMember(_)
                | Self::NotFound(_)
        )
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Severity level for monitoring and user notices
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Result type alias for back office operations
pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = DashboardError::validation("email", "Name and email are required fields");
        assert_eq!(err.to_string(), "Invalid email: Name and email are required fields");
    }

    #[test]
    fn test_severity_and_user_facing() {
        let protected = DashboardError::ProtectedMember("TM-001".into());
        assert_eq!(protected.severity(), ErrorSeverity::Warning);
        assert!(protected.is_user_facing());

        let delivery = DashboardError::Delivery("disk full".into());
        assert_eq!(delivery.severity(), ErrorSeverity::Error);
        assert!(!delivery.is_user_facing());
    }

    #[test]
    fn test_serde_tagging() {
        let err = DashboardError::UnsupportedFormat("pdf".into());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "UnsupportedFormat");
        assert_eq!(json["message"], "pdf");
    }
}
