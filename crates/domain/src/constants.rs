//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Export configuration
pub const EXPORT_FILENAME_PREFIX: &str = "orders-export";
pub const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const DEFAULT_SAMPLE_ROWS: usize = 20;
pub const DEFAULT_EXPORT_DIR: &str = "exports";

// Sample order generation
pub const SAMPLE_ORDER_ID_BASE: usize = 1000;
pub const SAMPLE_LOOKBACK_DAYS: i64 = 90;
pub const SAMPLE_PRODUCTS: [&str; 5] = ["Spinach", "Carrots", "Tomatoes", "Cucumbers", "Lettuce"];

// MIME types
pub const MIME_CSV: &str = "text/csv";
pub const MIME_EXCEL: &str = "application/vnd.ms-excel";
pub const MIME_JSON: &str = "application/json";

// Team roster
pub const PRIMARY_ADMIN_ID: &str = "TM-001";
pub const TEAM_MEMBER_ID_PREFIX: &str = "TM-";

// Notices
pub const NOTICE_QUEUE_CAPACITY: usize = 100;

// Badge styling
pub const NEUTRAL_BADGE_CLASS: &str = "bg-gray-50 text-gray-800 border-gray-200";
