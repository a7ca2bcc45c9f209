//! Log records: WhatsApp chatbot activity and system audit entries

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::badge::{
    Badge, BadgeStyle, BLUE_SOFT, GRAY_SOFT, GREEN_SOFT, PURPLE_SOFT, RED_SOFT, YELLOW_SOFT,
};

/// A single chatbot interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ChatbotLog {
    pub id: String,
    pub timestamp: String,
    pub customer: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub kind: ChatbotLogKind,
    pub message: String,
    pub status: ChatbotLogStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum ChatbotLogKind {
    Order,
    Inquiry,
    Payment,
    Fraud,
    Other,
}

crate::impl_record_enum_conversions!(ChatbotLogKind {
    Order => "order",
    Inquiry => "inquiry",
    Payment => "payment",
    Fraud => "fraud",
    Other => "other",
});

impl Badge for ChatbotLogKind {
    fn badge(&self) -> BadgeStyle {
        match self {
            Self::Order => BadgeStyle::new("Order", GREEN_SOFT),
            Self::Inquiry => BadgeStyle::new("Inquiry", BLUE_SOFT),
            Self::Payment => BadgeStyle::new("Payment", PURPLE_SOFT),
            Self::Fraud => BadgeStyle::new("Fraud Alert", RED_SOFT),
            Self::Other => BadgeStyle::new("Other", GRAY_SOFT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum ChatbotLogStatus {
    Success,
    Warning,
    Error,
}

crate::impl_record_enum_conversions!(ChatbotLogStatus {
    Success => "success",
    Warning => "warning",
    Error => "error",
});

impl Badge for ChatbotLogStatus {
    fn badge(&self) -> BadgeStyle {
        match self {
            Self::Success => BadgeStyle::new("Success", GREEN_SOFT),
            Self::Warning => BadgeStyle::new("Warning", YELLOW_SOFT),
            Self::Error => BadgeStyle::new("Error", RED_SOFT),
        }
    }
}

/// An audit entry from the admin system itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct SystemLog {
    pub id: String,
    pub timestamp: String,
    pub action: String,
    pub user: String,
    pub ip: String,
    pub details: String,
    pub level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

crate::impl_record_enum_conversions!(LogLevel {
    Info => "info",
    Warning => "warning",
    Error => "error",
});

impl Badge for LogLevel {
    fn badge(&self) -> BadgeStyle {
        match self {
            Self::Info => BadgeStyle::new("Info", BLUE_SOFT),
            Self::Warning => BadgeStyle::new("Warning", YELLOW_SOFT),
            Self::Error => BadgeStyle::new("Error", RED_SOFT),
        }
    }
}
