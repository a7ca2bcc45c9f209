//! Customer records

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::badge::{Badge, BadgeStyle, BLUE_SOFT, GRAY_SOFT, GREEN_SOFT, PURPLE_SOFT};

/// Customer as shown on the Customers page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Number of orders placed
    pub orders: u32,
    /// Currency display string
    pub total_spent: String,
    #[serde(rename = "type")]
    pub kind: CustomerType,
    pub status: CustomerStatus,
}

/// Business or individual customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    B2b,
    B2c,
}

crate::impl_record_enum_conversions!(CustomerType {
    B2b => "b2b",
    B2c => "b2c",
});

impl Badge for CustomerType {
    fn badge(&self) -> BadgeStyle {
        match self {
            Self::B2b => BadgeStyle::new("B2B", PURPLE_SOFT),
            Self::B2c => BadgeStyle::new("B2C", BLUE_SOFT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Inactive,
}

crate::impl_record_enum_conversions!(CustomerStatus {
    Active => "active",
    Inactive => "inactive",
});

impl Badge for CustomerStatus {
    fn badge(&self) -> BadgeStyle {
        match self {
            Self::Active => BadgeStyle::new("Active", GREEN_SOFT),
            Self::Inactive => BadgeStyle::new("Inactive", GRAY_SOFT),
        }
    }
}
