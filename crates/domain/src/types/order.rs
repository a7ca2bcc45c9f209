//! Order records and their status enums

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::badge::{
    Badge, BadgeStyle, BLUE_SOLID, GRAY_SOFT, GREEN_SOFT, GREEN_SOLID, ORANGE_SOFT, PURPLE_SOFT,
    PURPLE_SOLID, RED_SOLID, YELLOW_SOLID,
};

/// Customer order as shown on the Orders page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub source: OrderSource,
    /// Currency display string, e.g. `₦12,500`
    pub amount: String,
    /// Display string, e.g. `2 mins ago`
    pub date: String,
    pub status: OrderStatus,
    pub payment: PaymentStatus,
}

/// Channel the order came in through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum OrderSource {
    WhatsApp,
    Shopify,
    Chowdeck,
    Manual,
}

crate::impl_record_enum_conversions!(OrderSource {
    WhatsApp => "WhatsApp",
    Shopify => "Shopify",
    Chowdeck => "Chowdeck",
    Manual => "Manual",
});

impl Badge for OrderSource {
    fn badge(&self) -> BadgeStyle {
        match self {
            Self::WhatsApp => BadgeStyle::new("WhatsApp", GREEN_SOFT),
            Self::Shopify => BadgeStyle::new("Shopify", PURPLE_SOFT),
            Self::Chowdeck => BadgeStyle::new("Chowdeck", ORANGE_SOFT),
            Self::Manual => BadgeStyle::new("Manual", GRAY_SOFT),
        }
    }
}

/// Fulfilment progress of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Processing,
    Packed,
    Awaiting,
    Delivered,
}

crate::impl_record_enum_conversions!(OrderStatus {
    Processing => "processing",
    Packed => "packed",
    Awaiting => "awaiting",
    Delivered => "delivered",
});

impl OrderStatus {
    /// Human label used in tables and exported sample rows.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Processing => "Processing",
            Self::Packed => "Packed",
            Self::Awaiting => "Awaiting Pickup",
            Self::Delivered => "Delivered",
        }
    }
}

impl Badge for OrderStatus {
    fn badge(&self) -> BadgeStyle {
        let class_name = match self {
            Self::Processing => BLUE_SOLID,
            Self::Packed => PURPLE_SOLID,
            Self::Awaiting => YELLOW_SOLID,
            Self::Delivered => GREEN_SOLID,
        };
        BadgeStyle::new(self.label(), class_name)
    }
}

/// Payment state of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Failed,
}

crate::impl_record_enum_conversions!(PaymentStatus {
    Paid => "paid",
    Pending => "pending",
    Failed => "failed",
});

impl Badge for PaymentStatus {
    fn badge(&self) -> BadgeStyle {
        match self {
            Self::Paid => BadgeStyle::new("Paid", GREEN_SOLID),
            Self::Pending => BadgeStyle::new("Pending", YELLOW_SOLID),
            Self::Failed => BadgeStyle::new("Failed", RED_SOLID),
        }
    }
}
