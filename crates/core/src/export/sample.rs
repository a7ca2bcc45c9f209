//! Generated order rows for the export dialog
//!
//! The dashboard has no order backend behind the export dialog, so exports are
//! built from freshly generated rows. The RNG is supplied by the caller.

use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Serialize, Serializer};
use veggieworld_domain::constants::{SAMPLE_LOOKBACK_DAYS, SAMPLE_ORDER_ID_BASE, SAMPLE_PRODUCTS};
use veggieworld_domain::OrderStatus;

use super::tabular::Tabular;

/// One row of the orders export
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleOrderRow {
    pub order_id: String,
    pub customer: String,
    pub date: NaiveDate,
    #[serde(serialize_with = "serialize_status_label")]
    pub status: OrderStatus,
    /// Two-decimal amount, e.g. `54.20`
    pub total: String,
    pub items: u32,
    /// Product names joined by `", "`
    pub products: String,
}

fn serialize_status_label<S>(status: &OrderStatus, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(status.label())
}

impl Tabular for SampleOrderRow {
    fn columns() -> &'static [&'static str] {
        &["orderId", "customer", "date", "status", "total", "items", "products"]
    }

    fn values(&self) -> Vec<String> {
        vec![
            self.order_id.clone(),
            self.customer.clone(),
            self.date.to_string(),
            self.status.label().to_string(),
            self.total.clone(),
            self.items.to_string(),
            self.products.clone(),
        ]
    }
}

/// Generate `count` rows dated within the lookback window ending at `today`.
pub fn generate_sample_orders<R: Rng + ?Sized>(
    count: usize,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<SampleOrderRow> {
    (0..count)
        .map(|index| {
            let days_back = rng.gen_range(0..SAMPLE_LOOKBACK_DAYS);
            let status = OrderStatus::ALL[rng.gen_range(0..OrderStatus::ALL.len())];
            let total: f64 = rng.gen_range(10.0..110.0);
            let items = rng.gen_range(1..=5);
            let product_count = rng.gen_range(1..=3);
            // Drawn with replacement, so a row may name a product twice.
            let products: Vec<&str> = (0..product_count)
                .filter_map(|_| SAMPLE_PRODUCTS.choose(&mut *rng).copied())
                .collect();

            SampleOrderRow {
                order_id: format!("ORD-{}", SAMPLE_ORDER_ID_BASE + index),
                customer: format!("Customer {}", index + 1),
                date: today - Duration::days(days_back),
                status,
                total: format!("{total:.2}"),
                items,
                products: products.join(", "),
            }
        })
        .collect()
}
