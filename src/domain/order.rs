use chrono::{DateTime, Utc};
use serde_json::Value;

/// Status every successfully placed order reports.
pub const ORDER_CONFIRMED: &str = "confirmed";

/// Upper bound (exclusive) of fabricated order ids.
pub const ORDER_ID_BOUND: u32 = 10_000;

/// Order as submitted by the client. Nothing here is checked against the
/// catalog: unknown users, unknown products and arbitrary totals are accepted.
/// `total` is kept as whatever JSON the client sent.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub user_id: i64,
    pub product_ids: Vec<i64>,
    pub total: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: u32,
    pub user_id: i64,
    pub product_ids: Vec<i64>,
    pub total: Value,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
