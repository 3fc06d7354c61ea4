//! Order ledger types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use shopfloor_core::{OrderId, UserId};

/// A placed order.
///
/// Orders are immutable once persisted. Product name and unit price are
/// snapshots taken at order time; later catalog edits do not touch them.
/// The total is computed exactly once, at creation.
#[derive(Debug, Clone)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Owning user.
    pub user_id: UserId,
    /// Product name snapshot.
    pub product_name: String,
    /// Unit price snapshot.
    pub unit_price: Decimal,
    /// Ordered quantity.
    pub quantity: u32,
    /// Total amount (`unit_price × quantity`).
    pub total: Decimal,
    /// Server timestamp set at creation.
    pub ordered_at: DateTime<Utc>,
}

/// A validated order ready to be appended to the ledger.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: UserId,
    pub product_name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub total: Decimal,
    pub ordered_at: DateTime<Utc>,
}
