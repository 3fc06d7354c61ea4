//! Postgres-backed order ledger.
//!
//! The ledger is append-only: there is no update or delete path, matching the
//! immutability of placed orders.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use shopfloor_core::{OrderId, UserId};

use super::{OrderStore, RepositoryError};
use crate::models::{NewOrder, Order};

/// Order ledger backed by the `orders` table.
pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i32,
    user_id: i32,
    product_name: String,
    unit_price: Decimal,
    quantity: i32,
    total: Decimal,
    ordered_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self) -> Result<Order, RepositoryError> {
        let quantity = u32::try_from(self.quantity).map_err(|_| {
            RepositoryError::DataCorruption(format!(
                "negative quantity {} in order {}",
                self.quantity, self.id
            ))
        })?;
        Ok(Order {
            id: OrderId::new(self.id),
            user_id: UserId::new(self.user_id),
            product_name: self.product_name,
            unit_price: self.unit_price,
            quantity,
            total: self.total,
            ordered_at: self.ordered_at,
        })
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn save(&self, order: NewOrder) -> Result<Order, RepositoryError> {
        let quantity = i32::try_from(order.quantity).map_err(|_| {
            RepositoryError::DataCorruption(format!("quantity {} out of range", order.quantity))
        })?;

        let row = sqlx::query_as::<_, OrderRow>(
            r"
            INSERT INTO orders (user_id, product_name, unit_price, quantity, total, ordered_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, product_name, unit_price, quantity, total, ordered_at
            ",
        )
        .bind(order.user_id.as_i32())
        .bind(&order.product_name)
        .bind(order.unit_price)
        .bind(quantity)
        .bind(order.total)
        .bind(order.ordered_at)
        .fetch_one(&self.pool)
        .await?;

        row.into_order()
    }

    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r"
            SELECT id, user_id, product_name, unit_price, quantity, total, ordered_at
            FROM orders WHERE user_id = $1 ORDER BY id
            ",
        )
        .bind(user_id.as_i32())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(OrderRow::into_order).collect()
    }

    async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r"
            SELECT id, user_id, product_name, unit_price, quantity, total, ordered_at
            FROM orders ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(OrderRow::into_order).collect()
    }
}
