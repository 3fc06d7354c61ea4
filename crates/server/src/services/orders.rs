//! Order placement.
//!
//! The one computed value in the system: `total = unit_price × quantity`,
//! stamped together with the owner and the server clock, then appended to the
//! ledger. Validation is explicit - a zero quantity or negative price is an
//! error, not a silently accepted order.

use chrono::Utc;
use rust_decimal::Decimal;
use thiserror::Error;

use shopfloor_core::{UserId, order_total};

use crate::db::{OrderStore, RepositoryError};
use crate::models::{NewOrder, Order};

/// Errors that can occur while placing an order.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Quantity must be at least one.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// Unit price must not be negative.
    #[error("invalid price: {0}")]
    InvalidPrice(Decimal),

    /// Ledger failure.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// An order request as it arrives from the shop form.
#[derive(Debug, Clone)]
pub struct PlaceOrder {
    pub product_name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

/// Order placement service over the ledger.
pub struct OrderService<'a> {
    orders: &'a dyn OrderStore,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(orders: &'a dyn OrderStore) -> Self {
        Self { orders }
    }

    /// Place an order for the given user.
    ///
    /// Validates the request, computes the total exactly once, stamps the
    /// order with the server clock, and persists it as an immutable record.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::InvalidQuantity` / `OrderError::InvalidPrice` for
    /// rejected input and `OrderError::Repository` if the ledger fails.
    pub async fn place(&self, user_id: UserId, request: PlaceOrder) -> Result<Order, OrderError> {
        if request.quantity == 0 {
            return Err(OrderError::InvalidQuantity(request.quantity));
        }
        if request.unit_price.is_sign_negative() {
            return Err(OrderError::InvalidPrice(request.unit_price));
        }

        let total = order_total(request.unit_price, request.quantity);

        let order = self
            .orders
            .save(NewOrder {
                user_id,
                product_name: request.product_name,
                unit_price: request.unit_price,
                quantity: request.quantity,
                total,
                ordered_at: Utc::now(),
            })
            .await?;

        Ok(order)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryOrderStore;

    fn request(price: &str, quantity: u32) -> PlaceOrder {
        PlaceOrder {
            product_name: "Widget".to_owned(),
            unit_price: Decimal::from_str_exact(price).unwrap(),
            quantity,
        }
    }

    #[tokio::test]
    async fn test_place_computes_exact_total() {
        let ledger = MemoryOrderStore::default();
        let service = OrderService::new(&ledger);

        let order = service
            .place(UserId::new(1), request("19.99", 3))
            .await
            .unwrap();

        assert_eq!(order.total, Decimal::from_str_exact("59.97").unwrap());
        assert_eq!(order.user_id, UserId::new(1));
        assert_eq!(order.quantity, 3);
    }

    #[tokio::test]
    async fn test_zero_quantity_rejected() {
        let ledger = MemoryOrderStore::default();
        let service = OrderService::new(&ledger);

        let err = service
            .place(UserId::new(1), request("19.99", 0))
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::InvalidQuantity(0)));
        assert!(ledger.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_negative_price_rejected() {
        let ledger = MemoryOrderStore::default();
        let service = OrderService::new(&ledger);

        let err = service
            .place(UserId::new(1), request("-0.01", 1))
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::InvalidPrice(_)));
    }

    #[tokio::test]
    async fn test_order_is_stamped_with_server_clock() {
        let ledger = MemoryOrderStore::default();
        let service = OrderService::new(&ledger);

        let before = Utc::now();
        let order = service
            .place(UserId::new(1), request("5.00", 2))
            .await
            .unwrap();
        let after = Utc::now();

        assert!(order.ordered_at >= before && order.ordered_at <= after);
    }

    #[tokio::test]
    async fn test_double_submission_yields_two_orders() {
        // No double-submit guard: two identical placements both succeed.
        let ledger = MemoryOrderStore::default();
        let service = OrderService::new(&ledger);

        service.place(UserId::new(1), request("9.99", 1)).await.unwrap();
        service.place(UserId::new(1), request("9.99", 1)).await.unwrap();

        assert_eq!(ledger.list_for_user(UserId::new(1)).await.unwrap().len(), 2);
    }
}
