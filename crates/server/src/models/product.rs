//! Catalog product types.

use rust_decimal::Decimal;

use shopfloor_core::ProductId;

/// A catalog product.
///
/// Products are looked up by exact name during search and ordering.
#[derive(Debug, Clone)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Product name, used as the lookup key.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Free-form description.
    pub description: String,
}

/// Fields for creating or updating a product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub description: String,
}
