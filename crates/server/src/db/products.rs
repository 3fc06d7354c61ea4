//! Postgres-backed catalog store.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use shopfloor_core::ProductId;

use super::{ProductStore, RepositoryError, conflict_on_unique};
use crate::models::{NewProduct, Product};

/// Catalog store backed by the `products` table.
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i32,
    name: String,
    price: Decimal,
    description: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.name,
            price: row.price,
            description: row.description,
        }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn create(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            INSERT INTO products (name, price, description)
            VALUES ($1, $2, $3)
            RETURNING id, name, price, description
            ",
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| conflict_on_unique(e, "product name already exists"))?;

        Ok(row.into())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, price, description FROM products WHERE id = $1",
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, price, description FROM products WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    async fn update(&self, id: ProductId, product: NewProduct) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            "UPDATE products SET name = $2, price = $3, description = $4 WHERE id = $1",
        )
        .bind(id.as_i32())
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.description)
        .execute(&self.pool)
        .await
        .map_err(|e| conflict_on_unique(e, "product name already exists"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_i32())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, price, description FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }
}
