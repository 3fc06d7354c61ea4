//! Data access for the back office.
//!
//! Every store sits behind a narrow async interface (`create` / `get` /
//! `update` / `delete` / `list`) so handlers never touch `sqlx` directly and
//! can be exercised against the in-memory implementations in tests. The
//! Postgres implementations live in the per-entity modules; [`memory`] holds
//! the in-memory ones.
//!
//! # Tables
//!
//! - `users` - shop accounts (argon2 password hashes)
//! - `admins` - back-office accounts
//! - `products` - catalog, looked up by exact name
//! - `orders` - immutable order ledger
//! - `sessions` - tower-sessions storage (created by the session store itself)
//!
//! Migrations are embedded from `crates/server/migrations/` and run at startup.

pub mod admins;
pub mod memory;
pub mod orders;
pub mod products;
pub mod users;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use shopfloor_core::{AdminId, Email, ProductId, UserId};

use crate::models::{Admin, NewAdmin, NewOrder, NewProduct, NewUser, Order, Product, User};

pub use admins::PgAdminStore;
pub use orders::PgOrderStore;
pub use products::PgProductStore;
pub use users::PgUserStore;

/// Errors from store operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Underlying database failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored value failed domain validation on the way out.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Unique constraint violated (duplicate email, duplicate product name).
    #[error("conflict: {0}")]
    Conflict(String),
}

/// Map a unique-constraint violation to [`RepositoryError::Conflict`].
pub(crate) fn conflict_on_unique(e: sqlx::Error, message: &str) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_unique_violation()
    {
        return RepositoryError::Conflict(message.to_owned());
    }
    RepositoryError::Database(e)
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Credential store for shop users.
///
/// `update` and `delete` on a missing id are no-ops reported as `Ok(false)`.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError>;
    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;
    async fn get_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError>;
    /// Fetch a user together with their password hash, for credential checks.
    async fn get_with_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(User, String)>, RepositoryError>;
    async fn update(&self, id: UserId, user: NewUser) -> Result<bool, RepositoryError>;
    async fn delete(&self, id: UserId) -> Result<bool, RepositoryError>;
    async fn list(&self) -> Result<Vec<User>, RepositoryError>;
}

/// Credential store for back-office admins.
#[async_trait]
pub trait AdminStore: Send + Sync {
    async fn create(&self, admin: NewAdmin) -> Result<Admin, RepositoryError>;
    async fn get_by_id(&self, id: AdminId) -> Result<Option<Admin>, RepositoryError>;
    async fn get_by_email(&self, email: &Email) -> Result<Option<Admin>, RepositoryError>;
    /// Fetch an admin together with their password hash, for credential checks.
    async fn get_with_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(Admin, String)>, RepositoryError>;
    async fn update(&self, id: AdminId, admin: NewAdmin) -> Result<bool, RepositoryError>;
    async fn delete(&self, id: AdminId) -> Result<bool, RepositoryError>;
    async fn list(&self) -> Result<Vec<Admin>, RepositoryError>;
}

/// Catalog store.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn create(&self, product: NewProduct) -> Result<Product, RepositoryError>;
    async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;
    /// Exact-name lookup used by search and ordering. `None` is the
    /// "product unavailable" signal, not an error.
    async fn get_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError>;
    async fn update(&self, id: ProductId, product: NewProduct) -> Result<bool, RepositoryError>;
    async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError>;
    async fn list(&self) -> Result<Vec<Product>, RepositoryError>;
}

/// Append-only order ledger.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn save(&self, order: NewOrder) -> Result<Order, RepositoryError>;
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError>;
    async fn list(&self) -> Result<Vec<Order>, RepositoryError>;
}
