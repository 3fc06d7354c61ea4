//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::db::{
    AdminStore, OrderStore, PgAdminStore, PgOrderStore, PgProductStore, PgUserStore, ProductStore,
    UserStore,
};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Stores are held as trait objects so the
/// binary can wire Postgres implementations while tests inject in-memory
/// ones.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    users: Arc<dyn UserStore>,
    admins: Arc<dyn AdminStore>,
    products: Arc<dyn ProductStore>,
    orders: Arc<dyn OrderStore>,
}

impl AppState {
    /// Create application state backed by Postgres stores.
    #[must_use]
    pub fn new(pool: &PgPool) -> Self {
        Self::with_stores(
            Arc::new(PgUserStore::new(pool.clone())),
            Arc::new(PgAdminStore::new(pool.clone())),
            Arc::new(PgProductStore::new(pool.clone())),
            Arc::new(PgOrderStore::new(pool.clone())),
        )
    }

    /// Create application state from explicit store implementations.
    #[must_use]
    pub fn with_stores(
        users: Arc<dyn UserStore>,
        admins: Arc<dyn AdminStore>,
        products: Arc<dyn ProductStore>,
        orders: Arc<dyn OrderStore>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                users,
                admins,
                products,
                orders,
            }),
        }
    }

    /// The shop user credential store.
    #[must_use]
    pub fn users(&self) -> &dyn UserStore {
        self.inner.users.as_ref()
    }

    /// The admin credential store.
    #[must_use]
    pub fn admins(&self) -> &dyn AdminStore {
        self.inner.admins.as_ref()
    }

    /// The product catalog store.
    #[must_use]
    pub fn products(&self) -> &dyn ProductStore {
        self.inner.products.as_ref()
    }

    /// The order ledger.
    #[must_use]
    pub fn orders(&self) -> &dyn OrderStore {
        self.inner.orders.as_ref()
    }
}
