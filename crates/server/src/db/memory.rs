//! In-memory store implementations.
//!
//! Used by the test suite so handlers and services can be exercised without a
//! running database. Semantics mirror the Postgres stores: duplicate emails
//! and product names are conflicts, missing ids report `false`, lists come
//! back in id order.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use shopfloor_core::{AdminId, Email, OrderId, ProductId, UserId};

use super::{AdminStore, OrderStore, ProductStore, RepositoryError, UserStore};
use crate::models::{Admin, NewAdmin, NewOrder, NewProduct, NewUser, Order, Product, User};

#[derive(Clone)]
struct UserRecord {
    user: User,
    password_hash: String,
}

/// In-memory [`UserStore`].
#[derive(Default)]
pub struct MemoryUserStore {
    inner: RwLock<BTreeMap<i32, UserRecord>>,
}

impl MemoryUserStore {
    fn next_id(map: &BTreeMap<i32, UserRecord>) -> i32 {
        map.keys().next_back().copied().unwrap_or(0) + 1
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError> {
        let mut map = self.inner.write();
        if map.values().any(|r| r.user.email == user.email) {
            return Err(RepositoryError::Conflict("email already exists".to_owned()));
        }
        let id = Self::next_id(&map);
        let record = UserRecord {
            user: User {
                id: UserId::new(id),
                email: user.email,
                name: user.name,
                created_at: Utc::now(),
            },
            password_hash: user.password_hash,
        };
        map.insert(id, record.clone());
        Ok(record.user)
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.inner.read().get(&id.as_i32()).map(|r| r.user.clone()))
    }

    async fn get_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .inner
            .read()
            .values()
            .find(|r| &r.user.email == email)
            .map(|r| r.user.clone()))
    }

    async fn get_with_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        Ok(self
            .inner
            .read()
            .values()
            .find(|r| &r.user.email == email)
            .map(|r| (r.user.clone(), r.password_hash.clone())))
    }

    async fn update(&self, id: UserId, user: NewUser) -> Result<bool, RepositoryError> {
        let mut map = self.inner.write();
        if map
            .iter()
            .any(|(k, r)| *k != id.as_i32() && r.user.email == user.email)
        {
            return Err(RepositoryError::Conflict("email already exists".to_owned()));
        }
        match map.get_mut(&id.as_i32()) {
            Some(record) => {
                record.user.email = user.email;
                record.user.name = user.name;
                record.password_hash = user.password_hash;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: UserId) -> Result<bool, RepositoryError> {
        Ok(self.inner.write().remove(&id.as_i32()).is_some())
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.inner.read().values().map(|r| r.user.clone()).collect())
    }
}

#[derive(Clone)]
struct AdminRecord {
    admin: Admin,
    password_hash: String,
}

/// In-memory [`AdminStore`].
#[derive(Default)]
pub struct MemoryAdminStore {
    inner: RwLock<BTreeMap<i32, AdminRecord>>,
}

impl MemoryAdminStore {
    fn next_id(map: &BTreeMap<i32, AdminRecord>) -> i32 {
        map.keys().next_back().copied().unwrap_or(0) + 1
    }
}

#[async_trait]
impl AdminStore for MemoryAdminStore {
    async fn create(&self, admin: NewAdmin) -> Result<Admin, RepositoryError> {
        let mut map = self.inner.write();
        if map.values().any(|r| r.admin.email == admin.email) {
            return Err(RepositoryError::Conflict("email already exists".to_owned()));
        }
        let id = Self::next_id(&map);
        let record = AdminRecord {
            admin: Admin {
                id: AdminId::new(id),
                email: admin.email,
                name: admin.name,
                role: admin.role,
                created_at: Utc::now(),
            },
            password_hash: admin.password_hash,
        };
        map.insert(id, record.clone());
        Ok(record.admin)
    }

    async fn get_by_id(&self, id: AdminId) -> Result<Option<Admin>, RepositoryError> {
        Ok(self.inner.read().get(&id.as_i32()).map(|r| r.admin.clone()))
    }

    async fn get_by_email(&self, email: &Email) -> Result<Option<Admin>, RepositoryError> {
        Ok(self
            .inner
            .read()
            .values()
            .find(|r| &r.admin.email == email)
            .map(|r| r.admin.clone()))
    }

    async fn get_with_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(Admin, String)>, RepositoryError> {
        Ok(self
            .inner
            .read()
            .values()
            .find(|r| &r.admin.email == email)
            .map(|r| (r.admin.clone(), r.password_hash.clone())))
    }

    async fn update(&self, id: AdminId, admin: NewAdmin) -> Result<bool, RepositoryError> {
        let mut map = self.inner.write();
        if map
            .iter()
            .any(|(k, r)| *k != id.as_i32() && r.admin.email == admin.email)
        {
            return Err(RepositoryError::Conflict("email already exists".to_owned()));
        }
        match map.get_mut(&id.as_i32()) {
            Some(record) => {
                record.admin.email = admin.email;
                record.admin.name = admin.name;
                record.admin.role = admin.role;
                record.password_hash = admin.password_hash;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: AdminId) -> Result<bool, RepositoryError> {
        Ok(self.inner.write().remove(&id.as_i32()).is_some())
    }

    async fn list(&self) -> Result<Vec<Admin>, RepositoryError> {
        Ok(self.inner.read().values().map(|r| r.admin.clone()).collect())
    }
}

/// In-memory [`ProductStore`].
#[derive(Default)]
pub struct MemoryProductStore {
    inner: RwLock<BTreeMap<i32, Product>>,
}

impl MemoryProductStore {
    fn next_id(map: &BTreeMap<i32, Product>) -> i32 {
        map.keys().next_back().copied().unwrap_or(0) + 1
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn create(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let mut map = self.inner.write();
        if map.values().any(|p| p.name == product.name) {
            return Err(RepositoryError::Conflict(
                "product name already exists".to_owned(),
            ));
        }
        let id = Self::next_id(&map);
        let product = Product {
            id: ProductId::new(id),
            name: product.name,
            price: product.price,
            description: product.description,
        };
        map.insert(id, product.clone());
        Ok(product)
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(self.inner.read().get(&id.as_i32()).cloned())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError> {
        Ok(self
            .inner
            .read()
            .values()
            .find(|p| p.name == name)
            .cloned())
    }

    async fn update(&self, id: ProductId, product: NewProduct) -> Result<bool, RepositoryError> {
        let mut map = self.inner.write();
        if map
            .iter()
            .any(|(k, p)| *k != id.as_i32() && p.name == product.name)
        {
            return Err(RepositoryError::Conflict(
                "product name already exists".to_owned(),
            ));
        }
        match map.get_mut(&id.as_i32()) {
            Some(existing) => {
                existing.name = product.name;
                existing.price = product.price;
                existing.description = product.description;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        Ok(self.inner.write().remove(&id.as_i32()).is_some())
    }

    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.inner.read().values().cloned().collect())
    }
}

/// In-memory [`OrderStore`].
#[derive(Default)]
pub struct MemoryOrderStore {
    inner: RwLock<BTreeMap<i32, Order>>,
}

impl MemoryOrderStore {
    fn next_id(map: &BTreeMap<i32, Order>) -> i32 {
        map.keys().next_back().copied().unwrap_or(0) + 1
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn save(&self, order: NewOrder) -> Result<Order, RepositoryError> {
        let mut map = self.inner.write();
        let id = Self::next_id(&map);
        let order = Order {
            id: OrderId::new(id),
            user_id: order.user_id,
            product_name: order.product_name,
            unit_price: order.unit_price,
            quantity: order.quantity,
            total: order.total,
            ordered_at: order.ordered_at,
        };
        map.insert(id, order.clone());
        Ok(order)
    }

    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError> {
        Ok(self
            .inner
            .read()
            .values()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        Ok(self.inner.read().values().cloned().collect())
    }
}
