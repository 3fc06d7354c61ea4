//! Postgres-backed admin store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use shopfloor_core::{AdminId, AdminRole, Email};

use super::{AdminStore, RepositoryError, conflict_on_unique};
use crate::models::{Admin, NewAdmin};

/// Back-office admin store backed by the `admins` table.
pub struct PgAdminStore {
    pool: PgPool,
}

impl PgAdminStore {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AdminRow {
    id: i32,
    email: String,
    name: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl AdminRow {
    fn into_admin(self) -> Result<Admin, RepositoryError> {
        let email = Email::parse(&self.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;
        let role = self.role.parse::<AdminRole>().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid role in database: {e}"))
        })?;
        Ok(Admin {
            id: AdminId::new(self.id),
            email,
            name: self.name,
            role,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AdminCredentialRow {
    id: i32,
    email: String,
    name: String,
    role: String,
    created_at: DateTime<Utc>,
    password_hash: String,
}

#[async_trait]
impl AdminStore for PgAdminStore {
    async fn create(&self, admin: NewAdmin) -> Result<Admin, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRow>(
            r"
            INSERT INTO admins (email, name, role, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, name, role, created_at
            ",
        )
        .bind(admin.email.as_str())
        .bind(&admin.name)
        .bind(admin.role.as_str())
        .bind(&admin.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| conflict_on_unique(e, "email already exists"))?;

        row.into_admin()
    }

    async fn get_by_id(&self, id: AdminId) -> Result<Option<Admin>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRow>(
            "SELECT id, email, name, role, created_at FROM admins WHERE id = $1",
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        row.map(AdminRow::into_admin).transpose()
    }

    async fn get_by_email(&self, email: &Email) -> Result<Option<Admin>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRow>(
            "SELECT id, email, name, role, created_at FROM admins WHERE email = $1",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(AdminRow::into_admin).transpose()
    }

    async fn get_with_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(Admin, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminCredentialRow>(
            "SELECT id, email, name, role, created_at, password_hash FROM admins WHERE email = $1",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(r) => {
                let hash = r.password_hash.clone();
                let admin = AdminRow {
                    id: r.id,
                    email: r.email,
                    name: r.name,
                    role: r.role,
                    created_at: r.created_at,
                }
                .into_admin()?;
                Ok(Some((admin, hash)))
            }
            None => Ok(None),
        }
    }

    async fn update(&self, id: AdminId, admin: NewAdmin) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            "UPDATE admins SET email = $2, name = $3, role = $4, password_hash = $5 WHERE id = $1",
        )
        .bind(id.as_i32())
        .bind(admin.email.as_str())
        .bind(&admin.name)
        .bind(admin.role.as_str())
        .bind(&admin.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| conflict_on_unique(e, "email already exists"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: AdminId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM admins WHERE id = $1")
            .bind(id.as_i32())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<Admin>, RepositoryError> {
        let rows = sqlx::query_as::<_, AdminRow>(
            "SELECT id, email, name, role, created_at FROM admins ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(AdminRow::into_admin).collect()
    }
}
