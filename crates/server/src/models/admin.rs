//! Back-office admin account types.

use chrono::{DateTime, Utc};

use shopfloor_core::{AdminId, AdminRole, Email};

/// A back-office admin account.
#[derive(Debug, Clone)]
pub struct Admin {
    /// Unique admin ID.
    pub id: AdminId,
    /// Admin's email address (login key).
    pub email: Email,
    /// Display name.
    pub name: String,
    /// Role marker.
    pub role: AdminRole,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// Fields for creating or updating an admin account.
#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub email: Email,
    pub name: String,
    pub role: AdminRole,
    /// Argon2 hash of the password, never the plaintext.
    pub password_hash: String,
}
