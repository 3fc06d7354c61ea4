//! Shop user account types.

use chrono::{DateTime, Utc};

use shopfloor_core::{Email, UserId};

/// A shop user account.
///
/// The password hash never travels with this type; credential checks go
/// through [`crate::db::UserStore::get_with_password_hash`].
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address (unique login key).
    pub email: Email,
    /// Display name.
    pub name: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// Fields for creating or updating a user account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub name: String,
    /// Argon2 hash of the password, never the plaintext.
    pub password_hash: String,
}
