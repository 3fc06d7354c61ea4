//! Session-stored identity types.
//!
//! The session carries the authenticated identity and nothing else. The email
//! is the authoritative key; id and name ride along to save a lookup when
//! rendering.

use serde::{Deserialize, Serialize};

use shopfloor_core::{AdminId, Email, UserId};

/// Session-stored shop user identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's database ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// Display name for the shop view.
    pub name: String,
}

/// Session-stored admin identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Admin's database ID.
    pub id: AdminId,
    /// Admin's email address.
    pub email: Email,
    /// Display name for the dashboard.
    pub name: String,
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for the logged-in shop user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";
}
