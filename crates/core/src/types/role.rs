//! Admin role marker.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown role string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid role: {0}. Valid roles: admin, super_admin")]
pub struct RoleParseError(pub String);

/// Role marker attached to back-office admin accounts.
///
/// Stored as text (`admin` / `super_admin`) in the admin store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    /// Regular back-office admin.
    #[default]
    Admin,
    /// Admin with full privileges.
    SuperAdmin,
}

impl AdminRole {
    /// Text form stored in the database and shown in role dropdowns.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
        }
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AdminRole {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "super_admin" => Ok(Self::SuperAdmin),
            other => Err(RoleParseError(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for role in [AdminRole::Admin, AdminRole::SuperAdmin] {
            assert_eq!(role.as_str().parse::<AdminRole>(), Ok(role));
        }
    }

    #[test]
    fn test_unknown_role() {
        assert!("root".parse::<AdminRole>().is_err());
    }
}
