//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid credentials. Wrong email and wrong password are deliberately
    /// indistinguishable.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Password too weak.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Store failure.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing failure.
    #[error("password hashing error")]
    PasswordHash,
}
