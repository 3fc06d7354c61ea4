//! Authentication service.
//!
//! Credential checks for both account kinds go through argon2 hashes held by
//! the stores; plaintext passwords exist only inside a request.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use shopfloor_core::Email;

use crate::db::{AdminStore, UserStore};
use crate::models::{Admin, User};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Authentication service over the two credential stores.
pub struct AuthService<'a> {
    users: &'a dyn UserStore,
    admins: &'a dyn AdminStore,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(users: &'a dyn UserStore, admins: &'a dyn AdminStore) -> Self {
        Self { users, admins }
    }

    /// Login a shop user with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for an unknown email, a
    /// malformed email, or a wrong password - one error for all three, so
    /// the login form cannot be used to probe for accounts.
    pub async fn login_user(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let Ok(email) = Email::parse(email) else {
            return Err(AuthError::InvalidCredentials);
        };

        let (user, password_hash) = self
            .users
            .get_with_password_hash(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &password_hash)?;

        Ok(user)
    }

    /// Login an admin with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` as [`Self::login_user`] does.
    pub async fn login_admin(&self, email: &str, password: &str) -> Result<Admin, AuthError> {
        let Ok(email) = Email::parse(email) else {
            return Err(AuthError::InvalidCredentials);
        };

        let (admin, password_hash) = self
            .admins
            .get_with_password_hash(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &password_hash)?;

        Ok(admin)
    }
}

/// Validate password strength for account creation.
///
/// # Errors
///
/// Returns `AuthError::WeakPassword` if the password is too short.
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Hash a password with argon2 and a fresh random salt.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored argon2 hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(hash).map_err(|_| AuthError::PasswordHash)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::memory::{MemoryAdminStore, MemoryUserStore};
    use crate::models::NewUser;

    async fn seeded_users(password: &str) -> MemoryUserStore {
        let users = MemoryUserStore::default();
        users
            .create(NewUser {
                email: Email::parse("jo@example.com").unwrap(),
                name: "Jo".to_owned(),
                password_hash: hash_password(password).unwrap(),
            })
            .await
            .unwrap();
        users
    }

    #[tokio::test]
    async fn test_login_user_roundtrip() {
        let users = seeded_users("correct horse").await;
        let admins = MemoryAdminStore::default();
        let auth = AuthService::new(&users, &admins);

        let user = auth
            .login_user("jo@example.com", "correct horse")
            .await
            .unwrap();
        assert_eq!(user.name, "Jo");
    }

    #[tokio::test]
    async fn test_wrong_password_is_invalid_credentials() {
        let users = seeded_users("correct horse").await;
        let admins = MemoryAdminStore::default();
        let auth = AuthService::new(&users, &admins);

        let err = auth
            .login_user("jo@example.com", "wrong horse")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_unknown_and_malformed_emails_look_the_same() {
        let users = seeded_users("correct horse").await;
        let admins = MemoryAdminStore::default();
        let auth = AuthService::new(&users, &admins);

        for email in ["nobody@example.com", "not-an-email"] {
            let err = auth.login_user(email, "correct horse").await.unwrap_err();
            assert!(matches!(err, AuthError::InvalidCredentials));
        }
    }

    #[test]
    fn test_validate_password_length() {
        assert!(validate_password("short").is_err());
        assert!(validate_password("long enough").is_ok());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same password").unwrap();
        let b = hash_password("same password").unwrap();
        assert_ne!(a, b);
    }
}
