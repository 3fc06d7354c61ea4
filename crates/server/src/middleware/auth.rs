//! Authentication extractors and session identity helpers.
//!
//! The session carries at most one shop-user identity and one admin identity.
//! Handlers never read the session directly; they take [`RequireUser`] or
//! [`RequireAdmin`], so an absent identity is always an explicit rejection
//! (redirect to the login page) rather than a null user flowing downstream.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentAdmin, CurrentUser, keys};

/// Store the logged-in shop user in the session.
///
/// # Errors
///
/// Returns the session-store error if the session cannot be persisted.
pub async fn set_current_user(
    session: &Session,
    user: &CurrentUser,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CURRENT_USER, user).await
}

/// Store the logged-in admin in the session.
///
/// # Errors
///
/// Returns the session-store error if the session cannot be persisted.
pub async fn set_current_admin(
    session: &Session,
    admin: &CurrentAdmin,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CURRENT_ADMIN, admin).await
}

/// Drop all session state (logout).
///
/// # Errors
///
/// Returns the session-store error if the session cannot be destroyed.
pub async fn clear_session(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}

/// Rejection for requests lacking the required identity.
pub struct RedirectToLogin;

impl IntoResponse for RedirectToLogin {
    fn into_response(self) -> Response {
        Redirect::to("/").into_response()
    }
}

/// Extractor requiring a logged-in shop user.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(RequireUser(user): RequireUser) -> impl IntoResponse {
///     format!("Hello, {}!", user.name)
/// }
/// ```
pub struct RequireUser(pub CurrentUser);

impl<S> FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = RedirectToLogin;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or(RedirectToLogin)?;

        let user = session
            .get::<CurrentUser>(keys::CURRENT_USER)
            .await
            .map_err(|_| RedirectToLogin)?;

        user.map(Self).ok_or(RedirectToLogin)
    }
}

/// Extractor requiring a logged-in admin.
pub struct RequireAdmin(pub CurrentAdmin);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = RedirectToLogin;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or(RedirectToLogin)?;

        let admin = session
            .get::<CurrentAdmin>(keys::CURRENT_ADMIN)
            .await
            .map_err(|_| RedirectToLogin)?;

        admin.map(Self).ok_or(RedirectToLogin)
    }
}
