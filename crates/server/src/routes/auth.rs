//! Login and logout handlers.
//!
//! Both login forms live on the same page. Failed logins re-render that page
//! with an inline message instead of erroring. The forms submit via GET, kept
//! for compatibility with existing links and bookmarks.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::middleware::{clear_session, set_current_admin, set_current_user};
use crate::models::{CurrentAdmin, CurrentUser};
use crate::routes::shop;
use crate::services::auth::{AuthError, AuthService};
use crate::state::AppState;

/// Inline message for failed logins; identical for bad email and bad password.
const INVALID_LOGIN: &str = "Invalid email or password";

/// Admin login credentials, from the admin form on the login page.
#[derive(Debug, Deserialize)]
pub struct AdminLoginQuery {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// User login credentials, from the user form on the login page.
#[derive(Debug, Deserialize)]
pub struct UserLoginQuery {
    #[serde(default, rename = "userEmail")]
    pub user_email: String,
    #[serde(default, rename = "userPassword")]
    pub user_password: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub admin_error: Option<String>,
    pub user_error: Option<String>,
}

impl LoginTemplate {
    fn clean() -> Self {
        Self {
            admin_error: None,
            user_error: None,
        }
    }
}

/// Display the login page.
pub async fn login_page() -> impl IntoResponse {
    LoginTemplate::clean()
}

/// Admin login: validate credentials, bind the identity to the session,
/// and send the caller to the dashboard.
pub async fn admin_login(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AdminLoginQuery>,
) -> Result<Response> {
    let auth = AuthService::new(state.users(), state.admins());

    match auth.login_admin(&query.email, &query.password).await {
        Ok(admin) => {
            let current = CurrentAdmin {
                id: admin.id,
                email: admin.email,
                name: admin.name,
            };
            set_current_admin(&session, &current)
                .await
                .map_err(|e| AppError::Internal(format!("failed to persist session: {e}")))?;

            Ok(Redirect::to("/admin/services").into_response())
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!(email = %query.email, "admin login rejected");
            Ok(LoginTemplate {
                admin_error: Some(INVALID_LOGIN.to_owned()),
                user_error: None,
            }
            .into_response())
        }
        Err(other) => Err(other.into()),
    }
}

/// User login: validate credentials, bind the identity to the session,
/// and render the shop view with the user's order history.
pub async fn user_login(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<UserLoginQuery>,
) -> Result<Response> {
    let auth = AuthService::new(state.users(), state.admins());

    match auth.login_user(&query.user_email, &query.user_password).await {
        Ok(user) => {
            let current = CurrentUser {
                id: user.id,
                email: user.email,
                name: user.name,
            };
            set_current_user(&session, &current)
                .await
                .map_err(|e| AppError::Internal(format!("failed to persist session: {e}")))?;

            let page = shop::shop_page(&state, &current, None, None).await?;
            Ok(page.into_response())
        }
        Err(AuthError::InvalidCredentials) => {
            tracing::warn!(email = %query.user_email, "user login rejected");
            Ok(LoginTemplate {
                admin_error: None,
                user_error: Some(INVALID_LOGIN.to_owned()),
            }
            .into_response())
        }
        Err(other) => Err(other.into()),
    }
}

/// Drop the session and return to the login page.
pub async fn logout(session: Session) -> Result<Response> {
    clear_session(&session)
        .await
        .map_err(|e| AppError::Internal(format!("failed to destroy session: {e}")))?;
    Ok(Redirect::to("/").into_response())
}
