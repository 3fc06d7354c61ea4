//! Shop user CRUD pass-throughs.
//!
//! Same shape as the admin CRUD, minus the role field.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use shopfloor_core::{Email, UserId};

use crate::db::RepositoryError;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::models::NewUser;
use crate::services::auth::{AuthError, hash_password, validate_password};
use crate::state::AppState;

/// User form fields, shared by the add and update routes.
#[derive(Debug, Deserialize)]
pub struct UserForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
}

/// Add-user form template.
#[derive(Template, WebTemplate)]
#[template(path = "user/add.html")]
pub struct AddUserTemplate {
    pub error: Option<String>,
}

/// Update-user form template, pre-filled from the stored record.
#[derive(Template, WebTemplate)]
#[template(path = "user/edit.html")]
pub struct EditUserTemplate {
    pub id: i32,
    pub email: String,
    pub name: String,
}

/// Display the add-user form.
pub async fn add_form(RequireAdmin(_admin): RequireAdmin) -> impl IntoResponse {
    AddUserTemplate { error: None }
}

/// Persist a new user and redirect to the dashboard.
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Form(form): Form<UserForm>,
) -> Result<Response> {
    let Ok(email) = Email::parse(&form.email) else {
        return Ok(AddUserTemplate {
            error: Some("Invalid email address".to_owned()),
        }
        .into_response());
    };
    if let Err(AuthError::WeakPassword(msg)) = validate_password(&form.password) {
        return Ok(AddUserTemplate { error: Some(msg) }.into_response());
    }
    let password_hash = hash_password(&form.password)?;

    match state
        .users()
        .create(NewUser {
            email,
            name: form.name,
            password_hash,
        })
        .await
    {
        Ok(_) => Ok(Redirect::to("/admin/services").into_response()),
        Err(RepositoryError::Conflict(msg)) => {
            Ok(AddUserTemplate { error: Some(msg) }.into_response())
        }
        Err(other) => Err(other.into()),
    }
}

/// Display the update form pre-filled with the stored record.
pub async fn update_form(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<EditUserTemplate> {
    let user = state
        .users()
        .get_by_id(UserId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {id}")))?;

    Ok(EditUserTemplate {
        id,
        email: user.email.to_string(),
        name: user.name,
    })
}

/// Apply changes by id and redirect to the dashboard.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(form): Query<UserForm>,
) -> Result<Response> {
    let user_id = UserId::new(id);
    let existing = state
        .users()
        .get_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {id}")))?;

    let email = Email::parse(&form.email)
        .map_err(|e| AppError::BadRequest(format!("invalid email: {e}")))?;
    let password_hash = if form.password.is_empty() {
        let (_, hash) = state
            .users()
            .get_with_password_hash(&existing.email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {id}")))?;
        hash
    } else {
        validate_password(&form.password).map_err(|e| AppError::BadRequest(e.to_string()))?;
        hash_password(&form.password)?
    };

    let updated = state
        .users()
        .update(
            user_id,
            NewUser {
                email,
                name: form.name,
                password_hash,
            },
        )
        .await?;
    if !updated {
        tracing::warn!(id, "update of missing user ignored");
    }

    Ok(Redirect::to("/admin/services").into_response())
}

/// Delete by id and redirect to the dashboard.
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect> {
    let deleted = state.users().delete(UserId::new(id)).await?;
    if !deleted {
        tracing::warn!(id, "delete of missing user ignored");
    }
    Ok(Redirect::to("/admin/services"))
}
