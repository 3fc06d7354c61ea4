//! Admin account CRUD pass-throughs.
//!
//! Add/update/delete persist through the admin store and bounce back to the
//! dashboard. The update form submits via GET with the fields in the query
//! string, matching the legacy form markup. An empty password on update keeps
//! the stored hash.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use shopfloor_core::{AdminId, AdminRole, Email};

use crate::db::RepositoryError;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::models::NewAdmin;
use crate::services::auth::{AuthError, hash_password, validate_password};
use crate::state::AppState;

/// Admin form fields, shared by the add and update routes.
#[derive(Debug, Deserialize)]
pub struct AdminForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: String,
}

/// Add-admin form template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/add.html")]
pub struct AddAdminTemplate {
    pub error: Option<String>,
}

/// Update-admin form template, pre-filled from the stored record.
#[derive(Template, WebTemplate)]
#[template(path = "admin/edit.html")]
pub struct EditAdminTemplate {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: String,
}

fn parse_role(raw: &str) -> std::result::Result<AdminRole, String> {
    if raw.is_empty() {
        return Ok(AdminRole::default());
    }
    raw.parse::<AdminRole>().map_err(|e| e.to_string())
}

/// Display the add-admin form.
pub async fn add_form(RequireAdmin(_admin): RequireAdmin) -> impl IntoResponse {
    AddAdminTemplate { error: None }
}

/// Persist a new admin and redirect to the dashboard. Form-level problems
/// (bad email, weak password, duplicate email) re-render the form inline.
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Form(form): Form<AdminForm>,
) -> Result<Response> {
    let Ok(email) = Email::parse(&form.email) else {
        return Ok(AddAdminTemplate {
            error: Some("Invalid email address".to_owned()),
        }
        .into_response());
    };
    if let Err(AuthError::WeakPassword(msg)) = validate_password(&form.password) {
        return Ok(AddAdminTemplate { error: Some(msg) }.into_response());
    }
    let role = match parse_role(&form.role) {
        Ok(role) => role,
        Err(msg) => return Ok(AddAdminTemplate { error: Some(msg) }.into_response()),
    };
    let password_hash = hash_password(&form.password)?;

    match state
        .admins()
        .create(NewAdmin {
            email,
            name: form.name,
            role,
            password_hash,
        })
        .await
    {
        Ok(_) => Ok(Redirect::to("/admin/services").into_response()),
        Err(RepositoryError::Conflict(msg)) => {
            Ok(AddAdminTemplate { error: Some(msg) }.into_response())
        }
        Err(other) => Err(other.into()),
    }
}

/// Display the update form pre-filled with the stored record.
pub async fn update_form(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<EditAdminTemplate> {
    let admin = state
        .admins()
        .get_by_id(AdminId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("admin {id}")))?;

    Ok(EditAdminTemplate {
        id,
        email: admin.email.to_string(),
        name: admin.name,
        role: admin.role.to_string(),
    })
}

/// Apply changes by id and redirect to the dashboard.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(form): Query<AdminForm>,
) -> Result<Response> {
    let admin_id = AdminId::new(id);
    let existing = state
        .admins()
        .get_by_id(admin_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("admin {id}")))?;

    let email = Email::parse(&form.email)
        .map_err(|e| AppError::BadRequest(format!("invalid email: {e}")))?;
    let role = parse_role(&form.role).map_err(AppError::BadRequest)?;
    let password_hash = if form.password.is_empty() {
        let (_, hash) = state
            .admins()
            .get_with_password_hash(&existing.email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("admin {id}")))?;
        hash
    } else {
        validate_password(&form.password).map_err(|e| AppError::BadRequest(e.to_string()))?;
        hash_password(&form.password)?
    };

    let updated = state
        .admins()
        .update(
            admin_id,
            NewAdmin {
                email,
                name: form.name,
                role,
                password_hash,
            },
        )
        .await?;
    if !updated {
        tracing::warn!(id, "update of missing admin ignored");
    }

    Ok(Redirect::to("/admin/services").into_response())
}

/// Delete by id and redirect to the dashboard. A missing id is a logged
/// no-op; other records are untouched either way.
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect> {
    let deleted = state.admins().delete(AdminId::new(id)).await?;
    if !deleted {
        tracing::warn!(id, "delete of missing admin ignored");
    }
    Ok(Redirect::to("/admin/services"))
}
