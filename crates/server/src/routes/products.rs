//! Catalog CRUD pass-throughs.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;

use shopfloor_core::ProductId;

use crate::db::RepositoryError;
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::models::NewProduct;
use crate::state::AppState;

/// Product form fields, shared by the add and update routes.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
}

/// Add-product form template.
#[derive(Template, WebTemplate)]
#[template(path = "product/add.html")]
pub struct AddProductTemplate {
    pub error: Option<String>,
}

/// Update-product form template, pre-filled from the stored record.
#[derive(Template, WebTemplate)]
#[template(path = "product/edit.html")]
pub struct EditProductTemplate {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub description: String,
}

/// Display the add-product form.
pub async fn add_form(RequireAdmin(_admin): RequireAdmin) -> impl IntoResponse {
    AddProductTemplate { error: None }
}

/// Persist a new product and redirect to the dashboard.
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    if form.price.is_sign_negative() {
        return Ok(AddProductTemplate {
            error: Some("Price must not be negative".to_owned()),
        }
        .into_response());
    }

    match state
        .products()
        .create(NewProduct {
            name: form.name,
            price: form.price,
            description: form.description,
        })
        .await
    {
        Ok(_) => Ok(Redirect::to("/admin/services").into_response()),
        Err(RepositoryError::Conflict(msg)) => {
            Ok(AddProductTemplate { error: Some(msg) }.into_response())
        }
        Err(other) => Err(other.into()),
    }
}

/// Display the update form pre-filled with the stored record.
pub async fn update_form(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<EditProductTemplate> {
    let product = state
        .products()
        .get_by_id(ProductId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(EditProductTemplate {
        id,
        name: product.name,
        price: product.price,
        description: product.description,
    })
}

/// Apply changes by id and redirect to the dashboard.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(form): Query<ProductForm>,
) -> Result<Response> {
    if form.price.is_sign_negative() {
        return Err(AppError::BadRequest("price must not be negative".to_owned()));
    }

    let updated = state
        .products()
        .update(
            ProductId::new(id),
            NewProduct {
                name: form.name,
                price: form.price,
                description: form.description,
            },
        )
        .await?;
    if !updated {
        tracing::warn!(id, "update of missing product ignored");
    }

    Ok(Redirect::to("/admin/services").into_response())
}

/// Delete by id and redirect to the dashboard.
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect> {
    let deleted = state.products().delete(ProductId::new(id)).await?;
    if !deleted {
        tracing::warn!(id, "delete of missing product ignored");
    }
    Ok(Redirect::to("/admin/services"))
}
