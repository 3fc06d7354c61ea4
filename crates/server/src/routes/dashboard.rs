//! Admin dashboard: every list, unfiltered.
//!
//! The aggregation is intentionally naive (no pagination). Every route in
//! this area sits behind [`RequireAdmin`].

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use rust_decimal::Decimal;

use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::models::{Admin, Order, Product, User};
use crate::routes::format_timestamp;
use crate::state::AppState;

/// User row on the dashboard.
#[derive(Debug, Clone)]
pub struct UserListItem {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub created_at: String,
}

impl From<&User> for UserListItem {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.as_i32(),
            email: user.email.to_string(),
            name: user.name.clone(),
            created_at: format_timestamp(&user.created_at),
        }
    }
}

/// Admin row on the dashboard.
#[derive(Debug, Clone)]
pub struct AdminListItem {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: String,
    pub created_at: String,
}

impl From<&Admin> for AdminListItem {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id.as_i32(),
            email: admin.email.to_string(),
            name: admin.name.clone(),
            role: admin.role.to_string(),
            created_at: format_timestamp(&admin.created_at),
        }
    }
}

/// Product row on the dashboard.
#[derive(Debug, Clone)]
pub struct ProductListItem {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub description: String,
}

impl From<&Product> for ProductListItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            price: product.price,
            description: product.description.clone(),
        }
    }
}

/// Order row on the dashboard.
#[derive(Debug, Clone)]
pub struct OrderListItem {
    pub id: i32,
    pub user_id: i32,
    pub product_name: String,
    pub quantity: u32,
    pub total: Decimal,
    pub ordered_at: String,
}

impl From<&Order> for OrderListItem {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.as_i32(),
            user_id: order.user_id.as_i32(),
            product_name: order.product_name.clone(),
            quantity: order.quantity,
            total: order.total,
            ordered_at: format_timestamp(&order.ordered_at),
        }
    }
}

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub admin_name: String,
    pub users: Vec<UserListItem>,
    pub admins: Vec<AdminListItem>,
    pub products: Vec<ProductListItem>,
    pub orders: Vec<OrderListItem>,
}

/// Dashboard handler: fetch all four lists and hand them to the view.
pub async fn index(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> Result<DashboardTemplate> {
    let users = state.users().list().await?;
    let admins = state.admins().list().await?;
    let products = state.products().list().await?;
    let orders = state.orders().list().await?;

    Ok(DashboardTemplate {
        admin_name: admin.name,
        users: users.iter().map(UserListItem::from).collect(),
        admins: admins.iter().map(AdminListItem::from).collect(),
        products: products.iter().map(ProductListItem::from).collect(),
        orders: orders.iter().map(OrderListItem::from).collect(),
    })
}
