//! HTTP route handlers for the back office.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Login page (admin + user forms)
//! GET  /health                  - Liveness check
//!
//! # Auth
//! GET  /adminLogin              - Admin login (redirects to dashboard)
//! GET  /userlogin               - User login (renders shop view)
//! POST /logout                  - Drop the session
//!
//! # Shop flow (requires user session)
//! POST /product/search          - Exact-name product search
//! POST /product/order           - Place an order
//! GET  /product/back            - Shop view with order history
//!
//! # Admin (requires admin session)
//! GET  /admin/services          - Dashboard: all users/admins/products/orders
//! GET  /addAdmin  POST /addingAdmin    GET /updateAdmin/{id}
//! GET  /updatingAdmin/{id}      GET /deleteAdmin/{id}
//! GET  /addProduct POST /addingProduct GET /updateProduct/{id}
//! GET  /updatingProduct/{id}    GET /deleteProduct/{id}
//! GET  /addUser   POST /addingUser     GET /updateUser/{id}
//! GET  /updatingUser/{id}       GET /deleteUser/{id}
//! ```
//!
//! The camel-case paths mirror the forms that post to them.

pub mod admins;
pub mod auth;
pub mod dashboard;
pub mod products;
pub mod shop;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};
use chrono::{DateTime, Utc};

use crate::state::AppState;

/// Timestamp rendering used across list views.
pub(crate) fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

/// Liveness health check endpoint.
pub async fn health() -> &'static str {
    "ok"
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(auth::login_page))
        .route("/adminLogin", get(auth::admin_login))
        .route("/userlogin", get(auth::user_login))
        .route("/logout", post(auth::logout))
}

/// Create the shop flow router.
pub fn shop_routes() -> Router<AppState> {
    Router::new()
        .route("/product/search", post(shop::search))
        .route("/product/order", post(shop::place_order))
        .route("/product/back", get(shop::back))
}

/// Create the admin dashboard and CRUD router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/services", get(dashboard::index))
        // Admin accounts
        .route("/addAdmin", get(admins::add_form))
        .route("/addingAdmin", post(admins::create))
        .route("/updateAdmin/{id}", get(admins::update_form))
        .route("/updatingAdmin/{id}", get(admins::update))
        .route("/deleteAdmin/{id}", get(admins::delete))
        // Products
        .route("/addProduct", get(products::add_form))
        .route("/addingProduct", post(products::create))
        .route("/updateProduct/{id}", get(products::update_form))
        .route("/updatingProduct/{id}", get(products::update))
        .route("/deleteProduct/{id}", get(products::delete))
        // Users
        .route("/addUser", get(users::add_form))
        .route("/addingUser", post(users::create))
        .route("/updateUser/{id}", get(users::update_form))
        .route("/updatingUser/{id}", get(users::update))
        .route("/deleteUser/{id}", get(users::delete))
}

/// Create all routes for the back office.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(shop_routes())
        .merge(admin_routes())
}
