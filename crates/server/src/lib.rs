//! Shopfloor server library.
//!
//! The back office is a single axum application serving both surfaces:
//! the shop flow (user login, product search, order placement) and the
//! admin dashboard with its CRUD screens. Exposed as a library so the
//! router can be driven directly in tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use tower_sessions::SessionStore;

use crate::state::AppState;

/// Build the application router.
///
/// The session store is injected so the binary can use the Postgres-backed
/// store while tests run against an in-memory one.
pub fn app<S>(state: AppState, session_store: S, secure_cookies: bool) -> Router
where
    S: SessionStore + Clone,
{
    let session_layer = middleware::session_layer(session_store, secure_cookies);

    Router::new()
        .route("/health", get(routes::health))
        .merge(routes::routes())
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
