//! Shopfloor back office server.
//!
//! Serves both surfaces on one port: the shop flow (user login, product
//! search, order placement) and the admin dashboard with its CRUD screens.
//!
//! # Architecture
//!
//! - Axum web framework
//! - Askama templates for server-side rendering
//! - `PostgreSQL` for accounts, catalog, orders, and sessions

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Router, routing::get};
use secrecy::ExposeSecret;
use sentry::integrations::tracing as sentry_tracing;
use sqlx::PgPool;
use tower_sessions_sqlx_store::PostgresStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shopfloor_core::{AdminRole, Email};

use shopfloor_server::config::ServerConfig;
use shopfloor_server::db::{self};
use shopfloor_server::models::NewAdmin;
use shopfloor_server::services::auth::hash_password;
use shopfloor_server::state::AppState;

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &ServerConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

/// Create the configured first-run admin account if it does not exist yet.
async fn bootstrap_admin(config: &ServerConfig, state: &AppState) {
    let Some(bootstrap) = &config.bootstrap_admin else {
        return;
    };

    let email = match Email::parse(&bootstrap.email) {
        Ok(email) => email,
        Err(e) => {
            tracing::error!(error = %e, "bootstrap admin email is invalid, skipping");
            return;
        }
    };

    match state.admins().get_by_email(&email).await {
        Ok(Some(_)) => return,
        Ok(None) => {}
        Err(e) => {
            tracing::error!(error = %e, "bootstrap admin lookup failed, skipping");
            return;
        }
    }

    let password_hash = match hash_password(bootstrap.password.expose_secret()) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!(error = %e, "bootstrap admin password hashing failed, skipping");
            return;
        }
    };

    match state
        .admins()
        .create(NewAdmin {
            email,
            name: bootstrap.name.clone(),
            role: AdminRole::SuperAdmin,
            password_hash,
        })
        .await
    {
        Ok(admin) => tracing::info!(email = %admin.email, "bootstrap admin created"),
        Err(e) => tracing::error!(error = %e, "bootstrap admin creation failed"),
    }
}

#[tokio::main]
async fn main() {
    // Load configuration from environment (needed for Sentry init)
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Initialize tracing with EnvFilter and Sentry integration
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopfloor_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    // Initialize database connection pool
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");
    tracing::info!("Database pool created");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    // Session storage shares the application database
    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .expect("Failed to run session store migrations");

    let state = AppState::new(&pool);
    bootstrap_admin(&config, &state).await;

    let app = shopfloor_server::app(state, session_store, config.secure_cookies())
        .merge(
            Router::new()
                .route("/health/ready", get(readiness))
                .with_state(pool),
        )
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    let addr = config.socket_addr();
    tracing::info!("shopfloor listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(pool): State<PgPool>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(&pool).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
