//! Session and authentication middleware.

pub mod auth;
pub mod session;

pub use auth::{
    RequireAdmin, RequireUser, clear_session, set_current_admin, set_current_user,
};
pub use session::{SESSION_COOKIE_NAME, session_layer};
