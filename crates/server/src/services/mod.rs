//! Business services sitting between routes and stores.

pub mod auth;
pub mod orders;
