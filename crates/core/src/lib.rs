//! Shopfloor Core - shared types library.
//!
//! This crate provides the domain vocabulary used by the server crate:
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and admin roles
//! - [`pricing`] - The order total computation
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP. This keeps it lightweight and allows it to be used anywhere.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod pricing;
pub mod types;

pub use pricing::order_total;
pub use types::*;
