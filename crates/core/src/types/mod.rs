//! Newtype wrappers for domain values.

mod email;
mod id;
mod role;

pub use email::{Email, EmailError};
pub use id::{AdminId, OrderId, ProductId, UserId};
pub use role::{AdminRole, RoleParseError};
