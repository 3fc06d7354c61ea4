//! Domain types handled by the stores and route handlers.
//!
//! These are validated domain objects, separate from database row types.

mod admin;
mod order;
mod product;
mod session;
mod user;

pub use admin::{Admin, NewAdmin};
pub use order::{NewOrder, Order};
pub use product::{NewProduct, Product};
pub use session::{CurrentAdmin, CurrentUser, keys};
pub use user::{NewUser, User};
