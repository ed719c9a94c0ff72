//! API route handlers.

mod admin;
mod menu;
mod users;

pub use admin::*;
pub use menu::*;
pub use users::*;
