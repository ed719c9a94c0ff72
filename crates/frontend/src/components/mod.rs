//! Reusable UI components.

mod error_message;
mod loading;
mod menu_item_card;
mod navbar;

pub use error_message::ErrorMessage;
pub use loading::Loading;
pub use menu_item_card::MenuItemCard;
pub use navbar::Navbar;
