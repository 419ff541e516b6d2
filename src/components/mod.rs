//! UI Components
//!
//! One Leptos component per file.

mod admin_page;
mod cart_page;
mod menu_card;
mod menu_page;
mod navbar;

pub use admin_page::AdminPage;
pub use cart_page::CartPage;
pub use menu_card::MenuCard;
pub use menu_page::MenuPage;
pub use navbar::Navbar;
