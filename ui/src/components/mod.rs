//! Shared components for the storefront: the Pico.css building blocks plus
//! the chrome and listing widgets.

pub mod dropdown;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod page_heading;
pub mod pico;
pub mod product_card;
pub mod search_box;
