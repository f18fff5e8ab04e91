//! Fridgekeep - a terminal fridge inventory tracker
//!
//! Keeps a small CSV table of what went into the fridge and when,
//! and shows how long each item has been sitting there.

pub mod age;
pub mod items;
pub mod store;
pub mod ui;

// Re-export commonly used types
pub use items::{Inventory, Item};
pub use store::Store;
pub use ui::App;
