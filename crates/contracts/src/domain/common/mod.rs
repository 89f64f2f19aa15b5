//! Common types for all inventory aggregates

pub mod category_catalog;
pub mod category_tree;
pub mod inventory_item;
pub mod status;

// Re-exports
pub use category_catalog::{parse_select_value, CategoryCatalog, CategoryRecord, CategorySelection};
pub use category_tree::{CategoryNode, CategoryTree, DisplayRow};
pub use inventory_item::InventoryItem;
pub use status::{stock_tone, term_tone, StatusTone};
