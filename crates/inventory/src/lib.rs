//! In-memory inventory of named items.
//!
//! This crate holds the inventory rules as deterministic domain logic (no IO,
//! no menus, no persistence). A presentation layer feeds it [`ItemDraft`]s and
//! prints what comes back.
//!
//! - [`Inventory`] owns the items and tracks which [`SortKey`] order holds.
//! - [`ordering`] is a stable insertion sort that reports its comparison count.
//! - [`locator`] is a binary search by name over name-ordered items.

pub mod config;
pub mod inventory;
pub mod item;
pub mod locator;
pub mod ordering;

pub use config::InventoryConfig;
pub use inventory::Inventory;
pub use item::{Item, ItemDraft, ItemKind, ItemName, Priority, Quantity};
pub use ordering::SortKey;
