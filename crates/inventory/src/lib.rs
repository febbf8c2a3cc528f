//! Inventory domain module.
//!
//! This crate contains the per-tick business rules for stocked items,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod inventory;
pub mod item;
pub mod rules;
pub mod stock;
pub mod updater;

pub use inventory::Inventory;
pub use item::{Item, ItemKind, names};
pub use stock::standard_stock;
pub use updater::InventoryUpdater;
