use gildedrose_core::{DomainError, DomainResult};

use crate::item::Item;
use crate::updater::InventoryUpdater;

/// An owned, ordered batch of items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Advance every item by one tick.
    pub fn update_quality(&mut self) {
        InventoryUpdater::advance(Some(&mut self.items));
    }

    /// Advance every item by `days` consecutive ticks.
    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.update_quality();
        }
    }

    /// Item at `index`, or `NotFound` when `index >= len`.
    pub fn item(&self, index: usize) -> DomainResult<&Item> {
        self.items
            .get(index)
            .ok_or_else(|| DomainError::not_found(index, self.items.len()))
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

impl From<Vec<Item>> for Inventory {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}
