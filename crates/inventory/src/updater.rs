//! One-tick batch update.

use crate::item::Item;
use crate::rules;

/// Advances a batch of items by exactly one tick.
///
/// Never instantiated; the batch is borrowed for the duration of a call only.
pub enum InventoryUpdater {}

impl InventoryUpdater {
    /// Advance every item of the batch by one tick.
    ///
    /// An absent batch is a no-op. Items are updated independently of each
    /// other, in order.
    pub fn advance(items: Option<&mut [Item]>) {
        let Some(items) = items else {
            tracing::trace!("no batch supplied, nothing to advance");
            return;
        };

        tracing::debug!(items = items.len(), "advancing inventory by one tick");
        for item in items.iter_mut() {
            Self::advance_item(item);
        }
    }

    /// Advance a single item by one tick.
    pub fn advance_item(item: &mut Item) {
        let kind = item.kind();
        // Both rules read the pre-tick values.
        let sell_in = item.sell_in;
        let quality = item.quality;

        item.sell_in = rules::next_sell_in(kind, sell_in);
        item.quality = rules::next_quality(kind, quality, sell_in);

        tracing::trace!(
            name = item.name(),
            ?kind,
            sell_in_before = sell_in,
            sell_in_after = item.sell_in,
            quality_before = quality,
            quality_after = item.quality,
            "item advanced"
        );
    }
}
