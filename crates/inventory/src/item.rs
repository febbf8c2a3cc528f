use core::fmt;

use serde::{Deserialize, Serialize};

use gildedrose_core::ValueObject;

/// Item names that select special-cased behavior.
///
/// Matching is exact and case-sensitive; any other name is a default item.
pub mod names {
    pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
    pub const AGED_BRIE: &str = "Aged Brie";
    pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
    pub const CONJURED: &str = "Conjured Mana Cake";
}

/// Behavioral category of an item, resolved once from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Never sold, never loses quality (fixed at 80).
    Legendary,
    /// Gains quality as it ages.
    AgesPositively,
    /// Gains quality faster as the event approaches, worthless afterwards.
    EventPass,
    /// Loses quality twice as fast as a default item.
    AcceleratedDecay,
    Default,
}

impl ItemKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            names::SULFURAS => ItemKind::Legendary,
            names::AGED_BRIE => ItemKind::AgesPositively,
            names::BACKSTAGE_PASSES => ItemKind::EventPass,
            names::CONJURED => ItemKind::AcceleratedDecay,
            _ => ItemKind::Default,
        }
    }

    pub fn is_legendary(self) -> bool {
        matches!(self, ItemKind::Legendary)
    }
}

impl ValueObject for ItemKind {}

/// A stocked item.
///
/// `sell_in` and `quality` are advanced in place by the updater. The name
/// (and the kind derived from it) is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    name: String,
    kind: ItemKind,
    /// Days left to sell the item; negative once expired.
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        let name = name.into();
        let kind = ItemKind::from_name(&name);
        Self {
            name,
            kind,
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

/// Wire shape of an item: the kind is never serialized, it is re-derived
/// from the name.
#[derive(Serialize, Deserialize)]
struct ItemRecord {
    name: String,
    sell_in: i32,
    quality: i32,
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Item::new(record.name, record.sell_in, record.quality)
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        ItemRecord {
            name: item.name,
            sell_in: item.sell_in,
            quality: item.quality,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve_to_their_kind() {
        assert_eq!(ItemKind::from_name(names::SULFURAS), ItemKind::Legendary);
        assert_eq!(ItemKind::from_name(names::AGED_BRIE), ItemKind::AgesPositively);
        assert_eq!(ItemKind::from_name(names::BACKSTAGE_PASSES), ItemKind::EventPass);
        assert_eq!(ItemKind::from_name(names::CONJURED), ItemKind::AcceleratedDecay);
    }

    #[test]
    fn unknown_names_fall_back_to_default() {
        assert_eq!(ItemKind::from_name("fixme"), ItemKind::Default);
        assert_eq!(ItemKind::from_name(""), ItemKind::Default);
        assert_eq!(ItemKind::from_name("aged brie"), ItemKind::Default);
        assert_eq!(ItemKind::from_name("Sulfuras"), ItemKind::Default);
    }

    #[test]
    fn new_resolves_kind_from_name() {
        let item = Item::new(names::BACKSTAGE_PASSES, 15, 20);
        assert_eq!(item.name(), names::BACKSTAGE_PASSES);
        assert_eq!(item.kind(), ItemKind::EventPass);
        assert_eq!(item.sell_in, 15);
        assert_eq!(item.quality, 20);
    }

    #[test]
    fn display_matches_fixture_columns() {
        let item = Item::new("+5 Dexterity Vest", 10, 20);
        assert_eq!(item.to_string(), "+5 Dexterity Vest, 10, 20");
    }

    #[test]
    fn serializes_without_kind() {
        let item = Item::new(names::AGED_BRIE, 2, 0);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Aged Brie", "sell_in": 2, "quality": 0 })
        );
    }

    #[test]
    fn deserializing_rederives_kind() {
        let item: Item = serde_json::from_str(
            r#"{ "name": "Sulfuras, Hand of Ragnaros", "sell_in": -1, "quality": 80 }"#,
        )
        .unwrap();
        assert_eq!(item.kind(), ItemKind::Legendary);
        assert_eq!(item, Item::new(names::SULFURAS, -1, 80));
    }
}
