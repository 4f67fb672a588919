//! Inventory domain — coin balance and owned item counts.

#[cfg(feature = "http")]
pub mod client;
pub mod convert;
pub mod wire;

use crate::shared::ItemId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Display-only snapshot of the player's inventory.
///
/// Only positive counts are kept; an item whose server count is zero,
/// negative or null is not owned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryState {
    pub coins: i64,
    pub items: BTreeMap<ItemId, u64>,
}

impl InventoryState {
    pub fn count(&self, item_id: &str) -> u64 {
        self.items.get(item_id).copied().unwrap_or(0)
    }

    pub fn owns(&self, item_id: &str) -> bool {
        self.count(item_id) > 0
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
