//! Shop domain — catalog items, purchase requests and outcomes.

#[cfg(feature = "http")]
pub mod client;
pub mod convert;
pub mod guard;
pub mod wire;

use crate::domain::inventory::InventoryState;
use crate::shared::ItemId;
use serde::{Deserialize, Serialize};

/// One purchasable cosmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopItem {
    pub id: ItemId,
    /// May be empty; [`ShopItem::label`] falls back to the id.
    pub name: String,
    pub price: i64,
    pub available: bool,
}

impl ShopItem {
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            self.id.as_str()
        } else {
            &self.name
        }
    }
}

/// The shop catalog, in the order the server returned it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopCatalog {
    pub items: Vec<ShopItem>,
}

impl ShopCatalog {
    pub fn get(&self, item_id: &str) -> Option<&ShopItem> {
        self.items.iter().find(|item| item.id.as_str() == item_id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Result of [`Shop::buy`](client::Shop::buy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// No item id was given; nothing was sent.
    Ignored,
    /// Another purchase is still in flight; nothing was sent.
    Busy,
    /// The server accepted the purchase. `inventory` is the re-fetched,
    /// authoritative inventory, now on display.
    Purchased {
        item_id: ItemId,
        inventory: InventoryState,
    },
}

impl PurchaseOutcome {
    pub fn is_purchased(&self) -> bool {
        matches!(self, Self::Purchased { .. })
    }
}
