//! Conversions: REST wire types → Shop domain types.

use super::wire::{ShopItemResponse, ShopItemsResponse};
use super::{ShopCatalog, ShopItem};

impl From<ShopItemResponse> for ShopItem {
    fn from(item: ShopItemResponse) -> Self {
        ShopItem {
            id: item.id,
            name: item.name.unwrap_or_default(),
            price: item.price,
            available: item.available != Some(false),
        }
    }
}

impl From<ShopItemsResponse> for ShopCatalog {
    fn from(resp: ShopItemsResponse) -> Self {
        ShopCatalog {
            items: resp.items.into_iter().map(ShopItem::from).collect(),
        }
    }
}
