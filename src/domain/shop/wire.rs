//! Wire types for shop requests and responses (REST).

use crate::shared::serde_util::{lenient_number, null_as_default};
use crate::shared::ItemId;
use serde::{Deserialize, Serialize};

/// `GET /api/shop/items` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShopItemsResponse {
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub items: Vec<ShopItemResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShopItemResponse {
    pub id: ItemId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_number::deserialize")]
    pub price: i64,
    /// Only an explicit `false` marks an item unavailable.
    #[serde(default)]
    pub available: Option<bool>,
}

/// `POST /api/shop/buy` body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuyRequest {
    #[serde(rename = "itemId")]
    pub item_id: ItemId,
}
