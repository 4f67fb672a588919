//! Wire types for inventory responses (REST).

use crate::shared::serde_util::{lenient_number, null_as_default, Lenient};
use crate::shared::ItemId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `GET /api/inventory` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InventoryResponse {
    #[serde(default, deserialize_with = "lenient_number::deserialize")]
    pub coins: i64,
    /// item id → count; counts may be null, fractional or non-positive.
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub inventory: BTreeMap<ItemId, Lenient<i64>>,
}
