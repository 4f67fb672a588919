//! Conversions: REST wire types → Inventory domain types.

use super::wire::InventoryResponse;
use super::InventoryState;
use crate::shared::serde_util::Lenient;

impl From<InventoryResponse> for InventoryState {
    fn from(resp: InventoryResponse) -> Self {
        let items = resp
            .inventory
            .into_iter()
            .filter_map(|(id, Lenient(count))| (count > 0).then_some((id, count as u64)))
            .collect();
        InventoryState {
            coins: resp.coins,
            items,
        }
    }
}
