//! Inventory sub-client — fetch and display the authoritative inventory.

use crate::client::GameClient;
use crate::domain::inventory::wire::InventoryResponse;
use crate::domain::inventory::InventoryState;
use crate::error::SdkError;
use crate::network::INVENTORY_PATH;
use crate::render::{InventoryView, StatusLine};

pub struct Inventory<'a> {
    pub(crate) client: &'a GameClient,
}

impl<'a> Inventory<'a> {
    /// One `GET /api/inventory` round trip, no rendering.
    pub async fn get(&self) -> Result<InventoryState, SdkError> {
        let resp: InventoryResponse = self.client.http.get(INVENTORY_PATH).await?;
        Ok(resp.into())
    }

    /// Fetch the inventory and make it the displayed state.
    ///
    /// On failure the previously displayed inventory is left as is and the
    /// error is shown on the status line.
    pub async fn load(&self) -> Result<InventoryState, SdkError> {
        self.client.status(StatusLine::neutral("Loading inventory..."));
        match self.get().await {
            Ok(inventory) => {
                *self.client.inventory.write().await = Some(inventory.clone());
                self.client
                    .renderer
                    .inventory(&InventoryView::from(&inventory));
                self.client.status(StatusLine::clear());
                Ok(inventory)
            }
            Err(e) => {
                self.client
                    .status(StatusLine::error_or(&e, "Failed to load inventory."));
                Err(e)
            }
        }
    }

    /// The inventory currently on display, if any has been loaded.
    pub async fn current(&self) -> Option<InventoryState> {
        self.client.inventory.read().await.clone()
    }
}
