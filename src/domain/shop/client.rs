//! Shop sub-client — catalog loading and the buy-then-refresh purchase flow.

use crate::client::GameClient;
use crate::domain::shop::guard::PurchaseGuard;
use crate::domain::shop::wire::{BuyRequest, ShopItemsResponse};
use crate::domain::shop::{PurchaseOutcome, ShopCatalog};
use crate::error::SdkError;
use crate::network::{SHOP_BUY_PATH, SHOP_ITEMS_PATH};
use crate::render::{ShopView, StatusLine};
use crate::shared::ItemId;

pub struct Shop<'a> {
    pub(crate) client: &'a GameClient,
}

impl<'a> Shop<'a> {
    /// One `GET /api/shop/items` round trip, no rendering.
    pub async fn get(&self) -> Result<ShopCatalog, SdkError> {
        let resp: ShopItemsResponse = self.client.http.get(SHOP_ITEMS_PATH).await?;
        Ok(resp.into())
    }

    /// Fetch the catalog and render it. An empty catalog renders a placeholder
    /// with no buy bindings.
    pub async fn load(&self) -> Result<ShopCatalog, SdkError> {
        self.client.status(StatusLine::neutral("Loading shop..."));
        match self.get().await {
            Ok(catalog) => {
                self.client.renderer.shop(&ShopView::from(&catalog));
                self.client.status(StatusLine::clear());
                Ok(catalog)
            }
            Err(e) => {
                self.client
                    .status(StatusLine::error_or(&e, "Failed to load shop."));
                Err(e)
            }
        }
    }

    /// Buy `item_id`, then re-read the inventory from the server.
    ///
    /// - An empty `item_id` is ignored.
    /// - While another purchase is in flight the call returns
    ///   [`PurchaseOutcome::Busy`] without touching the network.
    /// - On success exactly one inventory fetch follows; its result is what
    ///   gets displayed. Balances are never adjusted locally.
    /// - On failure the displayed inventory is left untouched.
    pub async fn buy(&self, item_id: &str) -> Result<PurchaseOutcome, SdkError> {
        if item_id.is_empty() {
            return Ok(PurchaseOutcome::Ignored);
        }
        let item_id = ItemId::from(item_id);

        let Some(_guard) =
            PurchaseGuard::acquire(&self.client.purchase_in_flight, &self.client.renderer)
        else {
            tracing::debug!(item_id = %item_id, "purchase already in flight, ignoring");
            return Ok(PurchaseOutcome::Busy);
        };

        self.client.status(StatusLine::neutral("Buying..."));
        let request = BuyRequest {
            item_id: item_id.clone(),
        };
        if let Err(e) = self
            .client
            .http
            .post::<serde_json::Value, _>(SHOP_BUY_PATH, &request)
            .await
        {
            self.client
                .status(StatusLine::error_or(&e, "Purchase failed."));
            return Err(e);
        }
        tracing::debug!(item_id = %item_id, "purchase accepted, refreshing inventory");

        // The buy has committed server-side; a failed refresh is reported but
        // does not undo it.
        let inventory = self.client.inventory().load().await?;
        self.client
            .status(StatusLine::neutral(format!("Purchased {}.", item_id)));

        Ok(PurchaseOutcome::Purchased { item_id, inventory })
    }
}
