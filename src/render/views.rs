//! View models built from domain types.

use crate::domain::inventory::InventoryState;
use crate::domain::profile::Profile;
use crate::domain::shop::ShopCatalog;
use crate::shared::ItemId;

// ─── Profile ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub username: String,
    pub xp: u64,
    pub level: u32,
    pub coins: i64,
    /// Earned achievement ids, sorted. Empty means "show the placeholder".
    pub achievements: Vec<String>,
}

impl ProfileView {
    pub const NO_ACHIEVEMENTS: &'static str = "No achievements saved on server yet.";
}

impl From<&Profile> for ProfileView {
    fn from(profile: &Profile) -> Self {
        ProfileView {
            username: profile.username.clone(),
            xp: profile.xp,
            level: profile.display_level(),
            coins: profile.coins,
            achievements: profile
                .earned_achievements()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

// ─── Inventory ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryEntry {
    pub item_id: ItemId,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryView {
    pub coins: i64,
    /// Owned items sorted by id.
    pub entries: Vec<InventoryEntry>,
}

impl InventoryView {
    pub const EMPTY: &'static str = "No cosmetics yet.";
}

impl From<&InventoryState> for InventoryView {
    fn from(inventory: &InventoryState) -> Self {
        InventoryView {
            coins: inventory.coins,
            entries: inventory
                .items
                .iter()
                .map(|(item_id, count)| InventoryEntry {
                    item_id: item_id.clone(),
                    count: *count,
                })
                .collect(),
        }
    }
}

// ─── Shop ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuyControl {
    /// Enabled button bound to the item id.
    Buy,
    /// Disabled button, item not yet available.
    Soon,
}

impl BuyControl {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Soon => "Soon",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopEntry {
    pub item_id: ItemId,
    pub label: String,
    pub price: i64,
    pub control: BuyControl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopView {
    Empty { placeholder: &'static str },
    Listing(Vec<ShopEntry>),
}

impl ShopView {
    pub const EMPTY: &'static str = "Shop is empty for now. Cosmetics will be added later.";

    /// Item ids that get a live buy binding.
    pub fn bindings(&self) -> Vec<&ItemId> {
        match self {
            Self::Empty { .. } => Vec::new(),
            Self::Listing(entries) => entries
                .iter()
                .filter(|e| e.control == BuyControl::Buy)
                .map(|e| &e.item_id)
                .collect(),
        }
    }
}

impl From<&ShopCatalog> for ShopView {
    fn from(catalog: &ShopCatalog) -> Self {
        if catalog.is_empty() {
            return ShopView::Empty {
                placeholder: Self::EMPTY,
            };
        }
        ShopView::Listing(
            catalog
                .items
                .iter()
                .map(|item| ShopEntry {
                    item_id: item.id.clone(),
                    label: item.label().to_string(),
                    price: item.price,
                    control: if item.available {
                        BuyControl::Buy
                    } else {
                        BuyControl::Soon
                    },
                })
                .collect(),
        )
    }
}
