//! Domain types of the inventory synchronization core.
//!
//! Records arriving from the external inventory source are narrowed into [`AssetRecord`] and
//! [`DescriptionRecord`] at the page fetcher boundary, so everything past that point works with
//! fully typed data. [`InventoryItem`] is the assembled, externally visible unit persisted inside
//! a [`Snapshot`]; [`CatalogEntry`] is the cross-account item metadata written by the reconciler.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{model::inventory::InventoryItemDto, server::error::inventory::InventoryError};

/// Tag category holding an item's rarity
pub const RARITY_TAG_CATEGORY: &str = "Rarity";

/// Name used for items whose description carries no usable name
pub const UNKNOWN_ITEM_NAME: &str = "Unknown Item";

/// Opaque identifier of the account whose inventory is synchronized.
///
/// Used both as the in-flight deduplication key and as the snapshot key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Parses an account identifier, rejecting empty or whitespace-only input
    pub fn parse(value: impl AsRef<str>) -> Result<Self, InventoryError> {
        let value = value.as_ref().trim();

        if value.is_empty() {
            return Err(InventoryError::InvalidAccountId);
        }

        Ok(Self(value.to_string()))
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One owned unit in an account's inventory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetRecord {
    /// Unique within the account's current inventory
    pub asset_id: String,
    /// Class of the description this asset joins to
    pub class_id: String,
    /// Instance of the description this asset joins to, `"0"` when absent
    pub instance_id: String,
    /// Stack size
    pub amount: u64,
}

impl AssetRecord {
    /// Key joining this asset to its [`DescriptionRecord`]
    pub fn join_key(&self) -> (&str, &str) {
        (&self.class_id, &self.instance_id)
    }
}

/// Category/value pair attached to an item description
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemTag {
    /// Tag category, e.g. `Rarity`
    pub category: String,
    /// Display value of the tag
    pub value: Option<String>,
}

/// Metadata for one item class
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DescriptionRecord {
    /// Class this description applies to
    pub class_id: String,
    /// Instance this description applies to
    pub instance_id: String,
    /// Canonical catalog key, `None` when the source supplied no usable name
    pub market_hash_name: Option<String>,
    /// Name as shown in the Steam client
    pub display_name: String,
    /// Icon path as supplied by Steam, empty when missing
    pub icon_path: String,
    /// Item type, e.g. `Classified Rifle`
    pub item_type: Option<String>,
    /// Whether the item can be traded
    pub tradable: bool,
    /// Whether the item can be listed on the community market
    pub marketable: bool,
    /// Tags in the order the source returned them
    pub tags: Vec<ItemTag>,
}

impl DescriptionRecord {
    /// Key joining assets to this description
    pub fn join_key(&self) -> (&str, &str) {
        (&self.class_id, &self.instance_id)
    }

    /// Value of the first tag in the rarity category
    pub fn rarity(&self) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.category == RARITY_TAG_CATEGORY)
            .and_then(|tag| tag.value.as_deref())
    }

    /// Name shown for inventory items joined to this description
    pub fn item_name(&self) -> &str {
        self.market_hash_name
            .as_deref()
            .unwrap_or(UNKNOWN_ITEM_NAME)
    }
}

/// One normalized page returned by the external inventory source
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InventoryPage {
    /// Assets on this page
    pub assets: Vec<AssetRecord>,
    /// Descriptions for the classes on this page
    pub descriptions: Vec<DescriptionRecord>,
    /// Whether another page follows
    pub more_available: bool,
    /// Cursor to request the next page with, set only when more data is available
    pub next_cursor: Option<String>,
}

/// Assembled inventory unit returned to callers and persisted in snapshots
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Asset this item was assembled from
    pub asset_id: String,
    /// Market hash name, or a placeholder when Steam supplied none
    pub name: String,
    /// Proxied image URL
    pub image_url: String,
    /// Empty when the description carries no rarity tag
    pub rarity: String,
    /// Empty when the description carries no type
    #[serde(rename = "type")]
    pub item_type: String,
    /// Whether the item can be listed on the community market
    pub marketable: bool,
    /// Whether the item can be traded
    pub tradable: bool,
}

impl From<InventoryItem> for InventoryItemDto {
    fn from(item: InventoryItem) -> Self {
        Self {
            asset_id: item.asset_id,
            name: item.name,
            image_url: item.image_url,
            rarity: item.rarity,
            item_type: item.item_type,
            marketable: item.marketable,
            tradable: item.tradable,
        }
    }
}

/// Last successfully synced inventory for one account
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// Account the snapshot belongs to
    pub account_id: AccountId,
    /// Items of the last successful sync
    pub items: Vec<InventoryItem>,
    /// Time of the last successful sync
    pub updated_at: DateTime<Utc>,
}

/// Cross-account item metadata upserted by the catalog reconciler
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Catalog key, unique across the catalog
    pub market_hash_name: String,
    /// Display name, only set when the entry is first created
    pub name: String,
    /// Proxied image URL
    pub image_url: String,
    /// Icon path as supplied by Steam
    pub icon_path: String,
    /// Item type
    pub item_type: Option<String>,
    /// Rarity tag value
    pub rarity: Option<String>,
    /// Whether the item can be listed on the community market
    pub marketable: bool,
    /// Whether the item can be traded
    pub tradable: bool,
}

/// Whether a catalog upsert inserted a new row or refreshed an existing one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new entry was inserted
    Created,
    /// An existing entry was refreshed
    Updated,
}
