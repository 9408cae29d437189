use serde::{Deserialize, Serialize};

/// A marketable item in an account's inventory
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemDto {
    pub asset_id: String,
    pub name: String,
    /// Proxied image URL, empty when Steam supplied no icon
    pub image_url: String,
    /// Empty when the item has no rarity tag
    pub rarity: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub marketable: bool,
    pub tradable: bool,
}
