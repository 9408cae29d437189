use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An entry of the shared item catalog
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemDto {
    pub id: i32,
    pub market_hash_name: String,
    pub name: String,
    pub image_url: String,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub rarity: Option<String>,
    pub marketable: bool,
    pub tradable: bool,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ItemCountDto {
    pub count: u64,
}
