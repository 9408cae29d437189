//! Raw Steam community inventory response shapes.
//!
//! Steam is loose with types: flags arrive as `1`, `true`, or `"1"`, ids as strings or numbers,
//! and empty inventories omit the asset and description arrays entirely. These structs accept
//! all of those shapes and are immediately narrowed into the strict domain records, nothing past
//! the page fetcher sees them.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::server::model::inventory::{AssetRecord, DescriptionRecord, InventoryPage, ItemTag};

#[derive(Debug, Deserialize)]
pub(crate) struct RawInventoryResponse {
    #[serde(default, deserialize_with = "flag")]
    pub success: bool,
    #[serde(default)]
    pub assets: Vec<RawAsset>,
    #[serde(default)]
    pub descriptions: Vec<RawDescription>,
    #[serde(default, deserialize_with = "flag")]
    pub more_items: bool,
    #[serde(default, deserialize_with = "optional_id")]
    pub last_assetid: Option<String>,
    #[serde(default)]
    pub total_inventory_count: Option<u64>,
    #[serde(default, alias = "error", alias = "Error")]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawAsset {
    #[serde(deserialize_with = "id")]
    pub assetid: String,
    #[serde(deserialize_with = "id")]
    pub classid: String,
    #[serde(default, deserialize_with = "id")]
    pub instanceid: String,
    #[serde(default, deserialize_with = "optional_id")]
    pub amount: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDescription {
    #[serde(deserialize_with = "id")]
    pub classid: String,
    #[serde(default, deserialize_with = "id")]
    pub instanceid: String,
    #[serde(default)]
    pub market_hash_name: Option<String>,
    #[serde(default)]
    pub market_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub icon_url_large: Option<String>,
    #[serde(default, rename = "type")]
    pub item_type: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    pub tradable: bool,
    #[serde(default, deserialize_with = "flag")]
    pub marketable: bool,
    #[serde(default)]
    pub tags: Vec<RawTag>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTag {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub internal_name: Option<String>,
    #[serde(default)]
    pub localized_tag_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl RawInventoryResponse {
    /// Narrows the response into a typed page.
    ///
    /// A response whose own success flag is false is treated as the end of the inventory: an
    /// empty page with no more data available.
    pub(crate) fn into_page(self) -> InventoryPage {
        if !self.success {
            return InventoryPage::default();
        }

        let more_available = self.more_items && self.last_assetid.is_some();

        InventoryPage {
            assets: self.assets.into_iter().map(AssetRecord::from).collect(),
            descriptions: self
                .descriptions
                .into_iter()
                .map(DescriptionRecord::from)
                .collect(),
            more_available,
            next_cursor: if more_available {
                self.last_assetid
            } else {
                None
            },
        }
    }
}

impl From<RawAsset> for AssetRecord {
    fn from(raw: RawAsset) -> Self {
        let amount = raw
            .amount
            .as_deref()
            .and_then(|amount| amount.parse().ok())
            .unwrap_or(1);

        Self {
            asset_id: raw.assetid,
            class_id: raw.classid,
            instance_id: normalize_instance_id(raw.instanceid),
            amount,
        }
    }
}

impl From<RawDescription> for DescriptionRecord {
    fn from(raw: RawDescription) -> Self {
        let market_hash_name = [&raw.market_hash_name, &raw.market_name, &raw.name]
            .into_iter()
            .flatten()
            .find(|name| !name.is_empty())
            .cloned();

        let icon_path = [raw.icon_url, raw.icon_url_large]
            .into_iter()
            .flatten()
            .find(|icon| !icon.is_empty())
            .unwrap_or_default();

        Self {
            class_id: raw.classid,
            instance_id: normalize_instance_id(raw.instanceid),
            market_hash_name,
            display_name: raw.name.unwrap_or_default(),
            icon_path,
            item_type: raw.item_type.filter(|t| !t.is_empty()),
            tradable: raw.tradable,
            marketable: raw.marketable,
            tags: raw.tags.into_iter().map(ItemTag::from).collect(),
        }
    }
}

impl From<RawTag> for ItemTag {
    fn from(raw: RawTag) -> Self {
        let value = [raw.localized_tag_name, raw.name, raw.internal_name]
            .into_iter()
            .flatten()
            .find(|value| !value.is_empty());

        Self {
            category: raw.category,
            value,
        }
    }
}

/// Missing instance ids are equivalent to the default instance `"0"`
fn normalize_instance_id(instance_id: String) -> String {
    if instance_id.is_empty() {
        "0".to_string()
    } else {
        instance_id
    }
}

fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(value) => value,
        Value::Number(value) => value.as_f64().is_some_and(|n| n != 0.0),
        Value::String(value) => value == "1" || value.eq_ignore_ascii_case("true"),
        _ => false,
    })
}

fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(optional_id(deserializer)?.unwrap_or_default())
}

fn optional_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(value) => Some(value),
        Value::Number(value) => Some(value.to_string()),
        _ => None,
    })
}
