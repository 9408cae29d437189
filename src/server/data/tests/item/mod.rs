mod count;
mod get_by_type;
mod search;
mod upsert;

use skinvault_test_utils::prelude::*;

use crate::server::{data::item::CatalogItemRepository, model::inventory::CatalogEntry};

fn catalog_entry(market_hash_name: &str, item_type: Option<&str>) -> CatalogEntry {
    CatalogEntry {
        market_hash_name: market_hash_name.to_string(),
        name: market_hash_name.to_string(),
        image_url: format!("{}/image-proxy/icon", TEST_APP_URL),
        icon_path: "icon".to_string(),
        item_type: item_type.map(str::to_string),
        rarity: Some("Classified".to_string()),
        marketable: true,
        tradable: true,
    }
}
