//! Builders for raw Steam inventory JSON.
//!
//! The values mirror what the community inventory endpoint returns, including its habit of
//! sending flags as integers.

use serde_json::{json, Value};

/// Asset of the given class with the default instance
pub fn asset(asset_id: &str, class_id: &str) -> Value {
    json!({
        "appid": 730,
        "contextid": "2",
        "assetid": asset_id,
        "classid": class_id,
        "instanceid": "0",
        "amount": "1"
    })
}

/// Description for the given class with a rarity tag and an icon path derived from the class
pub fn description(class_id: &str, market_hash_name: &str, marketable: bool) -> Value {
    json!({
        "appid": 730,
        "classid": class_id,
        "instanceid": "0",
        "icon_url": format!("icon-{}", class_id),
        "name": market_hash_name,
        "market_hash_name": market_hash_name,
        "market_name": market_hash_name,
        "type": "Mil-Spec Grade Rifle",
        "tradable": 1,
        "marketable": if marketable { 1 } else { 0 },
        "tags": [
            { "category": "Type", "internal_name": "CSGO_Type_Rifle", "localized_tag_name": "Rifle" },
            { "category": "Rarity", "internal_name": "Rarity_Rare_Weapon", "localized_tag_name": "Mil-Spec Grade" }
        ]
    })
}

/// Successful inventory page, `last_assetid` marks that more pages follow
pub fn inventory_page(assets: Vec<Value>, descriptions: Vec<Value>, last_assetid: Option<&str>) -> Value {
    let total = assets.len();
    let mut page = json!({
        "assets": assets,
        "descriptions": descriptions,
        "total_inventory_count": total,
        "success": 1,
        "rwgrsn": -2
    });

    if let Some(last_assetid) = last_assetid {
        page["more_items"] = json!(1);
        page["last_assetid"] = json!(last_assetid);
    }

    page
}

/// Single page holding one marketable item per `(asset_id, class_id, name)`
pub fn marketable_page(items: &[(&str, &str, &str)]) -> Value {
    inventory_page(
        items
            .iter()
            .map(|(asset_id, class_id, _)| asset(asset_id, class_id))
            .collect(),
        items
            .iter()
            .map(|(_, class_id, name)| description(class_id, name, true))
            .collect(),
        None,
    )
}

/// Inventory item as stored inside a snapshot
pub fn snapshot_item(asset_id: &str, name: &str) -> Value {
    json!({
        "assetId": asset_id,
        "name": name,
        "imageUrl": "",
        "rarity": "",
        "type": "",
        "marketable": true,
        "tradable": true
    })
}
