use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use skinvault::{model::item::CatalogItemDto, server::controller::item::get_items_by_type};

use super::*;

/// Expect 200 with only the items of the requested type
#[tokio::test]
async fn returns_items_of_type() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_catalog_item("M4A4 | Asiimov (Field-Tested)", Some("Rifle"))
        .with_catalog_item("AWP | Asiimov (Field-Tested)", Some("Sniper Rifle"))
        .with_catalog_item("Sticker | Crown (Foil)", None)
        .build()
        .await?;

    let result = get_items_by_type(State(test.app_state()), Path("Rifle".to_string())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let items: Vec<CatalogItemDto> = json_body(resp).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].market_hash_name, "M4A4 | Asiimov (Field-Tested)");
    assert_eq!(items[0].item_type.as_deref(), Some("Rifle"));

    Ok(())
}

/// Expect 200 with an empty list for an unknown type
#[tokio::test]
async fn returns_empty_list_for_unknown_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_inventory_tables().build().await?;

    let result = get_items_by_type(State(test.app_state()), Path("Gloves".to_string())).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let items: Vec<CatalogItemDto> = json_body(resp).await;
    assert!(items.is_empty());

    Ok(())
}
