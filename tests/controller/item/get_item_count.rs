use axum::{extract::State, http::StatusCode, response::IntoResponse};
use skinvault::{model::item::ItemCountDto, server::controller::item::get_item_count};

use super::*;

/// Expect 200 with the number of catalog items
#[tokio::test]
async fn returns_catalog_count() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_catalog_item("AK-47 | Redline (Field-Tested)", Some("Rifle"))
        .with_catalog_item("AWP | Asiimov (Field-Tested)", Some("Sniper Rifle"))
        .build()
        .await?;

    let result = get_item_count(State(test.app_state())).await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: ItemCountDto = json_body(resp).await;
    assert_eq!(body.count, 2);

    Ok(())
}

/// Expect 500 when the catalog table is missing
#[tokio::test]
async fn fails_without_catalog_table() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_item_count(State(test.app_state())).await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
