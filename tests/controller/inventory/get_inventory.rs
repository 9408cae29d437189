//! Tests for the get_inventory endpoint.
//!
//! Covers live syncs against the mock Steam endpoint, serving fresh snapshots from the
//! database, forced refreshes, stale snapshot fallback, and the status codes returned when no
//! inventory data is available.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{Duration, Utc};
use skinvault::{
    model::{api::ErrorDto, inventory::InventoryItemDto},
    server::{
        controller::inventory::{get_inventory, InventoryParams},
        data::{inventory::InventoryRepository, item::CatalogItemRepository},
    },
};

use super::*;

fn params(force: bool) -> Query<InventoryParams> {
    Query(InventoryParams { force })
}

/// Expect 200 with the marketable items of a live sync, stored as snapshot and in the catalog
#[tokio::test]
async fn syncs_inventory_from_steam() -> Result<(), TestError> {
    let page = factory::inventory_page(
        vec![
            factory::asset("1", "C1"),
            factory::asset("2", "C2"),
            factory::asset("3", "C404"),
        ],
        vec![
            factory::description("C1", "AK-47 | Redline (Field-Tested)", true),
            factory::description("C2", "Sealed Graffiti | Recoil AK-47", false),
        ],
        None,
    );
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_inventory_page_endpoint(TEST_ACCOUNT_ID, None, page, 1)
        .build()
        .await?;

    let result = get_inventory(
        State(test.app_state()),
        Path(TEST_ACCOUNT_ID.to_string()),
        params(false),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let items: Vec<InventoryItemDto> = json_body(resp).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].asset_id, "1");
    assert_eq!(items[0].name, "AK-47 | Redline (Field-Tested)");
    assert_eq!(items[0].rarity, "Mil-Spec Grade");
    assert_eq!(items[0].item_type, "Mil-Spec Grade Rifle");
    assert_eq!(items[0].image_url, format!("{}/image-proxy/icon-C1", TEST_APP_URL));

    let snapshot = InventoryRepository::new(&test.db)
        .get_by_account_id(TEST_ACCOUNT_ID)
        .await?
        .expect("snapshot should be stored");
    assert_eq!(snapshot.items.as_array().map(Vec::len), Some(1));

    // Non-marketable descriptions are still reconciled into the catalog
    assert_eq!(CatalogItemRepository::new(&test.db).count().await?, 2);

    test.assert_mocks();

    Ok(())
}

/// Expect the continuation cursor to be followed until Steam reports no more items
#[tokio::test]
async fn follows_continuation_cursor() -> Result<(), TestError> {
    let first = factory::inventory_page(
        vec![factory::asset("1", "C1")],
        vec![factory::description("C1", "AK-47 | Redline (Field-Tested)", true)],
        Some("1"),
    );
    let second = factory::marketable_page(&[("2", "C2", "AWP | Asiimov (Field-Tested)")]);
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_inventory_page_endpoint(TEST_ACCOUNT_ID, None, first, 1)
        .with_inventory_page_endpoint(TEST_ACCOUNT_ID, Some("1"), second, 1)
        .build()
        .await?;

    let result = get_inventory(
        State(test.app_state()),
        Path(TEST_ACCOUNT_ID.to_string()),
        params(false),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let items: Vec<InventoryItemDto> = json_body(resp).await;
    let asset_ids: Vec<&str> = items.iter().map(|item| item.asset_id.as_str()).collect();
    assert_eq!(asset_ids, vec!["1", "2"]);

    test.assert_mocks();

    Ok(())
}

/// Expect a fresh snapshot to be served without contacting Steam
#[tokio::test]
async fn serves_fresh_snapshot() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_snapshot(
            TEST_ACCOUNT_ID,
            serde_json::json!([factory::snapshot_item("9", "Cached Item")]),
            (Utc::now() - Duration::minutes(5)).naive_utc(),
        )
        .with_inventory_page_endpoint(
            TEST_ACCOUNT_ID,
            None,
            factory::marketable_page(&[("1", "C1", "Live Item")]),
            0,
        )
        .build()
        .await?;

    let result = get_inventory(
        State(test.app_state()),
        Path(TEST_ACCOUNT_ID.to_string()),
        params(false),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let items: Vec<InventoryItemDto> = json_body(resp).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Cached Item");

    test.assert_mocks();

    Ok(())
}

/// Expect `force=true` to bypass a fresh snapshot and replace it
#[tokio::test]
async fn force_refresh_bypasses_fresh_snapshot() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_snapshot(
            TEST_ACCOUNT_ID,
            serde_json::json!([factory::snapshot_item("9", "Cached Item")]),
            (Utc::now() - Duration::minutes(5)).naive_utc(),
        )
        .with_inventory_page_endpoint(
            TEST_ACCOUNT_ID,
            None,
            factory::marketable_page(&[("1", "C1", "Live Item")]),
            1,
        )
        .build()
        .await?;

    let result = get_inventory(
        State(test.app_state()),
        Path(TEST_ACCOUNT_ID.to_string()),
        params(true),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let items: Vec<InventoryItemDto> = json_body(resp).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Live Item");

    let snapshot = InventoryRepository::new(&test.db)
        .get_by_account_id(TEST_ACCOUNT_ID)
        .await?
        .expect("snapshot should be stored");
    assert_eq!(snapshot.items[0]["name"], "Live Item");

    test.assert_mocks();

    Ok(())
}

/// Expect a stale snapshot to be served when Steam rate limits the sync
#[tokio::test]
async fn falls_back_to_stale_snapshot() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_snapshot(
            TEST_ACCOUNT_ID,
            serde_json::json!([
                factory::snapshot_item("8", "Old Item"),
                factory::snapshot_item("9", "Older Item")
            ]),
            (Utc::now() - Duration::days(3)).naive_utc(),
        )
        .with_inventory_error_endpoint(TEST_ACCOUNT_ID, 429, 1)
        .build()
        .await?;

    let result = get_inventory(
        State(test.app_state()),
        Path(TEST_ACCOUNT_ID.to_string()),
        params(false),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let items: Vec<InventoryItemDto> = json_body(resp).await;
    assert_eq!(items.len(), 2);

    test.assert_mocks();

    Ok(())
}

/// Expect the failure category to select the status code when no snapshot exists
#[tokio::test]
async fn maps_failure_category_to_status() -> Result<(), TestError> {
    let cases = [
        (429, StatusCode::TOO_MANY_REQUESTS),
        (403, StatusCode::FORBIDDEN),
        (400, StatusCode::BAD_REQUEST),
        (500, StatusCode::BAD_GATEWAY),
    ];

    for (steam_status, expected) in cases {
        let test = TestBuilder::new()
            .with_inventory_tables()
            .with_inventory_error_endpoint(TEST_ACCOUNT_ID, steam_status, 1)
            .build()
            .await?;

        let result = get_inventory(
            State(test.app_state()),
            Path(TEST_ACCOUNT_ID.to_string()),
            params(false),
        )
        .await;

        assert!(result.is_err());
        let resp = result.into_response();
        assert_eq!(resp.status(), expected, "Steam status {}", steam_status);

        let error: ErrorDto = json_body(resp).await;
        assert!(!error.error.is_empty());

        test.assert_mocks();
    }

    Ok(())
}

/// Expect 400 for a blank account identifier without contacting Steam
#[tokio::test]
async fn rejects_blank_account_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_inventory_tables()
        .with_inventory_error_endpoint(TEST_ACCOUNT_ID, 500, 0)
        .build()
        .await?;

    let result = get_inventory(State(test.app_state()), Path("  ".to_string()), params(false)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    test.assert_mocks();

    Ok(())
}
