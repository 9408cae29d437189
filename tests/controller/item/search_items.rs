use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use skinvault::{
    model::item::CatalogItemDto,
    server::controller::item::{search_items, SearchParams},
};

use super::*;

fn search(q: Option<&str>, limit: Option<u64>) -> Query<SearchParams> {
    Query(SearchParams {
        q: q.map(str::to_string),
        limit,
    })
}

async fn catalog() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_inventory_tables()
        .with_catalog_item("M4A4 | Asiimov (Field-Tested)", Some("Rifle"))
        .with_catalog_item("AWP | Asiimov (Field-Tested)", Some("Sniper Rifle"))
        .with_catalog_item("AK-47 | Redline (Field-Tested)", Some("Rifle"))
        .build()
        .await
}

/// Expect 200 with the matching items ordered by name
#[tokio::test]
async fn returns_matching_items() -> Result<(), TestError> {
    let test = catalog().await?;

    let result = search_items(State(test.app_state()), search(Some("Asiimov"), None)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let items: Vec<CatalogItemDto> = json_body(resp).await;
    let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["AWP | Asiimov (Field-Tested)", "M4A4 | Asiimov (Field-Tested)"]
    );

    Ok(())
}

/// Expect the requested limit to cap the results
#[tokio::test]
async fn applies_limit() -> Result<(), TestError> {
    let test = catalog().await?;

    let result = search_items(State(test.app_state()), search(Some("Field-Tested"), Some(1))).await;

    let items: Vec<CatalogItemDto> = json_body(result.into_response()).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "AK-47 | Redline (Field-Tested)");

    Ok(())
}

/// Expect 400 when no search query is provided
#[tokio::test]
async fn rejects_missing_query() -> Result<(), TestError> {
    let test = catalog().await?;

    for q in [None, Some(""), Some("   ")] {
        let result = search_items(State(test.app_state()), search(q, None)).await;

        let resp = result.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "query {:?}", q);
    }

    Ok(())
}
