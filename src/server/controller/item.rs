//! Item catalog endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        item::{CatalogItemDto, ItemCountDto},
    },
    server::{
        data::item::CatalogItemRepository,
        error::Error,
        model::{app::AppState, db::CatalogItemModel},
    },
};

/// OpenAPI tag of the item catalog routes
pub static ITEM_TAG: &str = "item";

/// Number of search results returned when no limit is requested
pub const DEFAULT_SEARCH_LIMIT: u64 = 100;
/// Upper bound on the number of search results
pub const MAX_SEARCH_LIMIT: u64 = 500;

/// Query parameters of [`search_items`]
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Text the item name must contain
    pub q: Option<String>,
    /// Maximum number of results, capped at 500
    pub limit: Option<u64>,
}

/// Get the number of items in the catalog
#[utoipa::path(
    get,
    path = "/api/items/count",
    tag = ITEM_TAG,
    responses(
        (status = 200, description = "Catalog item count", body = ItemCountDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_item_count(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let count = CatalogItemRepository::new(&state.db).count().await?;

    Ok((StatusCode::OK, Json(ItemCountDto { count })))
}

/// Search catalog items by name
#[utoipa::path(
    get,
    path = "/api/items/search",
    tag = ITEM_TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "Matching catalog items ordered by name", body = Vec<CatalogItemDto>),
        (status = 400, description = "Missing search query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_items(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, Error> {
    let query = params.q.as_deref().map(str::trim).unwrap_or_default();

    if query.is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: "Search query is required".to_string(),
            }),
        )
            .into_response());
    }

    let limit = params
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .clamp(1, MAX_SEARCH_LIMIT);

    let items = CatalogItemRepository::new(&state.db)
        .search(query, limit)
        .await?;

    Ok((StatusCode::OK, Json(to_dtos(items))).into_response())
}

/// Get catalog items of one type
#[utoipa::path(
    get,
    path = "/api/items/type/{item_type}",
    tag = ITEM_TAG,
    params(("item_type" = String, Path, description = "Item type, e.g. `Rifle`")),
    responses(
        (status = 200, description = "Catalog items of the type ordered by name", body = Vec<CatalogItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_items_by_type(
    State(state): State<AppState>,
    Path(item_type): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let items = CatalogItemRepository::new(&state.db)
        .get_by_type(&item_type)
        .await?;

    Ok((StatusCode::OK, Json(to_dtos(items))))
}

fn to_dtos(items: Vec<CatalogItemModel>) -> Vec<CatalogItemDto> {
    items
        .into_iter()
        .map(|item| CatalogItemDto {
            id: item.id,
            market_hash_name: item.market_hash_name,
            name: item.name,
            image_url: item.image_url,
            item_type: item.item_type,
            rarity: item.rarity,
            marketable: item.marketable,
            tradable: item.tradable,
            updated_at: item.updated_at,
        })
        .collect()
}
