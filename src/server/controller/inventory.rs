//! Inventory sync endpoint.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, inventory::InventoryItemDto},
    server::{
        error::Error,
        model::{app::AppState, inventory::AccountId},
    },
};

/// OpenAPI tag of the inventory routes
pub static INVENTORY_TAG: &str = "inventory";

/// Query parameters of [`get_inventory`]
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InventoryParams {
    /// Skip the cached snapshot and always fetch from Steam
    #[serde(default)]
    pub force: bool,
}

/// Get the marketable items in a Steam account's inventory
///
/// Serves the stored snapshot when it is younger than the cache window, otherwise syncs the
/// inventory from Steam. When Steam fails, the last stored snapshot of any age is served.
#[utoipa::path(
    get,
    path = "/api/inventory/{account_id}",
    tag = INVENTORY_TAG,
    params(
        ("account_id" = String, Path, description = "Steam account identifier"),
        InventoryParams
    ),
    responses(
        (status = 200, description = "Inventory items", body = Vec<InventoryItemDto>),
        (status = 400, description = "Invalid account identifier or rejected request", body = ErrorDto),
        (status = 403, description = "Inventory is private and no snapshot exists", body = ErrorDto),
        (status = 429, description = "Steam rate limited the sync and no snapshot exists", body = ErrorDto),
        (status = 502, description = "Steam is unavailable and no snapshot exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inventory(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    Query(params): Query<InventoryParams>,
) -> Result<impl IntoResponse, Error> {
    let account_id = AccountId::parse(&account_id)?;

    let items = state.inventory.sync(&account_id, params.force).await?;

    let items: Vec<InventoryItemDto> = items.into_iter().map(InventoryItemDto::from).collect();

    Ok((StatusCode::OK, Json(items)))
}
