//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/inventory/{account_id}` - Sync or serve an account's inventory
/// - `GET /api/items/count` - Number of catalog items
/// - `GET /api/items/search` - Search catalog items by name
/// - `GET /api/items/type/{item_type}` - Catalog items of one type
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`, Swagger UI at `/api/docs`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db, inventory });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Skinvault", description = "Skinvault API"), tags(
        (name = controller::inventory::INVENTORY_TAG, description = "Steam inventory sync routes"),
        (name = controller::item::ITEM_TAG, description = "Item catalog routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::inventory::get_inventory))
        .routes(routes!(controller::item::get_item_count))
        .routes(routes!(controller::item::search_items))
        .routes(routes!(controller::item::get_items_by_type))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
