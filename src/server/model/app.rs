//! Application state for the HTTP layer.

use sea_orm::DatabaseConnection;

use crate::server::service::inventory::InventorySyncCoordinator;

/// State shared by all HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Inventory sync entry point, shared so concurrent requests deduplicate
    pub inventory: InventorySyncCoordinator,
}
