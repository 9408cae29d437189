//! Server startup: database, Steam client, and sync coordinator wiring.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::Error,
    service::inventory::{
        DbCatalogStore, DbSnapshotStore, InFlightRegistry, InventorySyncCoordinator,
    },
    steam::SteamInventoryClient,
    util::image::ImageUrlBuilder,
};

/// Build the HTTP client used to fetch inventory pages from Steam
pub fn build_steam_client(config: &Config) -> Result<SteamInventoryClient, Error> {
    SteamInventoryClient::new(config.steam.clone())
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Wire the inventory sync coordinator to the Steam client and the database-backed stores
pub fn build_inventory_coordinator(
    config: &Config,
    db: &DatabaseConnection,
    steam_client: SteamInventoryClient,
) -> Result<InventorySyncCoordinator, Error> {
    let images = ImageUrlBuilder::new(&config.app_url)?;

    Ok(InventorySyncCoordinator::new(
        Arc::new(steam_client),
        Arc::new(DbSnapshotStore::new(db.clone())),
        Arc::new(DbCatalogStore::new(db.clone())),
        images,
        InFlightRegistry::new(),
        config.sync_policy,
    ))
}
