//! Database-backed snapshot and catalog stores.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{inventory::InventoryRepository, item::CatalogItemRepository},
    error::Error,
    model::inventory::{AccountId, CatalogEntry, InventoryItem, Snapshot, UpsertOutcome},
    service::inventory::{CatalogStore, SnapshotStore},
};

/// Stores snapshots in the `user_inventory` table
#[derive(Clone)]
pub struct DbSnapshotStore {
    db: DatabaseConnection,
}

impl DbSnapshotStore {
    /// Creates a store over the provided connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SnapshotStore for DbSnapshotStore {
    async fn read_snapshot(&self, account_id: &AccountId) -> Result<Option<Snapshot>, Error> {
        let Some(model) = InventoryRepository::new(&self.db)
            .get_by_account_id(account_id.as_str())
            .await?
        else {
            return Ok(None);
        };

        let items: Vec<InventoryItem> = serde_json::from_value(model.items)?;

        Ok(Some(Snapshot {
            account_id: account_id.clone(),
            items,
            updated_at: DateTime::<Utc>::from_naive_utc_and_offset(model.updated_at, Utc),
        }))
    }

    async fn write_snapshot(
        &self,
        account_id: &AccountId,
        items: &[InventoryItem],
    ) -> Result<(), Error> {
        let items = serde_json::to_value(items)?;

        InventoryRepository::new(&self.db)
            .upsert(account_id.as_str(), items)
            .await?;

        Ok(())
    }
}

/// Stores catalog entries in the `catalog_item` table
#[derive(Clone)]
pub struct DbCatalogStore {
    db: DatabaseConnection,
}

impl DbCatalogStore {
    /// Creates a store over the provided connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogStore for DbCatalogStore {
    async fn upsert_catalog_entry(&self, entry: &CatalogEntry) -> Result<UpsertOutcome, Error> {
        let model = CatalogItemRepository::new(&self.db).upsert(entry).await?;

        if model.created_at == model.updated_at {
            Ok(UpsertOutcome::Created)
        } else {
            Ok(UpsertOutcome::Updated)
        }
    }
}
