//! Inventory snapshot repository.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

/// Repository for per-account inventory snapshots
pub struct InventoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InventoryRepository<'a, C> {
    /// Creates a new instance of [`InventoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates or replaces the inventory snapshot of an account
    ///
    /// The whole item list is overwritten and `updated_at` refreshed, `created_at` is kept from
    /// the first insert.
    pub async fn upsert(
        &self,
        account_id: &str,
        items: serde_json::Value,
    ) -> Result<entity::user_inventory::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let inventory = entity::user_inventory::ActiveModel {
            account_id: ActiveValue::Set(account_id.to_string()),
            items: ActiveValue::Set(items),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::UserInventory::insert(inventory)
            .on_conflict(
                OnConflict::column(entity::user_inventory::Column::AccountId)
                    .update_columns([
                        entity::user_inventory::Column::Items,
                        entity::user_inventory::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Snapshot of the account, `None` if it was never synced
    pub async fn get_by_account_id(
        &self,
        account_id: &str,
    ) -> Result<Option<entity::user_inventory::Model>, DbErr> {
        entity::prelude::UserInventory::find()
            .filter(entity::user_inventory::Column::AccountId.eq(account_id))
            .one(self.db)
            .await
    }
}
