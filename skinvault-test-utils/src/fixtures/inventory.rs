use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ActiveValue};
use serde_json::Value;

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn inventory<'a>(&'a mut self) -> InventoryFixtures<'a> {
        InventoryFixtures { setup: self }
    }
}

pub struct InventoryFixtures<'a> {
    pub setup: &'a mut TestContext,
}

impl<'a> InventoryFixtures<'a> {
    /// Insert an inventory snapshot last updated at `updated_at`.
    ///
    /// # Arguments
    /// - `account_id` - Account the snapshot belongs to
    /// - `items` - JSON array of snapshot items, see `factory::snapshot_item`
    /// - `updated_at` - Timestamp used for both `created_at` and `updated_at`
    pub async fn insert_snapshot(
        &mut self,
        account_id: &str,
        items: Value,
        updated_at: NaiveDateTime,
    ) -> Result<entity::user_inventory::Model, TestError> {
        let snapshot = entity::user_inventory::ActiveModel {
            account_id: ActiveValue::Set(account_id.to_string()),
            items: ActiveValue::Set(items),
            created_at: ActiveValue::Set(updated_at),
            updated_at: ActiveValue::Set(updated_at),
            ..Default::default()
        };

        Ok(snapshot.insert(&self.setup.db).await?)
    }

    /// Insert a catalog item named after its market hash name.
    pub async fn insert_catalog_item(
        &mut self,
        market_hash_name: &str,
        item_type: Option<&str>,
    ) -> Result<entity::catalog_item::Model, TestError> {
        let now = chrono::Utc::now().naive_utc();
        let item = entity::catalog_item::ActiveModel {
            market_hash_name: ActiveValue::Set(market_hash_name.to_string()),
            name: ActiveValue::Set(market_hash_name.to_string()),
            image_url: ActiveValue::Set(String::new()),
            icon_url: ActiveValue::Set(String::new()),
            item_type: ActiveValue::Set(item_type.map(str::to_string)),
            rarity: ActiveValue::Set(None),
            marketable: ActiveValue::Set(true),
            tradable: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        Ok(item.insert(&self.setup.db).await?)
    }
}
