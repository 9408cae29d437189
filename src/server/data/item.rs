//! Item catalog repository.

use chrono::Utc;
use migration::{Expr, ExprTrait, Func, OnConflict};
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::inventory::CatalogEntry;

/// Repository for the shared item catalog
pub struct CatalogItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CatalogItemRepository<'a, C> {
    /// Creates a new instance of [`CatalogItemRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a catalog item or updates the existing item with the same market hash name
    ///
    /// On conflict the image, type, rarity, and flags are updated and `updated_at` is refreshed,
    /// `name` and `created_at` are kept. A returned model whose `created_at` equals its
    /// `updated_at` was newly inserted.
    pub async fn upsert(
        &self,
        entry: &CatalogEntry,
    ) -> Result<entity::catalog_item::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let item = entity::catalog_item::ActiveModel {
            market_hash_name: ActiveValue::Set(entry.market_hash_name.clone()),
            name: ActiveValue::Set(entry.name.clone()),
            image_url: ActiveValue::Set(entry.image_url.clone()),
            icon_url: ActiveValue::Set(entry.icon_path.clone()),
            item_type: ActiveValue::Set(entry.item_type.clone()),
            rarity: ActiveValue::Set(entry.rarity.clone()),
            marketable: ActiveValue::Set(entry.marketable),
            tradable: ActiveValue::Set(entry.tradable),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::CatalogItem::insert(item)
            .on_conflict(
                OnConflict::column(entity::catalog_item::Column::MarketHashName)
                    .update_columns([
                        entity::catalog_item::Column::ImageUrl,
                        entity::catalog_item::Column::IconUrl,
                        entity::catalog_item::Column::ItemType,
                        entity::catalog_item::Column::Rarity,
                        entity::catalog_item::Column::Marketable,
                        entity::catalog_item::Column::Tradable,
                        entity::catalog_item::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Catalog item with the given market hash name
    pub async fn get_by_market_hash_name(
        &self,
        market_hash_name: &str,
    ) -> Result<Option<entity::catalog_item::Model>, DbErr> {
        entity::prelude::CatalogItem::find()
            .filter(entity::catalog_item::Column::MarketHashName.eq(market_hash_name))
            .one(self.db)
            .await
    }

    /// Number of catalog items
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::CatalogItem::find().count(self.db).await
    }

    /// Items whose name or market hash name contains `query`, ignoring case, ordered by name
    pub async fn search(
        &self,
        query: &str,
        limit: u64,
    ) -> Result<Vec<entity::catalog_item::Model>, DbErr> {
        let pattern = format!("%{}%", query.to_lowercase());

        entity::prelude::CatalogItem::find()
            .filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::catalog_item::Column::Name)))
                            .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(
                            entity::catalog_item::Column::MarketHashName,
                        )))
                        .like(pattern),
                    ),
            )
            .order_by_asc(entity::catalog_item::Column::Name)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Items of the given type, ordered by name
    pub async fn get_by_type(
        &self,
        item_type: &str,
    ) -> Result<Vec<entity::catalog_item::Model>, DbErr> {
        entity::prelude::CatalogItem::find()
            .filter(entity::catalog_item::Column::ItemType.eq(item_type))
            .order_by_asc(entity::catalog_item::Column::Name)
            .all(self.db)
            .await
    }
}
