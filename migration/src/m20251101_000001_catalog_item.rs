use sea_orm_migration::{prelude::*, schema::*};

static IDX_CATALOG_ITEM_ITEM_TYPE: &str = "idx_catalog_item_item_type";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CatalogItem::Table)
                    .if_not_exists()
                    .col(pk_auto(CatalogItem::Id))
                    .col(string_uniq(CatalogItem::MarketHashName))
                    .col(string(CatalogItem::Name))
                    .col(text(CatalogItem::ImageUrl))
                    .col(text(CatalogItem::IconUrl))
                    .col(string_null(CatalogItem::ItemType))
                    .col(string_null(CatalogItem::Rarity))
                    .col(boolean(CatalogItem::Marketable))
                    .col(boolean(CatalogItem::Tradable))
                    .col(timestamp(CatalogItem::CreatedAt))
                    .col(timestamp(CatalogItem::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CATALOG_ITEM_ITEM_TYPE)
                    .table(CatalogItem::Table)
                    .col(CatalogItem::ItemType)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CATALOG_ITEM_ITEM_TYPE)
                    .table(CatalogItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CatalogItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CatalogItem {
    Table,
    Id,
    MarketHashName,
    Name,
    ImageUrl,
    IconUrl,
    ItemType,
    Rarity,
    Marketable,
    Tradable,
    CreatedAt,
    UpdatedAt,
}
