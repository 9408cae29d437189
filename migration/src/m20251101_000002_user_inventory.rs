use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserInventory::Table)
                    .if_not_exists()
                    .col(pk_auto(UserInventory::Id))
                    .col(string_uniq(UserInventory::AccountId))
                    .col(json_binary(UserInventory::Items))
                    .col(timestamp(UserInventory::CreatedAt))
                    .col(timestamp(UserInventory::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserInventory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum UserInventory {
    Table,
    Id,
    AccountId,
    Items,
    CreatedAt,
    UpdatedAt,
}
