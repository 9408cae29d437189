pub use sea_orm_migration::prelude::*;

mod m20251101_000001_catalog_item;
mod m20251101_000002_user_inventory;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_catalog_item::Migration),
            Box::new(m20251101_000002_user_inventory::Migration),
        ]
    }
}
