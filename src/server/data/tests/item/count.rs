use super::*;

/// Expect the number of stored catalog items
#[tokio::test]
async fn counts_items() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CatalogItem)
        .with_catalog_item("AK-47 | Redline (Field-Tested)", Some("Rifle"))
        .with_catalog_item("AWP | Asiimov (Field-Tested)", Some("Sniper Rifle"))
        .build()
        .await?;

    let repo = CatalogItemRepository::new(&test.db);
    let result = repo.count().await;

    assert!(matches!(result, Ok(2)));

    Ok(())
}

/// Expect zero for an empty catalog
#[tokio::test]
async fn counts_empty_catalog() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::CatalogItem)?;

    let repo = CatalogItemRepository::new(&test.db);
    let result = repo.count().await;

    assert!(matches!(result, Ok(0)));

    Ok(())
}
