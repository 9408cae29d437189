use super::*;

/// Expect only items of the requested type
#[tokio::test]
async fn filters_by_type() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CatalogItem)
        .with_catalog_item("M4A4 | Asiimov (Field-Tested)", Some("Rifle"))
        .with_catalog_item("AWP | Asiimov (Field-Tested)", Some("Sniper Rifle"))
        .with_catalog_item("AK-47 | Redline (Field-Tested)", Some("Rifle"))
        .with_catalog_item("Sticker | Crown (Foil)", None)
        .build()
        .await?;

    let repo = CatalogItemRepository::new(&test.db);
    let result = repo.get_by_type("Rifle").await?;

    let names: Vec<&str> = result.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["AK-47 | Redline (Field-Tested)", "M4A4 | Asiimov (Field-Tested)"]
    );

    Ok(())
}

/// Expect an empty list for an unknown type
#[tokio::test]
async fn returns_empty_for_unknown_type() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::CatalogItem)?;

    let repo = CatalogItemRepository::new(&test.db);
    let result = repo.get_by_type("Gloves").await?;

    assert!(result.is_empty());

    Ok(())
}
