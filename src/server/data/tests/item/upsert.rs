use super::*;

/// Expect Ok when inserting a new catalog item
#[tokio::test]
async fn creates_new_item() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::CatalogItem)?;
    let entry = catalog_entry("AK-47 | Redline (Field-Tested)", Some("Rifle"));

    let repo = CatalogItemRepository::new(&test.db);
    let result = repo.upsert(&entry).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let created = result.unwrap();
    assert_eq!(created.market_hash_name, entry.market_hash_name);
    assert_eq!(created.icon_url, "icon");
    assert_eq!(created.item_type.as_deref(), Some("Rifle"));
    assert_eq!(created.created_at, created.updated_at);

    Ok(())
}

/// Expect mutable fields to be updated while name and created_at are preserved
#[tokio::test]
async fn updates_existing_item() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::CatalogItem)?;
    let repo = CatalogItemRepository::new(&test.db);
    let initial = repo
        .upsert(&catalog_entry("AK-47 | Redline (Field-Tested)", Some("Rifle")))
        .await?;

    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    let mut update = catalog_entry("AK-47 | Redline (Field-Tested)", Some("Classified Rifle"));
    update.name = "Renamed".to_string();
    update.marketable = false;
    update.rarity = None;
    let latest = repo.upsert(&update).await?;

    assert_eq!(latest.id, initial.id);
    assert_eq!(latest.name, initial.name);
    assert_eq!(latest.item_type.as_deref(), Some("Classified Rifle"));
    assert_eq!(latest.rarity, None);
    assert!(!latest.marketable);
    assert_eq!(latest.created_at, initial.created_at);
    assert!(latest.updated_at > initial.updated_at);

    Ok(())
}
