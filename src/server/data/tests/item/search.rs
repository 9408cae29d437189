use super::*;

/// Expect items whose name contains the query, ordered by name
#[tokio::test]
async fn finds_items_by_name_fragment() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CatalogItem)
        .with_catalog_item("M4A4 | Asiimov (Field-Tested)", Some("Rifle"))
        .with_catalog_item("AWP | Asiimov (Field-Tested)", Some("Sniper Rifle"))
        .with_catalog_item("AK-47 | Redline (Field-Tested)", Some("Rifle"))
        .build()
        .await?;

    let repo = CatalogItemRepository::new(&test.db);
    let result = repo.search("Asiimov", 100).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let names: Vec<String> = result.unwrap().into_iter().map(|item| item.name).collect();
    assert_eq!(
        names,
        vec![
            "AWP | Asiimov (Field-Tested)".to_string(),
            "M4A4 | Asiimov (Field-Tested)".to_string()
        ]
    );

    Ok(())
}

/// Expect no more than `limit` results
#[tokio::test]
async fn limits_results() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CatalogItem)
        .with_catalog_item("Sticker | A", None)
        .with_catalog_item("Sticker | B", None)
        .with_catalog_item("Sticker | C", None)
        .build()
        .await?;

    let repo = CatalogItemRepository::new(&test.db);
    let result = repo.search("Sticker", 2).await?;

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].name, "Sticker | A");

    Ok(())
}

/// Expect the query to match regardless of letter case
#[tokio::test]
async fn ignores_case() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CatalogItem)
        .with_catalog_item("AWP | Asiimov (Field-Tested)", Some("Sniper Rifle"))
        .with_catalog_item("AK-47 | Redline (Field-Tested)", Some("Rifle"))
        .build()
        .await?;

    let repo = CatalogItemRepository::new(&test.db);

    for query in ["asiimov", "ASIIMOV", "aSiImOv"] {
        let result = repo.search(query, 100).await?;

        assert_eq!(result.len(), 1, "query {}", query);
        assert_eq!(result[0].name, "AWP | Asiimov (Field-Tested)");
    }

    Ok(())
}

/// Expect items to match on their market hash name when the display name differs
#[tokio::test]
async fn matches_market_hash_name() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::CatalogItem)?;
    let repo = CatalogItemRepository::new(&test.db);

    let mut entry = catalog_entry("StatTrak™ AK-47 | Redline (Field-Tested)", Some("Rifle"));
    entry.name = "AK-47 Redline".to_string();
    repo.upsert(&entry).await?;

    let result = repo.search("stattrak", 100).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].market_hash_name, entry.market_hash_name);

    Ok(())
}
