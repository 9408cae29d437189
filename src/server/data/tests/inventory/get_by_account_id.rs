use super::*;

/// Expect Some for an account with a stored snapshot
#[tokio::test]
async fn finds_existing_snapshot() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!(entity::prelude::UserInventory)?;
    let inserted = test
        .inventory()
        .insert_snapshot(
            TEST_ACCOUNT_ID,
            serde_json::json!([factory::snapshot_item("1", "Widget")]),
            chrono::Utc::now().naive_utc(),
        )
        .await?;

    let repo = InventoryRepository::new(&test.db);
    let result = repo.get_by_account_id(TEST_ACCOUNT_ID).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let found = result.unwrap().expect("snapshot should exist");
    assert_eq!(found.id, inserted.id);
    assert_eq!(found.items, inserted.items);

    Ok(())
}

/// Expect None for an account without a snapshot
#[tokio::test]
async fn returns_none_for_unknown_account() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::UserInventory)?;

    let repo = InventoryRepository::new(&test.db);
    let result = repo.get_by_account_id(TEST_ACCOUNT_ID).await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}
