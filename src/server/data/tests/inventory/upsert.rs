use super::*;

/// Expect Ok when inserting the first snapshot of an account
#[tokio::test]
async fn creates_new_snapshot() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::UserInventory)?;
    let repo = InventoryRepository::new(&test.db);

    let result = repo
        .upsert(
            TEST_ACCOUNT_ID,
            serde_json::json!([factory::snapshot_item("1", "Widget")]),
        )
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let created = result.unwrap();
    assert_eq!(created.account_id, TEST_ACCOUNT_ID);
    assert_eq!(created.items.as_array().map(Vec::len), Some(1));
    assert_eq!(created.created_at, created.updated_at);

    Ok(())
}

/// Expect the items to be replaced, created_at preserved, and updated_at refreshed
#[tokio::test]
async fn replaces_existing_snapshot() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::UserInventory)?;
    let repo = InventoryRepository::new(&test.db);

    let initial = repo
        .upsert(
            TEST_ACCOUNT_ID,
            serde_json::json!([
                factory::snapshot_item("1", "Widget"),
                factory::snapshot_item("2", "Gadget")
            ]),
        )
        .await?;

    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    let latest = repo
        .upsert(TEST_ACCOUNT_ID, serde_json::json!([]))
        .await?;

    assert_eq!(latest.id, initial.id);
    assert_eq!(latest.items, serde_json::json!([]));
    assert_eq!(latest.created_at, initial.created_at);
    assert!(latest.updated_at > initial.updated_at);

    Ok(())
}

/// Expect snapshots of different accounts to be stored separately
#[tokio::test]
async fn keeps_accounts_separate() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::UserInventory)?;
    let repo = InventoryRepository::new(&test.db);

    let first = repo.upsert("1", serde_json::json!([])).await?;
    let second = repo.upsert("2", serde_json::json!([])).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

/// Expect Error when the table does not exist
#[tokio::test]
async fn fails_without_table() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let repo = InventoryRepository::new(&test.db);

    let result = repo.upsert(TEST_ACCOUNT_ID, serde_json::json!([])).await;

    assert!(result.is_err());

    Ok(())
}
