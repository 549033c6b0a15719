use super::*;

/// Tests finding an existing balance row.
///
/// Verifies that the repository returns the stored row with IDs parsed back to u64.
///
/// Expected: Ok(Some(balance)) with the stored values
#[tokio::test]
async fn returns_existing_balance() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserBalance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_balance_with_amount(db, "1", "2", 150).await?;

    let repo = UserBalanceRepository::new(db);
    let balance = repo.find(1, 2).await?;

    assert!(balance.is_some());
    let balance = balance.unwrap();
    assert_eq!(balance.server_id, 1);
    assert_eq!(balance.user_id, 2);
    assert_eq!(balance.balance, 150);

    Ok(())
}

/// Tests finding a balance for a member without a row.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserBalance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserBalanceRepository::new(db);
    let balance = repo.find(1, 2).await?;

    assert!(balance.is_none());

    Ok(())
}

/// Tests that balance rows are scoped by server.
///
/// Verifies that a row for the same user in another server is not returned.
///
/// Expected: Ok(None) for the other server
#[tokio::test]
async fn scopes_lookup_by_server() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserBalance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_balance(db, "1", "2").await?;

    let repo = UserBalanceRepository::new(db);
    let balance = repo.find(9, 2).await?;

    assert!(balance.is_none());

    Ok(())
}
