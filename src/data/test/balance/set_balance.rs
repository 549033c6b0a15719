use super::*;

/// Tests overwriting a stored balance.
///
/// Expected: Ok(1) and the new balance persisted
#[tokio::test]
async fn overwrites_balance() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserBalance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_balance_with_amount(db, "1", "2", 50).await?;

    let repo = UserBalanceRepository::new(db);
    let updated = repo.set_balance(1, 2, 80).await?;

    assert_eq!(updated, 1);
    assert_eq!(repo.find(1, 2).await?.unwrap().balance, 80);

    Ok(())
}

/// Tests overwriting the balance of a member without a row.
///
/// Expected: Ok(0) and no row created
#[tokio::test]
async fn updates_nothing_for_missing_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserBalance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserBalanceRepository::new(db);
    let updated = repo.set_balance(1, 2, 80).await?;

    assert_eq!(updated, 0);
    assert!(repo.find(1, 2).await?.is_none());

    Ok(())
}
