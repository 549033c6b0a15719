use super::*;

/// Tests listing a member's transactions newest first.
///
/// Expected: Ok with rows in reverse insertion order
#[tokio::test]
async fn returns_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Transaction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TransactionRepository::new(db);
    repo.create(&param(10, "daily")).await?;
    repo.create(&param(20, "daily")).await?;
    repo.create(&param(30, "daily")).await?;

    let transactions = repo.list(1, 2, 50).await?;

    let amounts: Vec<i64> = transactions.iter().map(|t| t.amount).collect();
    assert_eq!(amounts, vec![30, 20, 10]);

    Ok(())
}

/// Tests that listing is bounded by the limit and scoped to the member.
///
/// Expected: Ok with one row of the requested member only
#[tokio::test]
async fn applies_limit_and_scope() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Transaction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TransactionRepository::new(db);
    repo.create(&param(10, "daily")).await?;
    repo.create(&param(20, "daily")).await?;
    repo.create(&AddBalanceParam {
        user_id: 3,
        ..param(99, "daily")
    })
    .await?;

    let transactions = repo.list(1, 2, 1).await?;

    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].amount, 20);

    Ok(())
}
