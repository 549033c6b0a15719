use super::*;

/// Tests creating a zeroed balance row.
///
/// Expected: Ok with balance 0, xp 0, level 1 and reputation 0
#[tokio::test]
async fn creates_zeroed_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserBalance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserBalanceRepository::new(db);
    let balance = repo.create(1, 2).await?;

    assert_eq!(balance.balance, 0);
    assert_eq!(balance.xp, 0);
    assert_eq!(balance.level, 1);
    assert_eq!(balance.reputation, 0);
    assert!(balance.last_daily_reward.is_none());

    Ok(())
}
