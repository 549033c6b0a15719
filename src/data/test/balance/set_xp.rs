use super::*;

/// Tests that writing xp also writes the derived level.
///
/// Expected: Ok with xp 2500 and level 3
#[tokio::test]
async fn writes_xp_and_level() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserBalance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_balance(db, "1", "2").await?;

    let repo = UserBalanceRepository::new(db);
    repo.set_xp(1, 2, 2500).await?;

    let balance = repo.find(1, 2).await?.unwrap();
    assert_eq!(balance.xp, 2500);
    assert_eq!(balance.level, 3);

    Ok(())
}

/// Tests that the level drops back when xp is lowered below a boundary.
///
/// Expected: Ok with level 1 for xp 999
#[tokio::test]
async fn recomputes_level_below_boundary() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserBalance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user_balance::UserBalanceFactory::new(db)
        .server_id("1")
        .user_id("2")
        .xp(1000)
        .build()
        .await?;

    let repo = UserBalanceRepository::new(db);
    repo.set_xp(1, 2, 999).await?;

    assert_eq!(repo.find(1, 2).await?.unwrap().level, 1);

    Ok(())
}
