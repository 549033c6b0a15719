use super::*;
use test_utils::factory::{helpers::create_balances, user_balance::UserBalanceFactory};

/// Tests ranking a server by balance.
///
/// Verifies that balances {A:100, B:300, C:200} come back as [B, C, A].
///
/// Expected: Ok with users ordered 20, 30, 10
#[tokio::test]
async fn ranks_by_balance_descending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserBalance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_balances(db, "1", &[("10", 100), ("20", 300), ("30", 200)]).await?;

    let repo = UserBalanceRepository::new(db);
    let ranked = repo.leaderboard(1, LeaderboardMetric::Balance, 10).await?;

    let users: Vec<u64> = ranked.iter().map(|b| b.user_id).collect();
    assert_eq!(users, vec![20, 30, 10]);

    Ok(())
}

/// Tests that the limit truncates the ranking.
///
/// Expected: Ok with only the top two users
#[tokio::test]
async fn applies_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserBalance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_balances(db, "1", &[("10", 100), ("20", 300), ("30", 200)]).await?;

    let repo = UserBalanceRepository::new(db);
    let ranked = repo.leaderboard(1, LeaderboardMetric::Balance, 2).await?;

    let users: Vec<u64> = ranked.iter().map(|b| b.user_id).collect();
    assert_eq!(users, vec![20, 30]);

    Ok(())
}

/// Tests ranking by xp and reputation.
///
/// Expected: Ok with each metric ordering its own column
#[tokio::test]
async fn ranks_by_selected_metric() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserBalance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserBalanceFactory::new(db).server_id("1").user_id("10").xp(500).reputation(9).build().await?;
    UserBalanceFactory::new(db).server_id("1").user_id("20").xp(4000).reputation(1).build().await?;

    let repo = UserBalanceRepository::new(db);
    let by_xp = repo.leaderboard(1, LeaderboardMetric::Xp, 10).await?;
    let by_reputation = repo.leaderboard(1, LeaderboardMetric::Reputation, 10).await?;

    assert_eq!(by_xp[0].user_id, 20);
    assert_eq!(by_reputation[0].user_id, 10);

    Ok(())
}

/// Tests the order of tied rows.
///
/// Verifies that equal balances are ordered by ascending user ID regardless of
/// insertion order.
///
/// Expected: Ok with tied users ordered 10, 20
#[tokio::test]
async fn breaks_ties_by_user_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserBalance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_balances(db, "1", &[("20", 100), ("10", 100), ("30", 500)]).await?;

    let repo = UserBalanceRepository::new(db);
    let ranked = repo.leaderboard(1, LeaderboardMetric::Balance, 10).await?;

    let users: Vec<u64> = ranked.iter().map(|b| b.user_id).collect();
    assert_eq!(users, vec![30, 10, 20]);

    Ok(())
}

/// Tests that other servers' rows are excluded.
///
/// Expected: Ok with only rows of the requested server
#[tokio::test]
async fn excludes_other_servers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserBalance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_balances(db, "1", &[("10", 100)]).await?;
    create_balances(db, "2", &[("20", 900)]).await?;

    let repo = UserBalanceRepository::new(db);
    let ranked = repo.leaderboard(1, LeaderboardMetric::Balance, 10).await?;

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].user_id, 10);

    Ok(())
}

/// Tests that tied rows are ordered by the numeric value of the user ID.
///
/// Verifies that IDs of different digit counts, such as 9 and 10 or 17- and
/// 19-digit snowflakes, are not compared as text.
///
/// Expected: Ok with tied users ordered 9, 10, then the snowflakes by value
#[tokio::test]
async fn orders_ties_numerically_across_id_lengths() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserBalance)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_balances(
        db,
        "1",
        &[
            ("10", 100),
            ("9", 100),
            ("1000000000000000000", 100),
            ("99999999999999999", 100),
        ],
    )
    .await?;

    let repo = UserBalanceRepository::new(db);
    let ranked = repo.leaderboard(1, LeaderboardMetric::Balance, 10).await?;

    let users: Vec<u64> = ranked.iter().map(|b| b.user_id).collect();
    assert_eq!(
        users,
        vec![9, 10, 99_999_999_999_999_999, 1_000_000_000_000_000_000]
    );

    Ok(())
}
