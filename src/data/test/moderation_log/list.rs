use super::*;

/// Tests listing moderation actions most recent first.
///
/// Expected: Ok with entries ordered by descending creation time
#[tokio::test]
async fn returns_most_recent_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ModerationLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    ModerationLogFactory::new(db, "1", "2")
        .action("kick")
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    ModerationLogFactory::new(db, "1", "2")
        .action("ban")
        .created_at(now)
        .build()
        .await?;
    ModerationLogFactory::new(db, "1", "2")
        .action("mute")
        .created_at(now - Duration::hours(1))
        .build()
        .await?;

    let repo = ModerationLogRepository::new(db);
    let logs = repo.list(1, 50).await?;

    let actions: Vec<&str> = logs.iter().map(|l| l.action.as_str()).collect();
    assert_eq!(actions, vec!["ban", "mute", "kick"]);

    Ok(())
}

/// Tests that the listing is bounded and scoped to one server.
///
/// Expected: Ok with at most `limit` entries of the requested server
#[tokio::test]
async fn applies_limit_and_server_scope() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ModerationLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_moderation_log(db, "1", "2", "warn").await?;
    }
    factory::create_moderation_log(db, "9", "2", "ban").await?;

    let repo = ModerationLogRepository::new(db);
    let logs = repo.list(1, 2).await?;

    assert_eq!(logs.len(), 2);
    assert!(logs.iter().all(|l| l.server_id == 1));

    Ok(())
}

/// Tests listing a server whose ledger contains an unreadable row.
///
/// Verifies that a row with a non-numeric stored user ID is skipped while the
/// remaining entries are still returned.
///
/// Expected: Ok with only the readable entry
#[tokio::test]
async fn skips_unreadable_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ModerationLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_moderation_log(db, "1", "not-a-snowflake", "ban").await?;
    factory::create_moderation_log(db, "1", "2", "kick").await?;

    let repo = ModerationLogRepository::new(db);
    let logs = repo.list(1, 50).await?;

    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].user_id, 2);
    assert_eq!(logs[0].action, "kick");

    Ok(())
}
