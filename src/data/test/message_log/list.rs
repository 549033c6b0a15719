use super::*;

/// Tests listing message records newest first within a server.
///
/// Expected: Ok with the server's records in reverse insertion order
#[tokio::test]
async fn returns_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MessageLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageLogRepository::new(db);
    repo.create(param(1, 10, "deleted")).await?;
    repo.create(param(1, 11, "edited")).await?;
    repo.create(param(9, 12, "deleted")).await?;

    let logs = repo.list(1, 100).await?;

    let messages: Vec<u64> = logs.iter().map(|l| l.message_id).collect();
    assert_eq!(messages, vec![11, 10]);

    Ok(())
}
