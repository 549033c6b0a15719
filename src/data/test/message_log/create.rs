use super::*;

/// Tests appending a message audit record.
///
/// Expected: Ok with all identifiers and content stored
#[tokio::test]
async fn appends_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MessageLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageLogRepository::new(db);
    let log = repo.create(param(1, 44, "deleted")).await?;

    assert_eq!(log.server_id, 1);
    assert_eq!(log.message_id, 44);
    assert_eq!(log.user_id, 2);
    assert_eq!(log.channel_id, 3);
    assert_eq!(log.content.as_deref(), Some("hello"));
    assert_eq!(log.action, "deleted");

    Ok(())
}
