use super::*;

/// Tests creating the first warning of a member.
///
/// Expected: Ok with warn_count 1
#[tokio::test]
async fn creates_counter_at_one() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserWarning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserWarningRepository::new(db);
    let warning = repo.create(1, 2).await?;

    assert_eq!(warning.warn_count, 1);
    assert_eq!(warning.server_id, 1);
    assert_eq!(warning.user_id, 2);

    Ok(())
}
