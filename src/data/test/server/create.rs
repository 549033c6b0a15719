use super::*;

/// Tests registering a server.
///
/// Expected: Ok with the name stored and the default prefix applied
#[tokio::test]
async fn registers_with_default_prefix() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordServer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordServerRepository::new(db);
    let server = repo.create(1, Some("Guild".to_string())).await?;

    assert_eq!(server.server_id, 1);
    assert_eq!(server.server_name.as_deref(), Some("Guild"));
    assert_eq!(server.prefix, "!");
    assert!(server.bot_token.is_none());

    Ok(())
}

/// Tests registering a server twice.
///
/// Expected: Err(AppError::DbErr) from the unique server ID
#[tokio::test]
async fn rejects_duplicate_registration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordServer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordServerRepository::new(db);
    repo.create(1, None).await?;

    assert!(matches!(repo.create(1, None).await, Err(AppError::DbErr(_))));

    Ok(())
}
