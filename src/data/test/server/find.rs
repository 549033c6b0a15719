use super::*;

/// Tests finding a registered server.
///
/// Expected: Ok(Some(server))
#[tokio::test]
async fn returns_registered_server() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordServer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_server(db, "1").await?;

    let repo = DiscordServerRepository::new(db);
    let server = repo.find(1).await?;

    assert_eq!(server.map(|s| s.server_id), Some(1));

    Ok(())
}

/// Tests finding an unregistered server.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unregistered_server() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordServer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordServerRepository::new(db);

    assert!(repo.find(1).await?.is_none());

    Ok(())
}
