use super::*;

/// Tests finding an existing warning counter.
///
/// Expected: Ok(Some(warning)) with the stored count
#[tokio::test]
async fn returns_existing_counter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserWarning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_warning(db, "1", "2", 4).await?;

    let repo = UserWarningRepository::new(db);
    let warning = repo.find(1, 2).await?;

    assert_eq!(warning.map(|w| w.warn_count), Some(4));

    Ok(())
}

/// Tests looking up a member that was never warned.
///
/// Expected: Ok(None) and no row created
#[tokio::test]
async fn returns_none_without_creating() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserWarning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserWarningRepository::new(db);

    assert!(repo.find(1, 2).await?.is_none());
    assert!(repo.find(1, 2).await?.is_none());

    Ok(())
}

/// Tests reading a corrupted negative counter.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn rejects_negative_stored_count() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserWarning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_warning(db, "1", "2", -1).await?;

    let repo = UserWarningRepository::new(db);
    let result = repo.find(1, 2).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
