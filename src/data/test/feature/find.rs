use super::*;

/// Tests finding a configured feature.
///
/// Expected: Ok(Some(setting)) with stored flag and settings
#[tokio::test]
async fn returns_configured_feature() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::FeatureSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_feature_setting(db, "1", "welcome", true, Some(r#"{"channel":"hi"}"#)).await?;

    let repo = FeatureSettingRepository::new(db);
    let setting = repo.find(1, "welcome").await?.unwrap();

    assert!(setting.is_enabled);
    assert_eq!(setting.settings.as_deref(), Some(r#"{"channel":"hi"}"#));

    Ok(())
}

/// Tests that features are looked up by exact name within a server.
///
/// Expected: Ok(None) for another feature name or server
#[tokio::test]
async fn scopes_by_server_and_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::FeatureSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_feature_setting(db, "1", "welcome", true, None).await?;

    let repo = FeatureSettingRepository::new(db);

    assert!(repo.find(1, "automod").await?.is_none());
    assert!(repo.find(2, "welcome").await?.is_none());

    Ok(())
}
