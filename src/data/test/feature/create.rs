use super::*;

/// Tests inserting a feature setting.
///
/// Expected: Ok with the given flag and settings
#[tokio::test]
async fn inserts_setting() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::FeatureSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FeatureSettingRepository::new(db);
    let setting = repo.create(param(false, Some("{}"))).await?;

    assert_eq!(setting.feature_name, "welcome");
    assert!(!setting.is_enabled);
    assert_eq!(setting.settings.as_deref(), Some("{}"));

    Ok(())
}
