use super::*;

/// Tests registering a new account.
///
/// Expected: Ok with the provided fields and the default `user` role
#[tokio::test]
async fn creates_new_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(
            UpsertUserParam {
                name: Some(Some("Ada".to_string())),
                login_method: Some(Some("discord".to_string())),
                ..UpsertUserParam::new("open-1")
            },
            None,
        )
        .await?;

    assert_eq!(user.open_id, "open-1");
    assert_eq!(user.name.as_deref(), Some("Ada"));
    assert_eq!(user.login_method.as_deref(), Some("discord"));
    assert!(user.email.is_none());
    assert_eq!(user.role, AccountRole::User);

    Ok(())
}

/// Tests that the configured owner is registered as admin.
///
/// Expected: Ok with role `admin`
#[tokio::test]
async fn promotes_owner_to_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam::new("owner"), Some("owner"))
        .await?;

    assert_eq!(user.role, AccountRole::Admin);

    Ok(())
}

/// Tests that an update leaves fields absent from the patch unchanged.
///
/// Verifies that a second sign-in with only an email keeps the stored name and role.
///
/// Expected: Ok with name and role preserved and email updated
#[tokio::test]
async fn preserves_fields_missing_from_patch() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .open_id("open-1")
        .name(Some("Ada".to_string()))
        .role("admin")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(
            UpsertUserParam {
                email: Some(Some("ada@example.com".to_string())),
                ..UpsertUserParam::new("open-1")
            },
            None,
        )
        .await?;

    assert_eq!(user.name.as_deref(), Some("Ada"));
    assert_eq!(user.email.as_deref(), Some("ada@example.com"));
    assert_eq!(user.role, AccountRole::Admin);

    Ok(())
}

/// Tests clearing a nullable field.
///
/// Expected: Ok with the name set to null
#[tokio::test]
async fn clears_field_set_to_none() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .open_id("open-1")
        .name(Some("Ada".to_string()))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(
            UpsertUserParam {
                name: Some(None),
                ..UpsertUserParam::new("open-1")
            },
            None,
        )
        .await?;

    assert!(user.name.is_none());

    Ok(())
}

/// Tests an empty patch for an existing account.
///
/// Verifies that only the sign-in time moves forward.
///
/// Expected: Ok with later last_signed_in and other fields unchanged
#[tokio::test]
async fn empty_patch_refreshes_sign_in_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = UserFactory::new(db)
        .open_id("open-1")
        .name(Some("Ada".to_string()))
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.upsert(UpsertUserParam::new("open-1"), None).await?;

    assert_eq!(user.id, existing.id);
    assert_eq!(user.name.as_deref(), Some("Ada"));
    assert!(user.last_signed_in >= existing.last_signed_in);

    Ok(())
}
