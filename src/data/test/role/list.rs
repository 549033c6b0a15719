use super::*;

/// Tests listing a member's grants.
///
/// Expected: Ok with grants in insertion order
#[tokio::test]
async fn lists_member_grants() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role_grant(db, "1", "2", "31").await?;
    UserRoleFactory::new(db, "1", "2", "32")
        .role_name(Some("VIP".to_string()))
        .build()
        .await?;
    factory::create_role_grant(db, "1", "7", "33").await?;

    let repo = UserRoleRepository::new(db);
    let grants = repo.list(1, 2).await?;

    assert_eq!(grants.len(), 2);
    assert_eq!(grants[0].role_id, 31);
    assert_eq!(grants[1].role_name.as_deref(), Some("VIP"));

    Ok(())
}

/// Tests listing a member without grants.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_for_member_without_grants() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRoleRepository::new(db);

    assert!(repo.list(1, 2).await?.is_empty());

    Ok(())
}
