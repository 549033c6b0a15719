use super::*;

/// Tests removing one role from a member holding two.
///
/// Expected: Ok(1) and only the other role remaining
#[tokio::test]
async fn removes_only_matching_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role_grant(db, "1", "2", "31").await?;
    factory::create_role_grant(db, "1", "2", "32").await?;

    let repo = UserRoleRepository::new(db);
    let removed = repo.delete(1, 2, 31).await?;

    assert_eq!(removed, 1);
    let remaining: Vec<u64> = repo.list(1, 2).await?.iter().map(|g| g.role_id).collect();
    assert_eq!(remaining, vec![32]);

    Ok(())
}

/// Tests removing a role that was granted twice.
///
/// Expected: Ok(2) and no grants remaining
#[tokio::test]
async fn removes_all_duplicates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role_grant(db, "1", "2", "31").await?;
    factory::create_role_grant(db, "1", "2", "31").await?;

    let repo = UserRoleRepository::new(db);

    assert_eq!(repo.delete(1, 2, 31).await?, 2);
    assert!(repo.list(1, 2).await?.is_empty());

    Ok(())
}

/// Tests that removal does not touch the same role of other members or servers.
///
/// Expected: Ok(1) with the other grants kept
#[tokio::test]
async fn leaves_other_members_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role_grant(db, "1", "2", "31").await?;
    factory::create_role_grant(db, "1", "5", "31").await?;
    factory::create_role_grant(db, "9", "2", "31").await?;

    let repo = UserRoleRepository::new(db);

    assert_eq!(repo.delete(1, 2, 31).await?, 1);
    assert_eq!(repo.list(1, 5).await?.len(), 1);
    assert_eq!(repo.list(9, 2).await?.len(), 1);

    Ok(())
}
