use super::*;

/// Tests granting a temporary role.
///
/// Expected: Ok with the temporary flag and expiry stored
#[tokio::test]
async fn grants_temporary_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let expires_at = Utc::now() + Duration::days(1);
    let repo = UserRoleRepository::new(db);
    let grant = repo
        .create(AddRoleParam {
            role_name: Some("Muted".to_string()),
            is_temporary: true,
            expires_at: Some(expires_at),
            ..AddRoleParam::permanent(1, 2, 3)
        })
        .await?;

    assert_eq!(grant.role_id, 3);
    assert_eq!(grant.role_name.as_deref(), Some("Muted"));
    assert!(grant.is_temporary);
    assert!(grant.expires_at.is_some());

    Ok(())
}

/// Tests granting the same role twice.
///
/// Verifies that grants are not deduplicated.
///
/// Expected: Ok with two distinct rows
#[tokio::test]
async fn keeps_duplicate_grants() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRoleRepository::new(db);
    let first = repo.create(AddRoleParam::permanent(1, 2, 3)).await?;
    let second = repo.create(AddRoleParam::permanent(1, 2, 3)).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(repo.list(1, 2).await?.len(), 2);

    Ok(())
}
