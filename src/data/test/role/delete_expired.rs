use super::*;

/// Tests sweeping expired temporary grants.
///
/// Verifies that only temporary grants whose expiry has passed are removed; future
/// temporary grants and permanent grants are kept.
///
/// Expected: Ok(1) with two grants remaining
#[tokio::test]
async fn removes_only_expired_temporary_grants() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    UserRoleFactory::new(db, "1", "2", "31")
        .temporary_until(now - Duration::minutes(5))
        .build()
        .await?;
    UserRoleFactory::new(db, "1", "2", "32")
        .temporary_until(now + Duration::minutes(5))
        .build()
        .await?;
    factory::create_role_grant(db, "1", "2", "33").await?;

    let repo = UserRoleRepository::new(db);
    let removed = repo.delete_expired(now).await?;

    assert_eq!(removed, 1);
    let remaining: Vec<u64> = repo.list(1, 2).await?.iter().map(|g| g.role_id).collect();
    assert_eq!(remaining, vec![32, 33]);

    Ok(())
}

/// Tests sweeping across servers.
///
/// Expected: Ok(2) for expired grants in two servers
#[tokio::test]
async fn sweeps_all_servers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let expired = Utc::now() - Duration::hours(1);
    UserRoleFactory::new(db, "1", "2", "31")
        .temporary_until(expired)
        .build()
        .await?;
    UserRoleFactory::new(db, "8", "2", "31")
        .temporary_until(expired)
        .build()
        .await?;

    let repo = UserRoleRepository::new(db);

    assert_eq!(repo.delete_expired(Utc::now()).await?, 2);

    Ok(())
}
