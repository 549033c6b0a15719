//! Role grant factory for creating test `user_roles` rows.

use crate::fixture;
use chrono::{DateTime, Utc};
use entity::user_role;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for building role grant rows with custom values.
pub struct UserRoleFactory<'a> {
    db: &'a DatabaseConnection,
    entity: fixture::user_role::UserRoleEntityBuilder,
}

impl<'a> UserRoleFactory<'a> {
    /// Creates a new factory for a permanent grant of `role_id`.
    pub fn new(
        db: &'a DatabaseConnection,
        server_id: impl Into<String>,
        user_id: impl Into<String>,
        role_id: impl Into<String>,
    ) -> Self {
        let entity = fixture::user_role::entity_builder()
            .server_id(server_id)
            .user_id(user_id)
            .role_id(role_id);

        Self { db, entity }
    }

    pub fn role_name(mut self, role_name: Option<String>) -> Self {
        self.entity = self.entity.role_name(role_name);
        self
    }

    /// Makes the grant temporary, expiring at `expires_at`.
    pub fn temporary_until(mut self, expires_at: DateTime<Utc>) -> Self {
        self.entity = self.entity.temporary_until(expires_at);
        self
    }

    /// Builds and inserts the role grant.
    pub async fn build(self) -> Result<user_role::Model, DbErr> {
        let entity = self.entity.build();
        user_role::ActiveModel {
            server_id: ActiveValue::Set(entity.server_id),
            user_id: ActiveValue::Set(entity.user_id),
            role_id: ActiveValue::Set(entity.role_id),
            role_name: ActiveValue::Set(entity.role_name),
            is_temporary: ActiveValue::Set(entity.is_temporary),
            expires_at: ActiveValue::Set(entity.expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a permanent role grant with default values.
///
/// # Example
/// ```rust,ignore
/// let grant = factory::create_role_grant(&db, "1", "2", "3").await?;
/// ```
pub async fn create_role_grant(
    db: &DatabaseConnection,
    server_id: impl Into<String>,
    user_id: impl Into<String>,
    role_id: impl Into<String>,
) -> Result<user_role::Model, DbErr> {
    UserRoleFactory::new(db, server_id, user_id, role_id)
        .build()
        .await
}
