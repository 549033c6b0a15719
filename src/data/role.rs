//! Role grant data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    data::readable_rows,
    error::AppError,
    model::role::{AddRoleParam, RoleGrant},
};

/// Repository providing database operations for the `user_roles` table.
///
/// Grants are never deduplicated: each `create` inserts a new row.
pub struct UserRoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRoleRepository<'a> {
    /// Creates a new UserRoleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRoleRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a role grant.
    ///
    /// # Arguments
    /// - `param` - Grant target, role and optional expiry
    ///
    /// # Returns
    /// - `Ok(RoleGrant)` - The inserted grant
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, param: AddRoleParam) -> Result<RoleGrant, AppError> {
        let entity = entity::user_role::ActiveModel {
            server_id: ActiveValue::Set(param.server_id.to_string()),
            user_id: ActiveValue::Set(param.user_id.to_string()),
            role_id: ActiveValue::Set(param.role_id.to_string()),
            role_name: ActiveValue::Set(param.role_name),
            is_temporary: ActiveValue::Set(param.is_temporary),
            expires_at: ActiveValue::Set(param.expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        RoleGrant::from_entity(entity)
    }

    /// Deletes every grant matching the exact server, user and role triple.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of grants removed, including duplicates
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, server_id: u64, user_id: u64, role_id: u64) -> Result<u64, AppError> {
        let result = entity::prelude::UserRole::delete_many()
            .filter(entity::user_role::Column::ServerId.eq(server_id.to_string()))
            .filter(entity::user_role::Column::UserId.eq(user_id.to_string()))
            .filter(entity::user_role::Column::RoleId.eq(role_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets all grants of a member in insertion order.
    ///
    /// # Returns
    /// - `Ok(Vec<RoleGrant>)` - All grants, empty if the member has none
    /// - `Err(AppError)` - Database error
    pub async fn list(&self, server_id: u64, user_id: u64) -> Result<Vec<RoleGrant>, AppError> {
        let entities = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::ServerId.eq(server_id.to_string()))
            .filter(entity::user_role::Column::UserId.eq(user_id.to_string()))
            .order_by_asc(entity::user_role::Column::Id)
            .all(self.db)
            .await?;

        Ok(readable_rows(
            "user_roles",
            entities,
            |entity| entity.id,
            RoleGrant::from_entity,
        ))
    }

    /// Deletes temporary grants whose expiry is at or before `now`, across all servers.
    ///
    /// Permanent grants and temporary grants without an expiry are kept.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of grants removed
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let result = entity::prelude::UserRole::delete_many()
            .filter(entity::user_role::Column::IsTemporary.eq(true))
            .filter(entity::user_role::Column::ExpiresAt.is_not_null())
            .filter(entity::user_role::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
